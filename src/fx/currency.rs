/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::error::FxError;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The closed set of currencies the converter knows about. Declaration order
/// is the order used for menus, reports and the persisted rate table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Currency {
	Usd,
	Bam,
	Eur,
	Chf,
	Aud,
}

impl Currency {
	pub const ALL: [Currency; 5] = [
		Currency::Usd,
		Currency::Bam,
		Currency::Eur,
		Currency::Chf,
		Currency::Aud,
	];

	pub fn code(&self) -> &'static str {
		match self {
			Currency::Usd => "USD",
			Currency::Bam => "BAM",
			Currency::Eur => "EUR",
			Currency::Chf => "CHF",
			Currency::Aud => "AUD",
		}
	}

	/// Every ordered pair of distinct currencies, base-major.
	pub fn ordered_pairs() -> impl Iterator<Item = (Currency, Currency)> {
		Currency::ALL.into_iter().flat_map(|base| {
			Currency::ALL
				.into_iter()
				.filter(move |quote| *quote != base)
				.map(move |quote| (base, quote))
		})
	}

	/// Comma-separated list of codes, as shown in prompts.
	pub fn listing() -> String {
		Currency::ALL
			.iter()
			.map(|c| c.code())
			.collect::<Vec<_>>()
			.join(", ")
	}
}

impl FromStr for Currency {
	type Err = FxError;

	/// Accepts codes in any case and with surrounding whitespace, which is
	/// how they arrive from the prompt.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let code = s.trim().to_uppercase();
		Currency::ALL
			.into_iter()
			.find(|c| c.code() == code)
			.ok_or(FxError::UnknownCurrency(code))
	}
}

impl fmt::Display for Currency {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

impl Serialize for Currency {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.code())
	}
}

impl<'de> Deserialize<'de> for Currency {
	fn deserialize<D: Deserializer<'de>>(
		deserializer: D,
	) -> Result<Self, D::Error> {
		let code = String::deserialize(deserializer)?;
		Currency::from_str(&code).map_err(|_| {
			D::Error::custom(format!("unknown currency code: {}", code))
		})
	}
}
