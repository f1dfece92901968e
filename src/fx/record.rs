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
use crate::fx::currency::Currency;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One logged conversion. Field names on disk are kept short (`date`,
/// `from`, `to`) so existing history files stay readable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
	#[serde(rename = "date", with = "timestamp")]
	pub timestamp: NaiveDateTime,
	pub from: Currency,
	pub to: Currency,
	pub amount: f64,
	pub result: f64,
}

impl ConversionRecord {
	pub fn new(
		timestamp: NaiveDateTime,
		from: Currency,
		to: Currency,
		amount: f64,
		result: f64,
	) -> Self {
		Self {
			timestamp,
			from,
			to,
			amount,
			result,
		}
	}
}

/// Local wall-clock time without an offset, as written by the menu.
mod timestamp {
	use super::TIMESTAMP_FORMAT;
	use chrono::NaiveDateTime;
	use serde::{Deserialize, Deserializer, Serializer};

	pub fn serialize<S: Serializer>(
		value: &NaiveDateTime,
		serializer: S,
	) -> Result<S::Ok, S::Error> {
		serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(
		deserializer: D,
	) -> Result<NaiveDateTime, D::Error> {
		let raw = String::deserialize(deserializer)?;
		NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
			.map_err(serde::de::Error::custom)
	}
}
