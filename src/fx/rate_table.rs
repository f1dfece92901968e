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
use crate::error::{FxError, FxResult};
use crate::fx::currency::Currency;
use anyhow::{bail, Error};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hand-authored seed rates written on first run. These are not meant to be
/// consistent with each other: USD->BAM and BAM->USD do not multiply to one.
const DEFAULT_RATES: [(Currency, [(Currency, f64); 4]); 5] = [
	(
		Currency::Usd,
		[
			(Currency::Bam, 1.85),
			(Currency::Eur, 0.92),
			(Currency::Chf, 0.89),
			(Currency::Aud, 1.53),
		],
	),
	(
		Currency::Bam,
		[
			(Currency::Usd, 0.54),
			(Currency::Eur, 0.51),
			(Currency::Chf, 0.48),
			(Currency::Aud, 0.83),
		],
	),
	(
		Currency::Eur,
		[
			(Currency::Usd, 1.09),
			(Currency::Bam, 1.96),
			(Currency::Chf, 0.97),
			(Currency::Aud, 1.67),
		],
	),
	(
		Currency::Chf,
		[
			(Currency::Usd, 1.12),
			(Currency::Bam, 2.08),
			(Currency::Eur, 1.03),
			(Currency::Aud, 1.72),
		],
	),
	(
		Currency::Aud,
		[
			(Currency::Usd, 0.65),
			(Currency::Bam, 1.21),
			(Currency::Eur, 0.60),
			(Currency::Chf, 0.58),
		],
	),
];

/// Base currency -> quote currency -> multiplier. Persisted as a nested JSON
/// object keyed by currency code.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
	rates: BTreeMap<Currency, BTreeMap<Currency, f64>>,
}

impl RateTable {
	pub fn defaults() -> Self {
		let mut table = RateTable::default();
		for (base, quotes) in DEFAULT_RATES {
			for (quote, rate) in quotes {
				table.rates.entry(base).or_default().insert(quote, rate);
			}
		}
		table
	}

	/// Only used to build tables by hand; the running program never writes
	/// rates back.
	#[cfg(test)]
	pub fn with_rate(mut self, base: Currency, quote: Currency, rate: f64) -> Self {
		self.rates.entry(base).or_default().insert(quote, rate);
		self
	}

	pub fn rate(&self, from: Currency, to: Currency) -> FxResult<f64> {
		self.rates
			.get(&from)
			.and_then(|quotes| quotes.get(&to))
			.copied()
			.ok_or_else(|| FxError::UnknownPair {
				from: from.to_string(),
				to: to.to_string(),
			})
	}

	/// All recorded pairs with their rates, base-major.
	pub fn pairs(&self) -> impl Iterator<Item = (Currency, Currency, f64)> + '_ {
		self.rates.iter().flat_map(|(base, quotes)| {
			quotes.iter().map(move |(quote, rate)| (*base, *quote, *rate))
		})
	}

	/// Checks what serde can't: every rate is a positive finite number and
	/// no currency is quoted against itself.
	pub fn validate(&self) -> Result<(), Error> {
		for (base, quote, rate) in self.pairs() {
			if base == quote {
				bail!("rate table quotes {} against itself", base);
			}
			if !rate.is_finite() || rate <= 0.0 {
				bail!("rate for {}/{} must be positive, got {}", base, quote, rate);
			}
		}

		Ok(())
	}
}
