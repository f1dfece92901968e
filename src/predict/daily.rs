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
use crate::error::FxResult;
use crate::fx::currency::Currency;
use crate::fx::rate_table::RateTable;
use crate::util::round::round_to;
use rand::Rng;

/// Largest relative move, either way, of a daily prediction.
pub const DAILY_VOLATILITY: f64 = 0.05;

#[derive(Clone, Debug, PartialEq)]
pub struct DailyPrediction {
	pub base: Currency,
	pub quote: Currency,
	pub current: f64,
	pub predicted: f64,
}

/// Perturbs every ordered pair of distinct currencies by a uniform draw from
/// [-5%, +5%], rounded to four places. Pairs come out base-major in currency
/// order, so the caller can group them by base.
pub fn daily_matrix<R: Rng + ?Sized>(
	table: &RateTable,
	rng: &mut R,
) -> FxResult<Vec<DailyPrediction>> {
	Currency::ordered_pairs()
		.map(|(base, quote)| {
			let current = table.rate(base, quote)?;
			let variation =
				rng.random_range(-DAILY_VOLATILITY..=DAILY_VOLATILITY);

			Ok(DailyPrediction {
				base,
				quote,
				current,
				predicted: round_to(current * (1.0 + variation), 4),
			})
		})
		.collect()
}
