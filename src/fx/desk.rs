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
use crate::fx::converter::Converter;
use crate::fx::currency::Currency;
use crate::fx::record::ConversionRecord;
use crate::store::history_store::HistoryStore;
use crate::store::rate_store::RateStore;
use crate::util::clock::Clock;
use std::str::FromStr;

/// Ties a conversion to its history entry: a conversion that succeeds is
/// always logged, and a failed one never touches the log.
pub struct ExchangeDesk<'a> {
	rates: &'a RateStore,
	history: &'a HistoryStore,
	converter: Converter,
}

impl<'a> ExchangeDesk<'a> {
	pub fn new(
		rates: &'a RateStore,
		history: &'a HistoryStore,
		converter: Converter,
	) -> Self {
		Self {
			rates,
			history,
			converter,
		}
	}

	/// Converts `amount` (as typed) from one currency code to another and
	/// records the result. Currency codes are checked before the amount.
	pub fn convert(
		&self,
		from: &str,
		to: &str,
		amount: &str,
		clock: &dyn Clock,
	) -> FxResult<ConversionRecord> {
		let from = Currency::from_str(from)?;
		let to = Currency::from_str(to)?;
		let amount = self.converter.parse_amount(amount)?;

		let rate = self.rates.load()?.rate(from, to)?;
		let result = self.converter.convert(amount, rate)?;

		let record = ConversionRecord::new(clock.now(), from, to, amount, result);
		self.history.append(record.clone())?;

		Ok(record)
	}
}
