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
use crate::fx::record::{ConversionRecord, TIMESTAMP_FORMAT};
use crate::reports::table::Table;

pub struct HistoryReporter {
	records: Vec<ConversionRecord>,
}

impl HistoryReporter {
	pub fn new(records: Vec<ConversionRecord>) -> Self {
		Self { records }
	}

	/// One row per conversion, oldest first.
	pub fn render(&self) -> String {
		if self.records.is_empty() {
			return "\nNo conversion history found.\n".to_string();
		}

		let mut table = Table::new(5);
		table.right_align(vec![1, 3]);
		table.add_header(vec!["Date", "Amount", "From", "Result", "To"]);
		table.add_separator();

		for record in &self.records {
			table.add_row(vec![
				record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
				record.amount.to_string(),
				record.from.to_string(),
				format!("{:.2}", record.result),
				record.to.to_string(),
			]);
		}

		format!("\n=== Conversion History ===\n\n{}", table.render())
	}
}

/// The line shown right after a successful conversion.
pub fn conversion_line(record: &ConversionRecord) -> String {
	format!(
		"\nResult: {} {} = {:.2} {}\n",
		record.amount, record.from, record.result, record.to
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::fx::currency::Currency;
	use chrono::NaiveDate;

	fn record() -> ConversionRecord {
		let at = NaiveDate::from_ymd_opt(2024, 11, 5)
			.unwrap()
			.and_hms_opt(8, 15, 0)
			.unwrap();
		ConversionRecord::new(at, Currency::Usd, Currency::Eur, 100.0, 92.0)
	}

	#[test]
	fn test_empty_history() {
		let out = HistoryReporter::new(vec![]).render();
		assert_eq!(out.trim(), "No conversion history found.");
	}

	#[test]
	fn test_rows_in_order() {
		let mut second = record();
		second.amount = 5.5;
		second.result = 5.06;
		let out = HistoryReporter::new(vec![record(), second]).render();

		assert!(out.contains("=== Conversion History ==="));
		let first_at = out.find("92.00").unwrap();
		let second_at = out.find("5.06").unwrap();
		assert!(first_at < second_at);
		assert!(out.contains("2024-11-05 08:15:00"));
	}

	#[test]
	fn test_conversion_line() {
		assert_eq!(
			conversion_line(&record()).trim(),
			"Result: 100 USD = 92.00 EUR"
		);
	}
}
