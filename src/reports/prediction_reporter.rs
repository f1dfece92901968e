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
use crate::predict::daily::DailyPrediction;
use crate::predict::hourly::HourlyPrediction;
use crate::reports::table::Table;

/// Daily predictions, one block per base currency.
pub fn render_daily(predictions: &[DailyPrediction]) -> String {
	let mut out = String::from("\n=== Currency Predictions ===\n");

	for base in Currency::ALL {
		let mut rows = predictions.iter().filter(|p| p.base == base).peekable();
		if rows.peek().is_none() {
			continue;
		}

		let mut table = Table::new(4);
		table.right_align(vec![1, 2, 3]);
		table.add_header(vec!["Pair", "Current", "Predicted", "Change"]);
		table.add_separator();

		for p in rows {
			table.add_row(vec![
				format!("{} to {}", p.base, p.quote),
				format!("{:.4}", p.current),
				format!("{:.4}", p.predicted),
				format!("{:.2}%", (p.predicted / p.current - 1.0) * 100.0),
			]);
		}

		out.push_str(&format!("\n{} predictions:\n{}", base, table.render()));
	}

	out
}

/// Hourly predictions for a single pair, led by the rate they perturb.
pub fn render_hourly(
	from: Currency,
	to: Currency,
	current: f64,
	predictions: &[HourlyPrediction],
) -> String {
	let mut table = Table::new(4);
	table.right_align(vec![1, 2]);
	table.add_header(vec!["Time", "Rate", "Change", "Trend"]);
	table.add_separator();

	for p in predictions {
		table.add_row(vec![
			p.hour.clone(),
			format!("{:.4}", p.rate),
			format!("{:.2}%", p.change),
			p.trend.to_string(),
		]);
	}

	format!(
		"\n=== {}/{} Predictions ===\nCurrent rate: {:.4}\n\nPredicted rates for next {} hour(s):\n\n{}",
		from,
		to,
		current,
		predictions.len(),
		table.render()
	)
}
