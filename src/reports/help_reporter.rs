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
use crate::store::help_store::HelpContent;

pub fn render_help(help: Option<&HelpContent>) -> String {
	let Some(help) = help else {
		return "\nHelp information not available.\n".to_string();
	};

	let mut lines = vec!["\n=== Currency Converter Help ===".to_string()];

	let conversion = &help.conversion;
	lines.push(format!("\n{}", conversion.title));
	lines.push("\nSteps:".to_string());
	lines.extend(conversion.steps.iter().cloned());
	lines.push("\nImportant Notes:".to_string());
	lines.extend(conversion.notes.iter().cloned());
	lines.push(format!("\n{}", conversion.example));

	let predictions = &help.predictions;
	lines.push(format!("\n{}", predictions.title));
	lines.push("\nDaily Predictions:".to_string());
	lines.extend(predictions.daily.iter().map(|l| format!("• {}", l)));
	lines.push("\nHourly Predictions:".to_string());
	lines.extend(predictions.hourly.iter().map(|l| format!("• {}", l)));

	lines.join("\n") + "\n"
}
