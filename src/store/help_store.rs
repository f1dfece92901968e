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
use crate::store::filesystem::{read_json, write_json};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HelpContent {
	pub conversion: ConversionHelp,
	pub predictions: PredictionHelp,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversionHelp {
	pub title: String,
	pub steps: Vec<String>,
	pub notes: Vec<String>,
	pub example: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionHelp {
	pub title: String,
	pub daily: Vec<String>,
	pub hourly: Vec<String>,
}

impl Default for HelpContent {
	fn default() -> Self {
		let lines = |l: &[&str]| -> Vec<String> {
			l.iter().map(|s| s.to_string()).collect()
		};

		Self {
			conversion: ConversionHelp {
				title: "How Currency Conversion Works".to_string(),
				steps: lines(&[
					"1. Select the currency you want to convert FROM (e.g., USD, EUR)",
					"2. Select the currency you want to convert TO",
					"3. Enter the amount you want to convert",
					"4. The system will use current exchange rates to calculate the result",
				]),
				notes: lines(&[
					"• All conversions are saved in your history",
					"• Exchange rates are updated regularly",
					"• You can view your conversion history anytime",
				]),
				example: [
					"Example: Converting 100 USD to EUR",
					"- Enter 'USD' as source currency",
					"- Enter 'EUR' as target currency",
					"- Enter '100' as amount",
					"- System will show result (e.g., 92.00 EUR)",
				]
				.join("\n"),
			},
			predictions: PredictionHelp {
				title: "Understanding Predictions".to_string(),
				daily: lines(&[
					"Daily predictions show possible rate changes over 24 hours",
					"Predictions use current rates with market volatility factors",
					"All major currency pairs are included in daily predictions",
				]),
				hourly: lines(&[
					"Hourly predictions show detailed short-term trends",
					"Choose between 1, 3, or 6-hour prediction windows",
					"Includes trend indicators (↑/↓) and percentage changes",
				]),
			},
		}
	}
}

/// Static help text, kept in a file so it can be edited without a rebuild.
pub struct HelpStore {
	path: PathBuf,
}

impl HelpStore {
	pub fn new(path: PathBuf) -> Self {
		Self { path }
	}

	/// Writes the built-in help text unless a help file already exists.
	pub fn ensure_exists(&self) -> FxResult<()> {
		if self.path.exists() {
			return Ok(());
		}
		write_json(&self.path, &HelpContent::default())?;
		info!("created help file at {}", self.path.display());
		Ok(())
	}

	/// `None` when there is no help file.
	pub fn load(&self) -> FxResult<Option<HelpContent>> {
		read_json(&self.path)
	}
}
