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
use crate::fx::rate_table::RateTable;
use crate::store::filesystem::{read_json, write_json};
use log::info;
use std::path::PathBuf;
use std::str::FromStr;

/// Read-only access to the persisted rate table. Rates are only ever changed
/// by editing the file by hand; the program itself writes it once, when it
/// seeds the defaults.
pub struct RateStore {
	path: PathBuf,
}

impl RateStore {
	pub fn new(path: PathBuf) -> Self {
		Self { path }
	}

	/// Loads the stored table, seeding the file with the default table if
	/// there is none yet.
	pub fn load(&self) -> FxResult<RateTable> {
		if let Some(table) = read_json::<RateTable>(&self.path)? {
			table
				.validate()
				.map_err(|e| FxError::storage(&self.path, e))?;
			return Ok(table);
		}

		let table = RateTable::defaults();
		write_json(&self.path, &table)?;
		info!("seeded default exchange rates at {}", self.path.display());

		Ok(table)
	}

	/// Single lookup against freshly loaded rates. Both codes are checked
	/// before the file is touched.
	pub fn get(&self, from: &str, to: &str) -> FxResult<f64> {
		let from = Currency::from_str(from)?;
		let to = Currency::from_str(to)?;
		self.load()?.rate(from, to)
	}
}
