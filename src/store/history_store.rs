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
use crate::fx::record::ConversionRecord;
use crate::store::filesystem::{read_json, write_json};
use log::debug;
use std::path::PathBuf;

/// Append-only log of conversions, kept as a single JSON array.
///
/// Every append reads and rewrites the whole file, so cost grows with the
/// size of the log. There is no locking; with two processes, the last
/// writer wins.
pub struct HistoryStore {
	path: PathBuf,
}

impl HistoryStore {
	pub fn new(path: PathBuf) -> Self {
		Self { path }
	}

	pub fn append(&self, record: ConversionRecord) -> FxResult<()> {
		let mut history = self.all()?;
		history.push(record);
		write_json(&self.path, &history)?;
		debug!(
			"history rewritten with {} record(s) at {}",
			history.len(),
			self.path.display()
		);
		Ok(())
	}

	/// Every record in the order it was appended.
	pub fn all(&self) -> FxResult<Vec<ConversionRecord>> {
		Ok(read_json(&self.path)?.unwrap_or_default())
	}

	/// Discards all history for good.
	pub fn clear(&self) -> FxResult<()> {
		write_json(&self.path, &Vec::<ConversionRecord>::new())?;
		debug!("history cleared at {}", self.path.display());
		Ok(())
	}
}
