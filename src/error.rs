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
use std::path::Path;
use thiserror::Error;

/// Everything that can go wrong while converting, predicting or touching the
/// data files. The display text of each variant is what the menu shows the
/// user, so keep it to a single line.
#[derive(Error, Debug, PartialEq)]
pub enum FxError {
	#[error("Invalid currency code!")]
	UnknownCurrency(String),

	#[error("No exchange rate recorded for {from}/{to}")]
	UnknownPair { from: String, to: String },

	#[error("Invalid amount!")]
	InvalidAmount(String),

	#[error("Please enter either 1, 3, or 6 hours.")]
	InvalidHorizon(String),

	#[error("Storage unavailable ({path}): {reason}")]
	StorageUnavailable { path: String, reason: String },

	#[error("Invalid configuration: {0}")]
	InvalidConfig(String),
}

impl FxError {
	pub fn storage(path: &Path, reason: impl ToString) -> Self {
		FxError::StorageUnavailable {
			path: path.display().to_string(),
			reason: reason.to_string(),
		}
	}
}

pub type FxResult<T> = Result<T, FxError>;
