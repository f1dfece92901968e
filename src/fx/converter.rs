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

/// Applies a rate to an amount. Stateless apart from the one policy knob of
/// whether negative amounts are allowed.
#[derive(Clone, Copy, Debug)]
pub struct Converter {
	allow_negative: bool,
}

impl Converter {
	pub fn new(allow_negative: bool) -> Self {
		Self { allow_negative }
	}

	/// Parses an amount as typed at the prompt.
	pub fn parse_amount(&self, input: &str) -> FxResult<f64> {
		let trimmed = input.trim();
		let amount = trimmed
			.parse::<f64>()
			.map_err(|_| FxError::InvalidAmount(trimmed.to_string()))?;
		self.check(amount)?;
		Ok(amount)
	}

	pub fn convert(&self, amount: f64, rate: f64) -> FxResult<f64> {
		self.check(amount)?;
		Ok(amount * rate)
	}

	fn check(&self, amount: f64) -> FxResult<()> {
		if !amount.is_finite() || (!self.allow_negative && amount < 0.0) {
			return Err(FxError::InvalidAmount(amount.to_string()));
		}
		Ok(())
	}
}
