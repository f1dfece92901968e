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
use crate::error::FxError;
use crate::util::round::round_to;
use chrono::{NaiveDateTime, TimeDelta};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Largest fresh relative move per hour, before the carried-over trend.
pub const HOURLY_VOLATILITY: f64 = 0.02;

/// Share of the previous hour's variation that carries into the next.
pub const TREND_CARRY: f64 = 0.3;

/// The prediction windows on offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Horizon {
	One,
	Three,
	Six,
}

impl Horizon {
	pub fn hours(&self) -> u32 {
		match self {
			Horizon::One => 1,
			Horizon::Three => 3,
			Horizon::Six => 6,
		}
	}
}

impl TryFrom<u32> for Horizon {
	type Error = FxError;

	fn try_from(hours: u32) -> Result<Self, Self::Error> {
		match hours {
			1 => Ok(Horizon::One),
			3 => Ok(Horizon::Three),
			6 => Ok(Horizon::Six),
			_ => Err(FxError::InvalidHorizon(hours.to_string())),
		}
	}
}

impl FromStr for Horizon {
	type Err = FxError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		trimmed
			.parse::<u32>()
			.map_err(|_| FxError::InvalidHorizon(trimmed.to_string()))
			.and_then(Horizon::try_from)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
	Up,
	Down,
}

impl Trend {
	/// Zero counts as down.
	fn of(variation: f64) -> Self {
		if variation > 0.0 {
			Trend::Up
		} else {
			Trend::Down
		}
	}
}

impl fmt::Display for Trend {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Trend::Up => f.write_str("↑"),
			Trend::Down => f.write_str("↓"),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct HourlyPrediction {
	/// Wall-clock hour of day, e.g. "14:00".
	pub hour: String,
	pub rate: f64,
	/// Variation in percent, rounded to two places.
	pub change: f64,
	pub trend: Trend,
}

/// Walks forward one hour at a time from `start`. Each hour draws a fresh
/// variation from [-2%, +2%] and adds 30% of the previous hour's variation,
/// so consecutive hours tend to lean the same way. The rate is always
/// perturbed from `base_rate`, not from the previous hour's prediction.
pub fn hourly_sequence<R: Rng + ?Sized>(
	base_rate: f64,
	horizon: Horizon,
	start: NaiveDateTime,
	rng: &mut R,
) -> Vec<HourlyPrediction> {
	let mut previous = 0.0;

	(0..horizon.hours())
		.map(|offset| {
			let at = start + TimeDelta::hours(i64::from(offset));
			let variation = rng
				.random_range(-HOURLY_VOLATILITY..=HOURLY_VOLATILITY)
				+ previous * TREND_CARRY;
			previous = variation;

			HourlyPrediction {
				hour: at.format("%H:00").to_string(),
				rate: round_to(base_rate * (1.0 + variation), 4),
				change: round_to(variation * 100.0, 2),
				trend: Trend::of(variation),
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::NaiveDate;
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	fn at(hour: u32) -> NaiveDateTime {
		NaiveDate::from_ymd_opt(2024, 11, 5)
			.unwrap()
			.and_hms_opt(hour, 41, 12)
			.unwrap()
	}

	/// Upper bound on |variation| after `n` hours with the carry term.
	fn bound(hours: u32) -> f64 {
		(0..hours)
			.map(|i| HOURLY_VOLATILITY * TREND_CARRY.powi(i as i32))
			.sum()
	}

	#[test]
	fn test_horizon_parsing() {
		assert_eq!("1".parse::<Horizon>(), Ok(Horizon::One));
		assert_eq!(" 3\n".parse::<Horizon>(), Ok(Horizon::Three));
		assert_eq!("6".parse::<Horizon>(), Ok(Horizon::Six));

		for bad in ["0", "2", "4", "24", "-1", "three", ""] {
			assert!(
				matches!(bad.parse::<Horizon>(), Err(FxError::InvalidHorizon(_))),
				"{} should be rejected",
				bad
			);
		}
		assert_eq!(
			Horizon::try_from(5),
			Err(FxError::InvalidHorizon("5".to_string()))
		);
	}

	#[test]
	fn test_length_matches_horizon() {
		let mut rng = StdRng::seed_from_u64(11);
		for horizon in [Horizon::One, Horizon::Three, Horizon::Six] {
			let seq = hourly_sequence(0.92, horizon, at(9), &mut rng);
			assert_eq!(seq.len() as u32, horizon.hours());
		}
	}

	#[test]
	fn test_hour_labels_follow_the_clock() {
		let mut rng = StdRng::seed_from_u64(5);
		let seq = hourly_sequence(1.85, Horizon::Three, at(9), &mut rng);
		let hours: Vec<_> = seq.iter().map(|p| p.hour.as_str()).collect();
		assert_eq!(hours, vec!["09:00", "10:00", "11:00"]);
	}

	#[test]
	fn test_hour_labels_wrap_midnight() {
		let mut rng = StdRng::seed_from_u64(5);
		let seq = hourly_sequence(1.85, Horizon::Six, at(21), &mut rng);
		let hours: Vec<_> = seq.iter().map(|p| p.hour.as_str()).collect();
		assert_eq!(
			hours,
			vec!["21:00", "22:00", "23:00", "00:00", "01:00", "02:00"]
		);
	}

	#[test]
	fn test_rates_stay_near_base() {
		let base = 1.53;
		for seed in 0..200 {
			let mut rng = StdRng::seed_from_u64(seed);
			let seq = hourly_sequence(base, Horizon::Six, at(12), &mut rng);
			for (i, p) in seq.iter().enumerate() {
				let limit = bound(i as u32 + 1);
				assert!(
					(p.rate - base).abs() <= limit * base + 0.00005,
					"hour {}: {} too far from {}",
					i,
					p.rate,
					base
				);
				assert!(p.change.abs() <= limit * 100.0 + 0.005);
			}
		}
	}

	#[test]
	fn test_trend_matches_sign_of_change() {
		for seed in 0..50 {
			let mut rng = StdRng::seed_from_u64(seed);
			for p in hourly_sequence(0.54, Horizon::Six, at(0), &mut rng) {
				if p.change > 0.0 {
					assert_eq!(p.trend, Trend::Up);
				} else if p.change < 0.0 {
					assert_eq!(p.trend, Trend::Down);
				}
			}
		}
	}

	#[test]
	fn test_zero_variation_is_down() {
		assert_eq!(Trend::of(0.0), Trend::Down);
		assert_eq!(Trend::of(1e-9), Trend::Up);
		assert_eq!(Trend::of(-1e-9), Trend::Down);
		assert_eq!(Trend::Up.to_string(), "↑");
		assert_eq!(Trend::Down.to_string(), "↓");
	}
}
