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
use crate::config::settings::UsageBounds;
use crate::error::{FxError, FxResult};
use crate::fx::currency::Currency;
use crate::fx::rate_table::RateTable;
use crate::reports::table::Table;
use rand::Rng;

/// The pairs shown in the "most used" report, in display order.
pub const COMMON_PAIRS: [(Currency, Currency); 5] = [
	(Currency::Usd, Currency::Bam),
	(Currency::Eur, Currency::Bam),
	(Currency::Usd, Currency::Eur),
	(Currency::Chf, Currency::Eur),
	(Currency::Aud, Currency::Usd),
];

#[derive(Debug, PartialEq)]
pub struct UsageReport {
	pub total: u32,
	pub counts: Vec<((Currency, Currency), u32)>,
}

/// Makes up a plausible-looking day of conversion counts. Nothing here is
/// real usage data.
pub struct PopularReporter {
	bounds: UsageBounds,
}

impl PopularReporter {
	/// Rejects bounds under which the per-pair draws could run out of room:
	/// the smallest total has to leave every pair its minimum.
	pub fn new(bounds: UsageBounds) -> FxResult<Self> {
		if bounds.total_min > bounds.total_max {
			return Err(FxError::InvalidConfig(format!(
				"popular.total_min ({}) exceeds popular.total_max ({})",
				bounds.total_min, bounds.total_max
			)));
		}

		let pairs = COMMON_PAIRS.len() as u32;
		let needed = bounds.per_pair_min.checked_mul(pairs).ok_or_else(|| {
			FxError::InvalidConfig(format!(
				"popular.per_pair_min ({}) is too large for {} pairs",
				bounds.per_pair_min, pairs
			))
		})?;
		if bounds.total_min < needed {
			return Err(FxError::InvalidConfig(format!(
				"popular.total_min ({}) must be at least {} to give {} pairs {} each",
				bounds.total_min, needed, pairs, bounds.per_pair_min
			)));
		}

		Ok(Self { bounds })
	}

	/// Draws a total, then carves it up pair by pair. Each pair before the
	/// last gets at least the minimum and leaves enough for the minimum of
	/// every pair after it; the last pair takes whatever remains, so the
	/// counts always add up to the total.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> UsageReport {
		let min = self.bounds.per_pair_min;
		let total = rng.random_range(self.bounds.total_min..=self.bounds.total_max);

		let mut remaining = total;
		let mut counts = Vec::with_capacity(COMMON_PAIRS.len());

		for (i, pair) in COMMON_PAIRS.iter().enumerate() {
			let pairs_after = (COMMON_PAIRS.len() - i - 1) as u32;
			let count = if pairs_after == 0 {
				remaining
			} else {
				// min * pairs_after <= min * pairs, which new() checked
				// fits in a u32; remaining >= min * (pairs_after + 1) holds
				// from that check and is kept by every draw
				let max = remaining - min * pairs_after;
				rng.random_range(min..=max)
			};

			remaining -= count;
			counts.push((*pair, count));
		}

		UsageReport { total, counts }
	}

	/// Renders the report with each pair's current rate next to its count.
	pub fn render(&self, report: &UsageReport, rates: &RateTable) -> FxResult<String> {
		let mut table = Table::new(3);
		table.right_align(vec![1, 2]);
		table.add_header(vec!["Currency Pair", "Current Rate", "Times Used"]);
		table.add_separator();

		for ((from, to), count) in &report.counts {
			let rate = rates.rate(*from, *to)?;
			table.add_row(vec![
				format!("{}/{}", from, to),
				format!("{:.4}", rate),
				count.to_string(),
			]);
		}

		Ok(format!(
			"\n=== Most Used Conversions Today ===\nTotal conversions today: {}\n\n{}",
			report.total,
			table.render()
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	fn defaults() -> UsageBounds {
		UsageBounds {
			total_min: 500,
			total_max: 1000,
			per_pair_min: 50,
		}
	}

	#[test]
	fn test_counts_sum_to_total() {
		let reporter = PopularReporter::new(defaults()).unwrap();
		for seed in 0..500 {
			let mut rng = StdRng::seed_from_u64(seed);
			let report = reporter.generate(&mut rng);

			assert!((500..=1000).contains(&report.total));
			assert_eq!(report.counts.len(), 5);
			assert_eq!(
				report.counts.iter().map(|(_, c)| c).sum::<u32>(),
				report.total
			);
			assert!(report.counts.iter().all(|(_, c)| *c >= 50));
		}
	}

	#[test]
	fn test_pairs_in_display_order() {
		let reporter = PopularReporter::new(defaults()).unwrap();
		let report = reporter.generate(&mut StdRng::seed_from_u64(1));
		let pairs: Vec<_> = report.counts.iter().map(|(p, _)| *p).collect();
		assert_eq!(pairs, COMMON_PAIRS.to_vec());
	}

	#[test]
	fn test_tightest_bounds_still_work() {
		let reporter = PopularReporter::new(UsageBounds {
			total_min: 250,
			total_max: 250,
			per_pair_min: 50,
		})
		.unwrap();
		let report = reporter.generate(&mut StdRng::seed_from_u64(4));
		assert_eq!(report.total, 250);
		assert!(report.counts.iter().all(|(_, c)| *c == 50));
	}

	#[test]
	fn test_impossible_bounds_rejected() {
		let too_small = PopularReporter::new(UsageBounds {
			total_min: 200,
			total_max: 1000,
			per_pair_min: 50,
		});
		assert!(matches!(too_small, Err(FxError::InvalidConfig(_))));

		let inverted = PopularReporter::new(UsageBounds {
			total_min: 900,
			total_max: 800,
			per_pair_min: 50,
		});
		assert!(matches!(inverted, Err(FxError::InvalidConfig(_))));
	}

	#[test]
	fn test_overflowing_minimum_rejected() {
		let huge = PopularReporter::new(UsageBounds {
			total_min: u32::MAX,
			total_max: u32::MAX,
			per_pair_min: 1_000_000_000,
		});
		assert!(matches!(huge, Err(FxError::InvalidConfig(_))));
	}

	#[test]
	fn test_largest_bounds_still_work() {
		let reporter = PopularReporter::new(UsageBounds {
			total_min: u32::MAX - 4,
			total_max: u32::MAX,
			per_pair_min: u32::MAX / 5 - 1,
		})
		.unwrap();
		let report = reporter.generate(&mut StdRng::seed_from_u64(9));
		assert_eq!(
			report.counts.iter().map(|(_, c)| u64::from(*c)).sum::<u64>(),
			u64::from(report.total)
		);
		assert!(report.counts.iter().all(|(_, c)| *c >= u32::MAX / 5 - 1));
	}

	#[test]
	fn test_render_shows_rates() {
		let reporter = PopularReporter::new(defaults()).unwrap();
		let report = UsageReport {
			total: 600,
			counts: COMMON_PAIRS.iter().map(|p| (*p, 120)).collect(),
		};
		let out = reporter.render(&report, &RateTable::defaults()).unwrap();

		assert!(out.contains("Total conversions today: 600"));
		assert!(out.contains("USD/BAM"));
		assert!(out.contains("1.8500"));
		assert!(out.contains("AUD/USD"));
		assert!(out.contains("0.6500"));
	}

	#[test]
	fn test_render_missing_rate() {
		let reporter = PopularReporter::new(defaults()).unwrap();
		let report = reporter.generate(&mut StdRng::seed_from_u64(2));
		let partial =
			RateTable::default().with_rate(Currency::Usd, Currency::Bam, 1.85);
		assert!(matches!(
			reporter.render(&report, &partial),
			Err(FxError::UnknownPair { .. })
		));
	}
}
