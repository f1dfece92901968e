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
use crate::config::config_file::Config;
use anyhow::{bail, Error};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

const RATES_FILE: &str = "preset_values.json";
const HISTORY_FILE: &str = "conversion_history.json";
const HELP_FILE: &str = "help_text.json";

/// Bounds for the made-up daily usage counts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UsageBounds {
	pub total_min: u32,
	pub total_max: u32,
	pub per_pair_min: u32,
}

impl Default for UsageBounds {
	fn default() -> Self {
		Self {
			total_min: 500,
			total_max: 1000,
			per_pair_min: 50,
		}
	}
}

/// Fully resolved configuration, handed to each component when it is built.
#[derive(Clone, Debug)]
pub struct Settings {
	pub rates_path: PathBuf,
	pub history_path: PathBuf,
	pub help_path: PathBuf,
	pub clear_screen: bool,
	pub pause: bool,
	pub log_level: LevelFilter,
	pub allow_negative: bool,
	pub usage: UsageBounds,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			rates_path: PathBuf::from(RATES_FILE),
			history_path: PathBuf::from(HISTORY_FILE),
			help_path: PathBuf::from(HELP_FILE),
			clear_screen: true,
			pause: true,
			log_level: LevelFilter::Warn,
			allow_negative: true,
			usage: UsageBounds::default(),
		}
	}
}

impl Settings {
	/// Fills in defaults for everything the config file leaves out. A data
	/// directory given on the command line wins over the config file.
	pub fn resolve(
		config: Config,
		data_dir_override: Option<&String>,
	) -> Result<Settings, Error> {
		let defaults = Settings::default();
		let storage = config.storage.unwrap_or_default();
		let display = config.display.unwrap_or_default();
		let popular = config.popular.unwrap_or_default();

		let data_dir = data_dir_override
			.cloned()
			.or(storage.data_dir)
			.map(PathBuf::from)
			.unwrap_or_default();

		let log_level = match config.logging.and_then(|l| l.level) {
			Some(level) => match LevelFilter::from_str(&level) {
				Ok(filter) => filter,
				Err(_) => bail!("unknown logging.level: {}", level),
			},
			None => defaults.log_level,
		};

		Ok(Settings {
			rates_path: data_dir
				.join(storage.rates_file.as_deref().unwrap_or(RATES_FILE)),
			history_path: data_dir
				.join(storage.history_file.as_deref().unwrap_or(HISTORY_FILE)),
			help_path: data_dir
				.join(storage.help_file.as_deref().unwrap_or(HELP_FILE)),
			clear_screen: display.clear_screen.unwrap_or(defaults.clear_screen),
			pause: display.pause.unwrap_or(defaults.pause),
			log_level,
			allow_negative: config
				.conversion
				.and_then(|c| c.allow_negative)
				.unwrap_or(defaults.allow_negative),
			usage: UsageBounds {
				total_min: popular.total_min.unwrap_or(defaults.usage.total_min),
				total_max: popular.total_max.unwrap_or(defaults.usage.total_max),
				per_pair_min: popular
					.per_pair_min
					.unwrap_or(defaults.usage.per_pair_min),
			},
		})
	}
}
