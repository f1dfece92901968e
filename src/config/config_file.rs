/* Copyright © 2024-2025 Adam Train <adam@adamtrain.net>
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
use anyhow::{anyhow, Error};
use dirs::home_dir;
use serde::Deserialize;
use std::fs;
use std::fs::File;
use std::path::PathBuf;

/// The config file as written by the user. Everything is optional; see
/// `Settings` for the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	pub storage: Option<Storage>,
	pub display: Option<Display>,
	pub logging: Option<Logging>,
	pub conversion: Option<Conversion>,
	pub popular: Option<Popular>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Storage {
	/// Directory holding the data files. Relative to the working directory
	/// unless absolute.
	pub data_dir: Option<String>,
	pub rates_file: Option<String>,
	pub history_file: Option<String>,
	pub help_file: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Display {
	pub clear_screen: Option<bool>,
	/// Wait for Enter after each menu action
	pub pause: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Logging {
	pub level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Conversion {
	pub allow_negative: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Popular {
	pub total_min: Option<u32>,
	pub total_max: Option<u32>,
	pub per_pair_min: Option<u32>,
}

/// Fetches the config from the given path, or the default path if none. The
/// default file is created empty if it doesn't exist; a custom path has to
/// point at a real file.
pub fn load(custom_config_path: Option<&String>) -> Result<Config, Error> {
	let config_path = match custom_config_path {
		None => home_dir()
			.ok_or_else(|| anyhow!("unable to determine home directory"))?
			.join(".config/convr/config.toml"),
		Some(p) => PathBuf::from(p),
	};

	// create empty config file if it doesn't exist
	if !config_path.exists() && custom_config_path.is_none() {
		if let Some(parent) = config_path.parent() {
			fs::create_dir_all(parent)?;
		}
		File::create(&config_path)?;
	}

	let content = fs::read_to_string(&config_path).map_err(|e| {
		anyhow!("failed to read config {}: {}", config_path.display(), e)
	})?;

	parse(&content)
}

pub fn parse(content: &str) -> Result<Config, Error> {
	toml::from_str(content).map_err(|e| anyhow!("failed to parse config: {}", e))
}
