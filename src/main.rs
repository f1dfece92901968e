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
use crate::config::settings::Settings;
use crate::menu::controller::Menu;
use crate::util::clock::SystemClock;
use anyhow::{bail, Error};
use clap::Parser;
use log::debug;
use std::io;

mod config;
mod error;
mod fx;
mod menu;
mod predict;
mod reports;
mod store;
mod util;

#[derive(Parser)]
#[command(
	name = "convr",
	version = "0.1",
	about = "Terminal currency converter with conversion history"
)]
struct Cli {
	/// Custom config file location (default: ~/.config/convr/config.toml)
	#[arg(long)]
	config: Option<String>,

	/// Directory for rates, history and help files (default: current dir)
	#[arg(long)]
	data_dir: Option<String>,
}

impl Cli {
	/// Extra validations on top of what clap does
	fn validate(&self) -> Result<(), Error> {
		if let Some(dir) = &self.data_dir {
			if dir.trim().is_empty() {
				bail!("--data-dir must not be empty");
			}
		}

		Ok(())
	}
}

fn main() -> Result<(), Error> {
	let args = Cli::parse();
	args.validate()?;

	let config = config::config_file::load(args.config.as_ref())?;
	let settings = Settings::resolve(config, args.data_dir.as_ref())?;

	env_logger::Builder::new()
		.filter_level(settings.log_level)
		.parse_env("RUST_LOG")
		.init();
	debug!("resolved settings: {:?}", settings);

	let stdin = io::stdin();
	let mut menu = Menu::new(
		&settings,
		Box::new(SystemClock),
		rand::rng(),
		stdin.lock(),
		io::stdout(),
	)?;

	menu.prepare();
	menu.run()
}
