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
use crate::error::FxError;
use crate::fx::converter::Converter;
use crate::fx::currency::Currency;
use crate::fx::desk::ExchangeDesk;
use crate::menu::choice::MenuChoice;
use crate::predict::daily::daily_matrix;
use crate::predict::hourly::{hourly_sequence, Horizon};
use crate::reports::help_reporter::render_help;
use crate::reports::history_reporter::{conversion_line, HistoryReporter};
use crate::reports::popular_reporter::PopularReporter;
use crate::reports::prediction_reporter::{render_daily, render_hourly};
use crate::store::help_store::HelpStore;
use crate::store::history_store::HistoryStore;
use crate::store::rate_store::RateStore;
use crate::util::clock::Clock;
use anyhow::Error;
use log::{debug, warn};
use rand::Rng;
use std::io::{BufRead, Write};
use std::str::FromStr;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// The interactive loop. Reads a choice, runs it, and always comes back to
/// the menu: domain errors are shown as a single line and the loop goes on.
/// Only failing to talk to the terminal itself ends the loop early.
pub struct Menu<I, O, R> {
	rates: RateStore,
	history: HistoryStore,
	help: HelpStore,
	popular: PopularReporter,
	converter: Converter,
	clock: Box<dyn Clock>,
	rng: R,
	input: I,
	output: O,
	clear_screen: bool,
	pause: bool,
}

impl<I: BufRead, O: Write, R: Rng> Menu<I, O, R> {
	pub fn new(
		settings: &Settings,
		clock: Box<dyn Clock>,
		rng: R,
		input: I,
		output: O,
	) -> Result<Self, FxError> {
		Ok(Self {
			rates: RateStore::new(settings.rates_path.clone()),
			history: HistoryStore::new(settings.history_path.clone()),
			help: HelpStore::new(settings.help_path.clone()),
			popular: PopularReporter::new(settings.usage)?,
			converter: Converter::new(settings.allow_negative),
			clock,
			rng,
			input,
			output,
			clear_screen: settings.clear_screen,
			pause: settings.pause,
		})
	}

	/// Seeds the help and rate files on first run. Failing here is not fatal;
	/// the affected menu entries will report the problem when used.
	pub fn prepare(&self) {
		if let Err(e) = self.help.ensure_exists() {
			warn!("could not create help file: {}", e);
		}
		if let Err(e) = self.rates.load() {
			warn!("could not load exchange rates: {}", e);
		}
	}

	/// Runs until the user picks Exit or input runs out.
	pub fn run(&mut self) -> Result<(), Error> {
		loop {
			self.clear()?;
			self.print_menu()?;

			let Some(line) = self.prompt("\nEnter your choice (1-8): ")? else {
				return Ok(());
			};

			match MenuChoice::from_input(&line) {
				Some(MenuChoice::Exit) => {
					writeln!(self.output, "\nThank you for using Currency Converter!")?;
					return Ok(());
				},
				Some(choice) => {
					debug!("menu choice: {:?}", choice);
					let result = self.dispatch(choice);
					self.recover(result)?;
				},
				None => {
					writeln!(self.output, "\nInvalid choice! Please try again.")?
				},
			}

			self.wait_for_user()?;
		}
	}

	fn dispatch(&mut self, choice: MenuChoice) -> Result<(), Error> {
		match choice {
			MenuChoice::Convert => self.handle_conversion(),
			MenuChoice::Hourly => self.handle_hourly(),
			MenuChoice::Daily => self.handle_daily(),
			MenuChoice::Popular => self.handle_popular(),
			MenuChoice::History => self.handle_history(),
			MenuChoice::ClearHistory => {
				self.history.clear()?;
				writeln!(self.output, "\nHistory cleared successfully!")?;
				Ok(())
			},
			MenuChoice::Help => {
				let help = self.help.load()?;
				write!(self.output, "{}", render_help(help.as_ref()))?;
				Ok(())
			},
			// run() handles leaving the loop
			MenuChoice::Exit => Ok(()),
		}
	}

	/// Shows domain errors to the user and swallows them; passes anything
	/// else up.
	fn recover(&mut self, result: Result<(), Error>) -> Result<(), Error> {
		match result {
			Ok(()) => Ok(()),
			Err(e) => match e.downcast::<FxError>() {
				Ok(fx) => {
					warn!("recovered: {:?}", fx);
					writeln!(self.output, "{}", fx)?;
					Ok(())
				},
				Err(other) => Err(other),
			},
		}
	}

	fn handle_conversion(&mut self) -> Result<(), Error> {
		let Some((from, to)) = self.prompt_pair()? else {
			return Ok(());
		};
		let Some(amount) = self.prompt("Enter amount: ")? else {
			return Ok(());
		};

		let desk = ExchangeDesk::new(&self.rates, &self.history, self.converter);
		let record =
			desk.convert(from.code(), to.code(), &amount, self.clock.as_ref())?;

		write!(self.output, "{}", conversion_line(&record))?;
		Ok(())
	}

	fn handle_hourly(&mut self) -> Result<(), Error> {
		let Some((from, to)) = self.prompt_pair()? else {
			return Ok(());
		};
		let current = self.rates.get(from.code(), to.code())?;

		let horizon = loop {
			let Some(line) =
				self.prompt("\nEnter number of hours to predict (1, 3, or 6): ")?
			else {
				return Ok(());
			};
			match line.trim().parse::<u32>() {
				Ok(hours) => match Horizon::try_from(hours) {
					Ok(horizon) => break horizon,
					Err(e) => writeln!(self.output, "{}", e)?,
				},
				Err(_) => writeln!(self.output, "Please enter a valid number.")?,
			}
		};

		let predictions =
			hourly_sequence(current, horizon, self.clock.now(), &mut self.rng);
		write!(
			self.output,
			"{}",
			render_hourly(from, to, current, &predictions)
		)?;
		Ok(())
	}

	fn handle_daily(&mut self) -> Result<(), Error> {
		let table = self.rates.load()?;
		let predictions = daily_matrix(&table, &mut self.rng)?;
		write!(self.output, "{}", render_daily(&predictions))?;
		Ok(())
	}

	fn handle_popular(&mut self) -> Result<(), Error> {
		let table = self.rates.load()?;
		let report = self.popular.generate(&mut self.rng);
		let rendered = self.popular.render(&report, &table)?;
		write!(self.output, "{}", rendered)?;
		Ok(())
	}

	fn handle_history(&mut self) -> Result<(), Error> {
		let records = self.history.all()?;
		write!(self.output, "{}", HistoryReporter::new(records).render())?;
		Ok(())
	}

	/// Asks for source and target currency. `None` if input ran out.
	fn prompt_pair(&mut self) -> Result<Option<(Currency, Currency)>, Error> {
		writeln!(self.output, "\nAvailable currencies: {}", Currency::listing())?;
		let Some(from) = self.prompt("Convert from (currency code): ")? else {
			return Ok(None);
		};
		let Some(to) = self.prompt("Convert to (currency code): ")? else {
			return Ok(None);
		};

		Ok(Some((Currency::from_str(&from)?, Currency::from_str(&to)?)))
	}

	/// Writes the prompt and reads one line. `None` at end of input. Bytes
	/// that are not UTF-8 are replaced rather than failing the read, so they
	/// end up as ordinary bad input.
	fn prompt(&mut self, text: &str) -> Result<Option<String>, Error> {
		write!(self.output, "{}", text)?;
		self.output.flush()?;

		let mut raw = Vec::new();
		if self.input.read_until(b'\n', &mut raw)? == 0 {
			return Ok(None);
		}
		let line = String::from_utf8_lossy(&raw);
		Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
	}

	fn print_menu(&mut self) -> Result<(), Error> {
		writeln!(self.output, "=== Currency Converter Menu ===")?;
		for (i, choice) in MenuChoice::ALL.iter().enumerate() {
			writeln!(self.output, "{}. {}", i + 1, choice.label())?;
		}
		Ok(())
	}

	fn wait_for_user(&mut self) -> Result<(), Error> {
		if self.pause {
			self.prompt("\nPress Enter to continue...")?;
		}
		Ok(())
	}

	fn clear(&mut self) -> Result<(), Error> {
		if self.clear_screen {
			write!(self.output, "{}", CLEAR_SCREEN)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::fx::record::ConversionRecord;
	use crate::util::clock::FixedClock;
	use chrono::NaiveDate;
	use rand::rngs::StdRng;
	use rand::SeedableRng;
	use std::fs;
	use std::path::Path;
	use tempfile::{tempdir, TempDir};

	fn settings(dir: &Path) -> Settings {
		Settings {
			rates_path: dir.join("rates.json"),
			history_path: dir.join("history.json"),
			help_path: dir.join("help.json"),
			clear_screen: false,
			pause: false,
			..Settings::default()
		}
	}

	/// Runs a whole session against `script` and returns what was printed.
	fn session(dir: &TempDir, script: &str) -> String {
		session_bytes(dir, script.as_bytes())
	}

	fn session_bytes(dir: &TempDir, script: &[u8]) -> String {
		let clock = FixedClock(
			NaiveDate::from_ymd_opt(2024, 11, 5)
				.unwrap()
				.and_hms_opt(22, 10, 0)
				.unwrap(),
		);
		let mut output = Vec::new();
		{
			let mut menu = Menu::new(
				&settings(dir.path()),
				Box::new(clock),
				StdRng::seed_from_u64(42),
				script,
				&mut output,
			)
			.unwrap();
			menu.prepare();
			menu.run().unwrap();
		}
		String::from_utf8(output).unwrap()
	}

	fn history(dir: &TempDir) -> Vec<ConversionRecord> {
		HistoryStore::new(dir.path().join("history.json")).all().unwrap()
	}

	#[test]
	fn test_exit() {
		let dir = tempdir().unwrap();
		let out = session(&dir, "8\n");
		assert!(out.starts_with("=== Currency Converter Menu ===\n1. Convert Currency"));
		assert!(out.contains("8. Exit"));
		assert!(out.ends_with("Thank you for using Currency Converter!\n"));
	}

	#[test]
	fn test_dispatching_exit_does_nothing() {
		let dir = tempdir().unwrap();
		let mut output = Vec::new();
		{
			let mut menu = Menu::new(
				&settings(dir.path()),
				Box::new(FixedClock(
					NaiveDate::from_ymd_opt(2024, 1, 1)
						.unwrap()
						.and_hms_opt(0, 0, 0)
						.unwrap(),
				)),
				StdRng::seed_from_u64(0),
				"".as_bytes(),
				&mut output,
			)
			.unwrap();
			assert!(menu.dispatch(MenuChoice::Exit).is_ok());
		}
		assert!(output.is_empty());
	}

	#[test]
	fn test_end_of_input_ends_session() {
		let dir = tempdir().unwrap();
		let out = session(&dir, "");
		assert!(out.contains("Enter your choice (1-8): "));
		assert!(!out.contains("Thank you"));
	}

	#[test]
	fn test_first_run_seeds_files() {
		let dir = tempdir().unwrap();
		session(&dir, "8\n");
		assert!(dir.path().join("rates.json").exists());
		assert!(dir.path().join("help.json").exists());
		assert!(!dir.path().join("history.json").exists());
	}

	#[test]
	fn test_conversion_is_recorded() {
		let dir = tempdir().unwrap();
		let out = session(&dir, "1\nusd\neur\n100\n8\n");

		assert!(out.contains("Available currencies: USD, BAM, EUR, CHF, AUD"));
		assert!(out.contains("Result: 100 USD = 92.00 EUR"));

		let history = history(&dir);
		assert_eq!(history.len(), 1);
		assert_eq!(history[0].from, Currency::Usd);
		assert_eq!(history[0].to, Currency::Eur);
		assert_eq!(history[0].amount, 100.0);
		assert!((history[0].result - 92.0).abs() < 1e-9);
	}

	#[test]
	fn test_unknown_currency_returns_to_menu() {
		let dir = tempdir().unwrap();
		let out = session(&dir, "1\nXYZ\nEUR\n8\n");

		assert!(out.contains("Invalid currency code!"));
		// the amount is never asked for
		assert!(!out.contains("Enter amount"));
		assert!(out.ends_with("Thank you for using Currency Converter!\n"));
		assert!(history(&dir).is_empty());
	}

	#[test]
	fn test_invalid_amount() {
		let dir = tempdir().unwrap();
		let out = session(&dir, "1\nUSD\nEUR\nplenty\n8\n");
		assert!(out.contains("Invalid amount!"));
		assert!(history(&dir).is_empty());
	}

	#[test]
	fn test_non_utf8_input_returns_to_menu() {
		let dir = tempdir().unwrap();
		let out = session_bytes(&dir, b"1\n\xffSD\nEUR\n\xfe\n8\n");

		assert!(out.contains("Invalid currency code!"));
		assert!(out.contains("Invalid choice! Please try again."));
		assert!(out.ends_with("Thank you for using Currency Converter!\n"));
		assert!(history(&dir).is_empty());
	}

	#[test]
	fn test_invalid_choice() {
		let dir = tempdir().unwrap();
		let out = session(&dir, "42\n8\n");
		assert!(out.contains("Invalid choice! Please try again."));
	}

	#[test]
	fn test_view_and_clear_history() {
		let dir = tempdir().unwrap();
		let out = session(&dir, "5\n1\nCHF\nBAM\n10\n5\n6\n5\n8\n");

		let sections: Vec<&str> = out.split("Enter your choice").collect();
		assert!(sections[1].contains("No conversion history found."));
		assert!(sections[3].contains("=== Conversion History ==="));
		assert!(sections[3].contains("2024-11-05 22:10:00"));
		assert!(sections[3].contains("20.80"));
		assert!(sections[4].contains("History cleared successfully!"));
		assert!(sections[5].contains("No conversion history found."));
		assert!(history(&dir).is_empty());
	}

	#[test]
	fn test_hourly_reprompts_for_horizon() {
		let dir = tempdir().unwrap();
		let out = session(&dir, "2\nUSD\nBAM\n2\nsix\n3\n8\n");

		assert_eq!(out.matches("Please enter either 1, 3, or 6 hours.").count(), 1);
		assert_eq!(out.matches("Please enter a valid number.").count(), 1);
		assert!(out.contains("=== USD/BAM Predictions ==="));
		assert!(out.contains("Current rate: 1.8500"));
		assert!(out.contains("22:00"));
		assert!(out.contains("23:00"));
		assert!(out.contains("00:00"));
	}

	#[test]
	fn test_daily_predictions() {
		let dir = tempdir().unwrap();
		let out = session(&dir, "3\n8\n");
		for base in Currency::ALL {
			assert!(out.contains(&format!("{} predictions:", base)));
		}
		assert_eq!(out.matches(" to ").count(), 20);
	}

	#[test]
	fn test_popular_conversions() {
		let dir = tempdir().unwrap();
		let out = session(&dir, "4\n8\n");
		assert!(out.contains("=== Most Used Conversions Today ==="));
		assert!(out.contains("Total conversions today: "));
		assert!(out.contains("CHF/EUR"));
	}

	#[test]
	fn test_help() {
		let dir = tempdir().unwrap();
		let out = session(&dir, "7\n8\n");
		assert!(out.contains("=== Currency Converter Help ==="));
		assert!(out.contains("Understanding Predictions"));
	}

	#[test]
	fn test_corrupt_rates_are_not_fatal() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("rates.json"), "{{{").unwrap();
		let out = session(&dir, "3\n1\nUSD\nEUR\n5\n7\n8\n");

		assert_eq!(out.matches("Storage unavailable").count(), 2);
		// help still works
		assert!(out.contains("=== Currency Converter Help ==="));
		assert!(out.ends_with("Thank you for using Currency Converter!\n"));
	}

	#[test]
	fn test_pause_and_clear_screen() {
		let dir = tempdir().unwrap();
		let mut settings = settings(dir.path());
		settings.clear_screen = true;
		settings.pause = true;

		let mut output = Vec::new();
		{
			let mut menu = Menu::new(
				&settings,
				Box::new(FixedClock(
					NaiveDate::from_ymd_opt(2024, 1, 1)
						.unwrap()
						.and_hms_opt(0, 0, 0)
						.unwrap(),
				)),
				StdRng::seed_from_u64(0),
				"9\n\n8\n".as_bytes(),
				&mut output,
			)
			.unwrap();
			menu.run().unwrap();
		}
		let out = String::from_utf8(output).unwrap();
		assert_eq!(out.matches(CLEAR_SCREEN).count(), 2);
		assert_eq!(out.matches("Press Enter to continue...").count(), 1);
	}
}
