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

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
	Convert,
	Hourly,
	Daily,
	Popular,
	History,
	ClearHistory,
	Help,
	Exit,
}

impl MenuChoice {
	pub const ALL: [MenuChoice; 8] = [
		MenuChoice::Convert,
		MenuChoice::Hourly,
		MenuChoice::Daily,
		MenuChoice::Popular,
		MenuChoice::History,
		MenuChoice::ClearHistory,
		MenuChoice::Help,
		MenuChoice::Exit,
	];

	pub fn label(&self) -> &'static str {
		match self {
			MenuChoice::Convert => "Convert Currency",
			MenuChoice::Hourly => "Hourly Predictions",
			MenuChoice::Daily => "Daily Predictions",
			MenuChoice::Popular => "Popular Conversions",
			MenuChoice::History => "View Conversion History",
			MenuChoice::ClearHistory => "Clear History",
			MenuChoice::Help => "Help",
			MenuChoice::Exit => "Exit",
		}
	}

	/// Menu numbers start at 1. Anything else, including surrounding text,
	/// is not a choice.
	pub fn from_input(input: &str) -> Option<MenuChoice> {
		let number = input.trim().parse::<usize>().ok()?;
		number
			.checked_sub(1)
			.and_then(|i| MenuChoice::ALL.get(i))
			.copied()
	}
}
