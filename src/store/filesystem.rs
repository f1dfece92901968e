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
use crate::error::{FxError, FxResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads a whole JSON document. A missing file is a first run, not a
/// failure, and comes back as `None`; anything else that stops us from
/// getting a well-formed document is reported as storage being unavailable.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> FxResult<Option<T>> {
	let content = match fs::read_to_string(path) {
		Ok(content) => content,
		Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
		Err(e) => return Err(FxError::storage(path, e)),
	};

	serde_json::from_str(&content)
		.map(Some)
		.map_err(|e| FxError::storage(path, format!("malformed content: {}", e)))
}

/// Replaces the file with the pretty-printed document, creating parent
/// directories on the way.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> FxResult<()> {
	if let Some(parent) = path.parent() {
		if !parent.as_os_str().is_empty() {
			fs::create_dir_all(parent).map_err(|e| FxError::storage(path, e))?;
		}
	}

	let content = serde_json::to_string_pretty(value)
		.map_err(|e| FxError::storage(path, e))?;
	fs::write(path, content).map_err(|e| FxError::storage(path, e))
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::tempdir;

	#[test]
	fn test_missing_file_is_none() {
		let dir = tempdir().unwrap();
		let read: Option<Vec<u32>> =
			read_json(&dir.path().join("nothing.json")).unwrap();
		assert!(read.is_none());
	}

	#[test]
	fn test_write_then_read() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("nested/deeper/values.json");
		write_json(&path, &vec![1u32, 2, 3]).unwrap();

		let read: Option<Vec<u32>> = read_json(&path).unwrap();
		assert_eq!(read, Some(vec![1, 2, 3]));
		assert!(fs::read_to_string(&path).unwrap().contains("\n  1,"));
	}

	#[test]
	fn test_malformed_is_storage_error() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("broken.json");
		fs::write(&path, "{ not json").unwrap();

		let read: FxResult<Option<Vec<u32>>> = read_json(&path);
		assert!(matches!(read, Err(FxError::StorageUnavailable { .. })));
	}

	#[test]
	fn test_directory_in_the_way_is_storage_error() {
		let dir = tempdir().unwrap();
		let read: FxResult<Option<Vec<u32>>> = read_json(dir.path());
		assert!(matches!(read, Err(FxError::StorageUnavailable { .. })));

		let written = write_json(dir.path(), &vec![1u32]);
		assert!(matches!(written, Err(FxError::StorageUnavailable { .. })));
	}
}
