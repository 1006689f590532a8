//! Puzzle inputs stored on local disk

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Directory structure: `{base_dir}/{year}/day{day:02}.txt`
pub struct InputStore {
    base_dir: PathBuf,
}

impl InputStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.base_dir
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for a puzzle
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing { year, day, path },
            _ => InputError::Read { path, source },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let path = store.input_path(2024, 1);
        assert!(path.ends_with("2024/day01.txt"));

        let path = store.input_path(2016, 25);
        assert!(path.ends_with("2016/day25.txt"));
    }

    #[test]
    fn test_read_existing_and_missing() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2021, 15));
        assert!(matches!(
            store.read(2021, 15),
            Err(InputError::Missing { year: 2021, day: 15, .. })
        ));

        let input = "116\n138\n";
        fs::create_dir_all(temp.path().join("2021")).unwrap();
        fs::write(store.input_path(2021, 15), input).unwrap();

        assert!(store.contains(2021, 15));
        assert_eq!(store.read(2021, 15).unwrap(), input);
    }

    #[test]
    fn test_directory_in_place_of_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::create_dir_all(store.input_path(2022, 12)).unwrap();

        assert!(!store.contains(2022, 12));
        assert!(matches!(store.read(2022, 12), Err(InputError::Read { .. })));
    }
}
