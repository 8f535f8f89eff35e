//! JSON file reading for config files

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::YnabSmsError;

/// Read JSON from a file, returning an error if the file doesn't exist
///
/// Read failures map to [`YnabSmsError::Io`] and parse failures to
/// [`YnabSmsError::Json`], both naming the offending path.
pub fn read_json_required<T, P>(path: P) -> Result<T, YnabSmsError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(YnabSmsError::Io(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| YnabSmsError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| YnabSmsError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}
