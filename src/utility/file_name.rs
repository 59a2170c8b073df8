use anyhow::{ensure, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static REGEX_INVALID_FILE_NAME_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[/\\\x00]").unwrap());

// Terms become file names as is, so anything that would escape the output
// directory is rejected.
pub fn ensure_valid_file_name(name: &str) -> Result<()> {
    ensure!(!name.is_empty(), "Empty file name");
    ensure!(
        name != "." && name != "..",
        "Invalid file name: {:?}",
        name
    );
    ensure!(
        !REGEX_INVALID_FILE_NAME_CHAR.is_match(name),
        "Invalid character in file name: {:?}",
        name
    );
    Ok(())
}
