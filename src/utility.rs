pub mod encoding;
pub mod file_name;
