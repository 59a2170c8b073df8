pub mod error;
pub mod glossary;
pub mod output;
pub mod utility;
