use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    glossary::{
        renderer::{document_name, RenderedTermPage, INDEX_DOCUMENT_NAME},
        Glossary,
    },
    utility::file_name::ensure_valid_file_name,
};

pub static GLOSSARY_JSON_NAME: &str = "glossary.json";

// Null discards everything (dry run)
pub enum BuildOut {
    Null,
    File { root: PathBuf },
}

impl BuildOut {
    pub fn init_file<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).context("Failed to create output directory")?;

        Ok(Self::File { root })
    }

    pub fn save_index(&self, index: &str) -> Result<()> {
        self.write(INDEX_DOCUMENT_NAME, index)
    }

    pub fn save_term_page(&self, page: &RenderedTermPage) -> Result<()> {
        ensure_valid_file_name(&page.term)
            .with_context(|| format!("Cannot name the page of term {:?}", &page.term))?;

        self.write(&document_name(&page.term), &page.html)
    }

    pub fn save_glossary_json(&self, glossary: &Glossary) -> Result<()> {
        let json = serde_json::to_string_pretty(glossary).context("Failed to serialize")?;
        self.write(GLOSSARY_JSON_NAME, &json)
    }

    fn write(&self, name: &str, contents: &str) -> Result<()> {
        if let BuildOut::File { root } = &self {
            let path = root.join(name);
            debug!(path = %path.display(), "writing document");

            fs::write(&path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }

        Ok(())
    }
}
