use serde::{Deserialize, Serialize};

use super::Glossary;
use crate::error::GlossaryError;

pub static INDEX_DOCUMENT_NAME: &str = "index.html";

pub fn document_name(term: &str) -> String {
    format!("{}.html", term)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedTermPage {
    pub term: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedGlossary {
    pub index: String,
    pub pages: Vec<RenderedTermPage>,
}

pub fn render_glossary(glossary: &Glossary) -> Result<RenderedGlossary, GlossaryError> {
    let index = render_index(glossary.terms());

    let mut pages = Vec::with_capacity(glossary.len());
    for term in glossary.terms() {
        let definition = glossary.definition(term)?;
        pages.push(RenderedTermPage {
            term: term.clone(),
            html: render_term_page(term, definition),
        });
    }

    Ok(RenderedGlossary { index, pages })
}

// Entries follow the order of `terms`.
pub fn render_index<S: AsRef<str>>(terms: &[S]) -> String {
    let mut html = Html::new();

    html.line("<html>");
    html.line("  <head>");
    html.line("      <title>Glossary</title>");
    html.line("  </head>");
    html.line("  <body>");
    html.line("      <h2>Glossary</h2>");
    html.line("      <hr>");
    html.line("      <h3>Index</h3>");
    html.line("      <ul>");
    for term in terms {
        let term = term.as_ref();
        html.line("          <li>");
        html.line(&format!(
            "              <a href=\"{}\">{}</a>",
            document_name(term),
            term
        ));
        html.line("          </li>");
    }
    html.line("      </ul>");
    html.line("  </body>");
    html.line("</html>");

    html.finish()
}

pub fn render_term_page(term: &str, definition: &str) -> String {
    let mut html = Html::new();

    html.line("<html>");
    html.line("  <head>");
    html.line(&format!("      <title>{}</title>", term));
    html.line("  </head>");
    html.line("  <body>");
    html.line(&format!(
        "<h2><b><i><font color=\"red\">{}</font></i></b></h2>",
        term
    ));
    html.line(&format!("<blockquote>{}</blockquote>", definition));
    html.line("      <hr>");
    html.line(&format!(
        "<p>Return to <a href=\"{}\">index</a>.</p>",
        INDEX_DOCUMENT_NAME
    ));
    html.line("  </body>");
    html.line("</html>");

    html.finish()
}

struct Html {
    buffer: String,
}

impl Html {
    fn new() -> Self {
        Html {
            buffer: String::new(),
        }
    }

    fn line(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    fn finish(self) -> String {
        self.buffer
    }
}
