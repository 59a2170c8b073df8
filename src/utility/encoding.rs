use anyhow::{ensure, Context, Result};
use encoding_rs::Encoding;

pub static DEFAULT_ENCODING_LABEL: &str = "utf-8";

/// Decodes `bytes` with the encoding named by `label` (WHATWG labels, e.g.
/// "utf-8", "shift_jis"). A leading BOM overrides the label.
pub fn decode_text(bytes: &[u8], label: &str) -> Result<String> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .with_context(|| format!("Unknown encoding: {:?}", label))?;

    let (txt, actual, had_errors) = encoding.decode(bytes);
    ensure!(
        !had_errors,
        "Malformed input for encoding {}",
        actual.name()
    );

    Ok(txt.into_owned())
}
