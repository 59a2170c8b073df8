use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::{
    env, fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use glossary_html::{
    glossary::{linker::link_terms, parser::parse_glossary_txt, renderer::render_glossary},
    output::BuildOut,
    utility::encoding::{decode_text, DEFAULT_ENCODING_LABEL},
};

struct Args {
    source_path: Option<String>,
    output_path: Option<String>,
    encoding: String,
    json: bool,
    dry_run: bool,
    verbose: bool,
}

fn get_args() -> Result<Option<Args>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optopt(
        "e",
        "encoding",
        "encoding of the glossary file (default: utf-8)",
        "LABEL",
    );
    opts.optflag("j", "json", "also write glossary.json");
    opts.optflag("n", "dry-run", "do not write any file");
    opts.optflag("v", "verbose", "print debug logs");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        let brief = "Usage: glossary-html [options] [SOURCE] [DESTINATION]";
        print!("{}", opts.usage(brief));
        return Ok(None);
    }

    let source_path = matches.free.get(0).cloned();
    let output_path = matches.free.get(1).cloned();
    let encoding = matches
        .opt_str("e")
        .unwrap_or_else(|| DEFAULT_ENCODING_LABEL.to_owned());

    Ok(Some(Args {
        source_path,
        output_path,
        encoding,
        json: matches.opt_present("j"),
        dry_run: matches.opt_present("n"),
        verbose: matches.opt_present("v"),
    }))
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;

    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

fn init_logging(verbose: bool) {
    // RUST_LOG applies unless --verbose is given
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let Some(args) = get_args()? else {
        return Ok(());
    };

    init_logging(args.verbose);

    let source_path = match args.source_path {
        Some(path) => path,
        None => prompt("What is the file name? ")?,
    };
    let source_path = PathBuf::from(source_path);

    let out = if args.dry_run {
        BuildOut::Null
    } else {
        let output_path = match args.output_path {
            Some(path) => path,
            None => prompt("Where would you like to save these files? ")?,
        };
        BuildOut::init_file(&output_path)
            .with_context(|| format!("Failed to output directory: {}", &output_path))?
    };

    println!("Processing {}...", source_path.display());

    let glossary = {
        let bytes = fs::read(&source_path)
            .with_context(|| format!("File not found: {}", source_path.display()))?;
        let txt = decode_text(&bytes, &args.encoding)
            .with_context(|| format!("Failed to decode {}", source_path.display()))?;

        parse_glossary_txt(&txt)
    };

    info!(terms = glossary.len(), "parsed glossary");

    let glossary = link_terms(&glossary).context("Failed to link terms")?;
    let rendered = render_glossary(&glossary).context("Failed to render")?;

    out.save_index(&rendered.index)
        .context("Failed to save index")?;

    let pb = create_progress_bar(rendered.pages.len() as u64);
    for page in rendered.pages.iter().progress_with(pb) {
        out.save_term_page(page)
            .with_context(|| format!("Failed to save page: {:?}", &page.term))?;
    }

    if args.json {
        out.save_glossary_json(&glossary)?;
    }

    println!("Finished.");

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len}")
            .unwrap()
            .progress_chars("#-"),
    );
    pb
}
