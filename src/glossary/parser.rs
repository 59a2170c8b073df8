use tracing::{debug, warn};

use super::Glossary;

// term and the definition lines read so far
struct Record {
    term: String,
    definition: String,
}

pub fn parse_glossary<I>(lines: I) -> Glossary
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut glossary = Glossary::new();

    let mut current: Option<Record> = None;

    for line in lines {
        let line = line.as_ref();

        if line.is_empty() {
            // blank line closes a record; outside a record it is skipped
            if let Some(record) = current.take() {
                add_record(&mut glossary, record);
            }
            continue;
        }

        match &mut current {
            Some(record) => {
                record.definition.push(' ');
                record.definition.push_str(line);
            }
            None => {
                current = Some(Record {
                    term: line.to_owned(),
                    definition: String::new(),
                });
            }
        }
    }

    if let Some(record) = current {
        add_record(&mut glossary, record);
    }

    glossary
}

pub fn parse_glossary_txt(txt: &str) -> Glossary {
    parse_glossary(txt.lines())
}

fn add_record(glossary: &mut Glossary, record: Record) {
    debug!(term = %record.term, "parsed glossary record");

    if let Some(previous) = glossary.insert(record.term.clone(), record.definition) {
        warn!(
            term = %record.term,
            overwritten = %previous,
            "duplicate term, keeping the last definition"
        );
    }
}
