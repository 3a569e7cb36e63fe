//! Rhythmbox database (rhythmdb.xml) reader

use super::model::RhythmboxEntry;
use crate::model::LibraryRecord;
use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse rhythmdb.xml and extract a library record per song
pub fn parse_database(path: &Path) -> Result<Vec<LibraryRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open Rhythmbox database: {:?}", path))?;

    let records = read_records(BufReader::new(file));
    log::info!("Parsed {} tracks from Rhythmbox database", records.len());
    Ok(records)
}

/// Read song entries from any XML source, in document order
pub(crate) fn read_records<R: BufRead>(source: R) -> Vec<LibraryRecord> {
    let mut reader = Reader::from_reader(source);
    reader.config_mut().trim_text(true);

    let mut records = Vec::new();
    let mut current_entry: Option<RhythmboxEntry> = None;
    let mut current_element = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.name();
                match name.as_ref() {
                    b"entry" => {
                        let is_song = e.attributes().flatten().any(|attr| {
                            attr.key.as_ref() == b"type" && attr.value.as_ref() == b"song"
                        });
                        if is_song {
                            current_entry = Some(RhythmboxEntry::new());
                        }
                    }
                    _ => {
                        if current_entry.is_some() {
                            current_element = String::from_utf8_lossy(name.as_ref()).to_string();
                        }
                    }
                }
            }

            Ok(Event::Text(e)) => {
                if let Some(ref mut entry) = current_entry {
                    let text = e.unescape().unwrap_or_default().to_string();

                    match current_element.as_str() {
                        "title" => entry.title = Some(text),
                        "location" => entry.location = Some(text),
                        _ => {}
                    }
                }
            }

            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"entry" {
                    if let Some(entry) = current_entry.take() {
                        if let Some(record) = convert_entry_to_record(&entry) {
                            records.push(record);
                        }
                    }
                }
                current_element.clear();
            }

            Ok(Event::Eof) => break,
            Err(e) => {
                log::warn!(
                    "XML parsing error at position {}: {:?}",
                    reader.buffer_position(),
                    e
                );
                break;
            }
            _ => {}
        }

        buf.clear();
    }

    records
}

/// Convert a RhythmboxEntry to a library record keyed by its path
fn convert_entry_to_record(entry: &RhythmboxEntry) -> Option<LibraryRecord> {
    let Some(file_path) = entry.get_file_path() else {
        log::debug!(
            "Skipping entry without a local location: {:?}",
            entry.title.as_deref().unwrap_or("<untitled>")
        );
        return None;
    };

    let filepath = file_path.to_string_lossy().into_owned();
    let id = format!("{:x}", md5::compute(filepath.as_bytes()));

    Some(LibraryRecord::new(filepath, id))
}
