//! Event files: one JSON encoded `Event` per line.

use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use cubecore::data::event::Event;

#[derive(Debug)]
pub struct EventFileHandle {
    pub path: PathBuf,
}

impl EventFileHandle {
    pub fn new(path: &Path) -> Result<Self, Box<dyn Error>> {
        if !path.is_file() {
            return Err(format!("event file not found: {}", path.display()).into());
        }
        Ok(EventFileHandle { path: path.to_path_buf() })
    }

    /// Reads all events, failing on the first line that does not parse.
    /// Blank lines are skipped.
    pub fn read_events(&self) -> Result<Vec<Event>, Box<dyn Error>> {
        let reader = BufReader::new(File::open(&self.path)?);
        let events = read_events_from(reader)
            .map_err(|e| format!("{}: {}", self.path.display(), e))?;
        Ok(events)
    }
}

pub fn read_events_from<R: BufRead>(reader: R) -> Result<Vec<Event>, Box<dyn Error>> {
    let mut events = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event: Event = serde_json::from_str(&line)
            .map_err(|e| format!("line {}: {}", i + 1, e))?;
        events.push(event);
    }
    Ok(events)
}

pub fn write_events(path: &Path, events: &[Event]) -> Result<(), Box<dyn Error>> {
    let mut writer = BufWriter::new(File::create(path)?);
    for event in events {
        serde_json::to_writer(&mut writer, event)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
