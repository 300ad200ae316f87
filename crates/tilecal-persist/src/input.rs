//! Step-stream input: one JSON event per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tilecal_core::EventInput;

use crate::error::PersistError;

/// Parse every event of a JSON-lines step stream. Blank lines are skipped.
pub fn read_events<R: BufRead>(reader: R) -> Result<Vec<EventInput>, PersistError> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event = serde_json::from_str(&line).map_err(|e| PersistError::Json {
            line: index + 1,
            message: e.to_string(),
        })?;
        events.push(event);
    }
    Ok(events)
}

/// Read a step-stream file from disk.
pub fn read_events_file(path: &Path) -> Result<Vec<EventInput>, PersistError> {
    let file = File::open(path).map_err(|e| PersistError::io(path, e))?;
    let events = read_events(BufReader::new(file))?;
    log::info!("Read {} events from {}", events.len(), path.display());
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STREAM: &str = r#"{"event_id":0,"primary":{"pdg":-211,"energy":20000.0},"steps":[]}

{"event_id":1,"primary":{"pdg":-211,"energy":20000.0},"steps":[{"energy_deposit":0.8,"step_length":3.0,"global_time":4.5,"local_position":[10.0,-2.0],"density":1.032,"charge":-1.0,"scintillator":[{"name":"Tile::Scintillator","copy":2},{"name":"Tile::Period","copy":0},{"name":"Tile::Period","copy":350},{"name":"Tile::Absorber","copy":0},{"name":"Tile::Absorber","copy":0},{"name":"Tile::BarrelModule","copy":0}]},{"energy_deposit":0.0,"step_length":12.0,"global_time":5.0,"density":0.0,"charge":0.0,"kinetic_energy":40.0,"leaves_world":true}]}
"#;

    #[test]
    fn test_reads_events_and_skips_blank_lines() {
        let events = read_events(STREAM.as_bytes()).expect("parses");
        assert_eq!(events.len(), 2);
        assert!(events[0].steps.is_empty());

        let steps = &events[1].steps;
        assert_eq!(steps.len(), 2);
        let touchable = steps[0].scintillator.as_ref().expect("tile step");
        assert_eq!(touchable.depth(), 6);
        assert_eq!(steps[0].local_position.x, 10.0);
        assert_eq!(steps[0].weight, 1.0);
        assert!(steps[1].leaves_world);
        assert!(steps[1].scintillator.is_none());
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let text = format!("{STREAM}{{\"event_id\": 2}}\n");
        match read_events(text.as_bytes()) {
            Err(PersistError::Json { line, .. }) => assert_eq!(line, 4),
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("malformed event accepted"),
        }
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            read_events_file(Path::new("/nonexistent/steps.jsonl")),
            Err(PersistError::Io { .. })
        ));
    }
}
