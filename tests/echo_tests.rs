//! Log capture lives in its own test binary: the logger is process-global.

mod common;

use common::TestResult;
use common::fixtures::full_document;
use log::{LevelFilter, Log, Metadata, Record};
use readymeta::{PipelineBuilder, project};
use std::io::Cursor;
use std::sync::Mutex;

struct CaptureLogger {
    records: Mutex<Vec<(String, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.target().to_string(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

#[test]
fn test_each_line_is_echoed_in_order_before_layout() -> TestResult {
    log::set_logger(&LOGGER).map_err(|e| e.to_string())?;
    log::set_max_level(LevelFilter::Debug);

    let lines = project(&full_document());
    PipelineBuilder::new()
        .build()
        .generate(&lines, Cursor::new(Vec::new()))?;

    let records = LOGGER.records.lock().map_err(|e| e.to_string())?.clone();
    let echoes: Vec<(usize, &str)> = records
        .iter()
        .enumerate()
        .filter(|(_, (_, message))| message.starts_with("Index: "))
        .map(|(position, (_, message))| (position, message.as_str()))
        .collect();

    assert_eq!(echoes.len(), 13);
    for (index, ((_, message), line)) in echoes.iter().zip(&lines).enumerate() {
        assert_eq!(*message, format!("Index: {} Element: {}", index, line));
    }
    assert_eq!(echoes[3].1, "Index: 3 Element: Licence: CC-BY-4.0");

    let first_layout_record = records
        .iter()
        .position(|(target, _)| target.starts_with("readymeta_layout"))
        .ok_or("layout engine logged nothing")?;
    let last_echo = echoes.last().map(|(position, _)| *position).ok_or("no echoes")?;
    assert!(
        last_echo < first_layout_record,
        "lines must be echoed before layout starts: {:?}",
        records
    );
    Ok(())
}
