use serde_derive::Serialize;
use std::{fmt, io::Write, sync::Mutex};
use tracing::{field, span, Event, Id, Metadata, Subscriber};

/// Thread safe json logger that writes an [`EventRecord`] for every parse, substitute and rename
/// event into a given log writer.
pub struct JsonLogger<W: Write + Send + 'static> {
    log_file: Mutex<W>,
}

impl<W: Write + Send + 'static> JsonLogger<W> {
    pub fn new(log_file: W) -> Self {
        Self {
            log_file: Mutex::new(log_file),
        }
    }
}

impl<W: Write + Send + 'static> Subscriber for JsonLogger<W> {
    fn enabled(&self, _: &Metadata) -> bool {
        true // for now
    }

    fn new_span(&self, _span: &span::Attributes) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &span::Record) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event) {
        let mut recorder = Recorder::new();
        event.record(&mut recorder);

        if let Ok(record) = EventRecord::try_from(recorder) {
            if let (Ok(mut log_file), Ok(json)) =
                (self.log_file.lock(), serde_json::to_string_pretty(&record))
            {
                let _ = writeln!(log_file, "{}", json);
            }
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

/// A record, containing the fields of a parse, substitute or rename event.
#[derive(Serialize)]
struct EventRecord {
    event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    formula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    variable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fresh: Option<String>,
}

impl EventRecord {
    fn try_from(value: Recorder) -> Result<Self, ()> {
        match value.event {
            Some(event) if event.starts_with('@') => Ok(EventRecord {
                event,
                formula: value.formula,
                variable: value.variable,
                term: value.term,
                fresh: value.fresh,
            }),
            _ => Err(()),
        }
    }
}

/// Generic trace visitor to collect as many fields as it can.
struct Recorder {
    event: Option<String>,
    formula: Option<String>,
    variable: Option<String>,
    term: Option<String>,
    fresh: Option<String>,
}

impl Recorder {
    fn new() -> Recorder {
        Recorder {
            event: None,
            formula: None,
            variable: None,
            term: None,
            fresh: None,
        }
    }

    fn set(&mut self, field: &field::Field, value: String) {
        match field.name() {
            super::EVENT_FIELD => self.event = Some(value),
            super::FORMULA_FIELD => self.formula = Some(value),
            super::VARIABLE_FIELD => self.variable = Some(value),
            super::TERM_FIELD => self.term = Some(value),
            super::FRESH_FIELD => self.fresh = Some(value),
            _ => (),
        }
    }
}

impl field::Visit for Recorder {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.set(field, value.to_owned());
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        self.set(field, format!("{:?}", value));
    }
}
