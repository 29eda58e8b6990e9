#![cfg(feature = "tracing")]

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

use sugar_rail::env::Env;
use sugar_rail::input::Prompter;
use sugar_rail::rescue::catch;
use sugar_rail::validation::{min_length, not_empty};
use sugar_rail::validators;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

#[derive(Debug, Clone)]
struct Captured {
    level: Level,
    fields: BTreeMap<String, String>,
}

impl Captured {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[derive(Default)]
struct Fields(BTreeMap<String, String>);

impl Visit for Fields {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{:?}", value));
    }
}

#[derive(Clone, Default)]
struct Collector {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl Subscriber for Collector {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut fields = Fields::default();
        event.record(&mut fields);
        self.events.lock().unwrap().push(Captured {
            level: *event.metadata().level(),
            fields: fields.0,
        });
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

fn collect(f: impl FnOnce()) -> Vec<Captured> {
    let collector = Collector::default();
    let events = Arc::clone(&collector.events);
    tracing::subscriber::with_default(collector, f);
    let captured = events.lock().unwrap().clone();
    captured
}

fn only_event(events: &[Captured], message: &str) -> Captured {
    let matching: Vec<_> = events
        .iter()
        .filter(|event| event.field("message") == Some(message))
        .collect();
    assert_eq!(matching.len(), 1, "events: {:?}", events);
    matching[0].clone()
}

#[test]
fn contained_panic_emits_debug_event() {
    let events = collect(|| {
        let _ = catch(|| -> i32 { panic!("cache offline") });
    });

    let event = only_event(&events, "contained panic");
    assert_eq!(event.level, Level::DEBUG);
    assert_eq!(event.field("panic_message"), Some("cache offline"));
}

#[test]
fn completed_run_emits_nothing() {
    let events = collect(|| {
        let _ = catch(|| 1 + 1);
    });
    assert!(events.is_empty(), "events: {:?}", events);
}

#[test]
fn chain_rejection_emits_trace_event_with_first_reason() {
    let events = collect(|| {
        let chain = validators![not_empty(), min_length(5)];
        let _ = chain.validate("abc");
    });

    let event = only_event(&events, "validator chain rejected input");
    assert_eq!(event.level, Level::TRACE);
    assert_eq!(event.field("reason"), Some("minimum length is 5"));
}

#[test]
fn env_fallback_on_invalid_value_emits_debug_event() {
    let env = Env::new(HashMap::from([("PORT".to_string(), "http".to_string())]));
    let events = collect(|| {
        assert_eq!(env.int("PORT", Some(8080)).unwrap(), 8080);
    });

    let event = only_event(&events, "invalid env var, using default");
    assert_eq!(event.level, Level::DEBUG);
    assert_eq!(event.field("key"), Some("PORT"));
    assert_eq!(event.field("value"), Some("http"));
    assert_eq!(event.field("kind"), Some("int"));
}

#[test]
fn env_fallback_on_missing_value_emits_debug_event() {
    let env = Env::new(HashMap::<String, String>::new());
    let events = collect(|| {
        assert!(env.bool("VERBOSE", Some(true)).unwrap());
    });

    let event = only_event(&events, "env var missing, using default");
    assert_eq!(event.level, Level::DEBUG);
    assert_eq!(event.field("key"), Some("VERBOSE"));
    assert_eq!(event.field("kind"), Some("bool"));
}

#[test]
fn input_fallback_emits_debug_event() {
    let mut prompter = Prompter::new(Cursor::new("lots\n"), Vec::new());
    let events = collect(|| {
        assert_eq!(prompter.read_int("", Some(3)).unwrap(), 3);
    });

    let event = only_event(&events, "unparsable input, using default");
    assert_eq!(event.level, Level::DEBUG);
    assert_eq!(event.field("input"), Some("lots"));
}
