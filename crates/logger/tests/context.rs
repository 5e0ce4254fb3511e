//! Context merging, reserved-key validation, and self-describing values

use firehose_logger::{
    Context, ContextValue, Error, Loggable, Logger, RESERVED_KEYS, test_support::CaptureSink,
};
use serde_json::{Value, json};
use std::sync::Arc;

struct User {
    id: u64,
    username: String,
}

impl Loggable for User {
    fn format_for_log(&self) -> Value {
        json!({ "id": self.id, "username": self.username })
    }
}

fn capture_logger() -> (CaptureSink, Logger) {
    let sink = CaptureSink::new();
    let logger = Logger::with_sink(Arc::new(sink.clone()));
    (sink, logger)
}

#[test]
fn persistent_context_appears_on_every_record() {
    let (sink, logger) = capture_logger();
    logger.set_context(Context::new().with("serverID", "34y2ro3rof").unwrap());

    logger.info("first", &Context::new()).unwrap();
    logger.info("second", &Context::new()).unwrap();

    for line in sink.lines() {
        let record: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(record["serverID"], "34y2ro3rof");
    }
}

#[test]
fn call_level_key_overrides_persistent_key() {
    let (sink, logger) = capture_logger();
    logger.set_context(Context::new().with("version", "0.23.0").unwrap());

    let call = Context::new().with("version", "1.0.0").unwrap();
    logger.info("override", &call).unwrap();

    let line = &sink.lines()[0];
    let record: Value = serde_json::from_str(line).unwrap();
    assert_eq!(record["version"], "1.0.0");
    // exactly one representation of the key in the serialized line
    assert_eq!(line.matches("\"version\"").count(), 1);

    // the override was per-call only
    assert_eq!(
        logger.context().get("version").unwrap().resolve(),
        json!("0.23.0")
    );
}

#[test]
fn set_context_merges_with_last_write_wins() {
    let (sink, logger) = capture_logger();
    logger.set_context(Context::new().with("attempt", 1).unwrap());
    logger.set_context(Context::new().with("attempt", 2).unwrap());

    logger.info("merged", &Context::new()).unwrap();
    let record: Value = serde_json::from_str(&sink.lines()[0]).unwrap();
    assert_eq!(record["attempt"], 2);
}

#[test]
fn all_reserved_keys_are_rejected() {
    for key in RESERVED_KEYS {
        let err = Context::new().set(key, "x").unwrap_err();
        match err {
            Error::ReservedKey { key: offending } => assert_eq!(offending, key),
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn rejected_update_leaves_persistent_context_unchanged() {
    let (sink, logger) = capture_logger();
    logger.set_context(Context::new().with("serverID", "34y2ro3rof").unwrap());

    let mut updates = Context::new();
    updates.set("fine", true).unwrap();
    assert!(updates.set("_message", "x").is_err());
    // the failed build never reaches the logger
    let persistent = logger.context();
    assert_eq!(persistent.len(), 1);
    assert!(persistent.get("_message").is_none());

    logger.info("still intact", &Context::new()).unwrap();
    let record: Value = serde_json::from_str(&sink.lines()[0]).unwrap();
    assert_eq!(record["serverID"], "34y2ro3rof");
    assert_eq!(record["_message"], "still intact");
}

#[test]
fn loggable_values_are_replaced_by_their_description() {
    let (sink, logger) = capture_logger();
    let user = ContextValue::loggable(User {
        id: 12345,
        username: "steve".to_owned(),
    });

    logger
        .info("created", &Context::new().with("user", user).unwrap())
        .unwrap();

    let record: Value = serde_json::from_str(&sink.lines()[0]).unwrap();
    assert_eq!(record["user"], json!({ "id": 12345, "username": "steve" }));
}

#[test]
fn json_native_values_pass_through_unchanged() {
    let (sink, logger) = capture_logger();
    let context = Context::new()
        .with("tags", json!(["a", "b"]))
        .unwrap()
        .with("nothing", Value::Null)
        .unwrap()
        .with("nested", json!({ "depth": 2 }))
        .unwrap();

    logger.info("shapes", &context).unwrap();

    let record: Value = serde_json::from_str(&sink.lines()[0]).unwrap();
    assert_eq!(record["tags"], json!(["a", "b"]));
    assert_eq!(record["nothing"], Value::Null);
    assert_eq!(record["nested"], json!({ "depth": 2 }));
}

#[test]
fn full_scenario_emits_one_complete_record() {
    let (sink, logger) = capture_logger();
    logger.set_context(
        Context::new()
            .with("serverID", "34y2ro3rof")
            .unwrap()
            .with("version", "0.23.0")
            .unwrap(),
    );

    let user = ContextValue::loggable(User {
        id: 12345,
        username: "steve".to_owned(),
    });
    logger
        .notice("hello", &Context::new().with("user", user).unwrap())
        .unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    let record: Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(record["_severity"], "notice");
    assert_eq!(record["_message"], "hello");
    assert_eq!(record["serverID"], "34y2ro3rof");
    assert_eq!(record["version"], "0.23.0");
    assert_eq!(record["user"], json!({ "id": 12345, "username": "steve" }));
}
