//! Startup sources and the tracing bridge.

use std::fs;

use serde_json::json;
use tracing_subscriber::layer::SubscriberExt;

use logweave::config::ConfigSource;
use logweave::observability::HierarchyLayer;
use logweave::{bootstrap, AppenderKind, BootstrapOptions, Error, LoggerRegistry, Severity};

mod common;

#[test]
fn test_bootstrap_from_file_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logging.json");
    let log = common::path_in(&dir, "app.log");
    fs::write(
        &path,
        serde_json::to_string(&json!({"default": "warn", "app": ["info", log]})).unwrap(),
    )
    .unwrap();

    let registry = LoggerRegistry::new();
    let options = BootstrapOptions::default().with_source(ConfigSource::from_value(json!(path)));
    bootstrap(&registry, &options).unwrap();

    assert_eq!(registry.root().level(), Severity::Warning);
    assert_eq!(
        registry.get("app").appender_kinds(),
        vec![AppenderKind::File(dir.path().join("app.log"))]
    );
}

#[test]
fn test_bootstrap_inline_env_value() {
    let options = BootstrapOptions::from_vars(Some(r#"{"default": "error"}"#.into()), None).unwrap();
    let registry = LoggerRegistry::new();
    bootstrap(&registry, &options).unwrap();

    assert_eq!(registry.root().level(), Severity::Error);
}

#[test]
fn test_bootstrap_missing_file_fails_without_touching_registry() {
    let dir = tempfile::tempdir().unwrap();
    let registry = common::compiled(json!({"default": "debug"}));

    let options = BootstrapOptions::default()
        .with_source(ConfigSource::Path(dir.path().join("absent.json")));
    let err = bootstrap(&registry, &options).unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(registry.root().level(), Severity::Debug);
}

#[test]
fn test_bridge_routes_tracing_events_by_target() {
    let registry = common::compiled(json!({"default": "info", "billing": ["debug"]}));
    let billing = common::capture(&registry, "billing");
    let root = common::capture(&registry, "default");

    let subscriber = tracing_subscriber::registry().with(HierarchyLayer::new(registry.clone()));
    tracing::subscriber::with_default(subscriber, || {
        tracing::debug!(target: "billing::invoice", id = 7, "Invoice drafted");
        tracing::debug!(target: "search", "below root level");
        tracing::warn!(target: "search", "Index stale");
        tracing::error!(target: "logweave::hierarchy", "never bridged");
    });

    let records = billing.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity, Severity::Debug);
    assert_eq!(records[0].component, "billing::invoice");
    assert_eq!(records[0].message, "Invoice drafted id=7");

    assert_eq!(root.messages(), vec!["Index stale"]);
}
