//! Facade surface check
//!
//! Exercises the public re-export paths an embedding application would
//! use, without reaching into the layer crates directly.

use appstrap::infrastructure::dispatch::Dispatcher;
use appstrap::services::{FileSessionStore, SecurityService};
use appstrap::{Bootstrapper, ConfigFormat, Error};
use std::fs;
use tempfile::TempDir;

#[test]
fn bootstrap_through_the_facade() {
    let app = TempDir::new().unwrap();
    fs::create_dir(app.path().join("temp")).unwrap();
    let config = app.path().join("app.toml");
    fs::write(&config, "[application]\nprefix = \"eg\"\n").unwrap();

    let mut bootstrapper = Bootstrapper::new();
    bootstrapper.set_app_directory(app.path()).unwrap();
    bootstrapper
        .add_configuration(&config, ConfigFormat::Toml)
        .unwrap();

    let registry = bootstrapper.build_service_registry().unwrap();

    let session = registry.resolve::<FileSessionStore>("session").unwrap();
    assert_eq!(session.namespace(), "eg");

    let security = registry.resolve::<SecurityService>("security").unwrap();
    assert_eq!(security.work_factor(), 12);

    let dispatcher = registry.resolve::<Dispatcher>("dispatcher").unwrap();
    dispatcher.register_handler("home", "index", |_| Ok("ok".to_string()));
    assert_eq!(dispatcher.dispatch("home", "index").unwrap().body, "ok");
}

#[test]
fn facade_reexports_the_error_taxonomy() {
    let mut bootstrapper = Bootstrapper::new();
    let err = bootstrapper.set_app_directory("/nonexistent").unwrap_err();
    assert!(matches!(err, Error::InvalidDirectory { .. }));
}
