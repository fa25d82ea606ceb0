use vitrine_config::Preferences;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let preferences = Preferences::load_from(dir.path());
    assert_eq!(preferences, Preferences::default());
    assert_eq!(preferences.theme, "blue");
}

#[test]
fn malformed_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("preferences.json"), "{not json").unwrap();
    let preferences = Preferences::load_from(dir.path());
    assert_eq!(preferences, Preferences::default());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let stored = Preferences {
        theme: "white".to_string(),
    };
    stored.save_to(dir.path()).unwrap();

    let loaded = Preferences::load_from(dir.path());
    assert_eq!(loaded, stored);
}

#[test]
fn stored_value_is_read_back_verbatim() {
    // Interpretation of unknown themes is the application's job; the store
    // must not normalize them.
    let dir = tempfile::tempdir().unwrap();
    let stored = Preferences {
        theme: "chartreuse".to_string(),
    };
    stored.save_to(dir.path()).unwrap();

    assert_eq!(Preferences::load_from(dir.path()).theme, "chartreuse");
}

#[test]
fn save_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("deeper").join("still");
    Preferences::default().save_to(&nested).unwrap();
    assert!(nested.join("preferences.json").exists());
}
