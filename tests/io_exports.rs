#![forbid(unsafe_code)]
use roulement::{
    export_config_json, export_month_csv, export_month_json, load_config_from_file,
    month_schedule, RotationConfig, RotationEngine,
};
use tempfile::tempdir;

#[test]
fn config_json_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rotation.json");
    let config = RotationConfig::builtin();

    export_config_json(&path, &config).unwrap();
    let loaded = load_config_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn load_rejects_malformed_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    let mut config = RotationConfig::builtin();
    config.remote_weeks.pop();
    export_config_json(&path, &config).unwrap();

    let err = load_config_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("remote"));
}

#[test]
fn month_schedule_covers_every_day() {
    let engine = RotationEngine::builtin().unwrap();
    let schedule = month_schedule(&engine, 2025, 2).unwrap();
    assert_eq!(schedule.days.len(), 28);
    assert_eq!(schedule.weeks.len(), 5);
    // février 2025 est entièrement dans la fenêtre remote
    assert!(schedule
        .days
        .iter()
        .all(|d| d.rotation.regime == roulement::Regime::Remote));
}

#[test]
fn month_schedule_rejects_invalid_month() {
    let engine = RotationEngine::builtin().unwrap();
    assert!(month_schedule(&engine, 2025, 13).is_err());
}

#[test]
fn csv_export_lists_roles_and_holidays() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("feb.csv");
    let engine = RotationEngine::builtin().unwrap();
    let schedule = month_schedule(&engine, 2025, 2).unwrap();

    export_month_csv(&path, &schedule).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();

    assert!(text.starts_with("date,iso_week,regime,role,member,holiday"));
    // 4 lignes de rôles par jour (3 rotatifs + Remote)
    assert_eq!(text.lines().count(), 1 + 28 * 4);
    assert!(text.contains("Presidents' Day"));
    assert!(text.contains("Remote,Willis"));
}

#[test]
fn json_export_parses_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("feb.json");
    let engine = RotationEngine::builtin().unwrap();
    let schedule = month_schedule(&engine, 2025, 2).unwrap();

    export_month_json(&path, &schedule).unwrap();
    let data = std::fs::read(&path).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&data).unwrap();

    assert_eq!(value["year"], 2025);
    assert_eq!(value["month"], 2);
    assert_eq!(value["days"].as_array().unwrap().len(), 28);
    assert_eq!(value["days"][0]["rotation"]["regime"], "remote");
}
