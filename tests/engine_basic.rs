#![forbid(unsafe_code)]
use chrono::NaiveDate;
use roulement::{
    ConfigError, Member, Regime, RemoteWindow, Role, RotationConfig, RotationEngine,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn standard_regime_outside_remote_window() {
    let engine = RotationEngine::builtin().unwrap();

    // veille du début de fenêtre
    let before = engine.resolve(date(2025, 1, 26));
    assert_eq!(before.regime, Regime::Standard);
    assert_eq!(before.assignment.len(), 4);

    // bien après la fenêtre
    let after = engine.resolve(date(2025, 9, 1));
    assert_eq!(after.regime, Regime::Standard);
    assert_eq!(after.assignment.len(), 4);
}

#[test]
fn remote_regime_inside_window() {
    let engine = RotationEngine::builtin().unwrap();
    let rot = engine.resolve(date(2025, 2, 20));
    assert_eq!(rot.regime, Regime::Remote);
    // 3 rôles rotatifs + le rôle fixe
    assert_eq!(rot.assignment.len(), 4);
    assert_eq!(rot.assignment.get("Remote").unwrap().as_str(), "Willis");
}

#[test]
fn remote_window_end_is_exclusive() {
    let engine = RotationEngine::builtin().unwrap();
    // 2025-04-13 : dernier jour remote ; 2025-04-14 : retour standard
    assert_eq!(engine.resolve(date(2025, 4, 13)).regime, Regime::Remote);
    assert_eq!(engine.resolve(date(2025, 4, 14)).regime, Regime::Standard);
}

#[test]
fn remote_cycle_starts_at_zero_and_advances_weekly() {
    let engine = RotationEngine::builtin().unwrap();

    let week0 = engine.resolve(date(2025, 1, 27));
    assert_eq!(week0.regime, Regime::Remote);
    assert_eq!(week0.cycle_index, 0);
    assert_eq!(week0.assignment.get("Threat Hunter").unwrap().as_str(), "Peyton");

    let week1 = engine.resolve(date(2025, 2, 3));
    assert_eq!(week1.cycle_index, 1);
    assert_eq!(week1.assignment.get("Threat Hunter").unwrap().as_str(), "Randy");

    let week2 = engine.resolve(date(2025, 2, 10));
    assert_eq!(week2.cycle_index, 2);

    // retour à l'index 0 après 3 semaines
    let week3 = engine.resolve(date(2025, 2, 17));
    assert_eq!(week3.cycle_index, 0);
    assert_eq!(week3.assignment, week0.assignment);
}

#[test]
fn remote_cycle_is_stable_within_a_week() {
    let engine = RotationEngine::builtin().unwrap();
    // lundi et dimanche de la même semaine ISO
    let monday = engine.resolve(date(2025, 2, 3));
    let sunday = engine.resolve(date(2025, 2, 9));
    assert_eq!(monday, sunday);
}

#[test]
fn standard_cycle_repeats_every_four_weeks() {
    let engine = RotationEngine::builtin().unwrap();
    // semaines ISO 16 et 20 de 2025
    let a = engine.resolve(date(2025, 4, 14));
    let b = engine.resolve(date(2025, 5, 12));
    assert_eq!(a.cycle_index, b.cycle_index);
    assert_eq!(a.assignment, b.assignment);
}

#[test]
fn standard_index_follows_iso_week_number() {
    let engine = RotationEngine::builtin().unwrap();
    // 2025-04-14 est en semaine ISO 16 : (16 - 1) mod 4 = 3
    let rot = engine.resolve(date(2025, 4, 14));
    assert_eq!(rot.cycle_index, 3);
    assert_eq!(rot.assignment.get("Threat Hunter").unwrap().as_str(), "Jordan");
}

#[test]
fn resolve_is_idempotent() {
    let engine = RotationEngine::builtin().unwrap();
    let d = date(2025, 3, 5);
    assert_eq!(engine.resolve(d), engine.resolve(d));
}

#[test]
fn resolve_is_total_across_iso_year_boundary() {
    let engine = RotationEngine::builtin().unwrap();
    // 2027-01-01 appartient à la semaine ISO 53 de 2026
    let rot = engine.resolve(date(2027, 1, 1));
    assert_eq!(rot.regime, Regime::Standard);
    assert_eq!(rot.cycle_index, 0);
    assert_eq!(rot.assignment.len(), 4);
}

fn standby_config() -> RotationConfig {
    let members = |names: [&str; 4]| names.iter().map(Member::new).collect();
    RotationConfig {
        standard_roles: vec![
            Role::new("Threat Hunter"),
            Role::new("Threat Hunter Manager"),
            Role::new("Tech Desk"),
            Role::new("Standby"),
        ],
        standard_weeks: vec![
            members(["Willis", "Jordan", "Randy", "Peyton"]),
            members(["Peyton", "Willis", "Jordan", "Randy"]),
            members(["Randy", "Peyton", "Willis", "Jordan"]),
            members(["Jordan", "Randy", "Peyton", "Willis"]),
        ],
        // fenêtre repoussée pour que 2025 reste entièrement standard
        remote_window: RemoteWindow::new(date(2030, 1, 7), date(2030, 1, 28)),
        ..RotationConfig::builtin()
    }
}

#[test]
fn injected_config_week_five_assignment() {
    let engine = RotationEngine::new(standby_config()).unwrap();
    // 2025-01-29 est en semaine ISO 5 : (5 - 1) mod 4 = 0
    let rot = engine.resolve(date(2025, 1, 29));
    assert_eq!(rot.regime, Regime::Standard);
    assert_eq!(rot.cycle_index, 0);
    assert_eq!(rot.assignment.get("Threat Hunter").unwrap().as_str(), "Willis");
    assert_eq!(
        rot.assignment.get("Threat Hunter Manager").unwrap().as_str(),
        "Jordan"
    );
    assert_eq!(rot.assignment.get("Tech Desk").unwrap().as_str(), "Randy");
    assert_eq!(rot.assignment.get("Standby").unwrap().as_str(), "Peyton");
}

#[test]
fn config_rejects_wrong_cycle_length() {
    let mut config = RotationConfig::builtin();
    config.standard_weeks.pop();
    let err = RotationEngine::new(config).unwrap_err();
    assert!(matches!(err, ConfigError::WrongCycleLength { .. }));
}

#[test]
fn config_rejects_short_tuple() {
    let mut config = RotationConfig::builtin();
    config.standard_weeks[2].pop();
    let err = RotationEngine::new(config).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::WrongTupleLength { week: 2, .. }
    ));
}

#[test]
fn config_rejects_inverted_window() {
    let mut config = RotationConfig::builtin();
    config.remote_window = RemoteWindow::new(date(2025, 4, 14), date(2025, 1, 27));
    let err = RotationEngine::new(config).unwrap_err();
    assert!(matches!(err, ConfigError::WindowInverted { .. }));
}

#[test]
fn config_rejects_duplicate_holiday() {
    let mut config = RotationConfig::builtin();
    let first = config.holidays[0].clone();
    config.holidays.push(first);
    let err = RotationEngine::new(config).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateHoliday { month: 1, day: 1 }));
}
