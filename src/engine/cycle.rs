use chrono::{Datelike, Duration, NaiveDate};

/// Lundi de la semaine ISO contenant `date`.
pub(super) fn start_of_iso_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Nombre de semaines ISO entre deux lundis (signé).
pub(super) fn iso_weeks_between(from_monday: NaiveDate, to_monday: NaiveDate) -> i64 {
    (to_monday - from_monday).num_days() / 7
}

/// Index de cycle standard : `(numéro de semaine ISO - 1) mod cycle`.
pub(super) fn standard_index(date: NaiveDate, cycle: usize) -> usize {
    let week = i64::from(date.iso_week().week());
    (week - 1).rem_euclid(cycle as i64) as usize
}

/// Index de cycle remote : semaines ISO écoulées depuis le début de la
/// fenêtre, modulo cycle. `rem_euclid` garde l'index dans `[0, cycle)`
/// même pour un écart négatif.
pub(super) fn remote_index(window_start: NaiveDate, date: NaiveDate, cycle: usize) -> usize {
    let elapsed = iso_weeks_between(start_of_iso_week(window_start), start_of_iso_week(date));
    elapsed.rem_euclid(cycle as i64) as usize
}
