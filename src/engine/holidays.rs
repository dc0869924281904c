use crate::model::Holiday;
use chrono::{Datelike, NaiveDate};

/// Recherche (mois, jour) indépendante de l'année : le même férié se
/// répète chaque année.
pub(super) fn holiday_name(table: &[Holiday], date: NaiveDate) -> Option<&str> {
    table
        .iter()
        .find(|h| h.month == date.month() && h.day == date.day())
        .map(|h| h.name.as_str())
}

/// Prochain férié de l'année de `from`, à partir de `from` inclus.
///
/// Ne déborde pas sur l'année suivante : une fois les fériés de
/// l'année passés, retourne `None`.
pub(super) fn next_holiday(table: &[Holiday], from: NaiveDate) -> Option<(NaiveDate, &str)> {
    let mut upcoming: Vec<(NaiveDate, &str)> = table
        .iter()
        .filter_map(|h| {
            NaiveDate::from_ymd_opt(from.year(), h.month, h.day).map(|d| (d, h.name.as_str()))
        })
        .filter(|(d, _)| *d >= from)
        .collect();
    upcoming.sort_by_key(|(d, _)| *d);
    upcoming.into_iter().next()
}
