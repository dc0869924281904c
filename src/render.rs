use crate::engine::RotationEngine;
use crate::model::WeekRotation;
use chrono::{Datelike, NaiveDate};

/// Tableau de service rendu pour une semaine.
#[derive(Debug, Clone)]
pub struct Board {
    pub date: NaiveDate,
    pub iso_week: u32,
    pub content: String,
}

/// Permet de customiser le rendu du tableau (texte, HTML, etc.).
pub trait BoardRenderer {
    fn render(&self, date: NaiveDate, rotation: &WeekRotation, holiday: Option<&str>) -> String;
}

/// Gabarit texte simple, une ligne par rôle, destiné au terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextBoard;

impl BoardRenderer for TextBoard {
    fn render(&self, date: NaiveDate, rotation: &WeekRotation, holiday: Option<&str>) -> String {
        let mut out = format!(
            "Week {} | {} | {} rotation, cycle {}\n",
            date.iso_week().week(),
            date.format("%Y-%m-%d"),
            rotation.regime,
            rotation.cycle_index
        );
        for (role, member) in rotation.assignment.iter() {
            out.push_str(&format!("  {role}: {member}\n"));
        }
        if let Some(name) = holiday {
            out.push_str(&format!("  Holiday: {name}\n"));
        }
        out
    }
}

/// Prépare le tableau de la semaine de `date`.
pub fn prepare_board(
    engine: &RotationEngine,
    date: NaiveDate,
    renderer: &dyn BoardRenderer,
) -> Board {
    let rotation = engine.resolve(date);
    let holiday = engine.holiday_name(date);
    Board {
        date,
        iso_week: date.iso_week().week(),
        content: renderer.render(date, &rotation, holiday),
    }
}

/// Bandeau "prochain férié" affiché en tête de tableau.
pub fn holiday_notice(engine: &RotationEngine, from: NaiveDate) -> String {
    match engine.next_holiday(from) {
        Some((date, name)) => format!("Next Holiday: {} on {}", name, date.format("%B %-d, %Y")),
        None => "No upcoming holidays this year".to_string(),
    }
}
