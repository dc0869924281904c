use chrono::{Datelike, NaiveDate};

/// Case d'une grille mensuelle : numéro de jour, ou vide en bordure.
pub type DaySlot = Option<u32>;
/// Ligne de semaine, lundi en tête, toujours 7 cases.
pub type WeekRow = [DaySlot; 7];

/// Grille mensuelle, lignes de 7 cases complétées à gauche et à droite.
///
/// Le jour 1 est placé à l'offset `jour ISO du 1er - 1` (lundi = 0,
/// dimanche = 6), les jours suivants remplissent ligne par ligne, la
/// dernière ligne est complétée à `None` jusqu'à 7.
///
/// `None` global uniquement si (year, month) n'est pas représentable.
pub fn month_grid(year: i32, month: u32) -> Option<Vec<WeekRow>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let total_days = days_in_month(year, month)?;
    let offset = first.weekday().num_days_from_monday() as usize;

    let mut weeks: Vec<WeekRow> = Vec::new();
    let mut row: WeekRow = [None; 7];
    let mut col = offset;

    for day in 1..=total_days {
        row[col] = Some(day);
        col += 1;
        if col == 7 {
            weeks.push(row);
            row = [None; 7];
            col = 0;
        }
    }
    if col > 0 {
        weeks.push(row);
    }
    Some(weeks)
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next_first.pred_opt()?.day())
}
