use crate::calendar::{month_grid, WeekRow};
use crate::config::RotationConfig;
use crate::engine::RotationEngine;
use crate::model::WeekRotation;
use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Charge une config JSON et la valide avant tout usage.
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<RotationConfig> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let config: RotationConfig =
        serde_json::from_slice(&data).with_context(|| format!("parsing {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Export JSON de la config (jolie mise en forme, écriture atomique).
pub fn export_config_json<P: AsRef<Path>>(path: P, config: &RotationConfig) -> Result<()> {
    let json = serde_json::to_vec_pretty(config)?;
    write_atomic(path.as_ref(), &json)
}

/// Planning d'un mois : grille + rotation résolue pour chaque jour.
#[derive(Debug, Clone, Serialize)]
pub struct MonthSchedule {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<WeekRow>,
    pub days: Vec<DaySchedule>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub iso_week: u32,
    pub rotation: WeekRotation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday: Option<String>,
}

/// Résout la rotation de chaque jour du mois.
pub fn month_schedule(engine: &RotationEngine, year: i32, month: u32) -> Result<MonthSchedule> {
    let Some(weeks) = month_grid(year, month) else {
        bail!("invalid year/month: {year}-{month:02}");
    };
    let mut days = Vec::new();
    for row in &weeks {
        for slot in row.iter().flatten() {
            let date = NaiveDate::from_ymd_opt(year, month, *slot)
                .with_context(|| format!("invalid day {slot} in {year}-{month:02}"))?;
            days.push(DaySchedule {
                date,
                iso_week: date.iso_week().week(),
                rotation: engine.resolve(date),
                holiday: engine.holiday_name(date).map(str::to_owned),
            });
        }
    }
    Ok(MonthSchedule {
        year,
        month,
        weeks,
        days,
    })
}

/// Export JSON du planning mensuel.
pub fn export_month_json<P: AsRef<Path>>(path: P, schedule: &MonthSchedule) -> Result<()> {
    let json = serde_json::to_vec_pretty(schedule)?;
    write_atomic(path.as_ref(), &json)
}

/// Export CSV du planning: header `date,iso_week,regime,role,member,holiday`
pub fn export_month_csv<P: AsRef<Path>>(path: P, schedule: &MonthSchedule) -> Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    w.write_record(["date", "iso_week", "regime", "role", "member", "holiday"])?;
    for day in &schedule.days {
        let date = day.date.to_string();
        let week = day.iso_week.to_string();
        let regime = day.rotation.regime.to_string();
        let holiday = day.holiday.as_deref().unwrap_or("");
        for (role, member) in day.rotation.assignment.iter() {
            w.write_record([
                date.as_str(),
                week.as_str(),
                regime.as_str(),
                role.as_str(),
                member.as_str(),
                holiday,
            ])?;
        }
    }
    let bytes = w
        .into_inner()
        .map_err(|err| anyhow::anyhow!("flushing csv buffer: {err}"))?;
    write_atomic(path.as_ref(), &bytes)
}

/// Écriture atomique : fichier temporaire voisin puis rename.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))
        .with_context(|| "creating temp file")?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    Ok(())
}
