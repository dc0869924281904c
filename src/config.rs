use crate::model::{Holiday, Member, Regime, RemoteWindow, Role};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longueur du cycle standard (semaines).
pub const STANDARD_CYCLE: usize = 4;
/// Longueur du cycle remote (semaines).
pub const REMOTE_CYCLE: usize = 3;

/// Configuration malformée : erreur fatale au démarrage, jamais par appel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{regime} rotation must define exactly {expected} weeks, got {got}")]
    WrongCycleLength {
        regime: Regime,
        expected: usize,
        got: usize,
    },
    #[error("{regime} rotation must define exactly {expected} roles, got {got}")]
    WrongRoleCount {
        regime: Regime,
        expected: usize,
        got: usize,
    },
    #[error("{regime} week {week} assigns {got} members, expected {expected}")]
    WrongTupleLength {
        regime: Regime,
        week: usize,
        expected: usize,
        got: usize,
    },
    #[error("{what} cannot be empty")]
    EmptyName { what: &'static str },
    #[error("remote window end {end} must be after start {start}")]
    WindowInverted { start: NaiveDate, end: NaiveDate },
    #[error("invalid holiday date {month:02}-{day:02}")]
    InvalidHoliday { month: u32, day: u32 },
    #[error("duplicate holiday entry {month:02}-{day:02}")]
    DuplicateHoliday { month: u32, day: u32 },
}

/// Source de vérité unique du moteur : tables de rotation, fenêtre
/// remote et jours fériés, figées à la construction et injectées une
/// seule fois.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationConfig {
    /// Rôles du régime standard, dans l'ordre positionnel des tuples.
    pub standard_roles: Vec<Role>,
    /// Un tuple de membres par semaine du cycle standard.
    pub standard_weeks: Vec<Vec<Member>>,
    /// Rôles rotatifs du régime remote.
    pub remote_roles: Vec<Role>,
    /// Rôle fixe du régime remote.
    pub remote_fixed_role: Role,
    /// Titulaire permanent du rôle fixe pendant la fenêtre remote.
    pub remote_member: Member,
    /// Un tuple de membres par semaine du cycle remote.
    pub remote_weeks: Vec<Vec<Member>>,
    pub remote_window: RemoteWindow,
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl RotationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_regime(
            Regime::Standard,
            &self.standard_roles,
            &self.standard_weeks,
            STANDARD_CYCLE,
        )?;
        check_regime(
            Regime::Remote,
            &self.remote_roles,
            &self.remote_weeks,
            REMOTE_CYCLE,
        )?;
        if self.remote_fixed_role.as_str().trim().is_empty() {
            return Err(ConfigError::EmptyName {
                what: "remote fixed role",
            });
        }
        if self.remote_member.as_str().trim().is_empty() {
            return Err(ConfigError::EmptyName {
                what: "remote member",
            });
        }
        if self.remote_window.end <= self.remote_window.start {
            return Err(ConfigError::WindowInverted {
                start: self.remote_window.start,
                end: self.remote_window.end,
            });
        }
        let mut seen: Vec<(u32, u32)> = Vec::new();
        for h in &self.holidays {
            // An 2000 bissextile : un 29/02 reste une clé admissible.
            if NaiveDate::from_ymd_opt(2000, h.month, h.day).is_none() {
                return Err(ConfigError::InvalidHoliday {
                    month: h.month,
                    day: h.day,
                });
            }
            if h.name.trim().is_empty() {
                return Err(ConfigError::EmptyName {
                    what: "holiday name",
                });
            }
            if seen.contains(&(h.month, h.day)) {
                return Err(ConfigError::DuplicateHoliday {
                    month: h.month,
                    day: h.day,
                });
            }
            seen.push((h.month, h.day));
        }
        Ok(())
    }

    /// Tables de production embarquées (roster SOC à 4 personnes).
    pub fn builtin() -> Self {
        let members = |names: [&str; STANDARD_CYCLE]| -> Vec<Member> {
            names.iter().map(Member::new).collect()
        };
        let remote = |names: [&str; REMOTE_CYCLE]| -> Vec<Member> {
            names.iter().map(Member::new).collect()
        };
        Self {
            standard_roles: vec![
                Role::new("Threat Hunter"),
                Role::new("Threat Hunter Manager"),
                Role::new("Tech Desk"),
                Role::new("Threat Intel (WFH Week)"),
            ],
            standard_weeks: vec![
                members(["Willis", "Jordan", "Randy", "Peyton"]),
                members(["Peyton", "Willis", "Jordan", "Randy"]),
                members(["Randy", "Peyton", "Willis", "Jordan"]),
                members(["Jordan", "Randy", "Peyton", "Willis"]),
            ],
            remote_roles: vec![
                Role::new("Threat Hunter"),
                Role::new("Threat Hunter PT2"),
                Role::new("Tech Desk"),
            ],
            remote_fixed_role: Role::new("Remote"),
            remote_member: Member::new("Willis"),
            remote_weeks: vec![
                remote(["Peyton", "Jordan", "Randy"]),
                remote(["Randy", "Peyton", "Jordan"]),
                remote(["Jordan", "Randy", "Peyton"]),
            ],
            remote_window: RemoteWindow::new(
                NaiveDate::from_ymd_opt(2025, 1, 27).unwrap(),
                NaiveDate::from_ymd_opt(2025, 4, 14).unwrap(),
            ),
            holidays: vec![
                Holiday::new(1, 1, "New Year's Day"),
                Holiday::new(1, 15, "Martin Luther King Jr. Day"),
                Holiday::new(2, 19, "Presidents' Day"),
                Holiday::new(5, 27, "Memorial Day"),
                Holiday::new(6, 19, "Juneteenth"),
                Holiday::new(7, 4, "Independence Day"),
                Holiday::new(9, 2, "Labor Day"),
                Holiday::new(11, 28, "Thanksgiving Day"),
                Holiday::new(11, 29, "Day after Thanksgiving"),
                Holiday::new(12, 24, "Christmas Eve"),
                Holiday::new(12, 25, "Christmas Day"),
                Holiday::new(12, 31, "New Year's Eve"),
            ],
        }
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_regime(
    regime: Regime,
    roles: &[Role],
    weeks: &[Vec<Member>],
    cycle: usize,
) -> Result<(), ConfigError> {
    if roles.len() != cycle {
        return Err(ConfigError::WrongRoleCount {
            regime,
            expected: cycle,
            got: roles.len(),
        });
    }
    if weeks.len() != cycle {
        return Err(ConfigError::WrongCycleLength {
            regime,
            expected: cycle,
            got: weeks.len(),
        });
    }
    for role in roles {
        if role.as_str().trim().is_empty() {
            return Err(ConfigError::EmptyName { what: "role name" });
        }
    }
    for (week, tuple) in weeks.iter().enumerate() {
        if tuple.len() != roles.len() {
            return Err(ConfigError::WrongTupleLength {
                regime,
                week,
                expected: roles.len(),
                got: tuple.len(),
            });
        }
        for member in tuple {
            if member.as_str().trim().is_empty() {
                return Err(ConfigError::EmptyName {
                    what: "member name",
                });
            }
        }
    }
    Ok(())
}
