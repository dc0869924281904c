#![forbid(unsafe_code)]
//! Roulement — moteur de rotation d'équipe déterministe (sans BD).
//!
//! - Fonction pure date → affectation rôle/membre par semaine ISO.
//! - Deux régimes : cycle standard 4 semaines, cycle remote 3 semaines
//!   sur fenêtre `[start, end)`.
//! - Fériés d'entreprise (clé mois-jour, toutes années) et grille
//!   mensuelle lundi-en-tête.
//! - Config immuable unique, validée à la construction ; exports
//!   JSON/CSV en dehors du moteur.

pub mod calendar;
pub mod config;
pub mod engine;
pub mod io;
pub mod model;
pub mod render;

pub use calendar::{month_grid, DaySlot, WeekRow};
pub use config::{ConfigError, RotationConfig, REMOTE_CYCLE, STANDARD_CYCLE};
pub use engine::RotationEngine;
pub use io::{
    export_config_json, export_month_csv, export_month_json, load_config_from_file,
    month_schedule, DaySchedule, MonthSchedule,
};
pub use model::{
    Holiday, Member, Regime, RemoteWindow, Role, RoleAssignment, WeekRotation,
};
pub use render::{holiday_notice, prepare_board, Board, BoardRenderer, TextBoard};
