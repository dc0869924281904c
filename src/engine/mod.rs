mod cycle;
mod holidays;

use crate::config::{ConfigError, RotationConfig, REMOTE_CYCLE, STANDARD_CYCLE};
use crate::model::{Regime, RoleAssignment, WeekRotation};
use chrono::NaiveDate;

/// Moteur de rotation : fonction pure date → affectation hebdomadaire.
///
/// Aucun état mutable, aucune horloge : seul l'argument `date` varie.
/// Deux appels avec la même date donnent toujours le même résultat.
#[derive(Debug, Clone)]
pub struct RotationEngine {
    config: RotationConfig,
}

impl RotationEngine {
    /// Construit le moteur en validant la config une fois pour toutes.
    /// Une table de longueur fautive est un bug de configuration, pas
    /// une erreur d'exécution : on refuse de démarrer.
    pub fn new(config: RotationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Moteur sur les tables de production embarquées.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::new(RotationConfig::builtin())
    }

    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    /// Affectation rôle → membre pour la semaine ISO de `date`.
    ///
    /// Totale sur toute date représentable, sans condition d'erreur.
    /// Le régime remote s'applique sur `[start, end)` ; son index de
    /// cycle compte les semaines ISO écoulées depuis `start`, celui du
    /// régime standard dérive du numéro de semaine ISO de `date`.
    pub fn resolve(&self, date: NaiveDate) -> WeekRotation {
        let cfg = &self.config;
        if cfg.remote_window.contains(date) {
            let idx = cycle::remote_index(cfg.remote_window.start, date, REMOTE_CYCLE);
            let mut pairs: Vec<_> = cfg
                .remote_roles
                .iter()
                .cloned()
                .zip(cfg.remote_weeks[idx].iter().cloned())
                .collect();
            pairs.push((cfg.remote_fixed_role.clone(), cfg.remote_member.clone()));
            WeekRotation {
                regime: Regime::Remote,
                cycle_index: idx,
                assignment: RoleAssignment::from_pairs(pairs),
            }
        } else {
            let idx = cycle::standard_index(date, STANDARD_CYCLE);
            let pairs = cfg
                .standard_roles
                .iter()
                .cloned()
                .zip(cfg.standard_weeks[idx].iter().cloned())
                .collect();
            WeekRotation {
                regime: Regime::Standard,
                cycle_index: idx,
                assignment: RoleAssignment::from_pairs(pairs),
            }
        }
    }

    /// Nom du férié tombant ce (mois, jour), toutes années confondues.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        holidays::holiday_name(&self.config.holidays, date)
    }

    /// Prochain férié de l'année de `from` (pas de report sur l'année
    /// suivante, voir `engine::holidays`).
    pub fn next_holiday(&self, from: NaiveDate) -> Option<(NaiveDate, &str)> {
        holidays::next_holiday(&self.config.holidays, from)
    }
}
