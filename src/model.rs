use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifiant fort pour un membre du roster
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Member(String);

impl Member {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Nom de rôle (ex: "Threat Hunter", "Tech Desk")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Régime de rotation actif pour une semaine donnée
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    Standard,
    Remote,
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regime::Standard => f.write_str("standard"),
            Regime::Remote => f.write_str("remote"),
        }
    }
}

/// Affectation rôle → membre, ordonnée (l'ordre suit la config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct RoleAssignment {
    pairs: Vec<(Role, Member)>,
}

impl RoleAssignment {
    pub fn from_pairs(pairs: Vec<(Role, Member)>) -> Self {
        Self { pairs }
    }

    pub fn get(&self, role: &str) -> Option<&Member> {
        self.pairs
            .iter()
            .find(|(r, _)| r.as_str() == role)
            .map(|(_, m)| m)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Role, &Member)> {
        self.pairs.iter().map(|(r, m)| (r, m))
    }

    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.pairs.iter().map(|(r, _)| r)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Résultat de `RotationEngine::resolve` pour la semaine ISO d'une date.
///
/// Le jeu de rôles dépend du régime (4 rôles en standard, 3 rotatifs
/// + 1 fixe en remote) ; les consommateurs doivent tester `regime`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekRotation {
    pub regime: Regime,
    pub cycle_index: usize,
    pub assignment: RoleAssignment,
}

/// Jour férié d'entreprise, clé (mois, jour) indépendante de l'année.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub month: u32,
    pub day: u32,
    pub name: String,
}

impl Holiday {
    pub fn new(month: u32, day: u32, name: &str) -> Self {
        Self {
            month,
            day,
            name: name.to_owned(),
        }
    }
}

/// Fenêtre remote, intervalle demi-ouvert `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl RemoteWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Début inclus, fin exclue : `end` lui-même retombe en standard.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}
