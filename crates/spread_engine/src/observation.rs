//! Normalized creature observations.
//!
//! A `ServerObservation` is what the battle-state normalizer hands the
//! search engine: species base stats, the final stats the server revealed,
//! and whatever identity hints survived normalization. The engine never
//! mutates it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::natures::NatureId;
use crate::stats::{StatId, STAT_COUNT};

/// Why an observation cannot be searched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObservationError {
    #[error("observation has no ident")]
    MissingIdent,

    #[error("no base stats for {ident}")]
    MissingBaseStats { ident: String },
}

/// A single creature as observed from the server side of a battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerObservation {
    /// Battle ident, e.g. `"p1: Garchomp"`. Missing or empty when the
    /// client never resolved one.
    #[serde(default)]
    pub ident: Option<String>,

    /// Species base stats in stat-table order. `None` when the dex lookup
    /// failed upstream.
    #[serde(default)]
    pub base_stats: Option<[u16; STAT_COUNT]>,

    /// Final stats as reported by the server. An HP of 0 means the server
    /// has not revealed the true max HP (the creature fainted before the
    /// client could record it).
    pub server_stats: [u16; STAT_COUNT],

    /// Level (1-100)
    pub level: u8,

    /// Nature hint. Randoms formats always use Hardy, for instance.
    #[serde(default)]
    pub known_nature: Option<NatureId>,

    /// Whether the record came from the authoritative server side.
    /// Guessing a client-sourced record is allowed but meaningless.
    #[serde(default)]
    pub server_sourced: bool,
}

impl ServerObservation {
    /// Create a server-sourced observation
    pub fn new(
        ident: impl Into<String>,
        base_stats: [u16; STAT_COUNT],
        server_stats: [u16; STAT_COUNT],
        level: u8,
    ) -> Self {
        Self {
            ident: Some(ident.into()),
            base_stats: Some(base_stats),
            server_stats,
            level,
            known_nature: None,
            server_sourced: true,
        }
    }

    /// Set the nature hint
    pub fn known_nature(mut self, nature: NatureId) -> Self {
        self.known_nature = Some(nature);
        self
    }

    /// True when the server never revealed the creature's max HP, so HP
    /// must not be guessed at all.
    #[inline]
    pub fn ignore_hp(&self) -> bool {
        self.server_stats[StatId::Hp.index()] == 0
    }

    /// Observed final value for one stat
    #[inline]
    pub fn server_stat(&self, stat: StatId) -> u16 {
        self.server_stats[stat.index()]
    }

    /// Check the search preconditions.
    pub fn validate(&self) -> Result<(), ObservationError> {
        let ident = match &self.ident {
            Some(ident) if !ident.is_empty() => ident,
            _ => return Err(ObservationError::MissingIdent),
        };

        if self.base_stats.is_none() {
            return Err(ObservationError::MissingBaseStats {
                ident: ident.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(value: u16) -> [u16; STAT_COUNT] {
        [value; STAT_COUNT]
    }

    #[test]
    fn test_validate_ok() {
        let obs = ServerObservation::new("p1: Mew", flat(100), flat(236), 100);
        assert_eq!(obs.validate(), Ok(()));
        assert!(obs.server_sourced);
    }

    #[test]
    fn test_validate_missing_ident() {
        let mut obs = ServerObservation::new("p1: Mew", flat(100), flat(236), 100);
        obs.ident = None;
        assert_eq!(obs.validate(), Err(ObservationError::MissingIdent));

        obs.ident = Some(String::new());
        assert_eq!(obs.validate(), Err(ObservationError::MissingIdent));
    }

    #[test]
    fn test_validate_missing_base_stats() {
        let mut obs = ServerObservation::new("p1: Mew", flat(100), flat(236), 100);
        obs.base_stats = None;
        assert!(matches!(
            obs.validate(),
            Err(ObservationError::MissingBaseStats { .. })
        ));
    }

    #[test]
    fn test_ignore_hp_derivation() {
        let mut obs = ServerObservation::new("p1: Mew", flat(100), flat(236), 100);
        assert!(!obs.ignore_hp());

        obs.server_stats[StatId::Hp.index()] = 0;
        assert!(obs.ignore_hp());
    }

    #[test]
    fn test_json_defaults() {
        // The normalizer may omit everything it could not resolve
        let obs: ServerObservation = serde_json::from_str(
            r#"{"server_stats": [310, 205, 205, 205, 205, 205], "level": 100}"#,
        )
        .unwrap();
        assert_eq!(obs.ident, None);
        assert_eq!(obs.base_stats, None);
        assert_eq!(obs.known_nature, None);
        assert!(!obs.server_sourced);
        assert_eq!(obs.validate(), Err(ObservationError::MissingIdent));
    }
}
