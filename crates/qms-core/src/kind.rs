//! # Drill Level Kinds: Single Source of Truth
//!
//! The audit dashboards narrow from the whole organization down to a
//! single corrective action. [`DrillLevelKind`] lists those eight levels in
//! narrowing order; [`DrillLevelKind::rank`] is the position in that order
//! and is what the navigation stack compares when a level is pushed.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QmsError;

/// A level of the audit drill-down hierarchy.
///
/// Variants are declared widest scope first. The derived `Ord` follows
/// declaration order, so `Organization < Site < … < Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrillLevelKind {
    /// The whole organization (all sites).
    Organization,
    /// A physical or legal site.
    Site,
    /// A QMS process (e.g. "Gestion des risques").
    Process,
    /// A regulatory standard (ISO 9001, ISO 13485, MDR).
    Referential,
    /// A clause of the referential (e.g. "7.1").
    Clause,
    /// A single requirement within a clause.
    Requirement,
    /// An audit finding raised against a requirement.
    Finding,
    /// A corrective or preventive action opened for a finding.
    Action,
}

impl DrillLevelKind {
    /// The number of drill levels.
    pub const COUNT: usize = 8;

    /// Return all kinds, widest scope first.
    pub fn all() -> &'static [DrillLevelKind] {
        &[
            Self::Organization,
            Self::Site,
            Self::Process,
            Self::Referential,
            Self::Clause,
            Self::Requirement,
            Self::Finding,
            Self::Action,
        ]
    }

    /// Zero-based position in narrowing order.
    pub fn rank(&self) -> usize {
        *self as usize
    }

    /// Stable machine name, as used in URLs and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Organization => "organization",
            Self::Site => "site",
            Self::Process => "process",
            Self::Referential => "referential",
            Self::Clause => "clause",
            Self::Requirement => "requirement",
            Self::Finding => "finding",
            Self::Action => "action",
        }
    }

    /// Whether `self` is a strictly narrower scope than `other`.
    pub fn is_narrower_than(&self, other: DrillLevelKind) -> bool {
        self.rank() > other.rank()
    }
}

impl std::fmt::Display for DrillLevelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrillLevelKind {
    type Err = QmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == needle)
            .ok_or_else(|| QmsError::InvalidKind(s.to_string()))
    }
}
