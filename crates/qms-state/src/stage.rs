//! # Funnel Step Indicator
//!
//! The dashboards show a fixed eight-stage funnel above the data table.
//! A stage is "completed" once the path has gone past it and "current"
//! when the top of the path sits on it; the user may jump back to any
//! completed-or-current stage.

use serde::{Deserialize, Serialize};

use qms_core::DrillLevelKind;

/// One of the eight funnel stages, widest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunnelStage {
    /// Organization-wide view (the root).
    Global,
    Site,
    Process,
    Referential,
    Clause,
    Requirement,
    Finding,
    Action,
}

impl FunnelStage {
    /// Number of stages.
    pub const COUNT: usize = 8;

    /// Return all stages in funnel order.
    pub fn all() -> &'static [FunnelStage] {
        &[
            Self::Global,
            Self::Site,
            Self::Process,
            Self::Referential,
            Self::Clause,
            Self::Requirement,
            Self::Finding,
            Self::Action,
        ]
    }

    /// Zero-based index in the funnel.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Stage at `index`, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// The stage a drill level of `kind` sits on.
    pub fn for_kind(kind: DrillLevelKind) -> Self {
        match kind {
            DrillLevelKind::Organization => Self::Global,
            DrillLevelKind::Site => Self::Site,
            DrillLevelKind::Process => Self::Process,
            DrillLevelKind::Referential => Self::Referential,
            DrillLevelKind::Clause => Self::Clause,
            DrillLevelKind::Requirement => Self::Requirement,
            DrillLevelKind::Finding => Self::Finding,
            DrillLevelKind::Action => Self::Action,
        }
    }

    /// Short label shown under the step.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Site => "site",
            Self::Process => "process",
            Self::Referential => "referential",
            Self::Clause => "clause",
            Self::Requirement => "requirement",
            Self::Finding => "finding",
            Self::Action => "action",
        }
    }
}

impl std::fmt::Display for FunnelStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for FunnelStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        if let Ok(index) = needle.parse::<usize>() {
            return Self::from_index(index).ok_or_else(|| format!("stage index out of range: {index}"));
        }
        Self::all()
            .iter()
            .copied()
            .find(|stage| stage.label() == needle)
            .ok_or_else(|| format!("unknown funnel stage: {s:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_maps_to_the_stage_with_its_rank() {
        for kind in DrillLevelKind::all() {
            assert_eq!(FunnelStage::for_kind(*kind).index(), kind.rank());
        }
    }

    #[test]
    fn from_index_bounds() {
        assert_eq!(FunnelStage::from_index(0), Some(FunnelStage::Global));
        assert_eq!(FunnelStage::from_index(7), Some(FunnelStage::Action));
        assert_eq!(FunnelStage::from_index(8), None);
    }

    #[test]
    fn parse_by_label_or_index() {
        assert_eq!("clause".parse::<FunnelStage>().unwrap(), FunnelStage::Clause);
        assert_eq!("2".parse::<FunnelStage>().unwrap(), FunnelStage::Process);
        assert!("9".parse::<FunnelStage>().is_err());
        assert!("department".parse::<FunnelStage>().is_err());
    }
}
