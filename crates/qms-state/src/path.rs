//! # Drill Path: Owned Navigation Stack
//!
//! ## States
//!
//! A path is a sequence of 0..=8 [`DrillLevel`]s. The empty path is the
//! root "all" view. There is no terminal state.
//!
//! ```text
//!            push (narrower kind, len < 8)
//!   [] ──────────────────────────────▶ [a] ──▶ [a, b] ──▶ …
//!    ▲                                  │
//!    └──────── pop / reset / truncate ──┘
//! ```
//!
//! ## Dashboard gestures
//!
//! | Gesture                     | Method                          |
//! |-----------------------------|---------------------------------|
//! | drill into a table row      | [`DrillPath::push`]             |
//! | click a breadcrumb entry    | [`DrillPath::select`]           |
//! | close the current level     | [`DrillPath::remove_level`]     |
//! | back button                 | [`DrillPath::pop`]              |
//! | "all" / reset               | [`DrillPath::reset`]            |
//! | click a funnel step         | [`DrillPath::jump_to_stage`]    |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use qms_core::DrillLevelKind;

use crate::scope::DrillScope;
use crate::stage::FunnelStage;

/// Maximum number of levels on a path.
pub const MAX_DEPTH: usize = DrillLevelKind::COUNT;

/// Breadcrumb label of the root view.
pub const ROOT_LABEL: &str = "All";

// ─── Drill Level ─────────────────────────────────────────────────────

/// One entry of the navigation breadcrumb.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillLevel {
    /// Which level of the hierarchy this entry scopes to.
    #[serde(rename = "type")]
    pub kind: DrillLevelKind,
    /// Stable identifier, unique within a path.
    pub id: String,
    /// Raw value used to filter data (e.g. a site code).
    pub value: String,
    /// Human-readable label shown in the breadcrumb.
    pub display_value: String,
}

impl DrillLevel {
    /// Create a level.
    pub fn new(
        kind: DrillLevelKind,
        id: impl Into<String>,
        value: impl Into<String>,
        display_value: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            id: id.into(),
            value: value.into(),
            display_value: display_value.into(),
        }
    }

    /// The funnel stage this level sits on.
    pub fn stage(&self) -> FunnelStage {
        FunnelStage::for_kind(self.kind)
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Rejected navigation transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The path already holds [`MAX_DEPTH`] levels.
    #[error("drill path is full ({max} levels)")]
    DepthExceeded {
        /// The depth limit.
        max: usize,
    },

    /// The pushed level does not narrow the current top.
    #[error("cannot drill into {attempted} from {top}: not a narrower scope")]
    NotNarrower {
        /// Kind of the current top level.
        top: DrillLevelKind,
        /// Kind of the rejected level.
        attempted: DrillLevelKind,
    },

    /// A level with the same id is already on the path.
    #[error("level {id:?} is already on the path")]
    DuplicateLevel {
        /// The duplicated id.
        id: String,
    },

    /// Nothing to pop: already at the root view.
    #[error("drill path is empty")]
    Empty,

    /// No level with this id is on the path.
    #[error("no level {id:?} on the path")]
    UnknownLevel {
        /// The requested id.
        id: String,
    },

    /// Only the top level can be removed.
    #[error("level {id:?} is not the current level (current is {top:?})")]
    NotTopLevel {
        /// The requested id.
        id: String,
        /// Id of the current top level.
        top: String,
    },

    /// Truncation index past the end of the path.
    #[error("cannot truncate to {index}: path has {len} levels")]
    IndexOutOfRange {
        /// Requested length.
        index: usize,
        /// Current length.
        len: usize,
    },

    /// The funnel step has not been reached yet.
    #[error("stage {requested} not reached (current stage is {current})")]
    StageNotReached {
        /// Requested stage.
        requested: FunnelStage,
        /// Current stage.
        current: FunnelStage,
    },
}

// ─── Drill Path ──────────────────────────────────────────────────────

/// The current navigation path of a dashboard.
///
/// Serializes as the plain list of levels. Rebuilding a path from a list
/// goes through [`DrillPath::from_levels`], which re-checks every invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DrillPath {
    levels: Vec<DrillLevel>,
}

impl DrillPath {
    /// The root view: no level selected.
    pub fn new() -> Self {
        Self { levels: Vec::new() }
    }

    /// Build a path by pushing each level in order.
    pub fn from_levels(levels: impl IntoIterator<Item = DrillLevel>) -> Result<Self, NavigationError> {
        let mut path = Self::new();
        for level in levels {
            path.push(level)?;
        }
        Ok(path)
    }

    /// Levels from widest to narrowest.
    pub fn levels(&self) -> &[DrillLevel] {
        &self.levels
    }

    /// The top level, if any.
    pub fn current(&self) -> Option<&DrillLevel> {
        self.levels.last()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Drill into a narrower level.
    pub fn push(&mut self, level: DrillLevel) -> Result<(), NavigationError> {
        if self.levels.len() >= MAX_DEPTH {
            return Err(NavigationError::DepthExceeded { max: MAX_DEPTH });
        }
        if let Some(top) = self.current() {
            if !level.kind.is_narrower_than(top.kind) {
                return Err(NavigationError::NotNarrower {
                    top: top.kind,
                    attempted: level.kind,
                });
            }
        }
        if self.position(&level.id).is_some() {
            return Err(NavigationError::DuplicateLevel { id: level.id });
        }
        tracing::debug!(kind = %level.kind, id = %level.id, depth = self.len() + 1, "drill push");
        self.levels.push(level);
        Ok(())
    }

    /// Go back one level.
    pub fn pop(&mut self) -> Result<DrillLevel, NavigationError> {
        let level = self.levels.pop().ok_or(NavigationError::Empty)?;
        tracing::debug!(kind = %level.kind, id = %level.id, depth = self.len(), "drill pop");
        Ok(level)
    }

    /// Return to the root view.
    pub fn reset(&mut self) {
        tracing::debug!(from_depth = self.len(), "drill reset");
        self.levels.clear();
    }

    /// Keep only the first `len` levels.
    pub fn truncate(&mut self, len: usize) -> Result<(), NavigationError> {
        if len > self.levels.len() {
            return Err(NavigationError::IndexOutOfRange {
                index: len,
                len: self.levels.len(),
            });
        }
        tracing::debug!(from_depth = self.len(), to_depth = len, "drill truncate");
        self.levels.truncate(len);
        Ok(())
    }

    /// Make the level with `id` the current one, dropping everything above it.
    pub fn select(&mut self, id: &str) -> Result<(), NavigationError> {
        let pos = self.position(id).ok_or_else(|| NavigationError::UnknownLevel {
            id: id.to_string(),
        })?;
        self.truncate(pos + 1)
    }

    /// Remove the level with `id`. Only the top level may be removed.
    pub fn remove_level(&mut self, id: &str) -> Result<DrillLevel, NavigationError> {
        let top = self.current().ok_or_else(|| NavigationError::UnknownLevel {
            id: id.to_string(),
        })?;
        if top.id != id {
            if self.position(id).is_none() {
                return Err(NavigationError::UnknownLevel { id: id.to_string() });
            }
            return Err(NavigationError::NotTopLevel {
                id: id.to_string(),
                top: top.id.clone(),
            });
        }
        self.pop()
    }

    /// The funnel stage of the top level; [`FunnelStage::Global`] at the root.
    pub fn current_stage(&self) -> FunnelStage {
        self.current()
            .map(DrillLevel::stage)
            .unwrap_or(FunnelStage::Global)
    }

    /// Jump back to a completed or current funnel stage.
    ///
    /// Keeps every level whose stage is at or before `stage`.
    pub fn jump_to_stage(&mut self, stage: FunnelStage) -> Result<(), NavigationError> {
        let current = self.current_stage();
        if stage > current {
            return Err(NavigationError::StageNotReached {
                requested: stage,
                current,
            });
        }
        let keep = self
            .levels
            .iter()
            .take_while(|level| level.stage() <= stage)
            .count();
        self.truncate(keep)
    }

    /// Breadcrumb labels, root first.
    pub fn breadcrumb(&self) -> Vec<&str> {
        std::iter::once(ROOT_LABEL)
            .chain(self.levels.iter().map(|l| l.display_value.as_str()))
            .collect()
    }

    /// Per-kind ids for scoping data queries to this path.
    pub fn scope(&self) -> DrillScope {
        DrillScope::from_levels(&self.levels)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.levels.iter().position(|l| l.id == id)
    }
}

impl std::fmt::Display for DrillPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.breadcrumb().join(" › "))
    }
}

impl TryFrom<Vec<DrillLevel>> for DrillPath {
    type Error = NavigationError;

    fn try_from(levels: Vec<DrillLevel>) -> Result<Self, Self::Error> {
        Self::from_levels(levels)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn level(kind: DrillLevelKind, id: &str) -> DrillLevel {
        DrillLevel::new(kind, id, id, id.to_uppercase())
    }

    fn full_path() -> DrillPath {
        DrillPath::from_levels(
            DrillLevelKind::all()
                .iter()
                .enumerate()
                .map(|(i, k)| level(*k, &format!("l{i}"))),
        )
        .unwrap()
    }

    #[test]
    fn test_new_is_root() {
        let path = DrillPath::new();
        assert!(path.is_empty());
        assert_eq!(path.current_stage(), FunnelStage::Global);
        assert_eq!(path.breadcrumb(), vec!["All"]);
    }

    #[test]
    fn test_push_narrower() {
        let mut path = DrillPath::new();
        path.push(level(DrillLevelKind::Site, "lyon")).unwrap();
        path.push(level(DrillLevelKind::Referential, "iso13485")).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.current().unwrap().id, "iso13485");
        assert_eq!(path.current_stage(), FunnelStage::Referential);
    }

    #[test]
    fn test_push_same_kind_rejected() {
        let mut path = DrillPath::new();
        path.push(level(DrillLevelKind::Site, "lyon")).unwrap();
        let err = path.push(level(DrillLevelKind::Site, "paris")).unwrap_err();
        assert_eq!(
            err,
            NavigationError::NotNarrower {
                top: DrillLevelKind::Site,
                attempted: DrillLevelKind::Site,
            }
        );
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_push_wider_rejected() {
        let mut path = DrillPath::new();
        path.push(level(DrillLevelKind::Clause, "7.5")).unwrap();
        assert!(path.push(level(DrillLevelKind::Process, "p1")).is_err());
    }

    #[test]
    fn test_push_duplicate_id_rejected() {
        let mut path = DrillPath::new();
        path.push(level(DrillLevelKind::Site, "x")).unwrap();
        let err = path.push(level(DrillLevelKind::Process, "x")).unwrap_err();
        assert!(matches!(err, NavigationError::DuplicateLevel { .. }));
    }

    #[test]
    fn test_full_path_has_max_depth() {
        let path = full_path();
        assert_eq!(path.len(), MAX_DEPTH);
        assert_eq!(path.current_stage(), FunnelStage::Action);
    }

    #[test]
    fn test_pop_and_empty() {
        let mut path = DrillPath::new();
        assert_eq!(path.pop().unwrap_err(), NavigationError::Empty);
        path.push(level(DrillLevelKind::Site, "lyon")).unwrap();
        assert_eq!(path.pop().unwrap().id, "lyon");
        assert!(path.is_empty());
    }

    #[test]
    fn test_reset_from_full() {
        let mut path = full_path();
        path.reset();
        assert!(path.is_empty());
    }

    #[test]
    fn test_truncate() {
        let mut path = full_path();
        path.truncate(3).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(
            path.truncate(4).unwrap_err(),
            NavigationError::IndexOutOfRange { index: 4, len: 3 }
        );
        path.truncate(0).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_select_truncates_above() {
        let mut path = full_path();
        path.select("l2").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.current().unwrap().id, "l2");
        assert!(path.select("missing").is_err());
    }

    #[test]
    fn test_remove_only_top() {
        let mut path = full_path();
        let err = path.remove_level("l3").unwrap_err();
        assert_eq!(
            err,
            NavigationError::NotTopLevel {
                id: "l3".to_string(),
                top: "l7".to_string(),
            }
        );
        assert_eq!(path.len(), MAX_DEPTH);

        assert_eq!(path.remove_level("l7").unwrap().id, "l7");
        assert_eq!(path.len(), MAX_DEPTH - 1);
    }

    #[test]
    fn test_remove_unknown() {
        let mut path = DrillPath::new();
        assert!(matches!(
            path.remove_level("ghost"),
            Err(NavigationError::UnknownLevel { .. })
        ));
        path.push(level(DrillLevelKind::Site, "lyon")).unwrap();
        assert!(matches!(
            path.remove_level("ghost"),
            Err(NavigationError::UnknownLevel { .. })
        ));
    }

    #[test]
    fn test_jump_to_completed_stage() {
        let mut path = DrillPath::new();
        path.push(level(DrillLevelKind::Site, "lyon")).unwrap();
        path.push(level(DrillLevelKind::Process, "risk")).unwrap();
        path.push(level(DrillLevelKind::Clause, "7.1")).unwrap();

        // Referential was skipped; jumping there keeps site and process.
        path.jump_to_stage(FunnelStage::Referential).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.current_stage(), FunnelStage::Process);

        path.jump_to_stage(FunnelStage::Global).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_jump_to_future_stage_rejected() {
        let mut path = DrillPath::new();
        path.push(level(DrillLevelKind::Site, "lyon")).unwrap();
        let err = path.jump_to_stage(FunnelStage::Finding).unwrap_err();
        assert_eq!(
            err,
            NavigationError::StageNotReached {
                requested: FunnelStage::Finding,
                current: FunnelStage::Site,
            }
        );
    }

    #[test]
    fn test_jump_to_current_stage_is_noop() {
        let mut path = full_path();
        path.jump_to_stage(FunnelStage::Action).unwrap();
        assert_eq!(path.len(), MAX_DEPTH);
    }

    #[test]
    fn test_display_breadcrumb() {
        let mut path = DrillPath::new();
        path.push(DrillLevel::new(DrillLevelKind::Site, "s1", "LYN", "Lyon")).unwrap();
        path.push(DrillLevel::new(DrillLevelKind::Referential, "r1", "13485", "ISO 13485")).unwrap();
        assert_eq!(path.to_string(), "All › Lyon › ISO 13485");
    }

    #[test]
    fn test_serialization_is_level_list() {
        let mut path = DrillPath::new();
        path.push(DrillLevel::new(DrillLevelKind::Site, "s1", "LYN", "Lyon")).unwrap();
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "type": "site", "id": "s1", "value": "LYN", "displayValue": "Lyon" }
            ])
        );
        let levels: Vec<DrillLevel> = serde_json::from_value(json).unwrap();
        assert_eq!(DrillPath::try_from(levels).unwrap(), path);
    }
}
