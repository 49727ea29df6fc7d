//! Data scope derived from a drill path.
//!
//! The page that owns a [`DrillPath`](crate::DrillPath) re-queries its data
//! with the ids of every level on the path. [`DrillScope`] is that query
//! shape: one optional id per level kind.

use serde::{Deserialize, Serialize};

use qms_core::DrillLevelKind;

use crate::path::DrillLevel;

/// Per-kind ids of the levels currently on the path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillScope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referential_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clause_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
}

impl DrillScope {
    /// Build the scope for an ordered list of levels.
    pub fn from_levels(levels: &[DrillLevel]) -> Self {
        let mut scope = Self::default();
        for level in levels {
            *scope.slot_mut(level.kind) = Some(level.id.clone());
        }
        scope
    }

    /// The id recorded for `kind`, if that kind is on the path.
    pub fn id_for(&self, kind: DrillLevelKind) -> Option<&str> {
        let slot = match kind {
            DrillLevelKind::Organization => &self.organization_id,
            DrillLevelKind::Site => &self.site_id,
            DrillLevelKind::Process => &self.process_id,
            DrillLevelKind::Referential => &self.referential_id,
            DrillLevelKind::Clause => &self.clause_id,
            DrillLevelKind::Requirement => &self.requirement_id,
            DrillLevelKind::Finding => &self.finding_id,
            DrillLevelKind::Action => &self.action_id,
        };
        slot.as_deref()
    }

    /// Whether no level is in scope (the root view).
    pub fn is_unscoped(&self) -> bool {
        DrillLevelKind::all().iter().all(|k| self.id_for(*k).is_none())
    }

    fn slot_mut(&mut self, kind: DrillLevelKind) -> &mut Option<String> {
        match kind {
            DrillLevelKind::Organization => &mut self.organization_id,
            DrillLevelKind::Site => &mut self.site_id,
            DrillLevelKind::Process => &mut self.process_id,
            DrillLevelKind::Referential => &mut self.referential_id,
            DrillLevelKind::Clause => &mut self.clause_id,
            DrillLevelKind::Requirement => &mut self.requirement_id,
            DrillLevelKind::Finding => &mut self.finding_id,
            DrillLevelKind::Action => &mut self.action_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_levels_are_unscoped() {
        assert!(DrillScope::from_levels(&[]).is_unscoped());
    }

    #[test]
    fn scope_records_each_kind() {
        let levels = vec![
            DrillLevel::new(DrillLevelKind::Site, "site-lyon", "lyon", "Lyon"),
            DrillLevel::new(DrillLevelKind::Clause, "cl-7.5", "7.5", "7.5 Informations documentées"),
        ];
        let scope = DrillScope::from_levels(&levels);
        assert_eq!(scope.id_for(DrillLevelKind::Site), Some("site-lyon"));
        assert_eq!(scope.id_for(DrillLevelKind::Clause), Some("cl-7.5"));
        assert_eq!(scope.id_for(DrillLevelKind::Process), None);
        assert!(!scope.is_unscoped());
    }

    #[test]
    fn serialization_omits_absent_kinds() {
        let levels = vec![DrillLevel::new(DrillLevelKind::Site, "s1", "s1", "Site 1")];
        let json = serde_json::to_value(DrillScope::from_levels(&levels)).unwrap();
        assert_eq!(json, serde_json::json!({ "siteId": "s1" }));
    }
}
