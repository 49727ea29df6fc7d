//! Rows that apply whatever the referential.

use super::QuestionDocumentMapping as M;

pub(super) fn mappings() -> Vec<M> {
    vec![M::entry(
        Some("Audit interne"),
        None,
        None,
        &["Grille d'Audit", "Plan d'Audit"],
    )]
}
