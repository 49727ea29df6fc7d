//! Regulation (EU) 2017/745 on medical devices.

use super::QuestionDocumentMapping as M;

const REFERENTIAL: Option<&str> = Some("MDR (UE) 2017/745");

pub(super) fn mappings() -> Vec<M> {
    vec![
        M::entry(
            None,
            REFERENTIAL,
            Some("Art. 15"),
            &["Désignation de la Personne Chargée du Respect de la Réglementation"],
        ),
        M::entry(
            Some("Gestion des risques"),
            REFERENTIAL,
            Some("Annexe I, ch. 3"),
            &["Plan de Gestion des Risques", "Rapport de Gestion des Risques"],
        ),
        M::entry(
            Some("Évaluation clinique"),
            REFERENTIAL,
            Some("Art. 61"),
            &["Plan d'Évaluation Clinique", "Rapport d'Évaluation Clinique"],
        ),
        M::entry(
            Some("Documentation technique"),
            REFERENTIAL,
            Some("Annexes II et III"),
            &["Documentation Technique", "Déclaration UE de Conformité"],
        ),
        M::entry(
            Some("Surveillance après commercialisation"),
            REFERENTIAL,
            Some("Art. 83 à 86"),
            &[
                "Plan de Surveillance Après Commercialisation",
                "Rapport Périodique Actualisé de Sécurité (PSUR)",
            ],
        ),
        M::entry(
            Some("Vigilance"),
            REFERENTIAL,
            Some("Art. 87"),
            &["Procédure de Vigilance", "Registre des Incidents"],
        ),
    ]
}
