//! ISO 9001:2015 quality management system requirements.

use super::QuestionDocumentMapping as M;

const REFERENTIAL: Option<&str> = Some("ISO 9001");

pub(super) fn mappings() -> Vec<M> {
    vec![
        M::entry(
            None,
            REFERENTIAL,
            Some("4.4 / 5.2"),
            &["Manuel Qualité", "Politique Qualité", "Cartographie des Processus"],
        ),
        M::entry(
            Some("Système de management de la qualité"),
            REFERENTIAL,
            Some("4.3"),
            &["Domaine d'Application du SMQ", "Cartographie des Processus"],
        ),
        M::entry(
            Some("Pilotage"),
            REFERENTIAL,
            Some("6.2"),
            &["Objectifs Qualité", "Tableau de Bord Qualité"],
        ),
        M::entry(
            Some("Ressources humaines"),
            REFERENTIAL,
            Some("7.2"),
            &[
                "Matrice des Compétences",
                "Plan de Formation",
                "Enregistrements de Formation",
            ],
        ),
        M::entry(
            Some("Maîtrise des documents"),
            REFERENTIAL,
            Some("7.5"),
            &[
                "Procédure de Maîtrise des Documents",
                "Liste des Documents en Vigueur",
            ],
        ),
        M::entry(
            Some("Achats"),
            REFERENTIAL,
            Some("8.4"),
            &[
                "Procédure Achats",
                "Liste des Fournisseurs Approuvés",
                "Évaluations Fournisseurs",
            ],
        ),
        M::entry(
            Some("Audit interne"),
            REFERENTIAL,
            Some("9.2"),
            &["Programme d'Audit Interne", "Rapports d'Audit Interne"],
        )
        .with_question("q-9001-9.2-01"),
        M::entry(
            Some("Revue de direction"),
            REFERENTIAL,
            Some("9.3"),
            &["Compte Rendu de Revue de Direction"],
        ),
        M::entry(
            Some("Amélioration"),
            REFERENTIAL,
            Some("10.2"),
            &[
                "Procédure Non-Conformités et Actions Correctives",
                "Registre des Actions Correctives",
            ],
        ),
    ]
}
