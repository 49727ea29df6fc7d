//! ISO 13485:2016, medical devices.
//!
//! Every entry here names its process. A process-less ISO 13485 row would
//! attach its documents to every process queried under this referential.

use super::QuestionDocumentMapping as M;

const REFERENTIAL: Option<&str> = Some("ISO 13485");

pub(super) fn mappings() -> Vec<M> {
    vec![
        M::entry(
            Some("Système de management de la qualité"),
            REFERENTIAL,
            Some("4.1 / 4.2"),
            &[
                "Manuel Qualité",
                "Dossier du Dispositif Médical",
                "Procédure de Validation des Logiciels du SMQ",
            ],
        ),
        M::entry(
            Some("Gestion des risques"),
            REFERENTIAL,
            Some("7.1"),
            &[
                "Plan de Gestion des Risques",
                "Analyse des Risques (ISO 14971)",
                "Rapport d'Évaluation des Risques",
            ],
        )
        .with_question("q-13485-7.1-01"),
        M::entry(
            Some("Gestion des risques"),
            REFERENTIAL,
            Some("4.1.2"),
            &[
                "Analyse des Risques (ISO 14971)",
                "Matrice de Traçabilité des Risques",
            ],
        ),
        M::entry(
            Some("Conception et développement"),
            REFERENTIAL,
            Some("7.3"),
            &[
                "Plan de Conception et Développement",
                "Données d'Entrée de la Conception",
                "Rapports de Vérification de la Conception",
                "Rapports de Validation de la Conception",
                "Dossier de Transfert de la Conception",
            ],
        ),
        M::entry(
            Some("Production"),
            REFERENTIAL,
            Some("7.5"),
            &[
                "Instructions de Fabrication",
                "Dossier de Lot",
                "Procédure de Validation des Procédés",
            ],
        ),
        M::entry(
            Some("Stérilisation"),
            REFERENTIAL,
            Some("7.5.7"),
            &[
                "Rapport de Validation de la Stérilisation",
                "Enregistrements des Cycles de Stérilisation",
            ],
        ),
        M::entry(
            Some("Traçabilité"),
            REFERENTIAL,
            Some("7.5.9"),
            &[
                "Procédure de Traçabilité",
                "Registre d'Identification des Dispositifs",
            ],
        ),
        M::entry(
            Some("Réclamations clients"),
            REFERENTIAL,
            Some("8.2.2"),
            &[
                "Procédure de Traitement des Réclamations",
                "Registre des Réclamations",
            ],
        ),
        M::entry(
            Some("Actions correctives et préventives"),
            REFERENTIAL,
            Some("8.5.2 / 8.5.3"),
            &["Procédure CAPA", "Registre CAPA"],
        ),
    ]
}
