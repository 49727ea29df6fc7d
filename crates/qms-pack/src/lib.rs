//! # qms-pack: Document Mapping Packs
//!
//! Each audit question belongs to a process and a referential. The
//! auditee is expected to produce a set of mandatory documents for that
//! pair ("Plan de Gestion des Risques" for risk management under
//! ISO 13485, and so on). This crate carries those tables and resolves
//! them.
//!
//! - [`mapping`]: [`QuestionDocumentMapping`] records, the built-in
//!   [`MappingTable`], and YAML-loaded replacement tables.
//! - [`resolver`]: [`DocumentResolver`], the lookup used by the
//!   questionnaire screens.
//!
//! ## Matching
//!
//! Names are matched loosely: an entry applies when its process name and
//! the queried one contain each other in either direction, ignoring case,
//! and likewise for the referential. This accepts both "ISO 13485" and
//! "ISO 13485:2016", at the cost of short names like "QA" matching widely.

pub mod error;
pub mod mapping;
pub mod resolver;

pub use error::{PackError, PackResult};
pub use mapping::{MappingTable, QuestionDocumentMapping};
pub use resolver::{DocumentResolver, DocumentSource};
