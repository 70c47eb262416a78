//! Core data model and conversion for the publication-page tooling.
//!
//! This crate owns the CSL-JSON reference model shared by the converter and
//! the page renderer, the BibTeX conversion backend, and the title-case
//! transform applied during conversion.
//!
//! # Example
//!
//! ```rust
//! use bibpage_core::{BibliographyConverter, BiblatexConverter};
//!
//! let bibtex = r#"
//! @article{liu2023smells,
//!   title = {The effect of code smells on maintainability},
//!   author = {Doe, Jane},
//!   journal = {Empirical Software Engineering (EMSE)},
//!   volume = {12},
//!   number = {3},
//!   year = {2023},
//! }
//! "#;
//! let bibliography = BiblatexConverter.convert(bibtex).unwrap();
//! assert_eq!(bibliography[0].id, "liu2023smells");
//! assert_eq!(bibliography[0].ref_type, "article-journal");
//! ```

pub mod convert;
pub mod error;
pub mod io;
pub mod reference;
pub mod title;

pub use convert::{BiblatexConverter, BibliographyConverter};
pub use error::CoreError;
pub use reference::{Bibliography, DateVariable, Name, Reference, StringOrNumber};
pub use title::title_case;
