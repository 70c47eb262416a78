/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Publication-list rendering for the personal page.
//!
//! Takes the CSL-JSON data file produced by the converter, renders each
//! record as an HTML list item, and splices the result over the existing
//! `<div id="publications">` section of the page, backing up the prior
//! version first.

pub mod entry;
pub mod error;
pub mod page;

pub use entry::{format_authors, format_venue, render_entry};
pub use error::RenderError;
pub use page::{render_section, update_page, update_page_from_files, PageUpdate, SectionSplicer};
