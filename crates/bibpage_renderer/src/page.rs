/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Publications-section regeneration and in-place page update.

use std::fs;
use std::path::{Path, PathBuf};

use bibpage_core::{io, Reference};
use regex::{NoExpand, Regex};

use crate::entry::{render_entry, SECONDARY_LANGUAGE_MARKER};
use crate::error::RenderError;

/// Result of an in-place page update.
#[derive(Debug)]
pub struct PageUpdate {
    /// Where the prior version of the document was copied.
    pub backup_path: PathBuf,
    /// Whether the publications container was found and replaced.
    /// An absent container leaves the document unchanged.
    pub section_found: bool,
}

/// Render the full publications block: heading, list container and one
/// `<li>` per record, in data-file order. Records whose id contains the
/// secondary-language marker are skipped.
pub fn render_section(bibliography: &[Reference]) -> String {
    let mut section = String::from("<div id=\"publications\">\n<h2>Publications</h2>\n<ul>\n");
    for reference in bibliography {
        if reference
            .id
            .to_lowercase()
            .contains(SECONDARY_LANGUAGE_MARKER)
        {
            continue;
        }
        section.push_str(&render_entry(reference));
    }
    section.push_str("</ul>\n</div>\n");
    section
}

/// Locates the publications container and substitutes a regenerated block.
///
/// The match is non-greedy and spans lines: from the opening marker to the
/// first closing `</div>`, plus any trailing whitespace. Nested markup
/// inside the container is not supported, matching the page template.
pub struct SectionSplicer {
    section_regex: Regex,
}

impl Default for SectionSplicer {
    fn default() -> Self {
        Self {
            section_regex: Regex::new(r#"(?s)<div id="publications">.*?</div>\s*"#).unwrap(),
        }
    }
}

impl SectionSplicer {
    /// Replace the publications container with `section`. Returns the new
    /// document and whether the container was found; with no match the
    /// document comes back unchanged.
    pub fn splice(&self, document: &str, section: &str) -> (String, bool) {
        if !self.section_regex.is_match(document) {
            return (document.to_string(), false);
        }
        let updated = self
            .section_regex
            .replace_all(document, NoExpand(section))
            .into_owned();
        (updated, true)
    }
}

/// Update the publications section of `html_path` in place.
///
/// The original content is copied to `<name>.bak` before the updated
/// document overwrites the original.
pub fn update_page(html_path: &Path, bibliography: &[Reference]) -> Result<PageUpdate, RenderError> {
    let original = fs::read_to_string(html_path)?;

    let section = render_section(bibliography);
    let (updated, section_found) = SectionSplicer::default().splice(&original, &section);

    let backup_path = backup_path_for(html_path);
    fs::write(&backup_path, &original)?;
    fs::write(html_path, updated)?;

    Ok(PageUpdate {
        backup_path,
        section_found,
    })
}

/// Load the data file and update the page. The data file is checked before
/// the document is touched, so a missing file leaves no backup behind.
pub fn update_page_from_files(html_path: &Path, data_path: &Path) -> Result<PageUpdate, RenderError> {
    let bibliography = io::load_bibliography(data_path)?;
    update_page(html_path, &bibliography)
}

fn backup_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".bak");
    path.with_file_name(name)
}
