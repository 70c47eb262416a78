//! BibTeX to CSL-JSON conversion.
//!
//! The conversion backend sits behind [`BibliographyConverter`] so the
//! converter CLI does not care how the structured records are produced.
//! The default backend parses BibTeX with the `biblatex` crate.

use biblatex::{Bibliography as RawBibliography, Chunk, Entry, Person};

use crate::error::CoreError;
use crate::reference::{Bibliography, DateVariable, Name, Reference, StringOrNumber};

/// A bibliography-format-to-CSL-JSON converter.
///
/// One operation: raw bibliography text in, ordered citation records out.
/// Correctness of the backend's parsing is assumed, not re-validated.
pub trait BibliographyConverter {
    fn convert(&self, input: &str) -> Result<Bibliography, CoreError>;
}

/// The default converter, backed by the `biblatex` parser.
#[derive(Debug, Default, Clone, Copy)]
pub struct BiblatexConverter;

impl BibliographyConverter for BiblatexConverter {
    fn convert(&self, input: &str) -> Result<Bibliography, CoreError> {
        let raw = RawBibliography::parse(input)
            .map_err(|e| CoreError::Conversion(e.to_string()))?;
        Ok(raw.iter().map(Reference::from_biblatex).collect())
    }
}

impl Reference {
    /// Map a parsed BibTeX entry onto the CSL-JSON model.
    pub fn from_biblatex(entry: &Entry) -> Self {
        let field_str = |key: &str| {
            entry.fields.get(key).map(|f| {
                f.iter()
                    .map(|c| match &c.v {
                        Chunk::Normal(s) | Chunk::Verbatim(s) => s.as_str(),
                        _ => "",
                    })
                    .collect::<String>()
            })
        };

        let ref_type = match entry.entry_type.to_string().to_lowercase().as_str() {
            "article" => "article-journal",
            "inproceedings" | "conference" => "paper-conference",
            "book" | "mvbook" | "collection" | "mvcollection" => "book",
            "inbook" | "incollection" => "chapter",
            "phdthesis" | "mastersthesis" | "thesis" => "thesis",
            "techreport" | "report" => "report",
            "online" | "electronic" | "www" => "webpage",
            _ => "document",
        }
        .to_string();

        // Journal articles carry their venue in journal/journaltitle,
        // conference papers in booktitle.
        let container_title = field_str("journal")
            .or_else(|| field_str("journaltitle"))
            .or_else(|| field_str("booktitle"));

        let issued = field_str("date")
            .or_else(|| field_str("year"))
            .and_then(|raw| leading_year(&raw))
            .map(DateVariable::year);

        let author = entry
            .author()
            .ok()
            .map(|persons| persons.iter().map(Name::from_biblatex).collect::<Vec<_>>())
            .filter(|names: &Vec<Name>| !names.is_empty());

        Reference {
            id: entry.key.clone(),
            ref_type,
            title: field_str("title"),
            title_short: field_str("shorttitle"),
            author,
            container_title,
            volume: field_str("volume").map(StringOrNumber::String),
            issue: field_str("number")
                .or_else(|| field_str("issue"))
                .map(StringOrNumber::String),
            // biblatex rewrites "--" in page ranges to an en-dash; fold both
            // spellings to a plain hyphen.
            page: field_str("pages").map(|p| p.replace('\u{2013}', "-").replace("--", "-")),
            issued,
            note: field_str("note"),
            doi: field_str("doi"),
            url: field_str("url"),
        }
    }
}

impl Name {
    fn from_biblatex(person: &Person) -> Self {
        if person.given_name.is_empty() {
            Name::literal(&person.name)
        } else {
            let family = if person.prefix.is_empty() {
                person.name.clone()
            } else {
                format!("{} {}", person.prefix, person.name)
            };
            Name {
                given: Some(person.given_name.clone()),
                family: Some(family),
                literal: None,
            }
        }
    }
}

/// Extract the leading four-digit year from a `year` or EDTF-style `date`
/// field ("2023", "2023-06", "2023/2024").
fn leading_year(raw: &str) -> Option<i32> {
    let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.len() == 4 {
        digits.parse().ok()
    } else {
        None
    }
}
