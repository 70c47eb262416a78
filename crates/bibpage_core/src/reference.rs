//! CSL-JSON reference types.
//!
//! These mirror the CSL-JSON interchange format: field names follow the
//! published variable names (`container-title`, `title-short`, `DOI`, `URL`),
//! and `issued` carries a `date-parts` array. Only the variables the
//! publication page renders are modelled; unknown input fields are ignored.

use serde::{Deserialize, Serialize};

/// An ordered collection of references, as stored in the data file.
/// Order is the source order and is never re-sorted.
pub type Bibliography = Vec<Reference>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Reference {
    pub id: String,

    #[serde(rename = "type")]
    pub ref_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "title-short", skip_serializing_if = "Option::is_none")]
    pub title_short: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Vec<Name>>,

    #[serde(rename = "container-title", skip_serializing_if = "Option::is_none")]
    pub container_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued: Option<DateVariable>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(rename = "DOI", skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    #[serde(rename = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A CSL-JSON name: either structured (`given`/`family`) or a single
/// `literal` string for corporate and one-part names.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Name {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
}

impl Name {
    pub fn structured(given: &str, family: &str) -> Self {
        Name {
            given: Some(given.to_string()),
            family: Some(family.to_string()),
            literal: None,
        }
    }

    pub fn literal(name: &str) -> Self {
        Name {
            literal: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// The display form: the literal if present, otherwise given and family
    /// joined by a space (given first).
    pub fn display_name(&self) -> String {
        if let Some(literal) = &self.literal {
            return literal.clone();
        }
        let parts: Vec<&str> = [self.given.as_deref(), self.family.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        parts.join(" ")
    }
}

/// A CSL-JSON date variable. Only `date-parts` is carried; the first part's
/// first element is the year.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DateVariable {
    #[serde(rename = "date-parts", skip_serializing_if = "Option::is_none")]
    pub date_parts: Option<Vec<Vec<i32>>>,
}

impl DateVariable {
    pub fn year(year: i32) -> Self {
        DateVariable {
            date_parts: Some(vec![vec![year]]),
        }
    }

    pub fn year_value(&self) -> Option<i32> {
        self.date_parts
            .as_ref()
            .and_then(|parts| parts.first())
            .and_then(|part| part.first())
            .copied()
    }
}

/// CSL-JSON numeric variables (volume, issue) appear as either strings or
/// numbers in the wild.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StringOrNumber {
    String(String),
    Number(i64),
}

impl std::fmt::Display for StringOrNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StringOrNumber::String(s) => write!(f, "{}", s),
            StringOrNumber::Number(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_csl_json_reference() {
        let json = r#"{
            "id": "liu2023smells",
            "type": "article-journal",
            "author": [{"family": "Doe", "given": "Jane"}],
            "title": "The Effect of Code Smells on Maintainability",
            "container-title": "Empirical Software Engineering (EMSE)",
            "volume": "12",
            "issue": 3,
            "issued": {"date-parts": [[2023]]},
            "DOI": "10.1000/example.2023",
            "URL": "https://github.com/example/smells"
        }"#;

        let reference: Reference = serde_json::from_str(json).unwrap();
        assert_eq!(reference.id, "liu2023smells");
        assert_eq!(reference.ref_type, "article-journal");
        assert_eq!(
            reference.author.as_ref().unwrap()[0].family,
            Some("Doe".to_string())
        );
        assert_eq!(
            reference.container_title.as_deref(),
            Some("Empirical Software Engineering (EMSE)")
        );
        assert_eq!(reference.issue, Some(StringOrNumber::Number(3)));
        assert_eq!(reference.issued.as_ref().unwrap().year_value(), Some(2023));
        assert_eq!(reference.doi.as_deref(), Some("10.1000/example.2023"));
    }

    #[test]
    fn serialized_field_names_are_csl_json() {
        let reference = Reference {
            id: "x".to_string(),
            ref_type: "article-journal".to_string(),
            title_short: Some("X".to_string()),
            container_title: Some("Venue".to_string()),
            doi: Some("10.1/x".to_string()),
            url: Some("https://example.com".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&reference).unwrap();
        assert!(json.contains("\"title-short\""));
        assert!(json.contains("\"container-title\""));
        assert!(json.contains("\"DOI\""));
        assert!(json.contains("\"URL\""));
        assert!(!json.contains("\"ref_type\""));
    }

    #[test]
    fn display_name_prefers_literal() {
        assert_eq!(Name::literal("ACME Corp").display_name(), "ACME Corp");
        assert_eq!(Name::structured("Jane", "Doe").display_name(), "Jane Doe");

        let given_only = Name {
            given: Some("Prince".to_string()),
            ..Default::default()
        };
        assert_eq!(given_only.display_name(), "Prince");
    }
}
