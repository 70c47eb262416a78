/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Per-record HTML rendering.

use std::fmt::Write;
use std::sync::OnceLock;

use bibpage_core::{Name, Reference};
use regex::Regex;

/// Author name spellings underlined in rendered author lists, with and
/// without the corresponding-author marker.
pub const EMPHASIZED_AUTHORS: &[&str] = &["Zhongxin Liu", "Zhongxin Liu*"];

/// Records whose id contains this substring are kept out of the page.
pub const SECONDARY_LANGUAGE_MARKER: &str = "chinese";

/// A "Code" link is only emitted for URLs on this host.
pub const CODE_HOST_MARKER: &str = "github.com";

/// Join author names with commas and a final "and", underlining the site
/// owner's name. A single author is rendered as-is.
pub fn format_authors(authors: &[Name]) -> String {
    let formatted: Vec<String> = authors
        .iter()
        .map(|author| {
            let name = author.display_name();
            if EMPHASIZED_AUTHORS.contains(&name.as_str()) {
                format!("<u>{}</u>", name)
            } else {
                name
            }
        })
        .collect();

    match formatted.split_last() {
        Some((last, rest)) if !rest.is_empty() => {
            format!("{} and {}", rest.join(", "), last)
        }
        _ => formatted.concat(),
    }
}

fn abbreviation_regex() -> &'static Regex {
    static ABBREVIATION: OnceLock<Regex> = OnceLock::new();
    ABBREVIATION.get_or_init(|| Regex::new(r"\((.*?)\)").unwrap())
}

/// Wrap the venue's parenthesized abbreviation in bold markup.
pub fn bold_abbreviation(venue: &str) -> String {
    if let Some(captures) = abbreviation_regex().captures(venue) {
        let abbrev = &captures[1];
        venue.replace(
            &format!("({})", abbrev),
            &format!("(<b>{}</b>)", abbrev),
        )
    } else {
        venue.to_string()
    }
}

/// Format the venue line: container title with its abbreviation bolded,
/// then, for non-conference types, the year and `volume(issue)`.
pub fn format_venue(reference: &Reference) -> String {
    let mut parts = Vec::new();

    if let Some(venue) = &reference.container_title {
        parts.push(bold_abbreviation(venue));
    }

    // Conference papers omit year, volume and issue.
    if reference.ref_type != "paper-conference" {
        if let Some(year) = reference.issued.as_ref().and_then(|d| d.year_value()) {
            parts.push(year.to_string());
        }
        if let (Some(volume), Some(issue)) = (&reference.volume, &reference.issue) {
            parts.push(format!("{}({})", volume, issue));
        }
    }

    parts.join(", ")
}

/// Render one record as an HTML `<li>` block.
pub fn render_entry(reference: &Reference) -> String {
    let mut html = String::from("<li>\n");

    let title_short = reference.title_short.as_deref().unwrap_or("");
    let title = reference.title.as_deref().unwrap_or("");
    let _ = writeln!(
        html,
        "<b><span style=\"color: #0b5394;\">[{}]</span> {}</b><br>",
        title_short, title
    );

    if let Some(authors) = &reference.author {
        let _ = writeln!(html, "{}<br>", format_authors(authors));
    }

    let venue = format_venue(reference);
    if !venue.is_empty() {
        let _ = writeln!(html, "{}.", venue);
    }

    if let Some(note) = &reference.note {
        if note.to_lowercase().contains("award") {
            let _ = writeln!(html, "[<span class=\"red\">{}</span> 🏆]", note);
        } else {
            let _ = writeln!(html, " {}.", note);
        }
    }

    html.push_str("<br>\n");

    let mut links = Vec::new();
    if let Some(doi) = &reference.doi {
        links.push(format!(
            "<a href=\"https://doi.org/{}\" target=\"_blank\" class=\"publication-link paper-link\">Paper</a>",
            doi
        ));
    }
    if let Some(url) = &reference.url {
        if url.to_lowercase().contains(CODE_HOST_MARKER) {
            links.push(format!(
                "<a href=\"{}\" target=\"_blank\" class=\"publication-link code-link\">Code</a>",
                url
            ));
        }
    }
    if !links.is_empty() {
        html.push_str(&links.join(" "));
        html.push_str("<br>\n");
    }

    html.push_str("</li>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use bibpage_core::{DateVariable, StringOrNumber};

    fn journal_article() -> Reference {
        Reference {
            id: "liu2023smells".to_string(),
            ref_type: "article-journal".to_string(),
            title: Some("The Effect of Code Smells on Maintainability".to_string()),
            title_short: Some("Smells".to_string()),
            author: Some(vec![
                Name::structured("Jane", "Doe"),
                Name::structured("Zhongxin", "Liu"),
            ]),
            container_title: Some("Empirical Software Engineering (EMSE)".to_string()),
            volume: Some(StringOrNumber::String("12".to_string())),
            issue: Some(StringOrNumber::String("3".to_string())),
            issued: Some(DateVariable::year(2023)),
            doi: Some("10.1000/example.2023".to_string()),
            url: Some("https://github.com/example/smells".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn single_author_renders_as_is() {
        assert_eq!(format_authors(&[Name::structured("Jane", "Doe")]), "Jane Doe");
    }

    #[test]
    fn two_authors_joined_with_and() {
        let authors = [Name::literal("A"), Name::literal("B")];
        assert_eq!(format_authors(&authors), "A and B");
    }

    #[test]
    fn three_authors_use_comma_then_and() {
        let authors = [Name::literal("A"), Name::literal("B"), Name::literal("C")];
        assert_eq!(format_authors(&authors), "A, B and C");
    }

    #[test]
    fn owner_name_is_underlined() {
        let authors = [
            Name::structured("Jane", "Doe"),
            Name::structured("Zhongxin", "Liu"),
        ];
        assert_eq!(
            format_authors(&authors),
            "Jane Doe and <u>Zhongxin Liu</u>"
        );
    }

    #[test]
    fn owner_name_with_marker_is_underlined() {
        let authors = [Name::literal("Zhongxin Liu*"), Name::literal("Jane Doe")];
        assert_eq!(
            format_authors(&authors),
            "<u>Zhongxin Liu*</u> and Jane Doe"
        );
    }

    #[test]
    fn venue_abbreviation_is_bolded() {
        assert_eq!(
            bold_abbreviation("Empirical Software Engineering (EMSE)"),
            "Empirical Software Engineering (<b>EMSE</b>)"
        );
        assert_eq!(bold_abbreviation("No Abbreviation Here"), "No Abbreviation Here");
    }

    #[test]
    fn journal_venue_appends_year_and_volume_issue() {
        let venue = format_venue(&journal_article());
        assert!(venue.ends_with(", 2023, 12(3)"));
    }

    #[test]
    fn conference_venue_omits_year_and_numbers() {
        let mut paper = journal_article();
        paper.ref_type = "paper-conference".to_string();
        paper.container_title =
            Some("International Conference on Software Engineering (ICSE)".to_string());
        assert_eq!(
            format_venue(&paper),
            "International Conference on Software Engineering (<b>ICSE</b>)"
        );
    }

    #[test]
    fn volume_without_issue_is_omitted() {
        let mut article = journal_article();
        article.issue = None;
        assert!(format_venue(&article).ends_with(", 2023"));
    }

    #[test]
    fn award_note_gets_trophy_markup() {
        let mut article = journal_article();
        article.note = Some("ACM SIGSOFT Distinguished Paper Award".to_string());
        let html = render_entry(&article);
        assert!(html.contains(
            "[<span class=\"red\">ACM SIGSOFT Distinguished Paper Award</span> 🏆]"
        ));
    }

    #[test]
    fn plain_note_is_a_trailing_sentence() {
        let mut article = journal_article();
        article.note = Some("Accepted, to appear".to_string());
        let html = render_entry(&article);
        assert!(html.contains(" Accepted, to appear.\n"));
        assert!(!html.contains("🏆"));
    }

    #[test]
    fn links_for_doi_and_code_host() {
        let html = render_entry(&journal_article());
        assert!(html.contains("href=\"https://doi.org/10.1000/example.2023\""));
        assert!(html.contains(">Paper</a>"));
        assert!(html.contains("href=\"https://github.com/example/smells\""));
        assert!(html.contains(">Code</a>"));
    }

    #[test]
    fn non_code_host_url_gets_no_link() {
        let mut article = journal_article();
        article.url = Some("https://example.com/preprint.pdf".to_string());
        let html = render_entry(&article);
        assert!(!html.contains(">Code</a>"));
    }
}
