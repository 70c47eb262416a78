//! Title-case normalization for converted titles.

/// Words left lowercase in title case: articles, short prepositions and
/// conjunctions. First and last words are capitalized regardless.
const MINOR_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "en", "for", "if", "in", "of", "on", "or", "the",
    "to", "via", "vs",
];

/// Convert a title to title case.
///
/// Every word is capitalized except interior minor words, which are
/// lowercased. Words that already start with an uppercase letter are
/// passed through unchanged, so acronyms and proper nouns survive.
pub fn title_case(title: &str) -> String {
    let words: Vec<&str> = title.split_whitespace().collect();
    let last = words.len().saturating_sub(1);

    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if word.chars().next().is_some_and(|c| c.is_uppercase()) {
                (*word).to_string()
            } else if i != 0 && i != last && MINOR_WORDS.contains(&word.to_lowercase().as_str()) {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
