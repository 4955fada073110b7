//! Course title formatting
//!
//! Raw topics arrive as free text ("web dev", "intro to js"). The course
//! title gets whitespace/punctuation cleanup, title case that keeps small
//! connective words lowercase, and a corrections table that expands common
//! abbreviations and fixes canonical casing, applied longest-pattern-first
//! on word boundaries.

use regex::Regex;
use std::sync::OnceLock;

/// Corrections applied after title casing; patterns are matched
/// case-insensitively on word boundaries, longest first
const CORRECTIONS: [(&str, &str); 24] = [
    ("artificial intelligence", "Artificial Intelligence"),
    ("product manager", "Product Management"),
    ("project manager", "Project Management"),
    ("machine learning", "Machine Learning"),
    ("web dev", "Web Development"),
    ("data sci", "Data Science"),
    ("full stack", "Full Stack"),
    ("fullstack", "Full Stack"),
    ("front-end", "Frontend"),
    ("back-end", "Backend"),
    ("webdev", "Web Development"),
    ("datasci", "Data Science"),
    ("graphql", "GraphQL"),
    ("devops", "DevOps"),
    ("nosql", "NoSQL"),
    ("intro", "Introduction"),
    ("js", "JavaScript"),
    ("ts", "TypeScript"),
    ("py", "Python"),
    ("ai", "AI"),
    ("ml", "ML"),
    ("api", "API"),
    ("sql", "SQL"),
    ("ux/ui", "UX/UI"),
];

/// Words kept lowercase in title case unless first or last
const SMALL_WORDS: [&str; 17] = [
    "a", "an", "and", "as", "at", "but", "by", "for", "if", "in", "nor", "of", "on", "or", "the",
    "to", "with",
];

/// Format a raw topic into a presentable course title
pub fn format_course_title(topic: &str) -> String {
    let cleaned = normalize_whitespace(topic);
    if cleaned.is_empty() {
        return cleaned;
    }

    let cased = title_case(&cleaned);
    apply_corrections(&cased)
}

fn normalize_whitespace(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end_matches('.')
        .to_string()
}

fn title_case(input: &str) -> String {
    let words: Vec<&str> = input.split(' ').collect();
    let last = words.len().saturating_sub(1);

    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i != 0 && i != last && SMALL_WORDS.contains(&lower.as_str()) {
                lower
            } else {
                capitalize_compound(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalize each hyphen- or slash-separated segment of a word
fn capitalize_compound(word: &str) -> String {
    let cap_segments = |s: &str, sep: char| -> String {
        s.split(sep)
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(&sep.to_string())
    };

    if word.contains('/') {
        cap_segments(word, '/')
    } else if word.contains('-') {
        cap_segments(word, '-')
    } else {
        capitalize(word)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Compiled corrections, sorted longest pattern first so multi-word rules
/// win over their abbreviations
fn compiled_corrections() -> &'static Vec<(Regex, &'static str)> {
    static COMPILED: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        let mut corrections: Vec<(&str, &str)> = CORRECTIONS.to_vec();
        corrections.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        corrections
            .into_iter()
            .map(|(pattern, replacement)| {
                let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(pattern)))
                    .expect("valid correction pattern");
                (re, replacement)
            })
            .collect()
    })
}

fn apply_corrections(input: &str) -> String {
    let mut result = input.to_string();
    for (re, replacement) in compiled_corrections() {
        result = re.replace_all(&result, *replacement).into_owned();
    }
    result
}
