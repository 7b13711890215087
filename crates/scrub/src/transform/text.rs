//! Text trimming and title casing.

use crate::data::{Table, Value};
use crate::error::Result;
use crate::sink::StatusSink;

use super::Transform;

/// Trims and title-cases every value of every text column.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl Transform for TextNormalizer {
    fn name(&self) -> &'static str {
        "normalize_text"
    }

    fn apply(&self, mut table: Table, sink: &mut dyn StatusSink) -> Result<Table> {
        for column in table.columns_mut() {
            if !column.column_type.is_textual() {
                continue;
            }

            let mut changed = 0usize;
            for value in column.values.iter_mut() {
                if value.is_null() {
                    continue;
                }
                let normalized = normalize_text(&value.to_string());
                if value.as_str() != Some(normalized.as_str()) {
                    changed += 1;
                }
                *value = Value::Text(normalized);
            }

            tracing::debug!(column = %column.name, changed, "normalized text");
        }

        sink.success("Text columns standardized (trimmed + title case).");
        Ok(table)
    }
}

/// Trim surrounding whitespace and title-case the rest.
pub fn normalize_text(s: &str) -> String {
    title_case(s.trim())
}

/// Title-case each whitespace-separated word.
///
/// The first alphabetic character of a word takes its titlecase form and the
/// remainder is lowercased. Whitespace between words is preserved.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while !rest.is_empty() {
        let word_start = rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len());
        out.push_str(&rest[..word_start]);
        rest = &rest[word_start..];

        let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        push_title_word(&mut out, &rest[..word_end]);
        rest = &rest[word_end..];
    }

    out
}

fn push_title_word(out: &mut String, word: &str) {
    // Lowercase the whole word first so context-sensitive mappings such as
    // the Greek final sigma see their neighbours.
    let lower = word.to_lowercase();
    match lower.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((index, first)) => {
            out.push_str(&lower[..index]);
            push_titlecase(out, first);
            out.push_str(&lower[index + first.len_utf8()..]);
        }
        None => out.push_str(&lower),
    }
}

/// Push the Unicode titlecase mapping of `c`.
fn push_titlecase(out: &mut String, c: char) {
    if let Some(title) = titlecase_exception(c) {
        out.push_str(title);
        return;
    }
    if let Some(title) = titlecase_iota_subscript(c) {
        out.push(title);
        return;
    }

    // Multi-character uppercase expansions (ß -> SS) title-case as "Ss".
    let mut upper = c.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
        for rest in upper {
            out.extend(rest.to_lowercase());
        }
    }
}

/// Characters whose titlecase is neither their uppercase nor derivable
/// from it: Latin digraphs and Greek letters with ypogegrammeni that carry
/// extra marks (SpecialCasing.txt).
fn titlecase_exception(c: char) -> Option<&'static str> {
    let title = match c {
        'Ǆ' | 'ǅ' | 'ǆ' => "ǅ",
        'Ǉ' | 'ǈ' | 'ǉ' => "ǈ",
        'Ǌ' | 'ǋ' | 'ǌ' => "ǋ",
        'Ǳ' | 'ǲ' | 'ǳ' => "ǲ",
        '\u{1FB2}' => "\u{1FBA}\u{0345}",
        '\u{1FB4}' => "\u{0386}\u{0345}",
        '\u{1FB7}' => "\u{0391}\u{0342}\u{0345}",
        '\u{1FC2}' => "\u{1FCA}\u{0345}",
        '\u{1FC4}' => "\u{0389}\u{0345}",
        '\u{1FC7}' => "\u{0397}\u{0342}\u{0345}",
        '\u{1FF2}' => "\u{1FFA}\u{0345}",
        '\u{1FF4}' => "\u{038F}\u{0345}",
        '\u{1FF7}' => "\u{03A9}\u{0342}\u{0345}",
        _ => return None,
    };
    Some(title)
}

/// Greek letters with ypogegrammeni title-case to the prosgegrammeni form
/// (ᾳ -> ᾼ), while uppercasing splits off a capital iota (ᾳ -> ΑΙ).
fn titlecase_iota_subscript(c: char) -> Option<char> {
    let code = c as u32;
    match code {
        // Lowercase rows of the 1F80..1FAF block sit 8 below their titlecase.
        0x1F80..=0x1F87 | 0x1F90..=0x1F97 | 0x1FA0..=0x1FA7 => char::from_u32(code + 8),
        0x1F88..=0x1F8F | 0x1F98..=0x1F9F | 0x1FA8..=0x1FAF => Some(c),
        0x1FB3 | 0x1FBC => Some('\u{1FBC}'),
        0x1FC3 | 0x1FCC => Some('\u{1FCC}'),
        0x1FF3 | 0x1FFC => Some('\u{1FFC}'),
        _ => None,
    }
}
