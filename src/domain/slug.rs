//! URL slugs for pages, posts and categories.
//!
//! ASCII slugification comes from the `slug` crate; CJK text is transliterated
//! with `pinyin` first so a category named “产品更新” becomes
//! `chan-pin-geng-xin` instead of an empty string.

use pinyin::{Pinyin, ToPinyin};
use slug::slugify;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug source text is empty")]
    EmptyInput,
    #[error("failed to derive slug from `{input}`")]
    Unrepresentable { input: String },
}

/// Derive a slug from human-readable text.
///
/// Word characters survive lowercased; runs of whitespace, `_` and `-` become
/// a single `-`; everything else is dropped, and leading or trailing hyphens
/// are trimmed.
pub fn derive_slug(input: &str) -> Result<String, SlugError> {
    if input.trim().is_empty() {
        return Err(SlugError::EmptyInput);
    }

    let transliterated = transliterate_to_ascii(input);
    let cleaned: String = transliterated
        .chars()
        .filter(|ch| ch.is_alphanumeric() || ch.is_whitespace() || matches!(ch, '-' | '_'))
        .collect();
    let candidate = slugify(cleaned.replace('_', " "));

    if candidate.is_empty() {
        return Err(SlugError::Unrepresentable {
            input: input.to_string(),
        });
    }

    Ok(candidate)
}

/// Whether `slug` is lowercase ASCII words joined by single hyphens.
pub fn validate_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.split('-').all(|part| {
            !part.is_empty()
                && part
                    .bytes()
                    .all(|byte| byte.is_ascii_lowercase() || byte.is_ascii_digit())
        })
}

fn transliterate_to_ascii(input: &str) -> String {
    let mut output = String::with_capacity(input.len());

    for ch in input.chars() {
        if ch.is_ascii() {
            output.push(ch);
            continue;
        }

        match ch.to_pinyin() {
            Some(py) => append_pinyin(&mut output, py),
            None if ch.is_whitespace() => output.push(' '),
            None => output.push(ch),
        }
    }

    output
}

fn append_pinyin(buffer: &mut String, pinyin: Pinyin) {
    if !buffer.is_empty() && !buffer.ends_with(' ') {
        buffer.push(' ');
    }
    buffer.push_str(pinyin.plain());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_slug_collapses_separators_and_drops_punctuation() {
        assert_eq!(derive_slug("  Product Updates! ").expect("slug"), "product-updates");
        assert_eq!(derive_slug("How-to__Guides -- 2024").expect("slug"), "how-to-guides-2024");
        assert_eq!(derive_slug("-Leading & trailing-").expect("slug"), "leading-trailing");
    }

    #[test]
    fn derive_slug_transliterates_chinese() {
        assert_eq!(derive_slug("Rust 基础教程").expect("slug"), "rust-ji-chu-jiao-cheng");
    }

    #[test]
    fn derive_slug_rejects_empty_and_symbol_only_input() {
        assert_eq!(derive_slug("   "), Err(SlugError::EmptyInput));
        assert_eq!(
            derive_slug("!!!"),
            Err(SlugError::Unrepresentable {
                input: "!!!".to_string()
            })
        );
    }

    #[test]
    fn validate_slug_accepts_only_hyphenated_lowercase_words() {
        assert!(validate_slug("about"));
        assert!(validate_slug("pricing-2024"));
        assert!(!validate_slug(""));
        assert!(!validate_slug("About"));
        assert!(!validate_slug("double--hyphen"));
        assert!(!validate_slug("-leading"));
        assert!(!validate_slug("with space"));
    }
}
