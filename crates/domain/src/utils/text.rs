//! Pure string utility functions for file names and HTML output

use crate::constants::ORDER_SLUG_FALLBACK;

/// Returns `true` when the value is empty after trimming.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Trim a value and map blank input to `None`.
#[must_use]
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Turn free text into a lowercase, hyphen-separated token.
///
/// Runs of characters that are not ASCII letters or digits collapse into a
/// single hyphen, and the result never starts or ends with one. Input with
/// no usable characters yields `"customer"`.
///
/// # Examples
///
/// ```
/// use freehold_domain::utils::text::slugify;
///
/// assert_eq!(slugify("Acme & Co."), "acme-co");
/// assert_eq!(slugify("  Northwind  Traders Ltd "), "northwind-traders-ltd");
/// assert_eq!(slugify("&&&"), "customer");
/// ```
#[must_use]
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        ORDER_SLUG_FALLBACK.to_string()
    } else {
        slug
    }
}

/// Escape a value for insertion into HTML text or attribute content.
#[must_use]
pub fn escape_html(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}

/// Escape a value and convert its line breaks into `<br>` tags.
///
/// `\r\n`, `\r` and `\n` are all treated as a single break.
///
/// # Examples
///
/// ```
/// use freehold_domain::utils::text::escape_multiline_html;
///
/// assert_eq!(escape_multiline_html("a < b\r\nc"), "a &lt; b<br>c");
/// ```
#[must_use]
pub fn escape_multiline_html(value: &str) -> String {
    let normalized = value.replace("\r\n", "\n").replace('\r', "\n");
    normalized.split('\n').map(escape_html).collect::<Vec<_>>().join("<br>")
}
