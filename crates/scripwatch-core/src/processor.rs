//! Text cleanup and filtering for raw exchange records.
//!
//! Every function here is a stateless transform. Keyword lists are exposed
//! as constants and carried by [`RecordFilter`], so callers can swap them out
//! without touching the transforms.

use once_cell::sync::Lazy;
use regex::Regex;

/// Announcement subcategories that never make it into the digest.
pub const BLACKLISTED_SUBCATEGORIES: &[&str] = &[
    "trading window",
    "reg. 74 (5)",
    "reg. 39 (3)",
    "book closure",
    "investor meet",
];

/// Subject words that mark a "<company> - <topic>" style subject worth trimming.
pub const SUBJECT_TRIM_KEYWORDS: &[&str] = &["Regulation", "Notice", "Change"];

/// Maximum length of a trimmed subject, in characters.
pub const SUBJECT_MAX_CHARS: usize = 70;

/// Suffix the exchange appends to machine-readable filings.
pub const XBRL_SUFFIX: &str = "- XBRL";

static COMPLAINT_COUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">(\d+)<").expect("complaint pattern is valid"));

static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("line break pattern is valid"));

/// Keyword-driven filtering and subject trimming.
#[derive(Debug, Clone)]
pub struct RecordFilter {
    blacklist: Vec<String>,
    /// Whole-word, case-insensitive match of any trim keyword
    trim_keywords: Option<Regex>,
}

impl RecordFilter {
    /// Build a filter from explicit keyword lists.
    ///
    /// # Panics
    ///
    /// Never in practice: keywords are escaped before being compiled.
    pub fn new(blacklist: &[&str], trim_keywords: &[&str]) -> Self {
        let trim_keywords = (!trim_keywords.is_empty()).then(|| {
            let alternatives: Vec<String> =
                trim_keywords.iter().copied().map(regex::escape).collect();
            Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives.join("|")))
                .expect("escaped keywords form a valid pattern")
        });

        Self {
            blacklist: blacklist.iter().map(|k| k.to_lowercase()).collect(),
            trim_keywords,
        }
    }

    /// True when the subcategory contains any blacklisted phrase, ignoring case.
    pub fn is_blacklisted(&self, subcategory: &str) -> bool {
        let subcategory = subcategory.to_lowercase();
        self.blacklist.iter().any(|key| subcategory.contains(key.as_str()))
    }

    /// Shorten an announcement subject to its topic.
    ///
    /// A trailing `- XBRL` is always dropped. Subjects that mention one of the
    /// trim keywords as a whole word and contain a hyphen keep only the text
    /// after the first hyphen. The result is capped at [`SUBJECT_MAX_CHARS`].
    ///
    /// ```rust
    /// use scripwatch_core::processor::RecordFilter;
    ///
    /// let filter = RecordFilter::default();
    /// assert_eq!(
    ///     filter.trim_subject("XYZ LTD - Change in Directors - XBRL"),
    ///     "Change in Directors"
    /// );
    /// ```
    pub fn trim_subject(&self, subject: &str) -> String {
        let mut subject = subject.trim();

        if let Some(stripped) = subject.strip_suffix(XBRL_SUFFIX) {
            subject = stripped.trim_end();
        }

        let has_keyword = self
            .trim_keywords
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(subject));

        if has_keyword {
            if let Some((_, topic)) = subject.split_once('-') {
                subject = topic.trim();
            }
        }

        truncate_chars(subject, SUBJECT_MAX_CHARS).trim_end().to_string()
    }
}

impl Default for RecordFilter {
    fn default() -> Self {
        Self::new(BLACKLISTED_SUBCATEGORIES, SUBJECT_TRIM_KEYWORDS)
    }
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Tidy a dividend purpose string.
///
/// The text is split on `-`, the trailing segment is read as an amount and
/// the pieces are glued back together. Strings whose last segment is not a
/// number come back untouched.
///
/// ```rust
/// use scripwatch_core::processor::clean_dividend_action;
///
/// assert_eq!(
///     clean_dividend_action("Interim Dividend - Rs. - 18.0000"),
///     "Interim Dividend Rs.18.0"
/// );
/// assert_eq!(clean_dividend_action("Final Dividend - N/A"), "Final Dividend - N/A");
/// ```
pub fn clean_dividend_action(text: &str) -> String {
    let segments: Vec<&str> = text.split('-').map(str::trim).collect();

    let Some((last, leading)) = segments.split_last() else {
        return text.to_string();
    };

    match last.parse::<f64>() {
        Ok(amount) if amount.is_finite() => {
            format!("{}{}", leading.join(" "), format_amount(amount))
        }
        _ => text.to_string(),
    }
}

/// Render an amount rounded to two decimals, trailing zeros trimmed, with at
/// least one fractional digit.
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{amount:.2}");
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

/// Turn the shareholder-complaints HTML table into labelled lines.
///
/// Needs at least four integers sitting between `>` and `<`; otherwise the
/// input is returned as-is. Extra values past the fourth are ignored.
pub fn parse_complaints(html: &str) -> String {
    let counts: Vec<&str> = COMPLAINT_COUNT
        .captures_iter(html)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .take(4)
        .collect();

    match counts.as_slice() {
        [pending, received, disposed, unresolved] => format!(
            "Pending: {pending}\nReceived: {received}\nDisposed: {disposed}\nUnresolved: {unresolved}"
        ),
        _ => html.to_string(),
    }
}

/// Remove embedded `<BR>` tags from a headline.
pub fn clean_headline(headline: &str) -> String {
    LINE_BREAK.replace_all(headline, "").into_owned()
}
