//! Scrip code lookup in the exchange's quick-search markup.
//!
//! The search endpoint answers with an HTML list, one `<li>` per match, whose
//! text reads `SYMBOL  ISIN  CODE  Company Name`.

use once_cell::sync::Lazy;
use regex::Regex;

static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<li[^>]*>(.*?)</li>").expect("list item pattern is valid"));

static INLINE_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)</?(strong|b|em|i|u|mark|font)\b[^>]*>").expect("inline tag pattern is valid")
});

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

fn is_scrip_code(token: &str) -> bool {
    token.len() == 6 && token.bytes().all(|b| b.is_ascii_digit())
}

/// Find the scrip code of `symbol` in a search response.
///
/// Only entries whose first word is the symbol (ignoring case) count, so a
/// search for `TCS` does not pick up `TCSPL`.
pub fn parse_scrip_code(html: &str, symbol: &str) -> Option<String> {
    LIST_ITEM
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .find_map(|item| {
            let text = INLINE_TAG.replace_all(item.as_str(), "");
            let text = TAG.replace_all(&text, " ").replace("&nbsp;", " ");
            let mut tokens = text.split_whitespace();

            let first = tokens.next()?;
            if !first.eq_ignore_ascii_case(symbol) {
                return None;
            }
            tokens.find(|t| is_scrip_code(t)).map(str::to_string)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_HTML: &str = "<ul>\
        <li class='quotemenu'><a class='quotemenu' href='https://www.bseindia.com/stock-share-price/tcs-plus/tcspl/512345/'>\
        <span><strong>TCS</strong>PL&nbsp;&nbsp;&nbsp;INE000X01011&nbsp;&nbsp;&nbsp;512345<br /><strong>TCS Plus Ltd</strong></span></a></li>\
        <li class='quotemenu'><a class='quotemenu' href='https://www.bseindia.com/stock-share-price/tata-consultancy-services-ltd/tcs/532540/'>\
        <span><strong>TCS</strong>&nbsp;&nbsp;&nbsp;INE467B01029&nbsp;&nbsp;&nbsp;532540<br /><strong>Tata Consultancy Services Ltd</strong></span></a></li>\
        </ul>";

    #[test]
    fn test_exact_symbol_match() {
        assert_eq!(parse_scrip_code(SEARCH_HTML, "TCS").as_deref(), Some("532540"));
        assert_eq!(parse_scrip_code(SEARCH_HTML, "tcspl").as_deref(), Some("512345"));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(parse_scrip_code(SEARCH_HTML, "INFY"), None);
        assert_eq!(parse_scrip_code("", "TCS"), None);
        assert_eq!(parse_scrip_code("No Match Found", "TCS"), None);
    }

    #[test]
    fn test_entry_without_code() {
        let html = "<li><span>TCS&nbsp;INE467B01029</span></li>";
        assert_eq!(parse_scrip_code(html, "TCS"), None);
    }
}
