#[cfg(test)]
mod digest_tests {
    use jiff::civil::date;

    use crate::{
        client::Feeds,
        digest::Digest,
        format::{MarkdownFormatter, TextFormatter},
        models::{Announcement, CorporateAction, ResultEntry},
        processor::RecordFilter,
        watchlist::Watchlist,
    };

    fn watchlist() -> Watchlist {
        [("500209", "INFY"), ("532540", "TCS")]
            .into_iter()
            .map(|(code, symbol)| (code.to_string(), symbol.to_string()))
            .collect()
    }

    fn announcement(code: &str, category: Option<&str>, subcategory: &str, subject: &str) -> Announcement {
        Announcement {
            code: code.to_string(),
            category: category.map(str::to_string),
            subcategory: subcategory.to_string(),
            subject: subject.to_string(),
            headline: "Board meeting outcome<BR>attached".to_string(),
            attachment: Some("abc.pdf".to_string()),
        }
    }

    fn action(code: &str, name: &str, purpose: &str, ex_date: Option<&str>) -> CorporateAction {
        CorporateAction {
            code: code.to_string(),
            short_name: name.to_string(),
            purpose: purpose.to_string(),
            ex_date: ex_date.map(str::to_string),
        }
    }

    fn result(code: &str, name: &str, meeting: &str) -> ResultEntry {
        ResultEntry {
            code: code.to_string(),
            short_name: name.to_string(),
            meeting_date: meeting.to_string(),
        }
    }

    fn sample_feeds() -> Feeds {
        Feeds {
            announcements: vec![
                announcement("500209", Some("Company Update"), "General", "INFOSYS LTD - Change in Directors - XBRL"),
                announcement("532540", Some("Board Meeting"), "Trading Window", "Closure of Trading Window"),
                announcement("532540", None, "General", "Uncategorised"),
                announcement("999999", Some("AGM/EGM"), "General", "Unknown company"),
            ],
            actions: vec![
                action("500209", "INFY", "Interim Dividend - Rs. - 18.0000", Some("24 Oct 2025")),
                action("111111", "ABC", "Bonus issue 1:1", Some("27 Oct 2025")),
                action("222222", "XYZ", "Stock  Split From Rs.10/- to Rs.2/-", None),
                action("333333", "PQR", "Final Dividend - Rs. - 5.0000", Some("28 Oct 2025")),
            ],
            results: vec![
                result("532540", "TCS", "30 Oct 2025"),
                result("444444", "OTHER", "31 Oct 2025"),
            ],
        }
    }

    fn sample_digest() -> Digest {
        Digest::build(
            date(2025, 10, 24),
            &watchlist(),
            sample_feeds(),
            &RecordFilter::default(),
        )
    }

    #[test]
    fn test_build_filters_announcements() {
        let digest = sample_digest();

        assert_eq!(digest.announcements.len(), 1);
        let item = &digest.announcements[0];
        assert_eq!(item.symbol, "INFY");
        assert_eq!(item.category, "Company Update");
        assert_eq!(item.subject, "Change in Directors");
        assert_eq!(item.headline, "Board meeting outcomeattached");
        assert_eq!(item.attachment.as_deref(), Some("abc.pdf"));
    }

    #[test]
    fn test_build_parses_complaints() {
        let mut feeds = Feeds::default();
        let mut ann = announcement(
            "500209",
            Some("Company Update"),
            "Investor Complaints",
            "Statement of Investor Complaints for the quarter",
        );
        ann.headline = "<td>0</td><td>12</td><td>11</td><td>1</td>".to_string();
        feeds.announcements.push(ann);

        let digest = Digest::build(date(2025, 10, 24), &watchlist(), feeds, &RecordFilter::default());

        assert_eq!(
            digest.announcements[0].headline,
            "Pending: 0\nReceived: 12\nDisposed: 11\nUnresolved: 1"
        );
    }

    #[test]
    fn test_build_splits_actions() {
        let digest = sample_digest();

        assert_eq!(digest.portfolio_actions.len(), 1);
        assert_eq!(digest.portfolio_actions[0].name, "INFY");
        assert_eq!(digest.portfolio_actions[0].purpose, "Interim Dividend Rs.18.0");
        assert_eq!(digest.portfolio_actions[0].ex_date, Some(date(2025, 10, 24)));

        let others: Vec<&str> = digest.other_actions.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(others, ["ABC", "XYZ"]);
        assert_eq!(digest.other_actions[1].ex_date, None);
    }

    #[test]
    fn test_build_keeps_watched_results() {
        let digest = sample_digest();

        assert_eq!(digest.results.len(), 1);
        assert_eq!(digest.results[0].name, "TCS");
        assert_eq!(digest.results[0].meeting_date, "30 Oct 2025");
    }

    #[test]
    fn test_custom_blacklist() {
        let filter = RecordFilter::new(&["book closure"], &[]);
        let digest = Digest::build(date(2025, 10, 24), &watchlist(), sample_feeds(), &filter);

        // trading window filings pass and subjects are only stripped of the XBRL suffix
        let subjects: Vec<&str> = digest
            .announcements
            .iter()
            .map(|a| a.subject.as_str())
            .collect();
        assert_eq!(
            subjects,
            ["INFOSYS LTD - Change in Directors", "Closure of Trading Window"]
        );
    }

    #[test]
    fn test_render_section_order() {
        let report = sample_digest().render(&mut TextFormatter);

        let positions: Vec<usize> = [
            "CORP. ANNOUNCEMENTS - Friday 24 Oct 2025",
            "INFY - Company Update",
            "Result Calendar",
            "Corporate Actions",
            "Portfolio",
            "Other Corp. Actions",
        ]
        .iter()
        .map(|needle| report.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{report}");
        assert!(report.contains("https://www.bseindia.com/xml-data/corpfiling/AttachLive/abc.pdf"));
    }

    #[test]
    fn test_render_empty_digest() {
        let digest = Digest::build(
            date(2025, 10, 24),
            &watchlist(),
            Feeds::default(),
            &RecordFilter::default(),
        );
        let report = digest.render(&mut TextFormatter);

        assert!(report.contains("\tNo announcements to display.\n"));
        assert!(report.contains("\tNo actions on Portfolio\n"));
        assert!(!report.contains("Result Calendar"));
        assert!(!report.contains("Other Corp. Actions"));
    }

    #[test]
    fn test_markdown_headers_once_per_report() {
        let mut feeds = sample_feeds();
        feeds.actions.push(action("532540", "TCS", "Final Dividend - Rs. - 24.0000", None));
        let digest = Digest::build(date(2025, 10, 24), &watchlist(), feeds, &RecordFilter::default());

        let mut fmt = MarkdownFormatter::new();
        let first = digest.render(&mut fmt);
        let second = digest.render(&mut fmt);

        for report in [&first, &second] {
            // portfolio and other tables share a header layout
            assert_eq!(report.matches("| Symbol | Purpose | Ex-Date |").count(), 2);
            assert_eq!(report.matches("| Company | Meeting Date |").count(), 1);
        }
        assert_eq!(first, second);
    }
}
