#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use scripwatch_core::{BseClient, ClientBuilder, Watchlist};

pub const INFY: &str = "500209";
pub const TCS: &str = "532540";

pub const ACTIONS_JSON: &str = r#"[
    {"scrip_code": 500209, "short_name": "INFY", "Ex_date": "24 Oct 2025",
     "Purpose": "Interim Dividend - Rs. - 18.0000", "RD_Date": "24 Oct 2025"},
    {"scrip_code": 543210, "short_name": "ABCL", "Ex_date": "27 Oct 2025",
     "Purpose": "Bonus issue 1:1", "RD_Date": "27 Oct 2025"},
    {"scrip_code": 512345, "short_name": "XYZ", "Ex_date": null,
     "Purpose": "Annual General Meeting", "RD_Date": null}
]"#;

pub const CALENDAR_JSON: &str = r#"[
    {"scrip_Code": "532540", "short_name": "TCS", "Long_Name": "Tata Consultancy Services Ltd",
     "meeting_date": "30 Oct 2025"},
    {"scrip_Code": "500180", "short_name": "HDFCBANK", "Long_Name": "HDFC Bank Ltd",
     "meeting_date": "31 Oct 2025"}
]"#;

pub const INFY_ANNOUNCEMENTS_JSON: &str = r#"{
    "Table": [
        {"SCRIP_CD": 500209, "CATEGORYNAME": "Company Update", "SUBCATNAME": "General",
         "NEWSSUB": "Infosys Ltd - Change in Directors - XBRL",
         "HEADLINE": "Appointment of director<BR>effective today",
         "ATTACHMENTNAME": "6f1c2b7e.pdf"},
        {"SCRIP_CD": 500209, "CATEGORYNAME": "Insider Trading / SAST", "SUBCATNAME": "Trading Window",
         "NEWSSUB": "Closure of Trading Window", "HEADLINE": "", "ATTACHMENTNAME": ""}
    ],
    "Table1": [{"ROWCNT": 2}]
}"#;

pub const EMPTY_ANNOUNCEMENTS_JSON: &str = r#"{"Table": [], "Table1": [{"ROWCNT": 0}]}"#;

pub fn search_html(symbol: &str, code: &str) -> String {
    format!(
        "<ul><li class='quotemenu'><a class='quotemenu' href='#'><span><strong>{symbol}</strong>\
         &nbsp;&nbsp;&nbsp;INE009A01021&nbsp;&nbsp;&nbsp;{code}<br /><strong>{symbol} Ltd</strong>\
         </span></a></li></ul>"
    )
}

pub fn client(server: &ServerGuard) -> BseClient {
    ClientBuilder::new()
        .with_api_url(Some(server.url()))
        .build()
        .expect("Failed to build client")
}

pub fn watchlist() -> Watchlist {
    [(INFY, "INFY"), (TCS, "TCS")]
        .into_iter()
        .map(|(code, symbol)| (code.to_string(), symbol.to_string()))
        .collect()
}

/// Serve a JSON body on `path` for any query.
pub async fn mock_json(server: &mut ServerGuard, path: &str, body: &str) -> Mock {
    server
        .mock("GET", path)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Serve one symbol's announcements page.
pub async fn mock_announcements(
    server: &mut ServerGuard,
    code: &str,
    page: u32,
    body: &str,
) -> Mock {
    server
        .mock("GET", "/AnnSubCategoryGetData/w")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("strScrip".into(), code.into()),
            Matcher::UrlEncoded("pageno".into(), page.to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Mock every feed a digest run reads.
pub async fn mock_all_feeds(server: &mut ServerGuard) -> Vec<Mock> {
    vec![
        mock_json(server, "/DefaultData/w", ACTIONS_JSON).await,
        mock_json(server, "/Corpforthresults/w", CALENDAR_JSON).await,
        mock_announcements(server, INFY, 1, INFY_ANNOUNCEMENTS_JSON).await,
        mock_announcements(server, TCS, 1, EMPTY_ANNOUNCEMENTS_JSON).await,
    ]
}
