use std::collections::HashMap;

use url::{Url, form_urlencoded};

use crate::data_models::{PageData, PageQuery};

/// Builds the search page data from the request URL.
pub fn load(url: &Url) -> PageData {
    load_query(url.query())
}

/// Same as [`load`], from the raw query string (without the leading `?`).
///
/// Parameters are collected into a single-valued map, so a repeated key keeps
/// its last value.
pub fn load_query(query: Option<&str>) -> PageData {
    let params: HashMap<String, String> =
        form_urlencoded::parse(query.unwrap_or_default().as_bytes())
            .into_owned()
            .collect();

    let query = PageQuery::from_params(&params);
    tracing::debug!(text = %query.text, "loaded search page query");
    PageData { query }
}

#[test]
fn test_load_url() {
    let url = Url::parse("https://example.com/?text=rust").unwrap();
    assert_eq!(load(&url).query, PageQuery::new("rust"));

    let url = Url::parse("https://example.com/").unwrap();
    assert_eq!(load(&url).query, PageQuery::new(""));

    let url = Url::parse("https://example.com/?text=").unwrap();
    assert_eq!(load(&url).query, PageQuery::new(""));

    let url = Url::parse("https://example.com/?page=2&sort=asc").unwrap();
    assert_eq!(load(&url).query, PageQuery::new(""));

    let url = Url::parse("https://example.com/?page=2&text=foo&sort=asc").unwrap();
    assert_eq!(load(&url).query, PageQuery::new("foo"));

    // The fragment is not part of the query.
    let url = Url::parse("https://example.com/?text=a#text=b").unwrap();
    assert_eq!(load(&url).query, PageQuery::new("a"));
}

#[test]
fn test_load_query() {
    assert_eq!(load_query(None).query.text, "");
    assert_eq!(load_query(Some("")).query.text, "");
    assert_eq!(load_query(Some("text=a&text=b")).query.text, "b");
    assert_eq!(load_query(Some("text=a&text=")).query.text, "");
    assert_eq!(
        load_query(Some("text=hello+world%21")).query.text,
        "hello world!"
    );
    assert_eq!(load_query(Some("text=caf%C3%A9")).query.text, "café");
}

#[test]
fn test_load_query_decoding_edge_cases() {
    // invalid UTF-8 is replaced, not rejected
    assert_eq!(load_query(Some("text=%FF")).query.text, "\u{FFFD}");
    assert_eq!(load_query(Some("te%78t=a")).query.text, "a");
    assert_eq!(load_query(Some("text=%")).query.text, "%");
    assert_eq!(load_query(Some("text=100%25")).query.text, "100%");
}

#[test]
fn test_load_is_idempotent() {
    let url = Url::parse("https://example.com/search?text=rust+lang").unwrap();
    assert_eq!(load(&url), load(&url));
}
