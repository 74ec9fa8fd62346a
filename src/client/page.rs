//! Decoding of list pages.
//!
//! Webex list endpoints return a JSON object holding the records of one
//! page under an endpoint-specific key, and advertise the next page in a
//! `Link` response header (`<url>; rel="next"`). A few endpoints embed the
//! next-page pointer in the body instead.

use reqwest::header::{HeaderMap, LINK};
use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};

/// Field holding the records of a page unless an endpoint says otherwise.
pub const DEFAULT_ITEM_KEY: &str = "items";

/// Opaque pointer to the next page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Absolute URL to request verbatim.
    Url(String),
    /// Token to echo back as a query parameter of the listing URL.
    Token(String),
}

impl Cursor {
    /// Classify a raw cursor value.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match url::Url::parse(&raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Cursor::Url(raw),
            _ => Cursor::Token(raw),
        }
    }

    /// The raw cursor value.
    pub fn as_str(&self) -> &str {
        match self {
            Cursor::Url(s) | Cursor::Token(s) => s,
        }
    }
}

/// One decoded page of a listing.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Raw records, in server order.
    pub items: Vec<Value>,
    /// Pointer to the next page; `None` on the last page.
    pub next: Option<Cursor>,
    /// Total number of records across the listing, when the server says.
    pub total: Option<u64>,
}

impl Page {
    /// Build a page from already decoded parts.
    pub fn new(items: Vec<Value>, next: Option<Cursor>) -> Self {
        Self {
            items,
            next,
            total: None,
        }
    }

    /// Returns `true` if no page follows this one.
    pub fn is_terminal(&self) -> bool {
        self.next.is_none()
    }

    /// Decode a page from a response body and its headers.
    ///
    /// A missing or `null` `item_key` yields an empty page. Any other
    /// non-array value under `item_key` is a [`Error::MalformedPage`].
    ///
    /// The next-page cursor comes from the `Link` header when present,
    /// otherwise from `cursor_field` in the body. `cursor_field` is either a
    /// top-level key (`"next"`) or a JSON pointer (`"/paging/next"`).
    pub fn decode(
        body: Value,
        headers: &HeaderMap,
        item_key: &str,
        cursor_field: Option<&str>,
    ) -> Result<Self> {
        let mut body = match body {
            Value::Object(map) => map,
            // empty 200/204 response
            Value::Null => serde_json::Map::new(),
            other => {
                return Err(Error::MalformedPage(format!(
                    "expected a JSON object, got {}",
                    json_kind(&other)
                )))
            }
        };

        let total = ["totalCount", "total"]
            .iter()
            .find_map(|key| body.get(*key).and_then(Value::as_u64));

        let next = next_from_headers(headers).or_else(|| {
            cursor_field.and_then(|field| {
                let value = if field.starts_with('/') {
                    Value::Object(body.clone()).pointer(field).cloned()
                } else {
                    body.get(field).cloned()
                };
                match value {
                    Some(Value::String(s)) if !s.is_empty() => Some(Cursor::new(s)),
                    _ => None,
                }
            })
        });

        let items = match body.remove(item_key) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(Error::MalformedPage(format!(
                    "'{}' holds {} instead of an array",
                    item_key,
                    json_kind(&other)
                )))
            }
        };

        Ok(Self { items, next, total })
    }
}

/// Find the `rel="next"` target across all `Link` headers.
fn next_from_headers(headers: &HeaderMap) -> Option<Cursor> {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|value| parse_link_header(value, "next"))
        .map(Cursor::new)
}

/// Parse a `Link` header and extract the URL for the given rel.
///
/// Format: `<url>; rel="next", <url>; rel="prev"`. A link may carry
/// several space separated rel values. Commas inside `<...>` or quoted
/// parameters belong to the link, not the list.
pub fn parse_link_header(header: &str, target_rel: &str) -> Option<String> {
    let mut rest = header;

    loop {
        let start = rest.find('<')?;
        let after = &rest[start + 1..];
        let end = after.find('>')?;
        let url = after[..end].trim();

        let tail = &after[end + 1..];
        let params_len = find_unquoted(tail, ',').unwrap_or(tail.len());
        let params = &tail[..params_len];
        rest = &tail[params_len..];

        let is_target = split_unquoted(params, ';').into_iter().any(|param| {
            let Some((name, value)) = param.split_once('=') else {
                return false;
            };
            name.trim().eq_ignore_ascii_case("rel")
                && value
                    .trim()
                    .trim_matches('"')
                    .trim_matches('\'')
                    .split_whitespace()
                    .any(|rel| rel.eq_ignore_ascii_case(target_rel))
        });

        if is_target {
            return Some(url.to_string());
        }
    }
}

fn find_unquoted(s: &str, sep: char) -> Option<usize> {
    let mut quoted = false;
    for (i, c) in s.char_indices() {
        if c == '"' {
            quoted = !quoted;
        } else if c == sep && !quoted {
            return Some(i);
        }
    }
    None
}

fn split_unquoted(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = s;
    while let Some(i) = find_unquoted(rest, sep) {
        parts.push(&rest[..i]);
        rest = &rest[i + sep.len_utf8()..];
    }
    parts.push(rest);
    parts
}

/// Flatten a serializable query into key/value pairs.
///
/// `None` fields are dropped, scalars are stringified and arrays are
/// joined with commas, which is how Webex takes multi-valued filters.
pub(crate) fn query_pairs<Q: Serialize + ?Sized>(query: &Q) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(query)?;
    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(Error::InvalidInput(format!(
                "query parameters must be a map, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let rendered = match value {
            Value::Null => continue,
            Value::Array(values) => {
                let mut parts = Vec::with_capacity(values.len());
                for element in &values {
                    match scalar_string(element) {
                        Some(s) => parts.push(s),
                        None => {
                            return Err(Error::InvalidInput(format!(
                                "query parameter '{}' must hold scalars, found {}",
                                key,
                                json_kind(element)
                            )))
                        }
                    }
                }
                parts.join(",")
            }
            other => match scalar_string(&other) {
                Some(s) => s,
                None => {
                    return Err(Error::InvalidInput(format!(
                        "query parameter '{}' must be a scalar",
                        key
                    )))
                }
            },
        };
        pairs.push((key, rendered));
    }
    Ok(pairs)
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use serde_json::json;

    fn link(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(LINK, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_parse_link_header_next() {
        let header = r#"<https://webexapis.com/v1/people?cursor=abc>; rel="next", <https://webexapis.com/v1/people>; rel="first""#;
        assert_eq!(
            parse_link_header(header, "next").as_deref(),
            Some("https://webexapis.com/v1/people?cursor=abc")
        );
        assert_eq!(
            parse_link_header(header, "first").as_deref(),
            Some("https://webexapis.com/v1/people")
        );
        assert!(parse_link_header(header, "prev").is_none());
    }

    #[test]
    fn test_parse_link_header_multiple_rels() {
        let header = r#"<https://example.com/p2>; rel="last next""#;
        assert_eq!(
            parse_link_header(header, "next").as_deref(),
            Some("https://example.com/p2")
        );
    }

    #[test]
    fn test_parse_link_header_comma_in_url() {
        let header = r#"<https://webexapis.com/v1/people?id=a,b&cursor=X>; rel="next", <https://webexapis.com/v1/people?id=a,b>; rel="first""#;
        assert_eq!(
            parse_link_header(header, "next").as_deref(),
            Some("https://webexapis.com/v1/people?id=a,b&cursor=X")
        );
        assert_eq!(
            parse_link_header(header, "first").as_deref(),
            Some("https://webexapis.com/v1/people?id=a,b")
        );
    }

    #[test]
    fn test_parse_link_header_quoted_params() {
        let header = r#"<https://example.com/p1>; title="one, two"; rel="prev", <https://example.com/p3>; rel = "next""#;
        assert_eq!(
            parse_link_header(header, "next").as_deref(),
            Some("https://example.com/p3")
        );
        assert!(parse_link_header("", "next").is_none());
        assert!(parse_link_header("<https://example.com/broken", "next").is_none());
    }

    #[test]
    fn test_decode_link_with_comma_in_url() {
        let page = Page::decode(
            json!({ "items": [{ "id": "A" }] }),
            &link(r#"<https://webexapis.com/v1/people?id=a,b&cursor=X>; rel="next""#),
            DEFAULT_ITEM_KEY,
            None,
        )
        .unwrap();
        assert_eq!(
            page.next,
            Some(Cursor::Url("https://webexapis.com/v1/people?id=a,b&cursor=X".into()))
        );
    }

    #[test]
    fn test_cursor_classification() {
        assert_eq!(
            Cursor::new("https://webexapis.com/v1/meetings?cursor=x"),
            Cursor::Url("https://webexapis.com/v1/meetings?cursor=x".into())
        );
        assert_eq!(Cursor::new("eyJwYWdlIjoyfQ"), Cursor::Token("eyJwYWdlIjoyfQ".into()));
        assert_eq!(Cursor::new("page:2"), Cursor::Token("page:2".into()));
    }

    #[test]
    fn test_decode_items_and_link() {
        let body = json!({ "items": [{ "id": "A" }, { "id": "B" }] });
        let page = Page::decode(
            body,
            &link(r#"<https://webexapis.com/v1/people?cursor=C2>; rel="next""#),
            DEFAULT_ITEM_KEY,
            None,
        )
        .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0]["id"], "A");
        assert_eq!(
            page.next,
            Some(Cursor::Url("https://webexapis.com/v1/people?cursor=C2".into()))
        );
        assert!(!page.is_terminal());
    }

    #[test]
    fn test_decode_missing_key_is_empty() {
        let page = Page::decode(json!({}), &HeaderMap::new(), "queues", None).unwrap();
        assert!(page.items.is_empty());
        assert!(page.is_terminal());

        let page = Page::decode(json!({ "queues": null }), &HeaderMap::new(), "queues", None)
            .unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_decode_null_body_is_empty() {
        let page = Page::decode(Value::Null, &HeaderMap::new(), "items", None).unwrap();
        assert!(page.items.is_empty());
        assert!(page.is_terminal());
    }

    #[test]
    fn test_decode_non_array_is_malformed() {
        let err = Page::decode(
            json!({ "items": { "id": "A" } }),
            &HeaderMap::new(),
            "items",
            None,
        )
        .unwrap_err();
        assert!(matches!(err, Error::MalformedPage(ref m) if m.contains("an object")));
    }

    #[test]
    fn test_decode_non_object_body_is_malformed() {
        let err = Page::decode(json!([1, 2]), &HeaderMap::new(), "items", None).unwrap_err();
        assert!(matches!(err, Error::MalformedPage(_)));
    }

    #[test]
    fn test_decode_custom_item_key() {
        let body = json!({ "callParks": [{ "id": "P1" }], "items": [{ "id": "ignored" }] });
        let page = Page::decode(body, &HeaderMap::new(), "callParks", None).unwrap();
        assert_eq!(page.items, vec![json!({ "id": "P1" })]);
    }

    #[test]
    fn test_decode_body_cursor() {
        let body = json!({ "items": [], "paging": { "next": "token-2" } });
        let page = Page::decode(body, &HeaderMap::new(), "items", Some("/paging/next")).unwrap();
        assert_eq!(page.next, Some(Cursor::Token("token-2".into())));

        let body = json!({ "items": [], "next": "https://example.com/p3" });
        let page = Page::decode(body, &HeaderMap::new(), "items", Some("next")).unwrap();
        assert_eq!(page.next, Some(Cursor::Url("https://example.com/p3".into())));
    }

    #[test]
    fn test_decode_header_cursor_wins_over_body() {
        let body = json!({ "items": [], "next": "body-token" });
        let page = Page::decode(
            body,
            &link(r#"<https://example.com/from-header>; rel="next""#),
            "items",
            Some("next"),
        )
        .unwrap();
        assert_eq!(page.next, Some(Cursor::Url("https://example.com/from-header".into())));
    }

    #[test]
    fn test_decode_empty_body_cursor_is_terminal() {
        let body = json!({ "items": [], "next": "" });
        let page = Page::decode(body, &HeaderMap::new(), "items", Some("next")).unwrap();
        assert!(page.is_terminal());
    }

    #[test]
    fn test_decode_total_hint() {
        let body = json!({ "items": [], "totalCount": 42 });
        let page = Page::decode(body, &HeaderMap::new(), "items", None).unwrap();
        assert_eq!(page.total, Some(42));
    }

    #[test]
    fn test_query_pairs() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query {
            location_id: Option<String>,
            max: u32,
            calling_data: bool,
            skip: Option<String>,
            ids: Vec<String>,
        }

        let pairs = query_pairs(&Query {
            location_id: Some("L1".into()),
            max: 50,
            calling_data: true,
            skip: None,
            ids: vec!["a".into(), "b".into()],
        })
        .unwrap();

        assert!(pairs.contains(&("locationId".into(), "L1".into())));
        assert!(pairs.contains(&("max".into(), "50".into())));
        assert!(pairs.contains(&("callingData".into(), "true".into())));
        assert!(pairs.contains(&("ids".into(), "a,b".into())));
        assert!(!pairs.iter().any(|(k, _)| k == "skip"));
    }

    #[test]
    fn test_query_pairs_rejects_nested() {
        let err = query_pairs(&json!({ "filter": { "a": 1 } })).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let err = query_pairs(&json!({ "ids": ["a", { "b": 1 }] })).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(ref m) if m.contains("ids") && m.contains("an object")));

        let err = query_pairs(&json!({ "ids": [["a"], ["b"]] })).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(ref m) if m.contains("an array")));
    }
}
