//! Listing response envelope

use crate::config::{LinkStyle, ListingConfig};
use crate::core::query::{ListingParams, PageResult};
use serde::Serialize;
use std::fmt::Write;

/// Success body of the listing endpoint
///
/// Field names and order are part of the public contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse<T> {
    pub status: &'static str,
    pub payload: Vec<T>,
    pub total_pages: usize,
    pub prev_page: Option<usize>,
    pub next_page: Option<usize>,
    pub page: usize,
    pub has_prev_page: bool,
    pub has_next_page: bool,
    pub prev_link: Option<String>,
    pub next_link: Option<String>,
}

impl<T> ListingResponse<T> {
    /// Assemble the envelope for a page
    ///
    /// Links reuse the client's own `limit`, `sort` and `query` strings, not
    /// the decoded values, so following a link replays the same request with
    /// only the page changed.
    pub fn build(result: PageResult<T>, raw: &ListingParams, config: &ListingConfig) -> Self {
        let prev_page = result.prev_page.filter(|_| result.has_prev_page);
        let next_page = result.next_page.filter(|_| result.has_next_page);

        Self {
            status: "success",
            payload: result.docs,
            total_pages: result.total_pages,
            prev_page,
            next_page,
            page: result.page,
            has_prev_page: result.has_prev_page,
            has_next_page: result.has_next_page,
            prev_link: prev_page.map(|page| page_link(raw, page, config)),
            next_link: next_page.map(|page| page_link(raw, page, config)),
        }
    }
}

/// Build `<base>?limit=..&page=..&sort=..&query=..` for a page
pub fn page_link(raw: &ListingParams, page: usize, config: &ListingConfig) -> String {
    let limit = raw
        .limit
        .clone()
        .unwrap_or_else(|| config.default_limit.to_string());

    let mut link = format!("{}?limit={}&page={}", config.base_path, limit, page);
    push_echoed(&mut link, "sort", raw.sort.as_deref(), config.link_style);
    push_echoed(&mut link, "query", raw.query.as_deref(), config.link_style);
    link
}

fn push_echoed(link: &mut String, name: &str, value: Option<&str>, style: LinkStyle) {
    match (value, style) {
        (Some(value), _) => {
            let _ = write!(link, "&{}={}", name, value);
        }
        (None, LinkStyle::Legacy) => {
            let _ = write!(link, "&{}=undefined", name);
        }
        (None, LinkStyle::Omit) => {}
    }
}
