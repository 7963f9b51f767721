//! Query parameters and pagination utilities

use crate::config::{ListingConfig, MalformedFilterPolicy};
use crate::core::error::QueryError;
use crate::core::filter::FieldMatchMap;
use crate::core::sort::SortKey;
use serde::{Deserialize, Serialize};

/// Raw listing parameters, exactly as the client sent them
///
/// Every field stays a string: they are untrusted and the response builder
/// echoes `limit`, `sort` and `query` back verbatim in navigation links.
///
/// # Example
/// ```rust,ignore
/// // In handler:
/// pub async fn list_products(
///     Query(params): Query<ListingParams>,
/// ) -> Result<Json<ListingResponse>, CatalogError> {
///     let spec = QuerySpec::decode(&params, &config.listing)?;
/// }
///
/// // Usage:
/// GET /api/products?page=2&limit=5
/// GET /api/products?sort=desc&query={"category":"tools"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ListingParams {
    /// Page size, base-10 integer
    pub limit: Option<String>,

    /// Page number, starts at 1
    pub page: Option<String>,

    /// `asc` or `desc` by price
    pub sort: Option<String>,

    /// Filter as a JSON object, see [`FieldMatchMap`]
    pub query: Option<String>,
}

/// Validated listing request
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    pub filter: FieldMatchMap,
    /// Always ≥ 1
    pub page: usize,
    /// Always ≥ 1 and ≤ the configured maximum
    pub limit: usize,
    pub sort: SortKey,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            filter: FieldMatchMap::new(),
            page: 1,
            limit: ListingConfig::default().default_limit,
            sort: SortKey::None,
        }
    }
}

impl QuerySpec {
    /// Decode raw parameters into a spec
    ///
    /// Non-numeric, zero or negative `limit`/`page` fall back to their
    /// defaults unless `strict_pagination` is set. A malformed `query` is
    /// rejected or dropped according to `malformed_filter`.
    pub fn decode(raw: &ListingParams, config: &ListingConfig) -> Result<Self, QueryError> {
        let strict = config.strict_pagination;

        let limit = parse_positive("limit", raw.limit.as_deref(), config.default_limit, strict)?
            .min(config.max_limit);
        let page = parse_positive("page", raw.page.as_deref(), 1, strict)?;
        let sort = SortKey::resolve(raw.sort.as_deref());

        let filter = match FieldMatchMap::parse(raw.query.as_deref()) {
            Ok(filter) => filter,
            Err(err) => match config.malformed_filter {
                MalformedFilterPolicy::Reject => return Err(err),
                MalformedFilterPolicy::Ignore => {
                    tracing::warn!(error = %err, "ignoring malformed listing filter");
                    FieldMatchMap::new()
                }
            },
        };

        Ok(Self {
            filter,
            page,
            limit,
            sort,
        })
    }
}

/// Parse a positive base-10 integer, falling back to `default`
fn parse_positive(
    name: &str,
    raw: Option<&str>,
    default: usize,
    strict: bool,
) -> Result<usize, QueryError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(default);
    };

    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ if strict => Err(QueryError::InvalidParameter {
            name: name.to_string(),
            value: raw.to_string(),
        }),
        _ => Ok(default),
    }
}

/// One page of a listing plus navigation metadata
///
/// `has_prev_page` ⇔ `prev_page.is_some()` and `has_next_page` ⇔
/// `next_page.is_some()` always hold. `total_pages` is 0 when nothing
/// matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult<T> {
    pub docs: Vec<T>,

    /// Number of records matching the filter, all pages included
    pub total_docs: usize,

    pub limit: usize,

    /// Requested page, even when it lies past the last page
    pub page: usize,

    pub total_pages: usize,

    pub has_prev_page: bool,
    pub prev_page: Option<usize>,

    pub has_next_page: bool,
    pub next_page: Option<usize>,
}

impl<T> PageResult<T> {
    /// Cut one page out of the full, already filtered and ordered, result set
    ///
    /// A page past the end yields no docs, no next page, and a previous page
    /// pointing at the last page that has records.
    pub fn paginate(items: Vec<T>, page: usize, limit: usize) -> Self {
        // Ensure limit is at least 1 to avoid division by zero
        let limit = limit.max(1);
        let page = page.max(1);
        let total_docs = items.len();
        let total_pages = if total_docs == 0 {
            0
        } else {
            total_docs.div_ceil(limit)
        };

        let start = (page - 1).saturating_mul(limit);
        let docs: Vec<T> = items.into_iter().skip(start).take(limit).collect();

        let has_next_page = page < total_pages;
        let has_prev_page = page > 1 && total_pages > 0;

        Self {
            docs,
            total_docs,
            limit,
            page,
            total_pages,
            has_prev_page,
            prev_page: has_prev_page.then(|| (page - 1).min(total_pages)),
            has_next_page,
            next_page: has_next_page.then(|| page + 1),
        }
    }

    /// Transform the docs, keeping the metadata
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PageResult<U> {
        PageResult {
            docs: self.docs.into_iter().map(f).collect(),
            total_docs: self.total_docs,
            limit: self.limit,
            page: self.page,
            total_pages: self.total_pages,
            has_prev_page: self.has_prev_page,
            prev_page: self.prev_page,
            has_next_page: self.has_next_page,
            next_page: self.next_page,
        }
    }
}
