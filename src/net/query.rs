//! Pagination, sort, and search query construction for list endpoints.
//!
//! The backend takes Spring-style parameters: `page`, `size`, a combined
//! `sort=<field>,<ASC|DESC>`, and an optional `search`. An empty search is
//! omitted entirely rather than sent as `search=`.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::config::pagination;

/// Sort direction for list endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Query parameters for a paginated list request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub size: u32,
    pub sort_field: String,
    pub direction: SortDirection,
    pub search: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: pagination::DEFAULT_PAGE,
            size: pagination::DEFAULT_SIZE,
            sort_field: "createDate".to_owned(),
            direction: SortDirection::Desc,
            search: String::new(),
        }
    }
}

impl ListQuery {
    /// Render as a URL query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut out = format!(
            "page={}&size={}&sort={},{}",
            self.page,
            self.size,
            self.sort_field,
            self.direction.as_str()
        );
        let search = self.search.trim();
        if !search.is_empty() {
            out.push_str("&search=");
            out.push_str(&percent_encode(search));
        }
        out
    }

    /// Whether this is the untouched default view (fresh page load).
    pub fn is_default_view(&self) -> bool {
        *self == Self::default()
    }
}

/// Percent-encode a query parameter value.
///
/// Unreserved characters per RFC 3986 pass through; everything else is
/// encoded byte-wise, so multi-byte UTF-8 is handled correctly.
pub(crate) fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
