//! Page request parameters for the catalog listing endpoint.

use serde::{Deserialize, Serialize};

/// Field the catalog sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortField {
    /// Sort by product name.
    #[default]
    Name,
    /// Sort by price.
    Price,
    /// Sort by creation time.
    CreatedAt,
}

impl SortField {
    /// Wire value for the `sortBy` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Price => "price",
            SortField::CreatedAt => "createdAt",
        }
    }

    /// Parse a wire value; unknown values map to `None`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "name" => Some(SortField::Name),
            "price" => Some(SortField::Price),
            "createdAt" => Some(SortField::CreatedAt),
            _ => None,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Wire value for the `orderBy` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// Parse a wire value, case-insensitively.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "ASC" => Some(SortOrder::Asc),
            "DESC" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Parameters for one page fetch against the catalog listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number, 1-indexed.
    pub page: u32,
    /// Page size.
    pub rows: u32,
    /// Sort field.
    pub sort_by: SortField,
    /// Sort direction.
    pub order_by: SortOrder,
}

impl PageRequest {
    /// Default page size observed upstream.
    pub const DEFAULT_ROWS: u32 = 10;

    /// Request a given page at the default page size and sort.
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Override the page size.
    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    /// Override the sort.
    pub fn with_sort(mut self, sort_by: SortField, order_by: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.order_by = order_by;
        self
    }

    /// Render the query parameters in the order the endpoint documents
    /// them: `page`, `rows`, `sortBy`, `orderBy`.
    pub fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("page", self.page.to_string()),
            ("rows", self.rows.to_string()),
            ("sortBy", self.sort_by.as_str().to_string()),
            ("orderBy", self.order_by.as_str().to_string()),
        ]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            rows: Self::DEFAULT_ROWS,
            sort_by: SortField::default(),
            order_by: SortOrder::default(),
        }
    }
}
