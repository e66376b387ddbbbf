//! Product listing filters and pagination.

use rust_decimal::Decimal;

/// Page used when none (or a non-positive one) is requested.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when none (or a non-positive one) is requested.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// 1-based page window over the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    size: u32,
}

impl Pagination {
    /// Normalise raw page parameters, falling back to the defaults for
    /// missing or non-positive values.
    #[must_use]
    pub fn new(page: Option<i64>, size: Option<i64>) -> Self {
        Self {
            page: positive_or(page, DEFAULT_PAGE),
            size: positive_or(size, DEFAULT_PAGE_SIZE),
        }
    }

    #[must_use]
    pub fn page(self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn size(self) -> u32 {
        self.size
    }

    /// Rows to take.
    #[must_use]
    pub fn limit(self) -> i64 {
        i64::from(self.size)
    }

    /// Rows to skip before the page starts.
    #[must_use]
    pub fn offset(self) -> i64 {
        i64::from(self.page - 1).saturating_mul(i64::from(self.size))
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn positive_or(value: Option<i64>, default: u32) -> u32 {
    match value {
        Some(value) if value > 0 => u32::try_from(value).unwrap_or(u32::MAX),
        Some(_) | None => default,
    }
}

/// Product listing request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub pagination: Pagination,
    pub sku: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,

    /// Accepted for compatibility with existing clients; never filters.
    pub name: Option<String>,
}

/// A single restriction applied to the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProductPredicate<'a> {
    /// `min <= price <= max`
    PriceBetween { min: Decimal, max: Decimal },

    /// Case-sensitive exact SKU match.
    SkuEquals(&'a str),
}

impl ProductQuery {
    /// Predicates this query contributes, in application order.
    ///
    /// The price range only applies when both bounds are present, and an
    /// empty SKU is treated as absent.
    pub(crate) fn predicates(&self) -> Vec<ProductPredicate<'_>> {
        let mut predicates = Vec::with_capacity(2);

        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            predicates.push(ProductPredicate::PriceBetween { min, max });
        }

        if let Some(sku) = self.sku.as_deref().filter(|sku| !sku.is_empty()) {
            predicates.push(ProductPredicate::SkuEquals(sku));
        }

        predicates
    }
}
