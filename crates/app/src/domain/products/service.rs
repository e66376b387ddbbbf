//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::Span;

use crate::{
    database::Db,
    domain::products::{
        errors::ProductsServiceError,
        models::{Product, ProductId},
        query::ProductQuery,
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    #[tracing::instrument(
        name = "products.service.list_products",
        skip(self, query),
        fields(
            page = query.pagination.page(),
            size = query.pagination.size(),
            result_count = tracing::field::Empty
        ),
        err
    )]
    async fn list_products(
        &self,
        query: ProductQuery,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let mut conn = self.db.acquire().await?;

        let products = self.repository.list_products(&mut conn, &query).await?;

        Span::current().record("result_count", products.len());

        Ok(products)
    }

    #[tracing::instrument(
        name = "products.service.get_product",
        skip(self),
        fields(product_id = %product)
    )]
    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError> {
        let mut conn = self.db.acquire().await?;

        let product = self.repository.get_product(&mut conn, product).await?;

        Ok(product)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieve one page of products matching the query filters.
    async fn list_products(&self, query: ProductQuery)
    -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::products::query::Pagination,
        test::{TestContext, helpers::ProductFixture},
    };

    use super::*;

    fn ids(products: &[Product]) -> Vec<ProductId> {
        products.iter().map(|product| product.id).collect()
    }

    /// Four products A..D priced 10, 20, 30, 40 with SKUs "A".."D".
    async fn seed_four(ctx: &TestContext) -> Result<Vec<ProductId>, sqlx::Error> {
        let category = ctx.insert_category("Fixtures").await?;
        let mut inserted = Vec::new();

        for (sku, price) in [("A", 10), ("B", 20), ("C", 30), ("D", 40)] {
            let id = ctx
                .insert_product(ProductFixture::new(category, sku, Decimal::from(price)))
                .await?;

            inserted.push(id);
        }

        Ok(inserted)
    }

    fn page(page: i64, size: i64) -> ProductQuery {
        ProductQuery {
            pagination: Pagination::new(Some(page), Some(size)),
            ..ProductQuery::default()
        }
    }

    #[tokio::test]
    async fn list_products_paginates_in_id_order() -> TestResult {
        let ctx = TestContext::new().await;
        let inserted = seed_four(&ctx).await?;

        let first = ctx.products.list_products(page(1, 2)).await?;
        let second = ctx.products.list_products(page(2, 2)).await?;
        let third = ctx.products.list_products(page(3, 2)).await?;

        assert_eq!(ids(&first), inserted.get(0..2).unwrap_or_default());
        assert_eq!(ids(&second), inserted.get(2..4).unwrap_or_default());
        assert!(third.is_empty(), "page past the end should be empty");

        Ok(())
    }

    #[tokio::test]
    async fn list_products_defaults_to_first_page_of_25() -> TestResult {
        let ctx = TestContext::new().await;
        let category = ctx.insert_category("Bulk").await?;

        for index in 0..30 {
            ctx.insert_product(ProductFixture::new(
                category,
                &format!("BULK{index}"),
                Decimal::ONE,
            ))
            .await?;
        }

        let products = ctx.products.list_products(ProductQuery::default()).await?;

        assert_eq!(products.len(), 25);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_filters_inclusive_price_range() -> TestResult {
        let ctx = TestContext::new().await;
        let inserted = seed_four(&ctx).await?;

        let products = ctx
            .products
            .list_products(ProductQuery {
                min_price: Some(Decimal::from(20)),
                max_price: Some(Decimal::from(30)),
                ..ProductQuery::default()
            })
            .await?;

        assert_eq!(ids(&products), inserted.get(1..3).unwrap_or_default());

        Ok(())
    }

    #[tokio::test]
    async fn list_products_ignores_single_price_bound() -> TestResult {
        let ctx = TestContext::new().await;
        seed_four(&ctx).await?;

        let unfiltered = ctx.products.list_products(ProductQuery::default()).await?;

        let min_only = ctx
            .products
            .list_products(ProductQuery {
                min_price: Some(Decimal::from(35)),
                ..ProductQuery::default()
            })
            .await?;

        let max_only = ctx
            .products
            .list_products(ProductQuery {
                max_price: Some(Decimal::from(15)),
                ..ProductQuery::default()
            })
            .await?;

        assert_eq!(min_only, unfiltered);
        assert_eq!(max_only, unfiltered);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_filters_by_exact_sku() -> TestResult {
        let ctx = TestContext::new().await;
        let inserted = seed_four(&ctx).await?;

        let exact = ctx
            .products
            .list_products(ProductQuery {
                sku: Some("C".to_string()),
                ..ProductQuery::default()
            })
            .await?;

        let lowercase = ctx
            .products
            .list_products(ProductQuery {
                sku: Some("c".to_string()),
                ..ProductQuery::default()
            })
            .await?;

        assert_eq!(ids(&exact), inserted.get(2..3).unwrap_or_default());
        assert!(lowercase.is_empty(), "sku match must be case-sensitive");

        Ok(())
    }

    #[tokio::test]
    async fn list_products_unknown_sku_returns_empty() -> TestResult {
        let ctx = TestContext::new().await;
        seed_four(&ctx).await?;

        let products = ctx
            .products
            .list_products(ProductQuery {
                sku: Some("XYZ".to_string()),
                ..ProductQuery::default()
            })
            .await?;

        assert!(products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn list_products_combines_price_and_sku() -> TestResult {
        let ctx = TestContext::new().await;
        seed_four(&ctx).await?;

        let outside_range = ctx
            .products
            .list_products(ProductQuery {
                sku: Some("D".to_string()),
                min_price: Some(Decimal::from(10)),
                max_price: Some(Decimal::from(30)),
                ..ProductQuery::default()
            })
            .await?;

        assert!(outside_range.is_empty(), "D is priced above the range");

        Ok(())
    }

    #[tokio::test]
    async fn list_products_is_repeatable() -> TestResult {
        let ctx = TestContext::new().await;
        seed_four(&ctx).await?;

        let first = ctx.products.list_products(page(1, 3)).await?;
        let second = ctx.products.list_products(page(1, 3)).await?;

        assert_eq!(first, second);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_ignores_name_filter() -> TestResult {
        let ctx = TestContext::new().await;
        seed_four(&ctx).await?;

        let unfiltered = ctx.products.list_products(ProductQuery::default()).await?;

        let named = ctx
            .products
            .list_products(ProductQuery {
                name: Some("does not exist".to_string()),
                ..ProductQuery::default()
            })
            .await?;

        assert_eq!(named, unfiltered);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_returns_stored_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let category = ctx.insert_category("Mineral Water").await?;

        let id = ctx
            .insert_product(ProductFixture {
                description: "Sparkling water with blueberry.".to_string(),
                is_available: true,
                ..ProductFixture::new(category, "MWB", Decimal::new(280, 2))
            })
            .await?;

        let product = ctx.products.get_product(id).await?;

        assert_eq!(product.id, id);
        assert_eq!(product.sku, "MWB");
        assert_eq!(product.name, "Product MWB");
        assert_eq!(product.description, "Sparkling water with blueberry.");
        assert_eq!(product.price, Decimal::new(280, 2));
        assert!(product.is_available);
        assert_eq!(product.category_id, category);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.get_product(ProductId::from_i32(99_999)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
