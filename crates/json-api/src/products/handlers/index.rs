//! Product Index Handler

use salvo::prelude::*;

use catalog_app::domain::products::query::ProductQuery;

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse, query::ProductIndexQuery},
};

/// Product Index Handler
///
/// Returns one page of products. `minPrice` and `maxPrice` only filter when
/// both are supplied; `name` is accepted and ignored.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let query: ProductQuery = req
        .parse_queries::<ProductIndexQuery>()
        .or_400("invalid product query")?
        .into();

    let products = state
        .products
        .list_products(query)
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::domain::products::{
        MockProductsService, ProductsServiceError, query::Pagination,
    };

    use crate::{products::handlers::tests::make_product, test_helpers::products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_uses_default_query() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .withf(|query| *query == ProductQuery::default())
            .return_once(|_| Ok(vec![]));

        repo.expect_get_product().never();

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_empty_array() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(|_| Ok(vec![]));

        repo.expect_get_product().never();

        let response: Vec<ProductResponse> = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert!(response.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_products_in_service_order() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products().once().return_once(|_| {
            Ok(vec![
                make_product(1, "MWB", Decimal::new(280, 2)),
                make_product(2, "MWO", Decimal::new(310, 2)),
            ])
        });

        repo.expect_get_product().never();

        let response: Vec<ProductResponse> = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        let skus: Vec<_> = response.iter().map(|product| product.sku.as_str()).collect();

        assert_eq!(skus, vec!["MWB", "MWO"]);
        assert_eq!(
            response.get(1).map(|product| product.price),
            Some(Decimal::new(310, 2))
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_filters() -> TestResult {
        let mut repo = MockProductsService::new();

        let expected = ProductQuery {
            pagination: Pagination::new(Some(2), Some(10)),
            sku: Some("MWB".to_owned()),
            min_price: Some(Decimal::new(150, 2)),
            max_price: Some(Decimal::from(3)),
            name: Some("Water".to_owned()),
        };

        repo.expect_list_products()
            .once()
            .withf(move |query| *query == expected)
            .return_once(|_| Ok(vec![]));

        repo.expect_get_product().never();

        let res = TestClient::get(
            "http://example.com/products?page=2&size=10&sku=MWB&minPrice=1.50&maxPrice=3&name=Water",
        )
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_non_positive_pagination_uses_defaults() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .withf(|query| query.pagination == Pagination::default())
            .return_once(|_| Ok(vec![]));

        repo.expect_get_product().never();

        let res = TestClient::get("http://example.com/products?page=0&size=-3")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_malformed_price_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products().never();
        repo.expect_get_product().never();

        let res = TestClient::get("http://example.com/products?minPrice=cheap")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_malformed_page_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products().never();
        repo.expect_get_product().never();

        let res = TestClient::get("http://example.com/products?page=first")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_service_error_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(|_| Err(ProductsServiceError::InvalidData));

        repo.expect_get_product().never();

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
