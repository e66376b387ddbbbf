//! App Router

use salvo::Router;

use crate::products;

pub(crate) fn app_router() -> Router {
    Router::with_path("products")
        .get(products::index::handler)
        .push(Router::with_path("{id:num}").get(products::get::handler))
}
