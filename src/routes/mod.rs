//! Request routing
//!
//! Exact matches on (method, path); no wildcards, no trailing-slash
//! normalization. Anything unmatched, including unknown methods, is 404.

pub mod handlers;

use crate::catalog::Catalog;
use crate::config::PagesConfig;
use crate::http::request::{Method, Request};
use crate::http::response::Response;

pub use handlers::HandlerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Products,
    AddProduct,
    NotFound,
}

/// Selects the handler for a method and path.
///
/// # Example
///
/// ```
/// # use shopfront::http::request::Method;
/// # use shopfront::routes::{resolve, Route};
/// assert_eq!(resolve(&Method::GET, "/products"), Route::Products);
/// assert_eq!(resolve(&Method::POST, "/products"), Route::NotFound);
/// ```
pub fn resolve(method: &Method, path: &str) -> Route {
    match (method, path) {
        (Method::GET, "/home") => Route::Home,
        (Method::GET, "/about") => Route::About,
        (Method::GET, "/products") => Route::Products,
        (Method::POST, "/add-product") => Route::AddProduct,
        _ => Route::NotFound,
    }
}

/// Routes `req` and runs the selected handler.
pub async fn dispatch(
    req: &Request,
    catalog: &Catalog,
    pages: &PagesConfig,
) -> Result<Response, HandlerError> {
    let response = match resolve(&req.method, &req.path) {
        Route::Home => handlers::home(pages),
        Route::About => handlers::about(pages),
        Route::Products => handlers::products(req, catalog).await?,
        Route::AddProduct => handlers::add_product(req, catalog).await,
        Route::NotFound => handlers::not_found(),
    };

    Ok(response)
}
