use std::fmt::Write;
use thiserror::Error;

use crate::catalog::{Catalog, Item, PriceFilter};
use crate::config::PagesConfig;
use crate::http::request::Request;
use crate::http::response::Response;

pub const ADDED: &str = "Product added successfully";
pub const MISSING_NAME_OR_PRICE: &str = "Missing name or price";
pub const INVALID_PRICE_FORMAT: &str = "Invalid price format";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandlerError {
    #[error("query parameter {name} is not a valid integer: {value:?}")]
    InvalidNumericParameter { name: &'static str, value: String },
}

pub fn home(pages: &PagesConfig) -> Response {
    Response::ok(pages.home.as_str())
}

pub fn about(pages: &PagesConfig) -> Response {
    Response::ok(pages.about.as_str())
}

pub fn not_found() -> Response {
    Response::not_found()
}

/// `GET /products`
///
/// Optional `minPrice`, `topPrice` and `limit` select an inclusive price range
/// and cap the number of items listed. A non-integer value, or a negative
/// `limit`, is an `InvalidNumericParameter`.
pub async fn products(req: &Request, catalog: &Catalog) -> Result<Response, HandlerError> {
    let defaults = PriceFilter::default();

    let min_price = int_param(req, "minPrice")?.map_or(defaults.min_price, i64::from);
    let top_price = int_param(req, "topPrice")?.map_or(defaults.top_price, i64::from);
    let limit = match int_param(req, "limit")? {
        Some(n) => Some(usize::try_from(n).map_err(|_| invalid("limit", n.to_string()))?),
        None => None,
    };

    let items = catalog
        .filter(PriceFilter {
            min_price,
            top_price,
            limit,
        })
        .await;

    Ok(Response::ok(render_products(&items)))
}

/// `POST /add-product?name=..&price=..`
///
/// Both fields come from the query string; the request body is never read.
pub async fn add_product(req: &Request, catalog: &Catalog) -> Response {
    let (Some(name), Some(price)) = (req.query("name"), req.query("price")) else {
        return Response::bad_request(MISSING_NAME_OR_PRICE);
    };

    let Some(price) = price
        .parse::<i32>()
        .ok()
        .and_then(|p| u32::try_from(p).ok())
    else {
        return Response::bad_request(INVALID_PRICE_FORMAT);
    };

    catalog.append(Item::new(name, price)).await;
    Response::ok(ADDED)
}

pub fn render_products(items: &[Item]) -> String {
    let mut body = String::from("<html><body><h1>Products</h1><ul>");
    for item in items {
        let _ = write!(body, "<li>{} - {}</li>", item.name, item.price);
    }
    body.push_str("</ul></body></html>");
    body
}

fn int_param(req: &Request, name: &'static str) -> Result<Option<i32>, HandlerError> {
    req.query(name)
        .map(|raw| raw.parse::<i32>().map_err(|_| invalid(name, raw.to_string())))
        .transpose()
}

fn invalid(name: &'static str, value: String) -> HandlerError {
    HandlerError::InvalidNumericParameter { name, value }
}
