/// HTTP status codes the server produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use shopfront::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// Only written on the wire when the strict status line is enabled.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
        }
    }
}

pub const TEXT_HTML: &str = "text/html";

pub const NOT_FOUND_PAGE: &str = "<html><body><h1>404 Not Found</h1></body></html>";

/// A response produced by a handler: status, content type and body.
///
/// Content-Length is not stored; the writer computes it from `body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: String,
    pub body: String,
}

impl Response {
    pub fn new(status: StatusCode, content_type: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    /// Creates a `text/html` response.
    pub fn html(status: StatusCode, body: impl Into<String>) -> Self {
        Self::new(status, TEXT_HTML, body)
    }

    /// Creates a 200 `text/html` response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::html(StatusCode::Ok, body)
    }

    /// Creates a 400 `text/html` response with the given body.
    pub fn bad_request(body: impl Into<String>) -> Self {
        Self::html(StatusCode::BadRequest, body)
    }

    /// Creates the fixed 404 page.
    pub fn not_found() -> Self {
        Self::html(StatusCode::NotFound, NOT_FOUND_PAGE)
    }
}
