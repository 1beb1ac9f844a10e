use crate::http::request::{Method, Request};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The request line has fewer than two space-separated tokens.
    #[error("malformed request line")]
    MalformedRequestLine,
    /// The stream ended before the blank line closing the header block.
    #[error("stream ended before end of headers")]
    UnterminatedHeaders,
    /// The request head grew past the connection's buffer limit.
    #[error("request head exceeds {limit} bytes")]
    HeadersTooLarge { limit: usize },
    /// More input is needed.
    #[error("incomplete request")]
    Incomplete,
}

/// Parses a request from the bytes received so far on a still-open stream.
///
/// Returns the request and the number of bytes consumed up to and including
/// the blank line. `ParseError::Incomplete` means the caller should read more.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    parse(buf, false)
}

/// Parses a request from a buffer whose stream has reached end-of-file.
///
/// A trailing fragment without a newline counts as a last line, and running
/// out of lines before the blank line is `ParseError::UnterminatedHeaders`.
pub fn parse_final_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    parse(buf, true)
}

fn parse(buf: &[u8], eof: bool) -> Result<(Request, usize), ParseError> {
    let mut lines = Lines { buf, pos: 0, eof };

    // Request line
    let request_line = match lines.next_line() {
        Some(line) => line,
        None if eof => return Err(ParseError::MalformedRequestLine),
        None => return Err(ParseError::Incomplete),
    };

    let tokens = split_tokens(&request_line, " ");
    let [method, target, ..] = tokens.as_slice() else {
        return Err(ParseError::MalformedRequestLine);
    };

    let (path, query_params) = match target.split_once('?') {
        Some((path, query)) => (path, parse_query(query)),
        None => (*target, HashMap::new()),
    };

    // Headers
    let mut headers = HashMap::new();

    loop {
        let line = match lines.next_line() {
            Some(line) => line,
            None if eof => return Err(ParseError::UnterminatedHeaders),
            None => return Err(ParseError::Incomplete),
        };

        if line.is_empty() {
            break;
        }

        if let Some((key, value)) = split_pair(&line, ": ") {
            headers.insert(key.to_string(), value.to_string());
        }
    }

    let request = Request {
        method: Method::parse(method),
        path: path.to_string(),
        headers,
        query_params,
    };

    Ok((request, lines.pos))
}

/// Parses `a=1&b=2` into a map. Pairs that don't split into exactly a key
/// and a value (`a`, `a=`, `a=b=c`) are skipped. No percent-decoding.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter_map(|pair| split_pair(pair, "="))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Splits on every `sep`, dropping trailing empty pieces.
fn split_tokens<'a>(s: &'a str, sep: &str) -> Vec<&'a str> {
    let mut parts: Vec<&str> = s.split(sep).collect();
    while parts.last() == Some(&"") {
        parts.pop();
    }
    parts
}

fn split_pair<'a>(s: &'a str, sep: &str) -> Option<(&'a str, &'a str)> {
    match split_tokens(s, sep).as_slice() {
        [key, value] => Some((*key, *value)),
        _ => None,
    }
}

struct Lines<'a> {
    buf: &'a [u8],
    pos: usize,
    eof: bool,
}

impl Lines<'_> {
    fn next_line(&mut self) -> Option<String> {
        let buf = self.buf;
        let rest = buf.get(self.pos..).filter(|r| !r.is_empty())?;

        let raw = match rest.iter().position(|&b| b == b'\n') {
            Some(i) => {
                self.pos += i + 1;
                &rest[..i]
            }
            None if self.eof => {
                self.pos = buf.len();
                rest
            }
            None => return None,
        };

        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        Some(String::from_utf8_lossy(raw).into_owned())
    }
}
