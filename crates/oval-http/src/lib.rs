//! Blocking HTTP helper: one call, one request, the body back as text.
//!
//! ```rust,ignore
//! let query = oval_http::encode_params([("search_query", "pink+floyd")]);
//! let body = oval_http::request("GET", "https://www.youtube.com/results", &query)?;
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("unsupported HTTP method `{0}` (expected GET or POST)")]
    UnsupportedMethod(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Method {
    Get,
    Post,
}

impl FromStr for Method {
    type Err = HttpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("GET") {
            Ok(Method::Get)
        } else if s.eq_ignore_ascii_case("POST") {
            Ok(Method::Post)
        } else {
            Err(HttpError::UnsupportedMethod(s.to_owned()))
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
        })
    }
}

/// Joins pairs as `k=v&k=v`, with no trailing separator.
///
/// Keys and values are written as given; callers encode them first.
pub fn encode_params<I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::new();
    for (k, v) in params {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(k.as_ref());
        out.push('=');
        out.push_str(v.as_ref());
    }
    out
}

/// Target URL for a request: GET carries the parameters in the query string,
/// POST sends them in the body and leaves the URL untouched.
pub fn request_url(method: Method, url: &str, params: &str) -> String {
    match method {
        Method::Get if !params.is_empty() => format!("{url}?{params}"),
        _ => url.to_owned(),
    }
}

/// Performs a blocking request and returns the response body with line
/// breaks removed.
///
/// `method` is `"GET"` or `"POST"` (case-insensitive). Connection failures and
/// non-success statuses are reported as [`HttpError::Transport`].
pub fn request(method: &str, url: &str, params: &str) -> Result<String, HttpError> {
    let method: Method = method.parse()?;
    let target = request_url(method, url, params);
    log::debug!("http: {method} {target}");

    let client = reqwest::blocking::Client::new();
    let builder = match method {
        Method::Get => client.get(&target),
        Method::Post => client
            .post(&target)
            .header(reqwest::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(params.to_owned()),
    };

    let body = builder.send()?.error_for_status()?.text()?;
    Ok(body.lines().collect())
}
