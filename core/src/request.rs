use std::str::FromStr;
use std::time::Duration;

use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;
use http::Uri;

use crate::Error;
use crate::Result;

/// Signing context for request.
///
/// A `SigningRequest` is a detached copy of the parts of a request that take
/// part in signing. Building one never touches the original request, so a
/// failed signing leaves the caller's request exactly as it was.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path, percent-encoded as received.
    pub path: String,
    /// HTTP query parameters.
    ///
    /// Holds decoded pairs after [`SigningRequest::build`]. Signers replace
    /// them with their encoded canonical form before [`SigningRequest::apply`].
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &http::request::Parts) -> Result<Self> {
        let uri = parts.uri.clone().into_parts();
        let paq = uri
            .path_and_query
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme.unwrap_or(Scheme::HTTP),
            authority: uri.authority.ok_or_else(|| {
                Error::request_invalid("request without authority is invalid for signing")
            })?,
            path: paq.path().to_string(),
            query: paq
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),

            headers: parts.headers.clone(),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    ///
    /// The new uri is built before anything is written, so `parts` is only
    /// modified when the whole context can be applied.
    pub fn apply(self, parts: &mut http::request::Parts) -> Result<()> {
        let query_size = self.query_size();

        let paq = if query_size == 0 {
            self.path
        } else {
            let mut s = self.path;
            s.reserve(query_size + self.query.len() * 2);

            s.push('?');
            for (i, (k, v)) in self.query.iter().enumerate() {
                if i > 0 {
                    s.push('&');
                }

                s.push_str(k);
                if !v.is_empty() {
                    s.push('=');
                    s.push_str(v);
                }
            }

            s
        };

        let mut uri_parts = http::uri::Parts::default();
        uri_parts.scheme = Some(self.scheme);
        uri_parts.authority = Some(self.authority);
        uri_parts.path_and_query = Some(PathAndQuery::from_str(&paq)?);
        let uri = Uri::from_parts(uri_parts)?;

        parts.method = self.method;
        parts.uri = uri;
        parts.headers = self.headers;

        Ok(())
    }

    /// Get query size.
    #[inline]
    pub fn query_size(&self) -> usize {
        self.query
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum::<usize>()
    }

    /// Push a new query pair into query list.
    #[inline]
    pub fn query_push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    /// Normalize header value.
    ///
    /// Leading and trailing whitespace is trimmed and every inner run of
    /// spaces or tabs collapses into a single space. The value must be UTF-8.
    pub fn header_value_normalize(v: &HeaderValue) -> Result<String> {
        let s = std::str::from_utf8(v.as_bytes())?;

        let mut out = String::with_capacity(s.len());
        for word in s.split([' ', '\t']).filter(|w| !w.is_empty()) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }

        Ok(out)
    }

    /// Get header names as sorted vector.
    pub fn header_name_to_vec_sorted(&self) -> Vec<&str> {
        let mut h = self
            .headers
            .keys()
            .map(|k| k.as_str())
            .collect::<Vec<&str>>();
        h.sort_unstable();

        h
    }
}

/// SigningMethod is the method that used in signing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SigningMethod {
    /// Signing with header.
    Header,
    /// Signing with query, the signature stays valid for the given duration.
    Query(Duration),
}
