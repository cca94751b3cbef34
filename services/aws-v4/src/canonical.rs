//! Canonical request construction.
//!
//! ```text
//! HTTPRequestMethod\n
//! CanonicalURI\n
//! CanonicalQueryString\n
//! CanonicalHeaders\n
//! SignedHeaders\n
//! HashedPayload
//! ```
//!
//! - [Create a canonical request](https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html#create-canonical-request)

use std::fmt::Write;

use percent_encoding::{percent_decode_str, utf8_percent_encode};
use sigv4_core::hash::hex_sha256;
use sigv4_core::{Error, Result, SigningRequest};

use crate::constants::{
    AWS_URI_ENCODE_SET, UNSIGNED_HEADERS, UNSIGNED_PAYLOAD, X_AMZ_CONTENT_SHA_256,
};

/// How the request path is written into the canonical URI.
///
/// The path of a request is always taken as already percent-encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathEncoding {
    /// Encode every segment once more, so `%20` becomes `%2520`.
    ///
    /// Every service except S3 expects this.
    #[default]
    Double,
    /// Decode every segment and encode it once, so `%7e` becomes `~`.
    ///
    /// S3 expects this. An encoded `%2F` stays inside its segment.
    Single,
}

/// Build the canonical request string of `req`.
///
/// `signed_headers` must be sorted lower-case names of headers present on
/// `req`, usually the output of [`signed_header_names`]. The payload hash is
/// read from `x-amz-content-sha256`, `UNSIGNED-PAYLOAD` is used if it's absent.
pub fn canonicalize(
    req: &SigningRequest,
    signed_headers: &[&str],
    path_encoding: PathEncoding,
) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    writeln!(f, "{}", req.method)?;
    writeln!(f, "{}", canonical_uri(req, path_encoding)?)?;
    writeln!(f, "{}", canonical_query(&req.query))?;
    for name in signed_headers {
        writeln!(f, "{}:{}", name, canonical_header_value(req, name)?)?;
    }
    writeln!(f)?;
    writeln!(f, "{}", signed_headers.join(";"))?;

    match req.headers.get(X_AMZ_CONTENT_SHA_256) {
        Some(v) => write!(f, "{}", v.to_str()?)?,
        None => write!(f, "{UNSIGNED_PAYLOAD}")?,
    }

    Ok(f)
}

/// Canonical URI of the request.
///
/// The raw path is split on `/` and every segment is encoded with the
/// unreserved set, see [`PathEncoding`] for how existing escapes are treated.
pub fn canonical_uri(req: &SigningRequest, path_encoding: PathEncoding) -> Result<String> {
    if req.path.is_empty() {
        return Ok("/".to_string());
    }

    let mut segments = Vec::new();
    for segment in req.path.split('/') {
        let segment = match path_encoding {
            PathEncoding::Double => utf8_percent_encode(segment, &AWS_URI_ENCODE_SET).to_string(),
            PathEncoding::Single => {
                let decoded = percent_decode_str(segment).decode_utf8().map_err(|e| {
                    Error::request_invalid("request path is not valid utf-8").with_source(e)
                })?;
                utf8_percent_encode(&decoded, &AWS_URI_ENCODE_SET).to_string()
            }
        };
        segments.push(segment);
    }

    Ok(segments.join("/"))
}

/// Encode every query pair, then sort them by encoded name and value.
///
/// Sorting happens on the encoded form, which may order pairs differently
/// than their raw form does.
pub fn encode_query(query: &[(String, String)]) -> Vec<(String, String)> {
    let mut encoded = query
        .iter()
        .map(|(k, v)| {
            (
                utf8_percent_encode(k, &AWS_URI_ENCODE_SET).to_string(),
                utf8_percent_encode(v, &AWS_URI_ENCODE_SET).to_string(),
            )
        })
        .collect::<Vec<_>>();
    encoded.sort();

    encoded
}

/// Canonical query string: encoded, sorted and joined pairs.
///
/// A pair without value renders as `name=`.
pub fn canonical_query(query: &[(String, String)]) -> String {
    encode_query(query)
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Canonical value of header `name`.
///
/// Every value is normalized, multiple values are joined by `,` in the order
/// they were inserted.
pub fn canonical_header_value(req: &SigningRequest, name: &str) -> Result<String> {
    let mut values = Vec::new();
    for value in req.headers.get_all(name) {
        values.push(SigningRequest::header_value_normalize(value).map_err(|e| {
            Error::request_invalid(format!("value of header {name} is not valid text"))
                .with_source(e)
        })?);
    }

    Ok(values.join(","))
}

/// Sorted names of all headers that take part in signing.
///
/// Every header present on the request is signed, except `authorization`
/// which carries the signature itself and the hop headers `expect` and
/// `x-amzn-trace-id`.
pub fn signed_header_names(req: &SigningRequest) -> Vec<&str> {
    req.header_name_to_vec_sorted()
        .into_iter()
        .filter(|name| !UNSIGNED_HEADERS.contains(name))
        .collect()
}

/// Hex encoded SHA256 of the request body.
pub fn payload_hash(body: &[u8]) -> String {
    hex_sha256(body)
}
