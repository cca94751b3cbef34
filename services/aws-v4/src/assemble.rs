//! Header assembly.
//!
//! Headers that take part in signing are injected before canonicalization,
//! the signature itself is assembled afterwards.

use std::time::Duration;

use http::header;
use http::uri::Scheme;
use http::HeaderValue;
use sigv4_core::time::{format_iso8601, DateTime};
use sigv4_core::{Error, Result, SigningMethod, SigningRequest};

use crate::canonical::{payload_hash, signed_header_names};
use crate::constants::*;
use crate::{build_scope, Credential};

/// Inject every header (or presign query parameter) that must be signed.
///
/// Overwrites `host` with the request authority. In header mode
/// `x-amz-date`, `x-amz-content-sha256` and `x-amz-security-token` are
/// overwritten too; in query mode the `X-Amz-*` presign parameters are
/// (re)written instead. A stale `authorization` is always dropped.
pub fn inject_signing_headers(
    req: &mut SigningRequest,
    cred: &Credential,
    body: &[u8],
    time: DateTime,
    method: SigningMethod,
    region: &str,
    service: &str,
) -> Result<()> {
    let host = host_header_value(req)?;
    req.headers.remove(header::AUTHORIZATION);
    req.headers.insert(header::HOST, host);

    match method {
        SigningMethod::Header => {
            req.headers
                .insert(X_AMZ_DATE, HeaderValue::try_from(format_iso8601(time))?);
            req.headers
                .insert(X_AMZ_CONTENT_SHA_256, HeaderValue::try_from(payload_hash(body))?);

            match cred.session_token() {
                Some(token) => {
                    let mut value = HeaderValue::from_str(token)?;
                    // Set token value sensitive to avoid leaking.
                    value.set_sensitive(true);
                    req.headers.insert(X_AMZ_SECURITY_TOKEN, value);
                }
                None => {
                    req.headers.remove(X_AMZ_SECURITY_TOKEN);
                }
            }
        }
        SigningMethod::Query(expires_in) => {
            let expires = check_expires(expires_in)?;
            let signed_headers = signed_header_names(req).join(";");

            req.query.retain(|(k, _)| !is_presign_param(k));
            req.query_push(X_AMZ_ALGORITHM_QUERY, AWS4_HMAC_SHA256);
            req.query_push(
                X_AMZ_CREDENTIAL_QUERY,
                format!(
                    "{}/{}",
                    cred.access_key_id(),
                    build_scope(time, region, service)
                ),
            );
            req.query_push(X_AMZ_DATE_QUERY, format_iso8601(time));
            req.query_push(X_AMZ_EXPIRES_QUERY, expires.to_string());
            req.query_push(X_AMZ_SIGNED_HEADERS_QUERY, signed_headers);
            if let Some(token) = cred.session_token() {
                req.query_push(X_AMZ_SECURITY_TOKEN_QUERY, token);
            }
        }
    }

    Ok(())
}

/// Set the `authorization` header.
///
/// ```text
/// AWS4-HMAC-SHA256 Credential={akid}/{scope}, SignedHeaders={signed}, Signature={signature}
/// ```
pub fn assemble(
    req: &mut SigningRequest,
    scope: &str,
    signed_headers: &str,
    signature: &str,
    access_key_id: &str,
) -> Result<()> {
    let mut authorization = HeaderValue::from_str(&format!(
        "{AWS4_HMAC_SHA256} Credential={access_key_id}/{scope}, SignedHeaders={signed_headers}, Signature={signature}"
    ))?;
    authorization.set_sensitive(true);

    req.headers.insert(header::AUTHORIZATION, authorization);
    Ok(())
}

/// Append the signature to an already encoded presign query.
pub fn assemble_presigned(req: &mut SigningRequest, signature: &str) {
    req.query_push(X_AMZ_SIGNATURE_QUERY, signature);
}

/// Value of the `host` header: the authority without the scheme's default port.
fn host_header_value(req: &SigningRequest) -> Result<HeaderValue> {
    let default_port = if req.scheme == Scheme::HTTPS {
        Some(443)
    } else if req.scheme == Scheme::HTTP {
        Some(80)
    } else {
        None
    };

    let host = match req.authority.port_u16() {
        Some(port) if Some(port) != default_port => req.authority.as_str(),
        _ => req.authority.host(),
    };
    // Userinfo is never part of the host header.
    let host = host.rsplit('@').next().unwrap_or(host);

    Ok(HeaderValue::from_str(host)?)
}

fn check_expires(expires_in: Duration) -> Result<u64> {
    let secs = expires_in.as_secs();
    if secs == 0 || secs > MAX_PRESIGN_EXPIRES_SECS {
        return Err(Error::request_invalid(format!(
            "presign expiry must be between 1 and {MAX_PRESIGN_EXPIRES_SECS} seconds, got {secs}"
        )));
    }

    Ok(secs)
}

fn is_presign_param(name: &str) -> bool {
    [
        X_AMZ_ALGORITHM_QUERY,
        X_AMZ_CREDENTIAL_QUERY,
        X_AMZ_DATE_QUERY,
        X_AMZ_EXPIRES_QUERY,
        X_AMZ_SIGNED_HEADERS_QUERY,
        X_AMZ_SECURITY_TOKEN_QUERY,
        X_AMZ_SIGNATURE_QUERY,
    ]
    .contains(&name)
}
