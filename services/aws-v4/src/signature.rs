use std::fmt::Write;

use log::debug;
use sigv4_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use sigv4_core::time::{format_date, format_iso8601};
use sigv4_core::Result;
use zeroize::Zeroizing;

use crate::constants::{AWS4_HMAC_SHA256, AWS4_REQUEST, AWS4_SECRET_PREFIX};
use crate::CredentialScope;

/// Build the string to sign.
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20220313T072004Z
/// 20220313/<region>/<service>/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(canonical_request: &str, scope: &CredentialScope<'_>) -> Result<String> {
    let mut f = String::with_capacity(128);
    writeln!(f, "{AWS4_HMAC_SHA256}")?;
    writeln!(f, "{}", format_iso8601(scope.time()))?;
    writeln!(f, "{scope}")?;
    write!(f, "{}", hex_sha256(canonical_request.as_bytes()))?;

    Ok(f)
}

/// Derive the signing key through the HMAC chain
/// `AWS4<secret>` → date → region → service → `aws4_request`.
///
/// The secret copy and every intermediate key are wiped on drop.
pub fn generate_signing_key(secret: &str, scope: &CredentialScope<'_>) -> Zeroizing<Vec<u8>> {
    // Sign secret
    let secret = Zeroizing::new(format!("{AWS4_SECRET_PREFIX}{secret}"));
    // Sign date
    let sign_date = Zeroizing::new(hmac_sha256(
        secret.as_bytes(),
        format_date(scope.time()).as_bytes(),
    ));
    // Sign region
    let sign_region = Zeroizing::new(hmac_sha256(&sign_date, scope.region().as_bytes()));
    // Sign service
    let sign_service = Zeroizing::new(hmac_sha256(&sign_region, scope.service().as_bytes()));
    // Sign request
    Zeroizing::new(hmac_sha256(&sign_service, AWS4_REQUEST.as_bytes()))
}

/// Compute the lower-case hex signature of a canonical request.
///
/// The timestamp is the one carried by `scope`.
pub fn sign(canonical_request: &str, scope: &CredentialScope<'_>, secret: &str) -> Result<String> {
    let string_to_sign = string_to_sign(canonical_request, scope)?;
    debug!("calculated string to sign: {string_to_sign}");

    let signing_key = generate_signing_key(secret, scope);
    Ok(hex_hmac_sha256(&signing_key, string_to_sign.as_bytes()))
}
