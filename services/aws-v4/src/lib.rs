//! AWS Signature Version 4 signer.
//!
//! Signing is a fixed pipeline of pure stages, each exported on its own:
//!
//! 1. [`inject_signing_headers`] writes `host`, `x-amz-date`,
//!    `x-amz-content-sha256` and `x-amz-security-token` (or the presign query),
//! 2. [`canonicalize`] builds the canonical request,
//! 3. [`build_scope`] and [`sign`] derive the signature,
//! 4. [`assemble`] writes the `authorization` header.
//!
//! [`RequestSigner`] composes them and implements [`sigv4_core::SignRequest`].
//!
//! ## Example
//!
//! ```
//! use sigv4_aws::{Credential, RequestSigner};
//! use sigv4_core::time::parse_rfc3339;
//! use sigv4_core::{Context, FixedClock, Signer};
//!
//! # fn main() -> sigv4_core::Result<()> {
//! let ctx = Context::new().with_clock(FixedClock::new(parse_rfc3339("2015-01-01T00:00:00Z")?));
//! let signer = Signer::new(
//!     ctx,
//!     Credential::new("akid", "secret", None),
//!     RequestSigner::new("apigateway", "us-east-1"),
//! );
//!
//! let req = http::Request::get("https://apigateway.us-east-1.amazonaws.com/account")
//!     .header("user-agent", "Faraday v0.15.4")
//!     .body(Vec::<u8>::new())?;
//! let req = signer.sign_http_request(req)?;
//!
//! assert!(req.headers()["authorization"]
//!     .to_str()?
//!     .ends_with("Signature=4029fcbe5aae50c588651d5a587f4a9fd2b7ba25bc03e1ce57432c758d1a7816"));
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::EMPTY_STRING_SHA256;
pub use constants::MAX_PRESIGN_EXPIRES_SECS;
pub use constants::UNSIGNED_PAYLOAD;

mod credential;
pub use credential::Credential;

mod canonical;
pub use canonical::canonical_header_value;
pub use canonical::canonical_query;
pub use canonical::canonical_uri;
pub use canonical::canonicalize;
pub use canonical::encode_query;
pub use canonical::payload_hash;
pub use canonical::PathEncoding;
pub use canonical::signed_header_names;

mod scope;
pub use scope::build_scope;
pub use scope::CredentialScope;

mod signature;
pub use signature::generate_signing_key;
pub use signature::sign;
pub use signature::string_to_sign;

mod assemble;
pub use assemble::assemble;
pub use assemble::assemble_presigned;
pub use assemble::inject_signing_headers;

mod sign_request;
pub use sign_request::RequestSigner;
