//! Core components for signing API requests.
//!
//! This crate provides the foundational types and traits that a request
//! signer is built from. It knows nothing about a particular signature
//! algorithm; `sigv4-aws` builds AWS Signature Version 4 on top of it.
//!
//! ## Overview
//!
//! - **Context**: holds the injected [`Clock`], the only source of time for signers
//! - **Traits**: [`SigningCredential`] validates credentials and [`SignRequest`] signs requests
//! - **Signer**: binds a credential and a [`SignRequest`] to a context and is passed
//!   explicitly to whatever sends the requests
//!
//! ## Example
//!
//! ```
//! use sigv4_core::{Context, Result, SignRequest, Signer, SigningCredential, SigningMethod};
//! use http::request::Parts;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MySigner;
//!
//! impl SignRequest for MySigner {
//!     type Credential = MyCredential;
//!
//!     fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         req: &mut Parts,
//!         _body: &[u8],
//!         cred: &Self::Credential,
//!         _method: SigningMethod,
//!     ) -> Result<()> {
//!         req.headers.insert("x-api-key", cred.key.parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let signer = Signer::new(
//!     Context::new(),
//!     MyCredential { key: "my-key".to_string() },
//!     MySigner,
//! );
//!
//! let mut parts = http::Request::builder()
//!     .method("GET")
//!     .uri("https://example.com")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//!
//! signer.sign(&mut parts, b"")?;
//! assert_eq!(parts.headers["x-api-key"], "my-key");
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Clock, Context, FixedClock, SystemClock};
mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{SignRequest, SigningCredential};
mod request;
pub use request::{SigningMethod, SigningRequest};
mod signer;
pub use signer::Signer;
