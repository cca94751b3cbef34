use http::request::Parts;
use log::debug;
use sigv4_core::{Context, SignRequest, SigningMethod, SigningRequest};

use crate::assemble::{assemble, assemble_presigned, inject_signing_headers};
use crate::canonical::{canonicalize, encode_query, signed_header_names, PathEncoding};
use crate::signature::sign;
use crate::{Credential, CredentialScope};

/// RequestSigner that implement AWS SigV4.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// Service and region are fixed at construction, the signing time is read
/// from the [`Context`] clock once per request.
///
/// The request path is encoded twice by default. S3 signs the path encoded
/// once, use [`RequestSigner::with_path_encoding`] with [`PathEncoding::Single`]
/// for it.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,
    region: String,
    path_encoding: PathEncoding,
}

impl RequestSigner {
    /// Create a new builder for AWS V4 signer.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.into(),
            region: region.into(),
            path_encoding: PathEncoding::default(),
        }
    }

    /// Set how the request path is encoded into the canonical request.
    pub fn with_path_encoding(mut self, path_encoding: PathEncoding) -> Self {
        self.path_encoding = path_encoding;
        self
    }

    /// Service this signer signs for.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Region this signer signs for.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Path encoding this signer uses.
    pub fn path_encoding(&self) -> PathEncoding {
        self.path_encoding
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        ctx: &Context,
        req: &mut Parts,
        body: &[u8],
        cred: &Self::Credential,
        method: SigningMethod,
    ) -> sigv4_core::Result<()> {
        cred.check()?;

        let mut signed_req = SigningRequest::build(req)?;
        let now = ctx.now();

        inject_signing_headers(
            &mut signed_req,
            cred,
            body,
            now,
            method,
            &self.region,
            &self.service,
        )?;

        let signed_headers = signed_header_names(&signed_req)
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        let names = signed_headers.iter().map(String::as_str).collect::<Vec<_>>();

        let creq = canonicalize(&signed_req, &names, self.path_encoding)?;
        debug!("calculated canonical request: {creq}");

        // Scope: "20220313/<region>/<service>/aws4_request"
        let scope = CredentialScope::new(now, &self.region, &self.service);
        debug!("calculated scope: {scope}");

        let signature = sign(&creq, &scope, cred.secret_access_key())?;

        // The wire query must be exactly the one that was signed.
        signed_req.query = encode_query(&signed_req.query);

        match method {
            SigningMethod::Header => assemble(
                &mut signed_req,
                &scope.to_string(),
                &names.join(";"),
                &signature,
                cred.access_key_id(),
            )?,
            SigningMethod::Query(_) => assemble_presigned(&mut signed_req, &signature),
        }

        // Apply to the request.
        signed_req.apply(req)
    }
}
