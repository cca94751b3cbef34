use crate::{Context, Result, SignRequest, SigningCredential, SigningMethod};
use std::sync::Arc;
use std::time::Duration;

/// Signer is the main struct used to sign the request.
///
/// It binds a credential and a [`SignRequest`] implementation to a
/// [`Context`]. There is no shared mutable state inside, clones are cheap
/// and can be handed to as many threads as needed.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    credential: K,
    builder: Arc<dyn SignRequest<Credential = K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(ctx: Context, credential: K, builder: impl SignRequest<Credential = K>) -> Self {
        Self {
            ctx,
            credential,
            builder: Arc::new(builder),
        }
    }

    /// Get the context of this signer.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Sign the request by writing signing headers.
    pub fn sign(&self, req: &mut http::request::Parts, body: &[u8]) -> Result<()> {
        self.builder.sign_request(
            &self.ctx,
            req,
            body,
            &self.credential,
            SigningMethod::Header,
        )
    }

    /// Presign the request, the signature is carried by the query string.
    pub fn presign(&self, req: &mut http::request::Parts, expires_in: Duration) -> Result<()> {
        self.builder.sign_request(
            &self.ctx,
            req,
            &[],
            &self.credential,
            SigningMethod::Query(expires_in),
        )
    }

    /// Sign a whole `http::Request`, hashing its body.
    pub fn sign_http_request<B: AsRef<[u8]>>(
        &self,
        req: http::Request<B>,
    ) -> Result<http::Request<B>> {
        let (mut parts, body) = req.into_parts();
        self.sign(&mut parts, body.as_ref())?;
        Ok(http::Request::from_parts(parts, body))
    }
}
