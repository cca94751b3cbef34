use crate::{Context, Result, SigningMethod};
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing.
    fn is_valid(&self) -> bool;
}

/// SignRequest is the trait used by signer to sign the request.
///
/// Implementations must be pure: the output may only depend on the request,
/// the body, the credential, the signing method and the time read from `ctx`.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this signer.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request in place.
    ///
    /// ## Body
    ///
    /// `body` is the exact payload that will be sent. Signers that hash the
    /// payload use it, others may ignore it.
    ///
    /// ## Method
    ///
    /// [`SigningMethod::Header`] writes the signature into headers while
    /// [`SigningMethod::Query`] produces a presigned uri. A signer that does
    /// not support a method should return an error.
    ///
    /// On error `req` must be left unmodified.
    fn sign_request(
        &self,
        ctx: &Context,
        req: &mut http::request::Parts,
        body: &[u8],
        credential: &Self::Credential,
        method: SigningMethod,
    ) -> Result<()>;
}
