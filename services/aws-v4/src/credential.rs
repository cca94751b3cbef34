// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use sigv4_core::utils::Redact;
use sigv4_core::{Error, Result, SigningCredential};
use std::fmt::{Debug, Formatter};
use zeroize::Zeroizing;

/// Credential that holds the access_key and secret_key.
///
/// Secret material is wiped from memory when the credential is dropped.
#[derive(Default, Clone)]
pub struct Credential {
    access_key_id: String,
    secret_access_key: Zeroizing<String>,
    session_token: Zeroizing<Option<String>>,
}

impl Credential {
    /// Create a new credential from static values.
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: Zeroizing::new(secret_access_key.into()),
            session_token: Zeroizing::new(session_token),
        }
    }

    /// Access key id for aws services.
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// Secret access key for aws services.
    ///
    /// Only use it as HMAC key material.
    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    /// Session token for aws services.
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    /// Fail with [`sigv4_core::ErrorKind::CredentialInvalid`] if any required part is missing.
    pub fn check(&self) -> Result<()> {
        if self.access_key_id.is_empty() {
            return Err(Error::credential_invalid("access key id is empty"));
        }
        if self.secret_access_key.is_empty() {
            return Err(Error::credential_invalid("secret access key is empty"));
        }
        if self.session_token().is_some_and(str::is_empty) {
            return Err(Error::credential_invalid("session token is set but empty"));
        }

        Ok(())
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field(
                "secret_access_key",
                &Redact::secret(&self.secret_access_key),
            )
            .field(
                "session_token",
                &Redact::secret(self.session_token().unwrap_or_default()),
            )
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        self.check().is_ok()
    }
}
