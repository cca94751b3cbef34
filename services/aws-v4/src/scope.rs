use std::fmt::{Display, Formatter};

use sigv4_core::time::{format_date, DateTime};

use crate::constants::AWS4_REQUEST;

/// Credential scope of one signing operation.
///
/// The scope owns the signing time, so the date in the scope and the
/// `x-amz-date` timestamp can't drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialScope<'a> {
    time: DateTime,
    region: &'a str,
    service: &'a str,
}

impl<'a> CredentialScope<'a> {
    /// Create a scope for `time` in `region` and `service`.
    pub fn new(time: DateTime, region: &'a str, service: &'a str) -> Self {
        Self {
            time,
            region,
            service,
        }
    }

    /// Signing time, second precision.
    pub fn time(&self) -> DateTime {
        self.time
    }

    /// Region of the scope.
    pub fn region(&self) -> &'a str {
        self.region
    }

    /// Service of the scope.
    pub fn service(&self) -> &'a str {
        self.service
    }
}

impl Display for CredentialScope<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{AWS4_REQUEST}",
            format_date(self.time),
            self.region,
            self.service
        )
    }
}

/// Build the credential scope: `20220313/<region>/<service>/aws4_request`.
pub fn build_scope(time: DateTime, region: &str, service: &str) -> String {
    CredentialScope::new(time, region, service).to_string()
}
