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

use crate::time::{self, DateTime};
use std::fmt::Debug;
use std::sync::Arc;

/// Context provides the environment for request signing.
///
/// Signers never read ambient state on their own. Everything that is not a
/// pure function of the request, the time most of all, is taken from here.
///
/// ## Clock skew
///
/// The signer trusts the clock it is given. A clock that drifts far from real
/// time yields requests that the remote service rejects; the signer does not
/// detect this.
///
/// ## Example
///
/// ```
/// use sigv4_core::{Context, FixedClock};
/// use sigv4_core::time::parse_rfc3339;
///
/// let ctx = Context::new()
///     .with_clock(FixedClock::new(parse_rfc3339("2015-01-01T00:00:00Z").unwrap()));
/// ```
#[derive(Clone)]
pub struct Context {
    clock: Arc<dyn Clock>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("clock", &self.clock)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context that reads time from the system clock.
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock implementation.
    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Current time from the configured clock, truncated to whole seconds.
    #[inline]
    pub fn now(&self) -> DateTime {
        time::truncate_to_seconds(self.clock.now())
    }
}

/// Clock is the source of signing timestamps.
pub trait Clock: Debug + Send + Sync + 'static {
    /// Return the current time in UTC.
    fn now(&self) -> DateTime;
}

/// Clock backed by the system time.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime {
        time::now()
    }
}

/// Clock that always returns the same instant.
///
/// This is useful for testing and for reproducing a signature.
#[derive(Debug, Copy, Clone)]
pub struct FixedClock(DateTime);

impl FixedClock {
    /// Create a clock frozen at `time`.
    pub fn new(time: DateTime) -> Self {
        Self(time)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime {
        self.0
    }
}
