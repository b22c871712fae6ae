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

use std::time::Duration;

use awsauth_core::Context;
use log::debug;
use tokio::sync::OnceCell;

use crate::constants::*;

/// Whether the instance metadata service has been probed, and the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationStatus {
    /// No probe has completed yet.
    Unchecked,
    /// The probe completed; the outcome never changes afterwards.
    Checked {
        /// The metadata address accepted a TCP connection.
        reachable: bool,
    },
}

/// LocationCache remembers whether this host can reach the instance metadata service.
///
/// The first call to [`LocationCache::is_reachable`] opens a TCP connection to the
/// metadata address. Every later call returns the same answer without touching the
/// network, for as long as the cache lives. Concurrent first callers wait on one
/// shared probe.
///
/// Share one cache (through `Arc`) between resolvers to probe once per process.
#[derive(Debug)]
pub struct LocationCache {
    address: String,
    timeout: Duration,
    reachable: OnceCell<bool>,
}

impl Default for LocationCache {
    fn default() -> Self {
        Self {
            address: METADATA_ADDRESS.to_string(),
            timeout: METADATA_PROBE_TIMEOUT,
            reachable: OnceCell::new(),
        }
    }
}

impl LocationCache {
    /// Create a cache probing `169.254.169.254:80` with a 1s timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `host:port` to probe.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the probe timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Report whether the metadata service is reachable, probing on first use.
    pub async fn is_reachable(&self, ctx: &Context) -> bool {
        *self.reachable.get_or_init(|| self.probe(ctx)).await
    }

    /// Current state without triggering a probe.
    pub fn status(&self) -> LocationStatus {
        match self.reachable.get() {
            None => LocationStatus::Unchecked,
            Some(reachable) => LocationStatus::Checked {
                reachable: *reachable,
            },
        }
    }

    async fn probe(&self, ctx: &Context) -> bool {
        match ctx.tcp_connect(&self.address, self.timeout).await {
            Ok(()) => {
                debug!("instance metadata service at {} is reachable", self.address);
                true
            }
            Err(err) => {
                debug!(
                    "instance metadata service at {} is not reachable: {err}",
                    self.address
                );
                false
            }
        }
    }
}
