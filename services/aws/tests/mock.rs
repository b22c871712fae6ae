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

//! In-process doubles for the network seams of `Context`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use awsauth_aws::Credential;
use awsauth_core::{Context, Error, HttpSend, ProvideCredential, Result, TcpConnect};
use bytes::Bytes;
use http::StatusCode;

use super::ROLE_LIST_PATH;

/// TcpConnect that answers from a flag and counts probes.
#[derive(Debug, Clone, Default)]
pub struct MockTcpConnect {
    reachable: bool,
    delay: Duration,
    probes: Arc<AtomicUsize>,
}

impl MockTcpConnect {
    pub fn reachable() -> Self {
        Self {
            reachable: true,
            ..Default::default()
        }
    }

    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn probes(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TcpConnect for MockTcpConnect {
    async fn tcp_connect(&self, addr: &str, _: Duration) -> Result<()> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if self.reachable {
            Ok(())
        } else {
            Err(Error::unexpected(format!("failed to connect to '{addr}'")))
        }
    }
}

#[derive(Debug, Default)]
struct MetadataState {
    responses: HashMap<String, (StatusCode, String)>,
    requests: Vec<String>,
}

/// HttpSend that plays the instance metadata service and records request paths.
///
/// Unknown paths answer `404 Not Found`.
#[derive(Debug, Clone, Default)]
pub struct MockMetadataService {
    delay: Duration,
    state: Arc<Mutex<MetadataState>>,
}

impl MockMetadataService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roles(self, body: &str) -> Self {
        self.respond(ROLE_LIST_PATH, StatusCode::OK, body);
        self
    }

    pub fn with_role(self, role: &str, body: &str) -> Self {
        self.set_role(role, body);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn set_role(&self, role: &str, body: &str) {
        self.respond(&format!("{ROLE_LIST_PATH}{role}"), StatusCode::OK, body);
    }

    pub fn respond(&self, path: &str, status: StatusCode, body: &str) {
        self.state
            .lock()
            .unwrap()
            .responses
            .insert(path.to_string(), (status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl HttpSend for MockMetadataService {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        assert_eq!(req.method(), http::Method::GET);
        let path = req.uri().path().to_string();

        let (status, body) = {
            let mut state = self.state.lock().unwrap();
            state.requests.push(path.clone());
            state
                .responses
                .get(&path)
                .cloned()
                .unwrap_or((StatusCode::NOT_FOUND, "Not Found".to_string()))
        };

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(http::Response::builder()
            .status(status)
            .body(Bytes::from(body))?)
    }
}

/// Metadata source that hands out a fixed credential and counts calls.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    credential: Option<Credential>,
    calls: Arc<AtomicUsize>,
}

impl MockProvider {
    pub fn new(credential: Option<Credential>) -> Self {
        Self {
            credential,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProvideCredential for MockProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.credential.clone())
    }
}

/// Metadata source that always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingProvider;

#[async_trait]
impl ProvideCredential for FailingProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Err(Error::unexpected("instance metadata service returned error"))
    }
}
