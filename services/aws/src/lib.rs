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

//! AWS credential resolution for request signing.
//!
//! [`CredentialResolver`] hands out the credential a signer should use. It
//! starts from a static credential or the process environment, and falls
//! back to the IAM role credential of an EC2 instance when keys are missing
//! or expired.
//!
//! ```no_run
//! use awsauth_aws::{Config, CredentialResolver};
//! use awsauth_core::{Context, OsEnv};
//! use awsauth_http_send_reqwest::ReqwestHttpSend;
//! use awsauth_tcp_connect_tokio::TokioTcpConnect;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Bound every metadata request, `resolve` waits for it.
//!     let client = reqwest::Client::builder()
//!         .timeout(Duration::from_secs(2))
//!         .build()?;
//!
//!     let ctx = Context::new()
//!         .with_env(OsEnv)
//!         .with_http_send(ReqwestHttpSend::new(client))
//!         .with_tcp_connect(TokioTcpConnect);
//!
//!     let resolver = CredentialResolver::new(Config::default().from_env(&ctx));
//!     let cred = resolver.resolve(&ctx).await;
//!     println!("signing with {cred:?}");
//!     Ok(())
//! }
//! ```

mod constants;
pub use constants::DEFAULT_REGION;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod location;
pub use location::{LocationCache, LocationStatus};

mod metadata;
pub use metadata::MetadataClient;

mod resolve;
pub use resolve::CredentialResolver;

mod region;
pub use region::service_and_region;
