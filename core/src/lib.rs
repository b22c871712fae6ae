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

//! Core components for authenticating AWS-style API requests.
//!
//! This crate provides the foundational types, traits and digest primitives
//! shared by the awsauth crates.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for HTTP sending, TCP
//!   probing, environment access and the clock
//! - **Traits**: [`ProvideCredential`] for loading credentials from one source
//! - **Primitives**: [`hash`] for HMAC/SHA/MD5 digests and [`request`] for
//!   body extraction and query merging
//!
//! ## Example
//!
//! ```no_run
//! use awsauth_core::{Context, ProvideCredential, Result};
//! use async_trait::async_trait;
//!
//! #[derive(Debug)]
//! struct MyCredential {
//!     key: String,
//!     secret: String,
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
//!         let (Some(key), Some(secret)) = (ctx.env_var("MY_KEY"), ctx.env_var("MY_SECRET"))
//!         else {
//!             return Ok(None);
//!         };
//!         Ok(Some(MyCredential { key, secret }))
//!     }
//! }
//! ```
//!
//! ## Traits
//!
//! - [`HttpSend`]: For sending HTTP requests
//! - [`TcpConnect`]: For probing whether an address accepts connections
//! - [`Env`]: For environment variable access
//! - [`time::Clock`]: For reading the current time
//! - [`ProvideCredential`]: For loading credentials from various sources

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod request;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::Context;
pub use context::Env;
pub use context::HttpSend;
pub use context::NoopEnv;
pub use context::NoopHttpSend;
pub use context::NoopTcpConnect;
pub use context::OsEnv;
pub use context::StaticEnv;
pub use context::TcpConnect;

mod api;
pub use api::ProvideCredential;
