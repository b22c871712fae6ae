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

//! Tokio-based TCP probing implementation for awsauth.
//!
//! This crate provides `TokioTcpConnect`, which implements the `TcpConnect`
//! trait from `awsauth_core` using Tokio's networking primitives.
//!
//! ## Example
//!
//! ```no_run
//! use awsauth_core::Context;
//! use awsauth_tcp_connect_tokio::TokioTcpConnect;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let ctx = Context::new().with_tcp_connect(TokioTcpConnect);
//!
//!     match ctx.tcp_connect("169.254.169.254:80", Duration::from_secs(1)).await {
//!         Ok(()) => println!("metadata service is reachable"),
//!         Err(e) => eprintln!("metadata service is not reachable: {e}"),
//!     }
//! }
//! ```

use async_trait::async_trait;
use awsauth_core::{Error, Result, TcpConnect};
use std::time::Duration;
use tokio::net::TcpStream;

/// Tokio-based implementation of the `TcpConnect` trait.
///
/// The connection is dropped as soon as it has been established.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTcpConnect;

#[async_trait]
impl TcpConnect for TokioTcpConnect {
    async fn tcp_connect(&self, addr: &str, timeout: Duration) -> Result<()> {
        let stream = tokio::time::timeout(timeout, TcpStream::connect(addr))
            .await
            .map_err(|e| {
                Error::unexpected(format!("timed out connecting to '{addr}'"))
                    .with_source(e)
                    .with_context(format!("timeout: {timeout:?}"))
            })?
            .map_err(|e| {
                Error::unexpected(format!("failed to connect to '{addr}'")).with_source(e)
            })?;

        log::debug!("connected to {addr}, closing probe connection");
        drop(stream);
        Ok(())
    }
}
