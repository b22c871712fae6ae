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

use awsauth_aws::{service_and_region, Config, CredentialResolver};
use awsauth_core::{Context, OsEnv};
use awsauth_http_send_reqwest::ReqwestHttpSend;
use awsauth_tcp_connect_tokio::TokioTcpConnect;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = env_logger::builder().try_init();

    // The metadata service lives on a link-local address, fail fast off EC2.
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()?;

    let ctx = Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::new(client))
        .with_tcp_connect(TokioTcpConnect);

    let resolver = CredentialResolver::new(Config::default().from_env(&ctx));
    let cred = resolver.resolve(&ctx).await;

    if cred.is_valid(ctx.now()) {
        println!("resolved credential: {cred:?}");
    } else {
        println!("no usable credential found, requests will be rejected: {cred:?}");
    }

    let host = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "s3-us-west-2.amazonaws.com".to_string());
    let (service, region) = service_and_region(&host);
    println!("{host} -> service: {service}, region: {region}");

    Ok(())
}
