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

mod mock;

use std::collections::HashMap;

use awsauth_core::time::{DateTime, FixedClock};
use awsauth_core::{Context, StaticEnv};
use chrono::TimeZone;

pub const ROLE_LIST_PATH: &str = "/latest/meta-data/iam/security-credentials/";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 2024-01-01T00:00:00Z
pub fn test_now() -> DateTime {
    chrono::Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub fn envs(pairs: &[(&str, &str)]) -> StaticEnv {
    StaticEnv {
        envs: pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>(),
    }
}

/// Context with the given env, a fixed clock, and no network.
pub fn create_test_context(pairs: &[(&str, &str)]) -> Context {
    init_logger();

    Context::new()
        .with_env(envs(pairs))
        .with_clock(FixedClock(test_now()))
}

pub fn role_credentials_json(access_key_id: &str, token: &str, expiration: &str) -> String {
    format!(
        r#"{{
  "Code" : "Success",
  "LastUpdated" : "2023-12-31T23:00:00Z",
  "Type" : "AWS-HMAC",
  "AccessKeyId" : "{access_key_id}",
  "SecretAccessKey" : "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
  "Token" : "{token}",
  "Expiration" : "{expiration}"
}}"#
    )
}
