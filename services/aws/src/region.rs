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

use crate::constants::DEFAULT_REGION;

/// Derive `(service, region)` from a request host such as
/// `sqs.eu-west-1.amazonaws.com`.
///
/// The host must not carry a port.
///
/// - `bucket.s3.amazonaws.com.cn` style hosts (four parts or more, `s3` second)
///   name the region first, so they yield `("s3", "bucket")`.
/// - `s3-us-west-2.amazonaws.com` yields `("s3", "us-west-2")`.
/// - Any other short host falls back to [`DEFAULT_REGION`].
pub fn service_and_region(host: &str) -> (String, String) {
    let parts: Vec<&str> = host.split('.').collect();
    let first = parts[0];

    if parts.len() >= 4 {
        if parts[1] == "s3" {
            return ("s3".to_string(), first.to_string());
        }
        return (first.to_string(), parts[1].to_string());
    }

    match first.strip_prefix("s3-") {
        Some(region) => ("s3".to_string(), region.to_string()),
        None => (first.to_string(), DEFAULT_REGION.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("sqs.eu-west-1.amazonaws.com", "sqs", "eu-west-1"; "regional endpoint")]
    #[test_case("ec2.us-west-2.amazonaws.com", "ec2", "us-west-2"; "ec2 regional endpoint")]
    #[test_case("s3-us-west-2.amazonaws.com", "s3", "us-west-2"; "s3 dash region")]
    #[test_case("s3.amazonaws.com", "s3", "us-east-1"; "s3 global")]
    #[test_case("iam.amazonaws.com", "iam", "us-east-1"; "global service")]
    #[test_case("examplebucket.s3.amazonaws.com", "examplebucket", "us-east-1"; "virtual host style bucket")]
    #[test_case("us-west-2.s3.amazonaws.com.cn", "s3", "us-west-2"; "s3 second part")]
    #[test_case("localhost", "localhost", "us-east-1"; "single label")]
    #[test_case("", "", "us-east-1"; "empty host")]
    fn test_service_and_region(host: &str, service: &str, region: &str) {
        assert_eq!(
            service_and_region(host),
            (service.to_string(), region.to_string())
        );
    }
}
