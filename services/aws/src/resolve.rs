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

use std::sync::Arc;

use awsauth_core::{Context, ProvideCredential};
use log::{debug, info, warn};
use tokio::sync::Mutex;

use crate::{
    Config, Credential, EnvCredentialProvider, LocationCache, MetadataClient,
    StaticCredentialProvider,
};

/// CredentialResolver decides which credential to sign with.
///
/// The first resolution starts from the static credential in [`Config`] if
/// one was set, otherwise from `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`
/// and `AWS_SESSION_TOKEN`. The instance metadata service replaces the held
/// credential whenever its access key is empty or it has expired, provided
/// the service is reachable.
///
/// Resolution never fails. Metadata errors are logged and leave an empty
/// credential behind, so the caller may end up signing with blank keys and
/// get rejected by the remote service.
///
/// The held credential is guarded by an async mutex that stays locked across
/// the refresh: concurrent callers wait for the in-flight refresh and observe
/// its result instead of starting their own.
///
/// Nothing here bounds the metadata requests themselves. Configure the
/// [`awsauth_core::HttpSend`] in the [`Context`] with a request timeout,
/// otherwise a stalled response from the metadata service blocks every
/// caller of [`CredentialResolver::resolve`].
#[derive(Debug)]
pub struct CredentialResolver {
    static_provider: Option<StaticCredentialProvider>,
    env_provider: EnvCredentialProvider,
    metadata: Arc<dyn ProvideCredential<Credential = Credential>>,
    location: Arc<LocationCache>,
    metadata_disabled: bool,

    credential: Mutex<Option<Credential>>,
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl CredentialResolver {
    /// Create a new resolver from config.
    pub fn new(config: Config) -> Self {
        let metadata = MetadataClient::new().with_endpoint(&config.metadata_endpoint);
        let location = LocationCache::new()
            .with_address(&config.metadata_address)
            .with_timeout(config.probe_timeout);

        Self {
            static_provider: StaticCredentialProvider::from_config(&config),
            env_provider: EnvCredentialProvider::new(),
            metadata: Arc::new(metadata),
            location: Arc::new(location),
            metadata_disabled: config.ec2_metadata_disabled,

            credential: Mutex::new(None),
        }
    }

    /// Replace the source used to fetch credentials from the metadata service.
    pub fn with_metadata_provider(
        mut self,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Self {
        self.metadata = Arc::new(provider);
        self
    }

    /// Share a location cache with other resolvers.
    pub fn with_location_cache(mut self, location: Arc<LocationCache>) -> Self {
        self.location = location;
        self
    }

    /// Resolve the credential to sign with, refreshing it if needed.
    pub async fn resolve(&self, ctx: &Context) -> Credential {
        let mut held = self.credential.lock().await;

        let mut cred = match held.as_ref() {
            Some(cred) => cred.clone(),
            None => self.initial_credential(ctx).await,
        };

        if cred.access_key_id.is_empty() && self.metadata_reachable(ctx).await {
            debug!("access key is empty, loading credential from instance metadata");
            cred = self.metadata_credential(ctx).await;
        }

        if cred.is_expired(ctx.now()) && self.metadata_reachable(ctx).await {
            debug!("credential expired, refreshing from instance metadata");
            cred = self.metadata_credential(ctx).await;
        }

        *held = Some(cred.clone());
        cred
    }

    async fn initial_credential(&self, ctx: &Context) -> Credential {
        let loaded = match &self.static_provider {
            Some(provider) => provider.provide_credential(ctx).await,
            None => self.env_provider.provide_credential(ctx).await,
        };

        match loaded {
            Ok(cred) => cred.unwrap_or_default(),
            Err(err) => {
                warn!("failed to load initial credential: {err}");
                Credential::default()
            }
        }
    }

    async fn metadata_reachable(&self, ctx: &Context) -> bool {
        if self.metadata_disabled {
            return false;
        }

        self.location.is_reachable(ctx).await
    }

    async fn metadata_credential(&self, ctx: &Context) -> Credential {
        match self.metadata.provide_credential(ctx).await {
            Ok(Some(cred)) => cred,
            Ok(None) => {
                info!("instance metadata service is reachable but no IAM role is attached");
                Credential::default()
            }
            Err(err) => {
                warn!("failed to load credential from instance metadata: {err}");
                Credential::default()
            }
        }
    }
}
