// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! S3 client bound to a single bucket.
//!
//! Every dispatched request carries a fresh `Date` header and, when credentials are
//! configured, a signature V2 `Authorization` header. Without a credential provider the
//! requests are sent anonymously.

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;
pub use http::Method;
pub use reqwest::Response;
use std::fs::File;
use std::io::prelude::*;
use std::mem;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::s3::creds::{Credentials, Provider, StaticProvider};
use crate::s3::error::{Error, ErrorResponse, S3ServerError, ValidationErr};
use crate::s3::header_constants::*;
use crate::s3::http::BaseUrl;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::signer::sign_v2_s3;
use crate::s3::types::Expect;
use crate::s3::utils::{check_bucket_name, to_http_header_value, url_safe_key, utc_now};

mod delete_object;
mod get_form_upload_url;
mod get_object;
mod get_presigned_object_url;
mod object;
mod object_exists;
mod put_object;
mod stat_object;

pub use object::Object;

/// Environment variables read by [`ClientBuilder::from_env`].
pub const ENV_ENDPOINT: &str = "S3_ENDPOINT";
pub const ENV_BUCKET: &str = "S3_BUCKET";
pub const ENV_ACCESS_KEY: &str = "S3_ACCESS_KEY";
pub const ENV_SECRET_KEY: &str = "S3_SECRET_KEY";
pub const ENV_PATH_STYLE: &str = "S3_PATH_STYLE";

/// HTTP connection pool configuration for the client.
///
/// Controls how the underlying HTTP client manages connections.
///
/// # Example
///
/// ```
/// use s3lite::s3::client::ConnectionPoolConfig;
/// use std::time::Duration;
///
/// let config = ConnectionPoolConfig::default()
///     .max_idle_per_host(4)
///     .idle_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct ConnectionPoolConfig {
    /// Maximum number of idle connections per host. Default: 32
    pub max_idle_per_host: usize,

    /// How long idle connections are kept in the pool. Default: 90 seconds
    pub idle_timeout: std::time::Duration,

    /// TCP keepalive interval. Default: 60 seconds
    pub tcp_keepalive: std::time::Duration,

    /// Enable TCP_NODELAY (disable Nagle's algorithm). Default: true
    pub tcp_nodelay: bool,
}

impl Default for ConnectionPoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 32,
            idle_timeout: std::time::Duration::from_secs(90),
            tcp_keepalive: std::time::Duration::from_secs(60),
            tcp_nodelay: true,
        }
    }
}

impl ConnectionPoolConfig {
    /// Set the maximum number of idle connections per host.
    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    /// Set how long idle connections are kept in the pool.
    pub fn idle_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    /// Set the TCP keepalive interval.
    pub fn tcp_keepalive(mut self, interval: std::time::Duration) -> Self {
        self.tcp_keepalive = interval;
        self
    }

    /// Enable or disable TCP_NODELAY (Nagle's algorithm).
    pub fn tcp_nodelay(mut self, enable: bool) -> Self {
        self.tcp_nodelay = enable;
        self
    }
}

/// Client Builder manufactures a Client using given parameters.
#[derive(Debug)]
pub struct ClientBuilder {
    bucket: String,
    base_url: BaseUrl,
    /// Set the credential provider. If not, set anonymous access is used.
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    /// Force path-style addressing (`host/bucket/key`).
    path_style: bool,
    /// Set file for loading CAs certs to trust. This is in addition to the system trust store. The file must contain PEM encoded certificates.
    ssl_cert_file: Option<PathBuf>,
    /// Set flag to ignore certificate check. This is insecure and should only be used for testing.
    ignore_cert_check: Option<bool>,
    /// Set the app info as an Option of (app_name, app_version) pair. This will show up in the client's user-agent.
    app_info: Option<(String, String)>,
    /// HTTP connection pool configuration.
    connection_pool_config: ConnectionPoolConfig,
}

impl ClientBuilder {
    /// Creates a builder for a client of given bucket on the default Amazon S3 endpoint.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            base_url: BaseUrl::default(),
            provider: None,
            path_style: false,
            ssl_cert_file: None,
            ignore_cert_check: None,
            app_info: None,
            connection_pool_config: ConnectionPoolConfig::default(),
        }
    }

    /// Creates a builder from the `S3_*` environment variables.
    ///
    /// `S3_BUCKET` is required. `S3_ENDPOINT` selects the endpoint (default Amazon S3),
    /// `S3_ACCESS_KEY` and `S3_SECRET_KEY` together configure static credentials, and
    /// `S3_PATH_STYLE=true` forces path-style addressing.
    pub fn from_env() -> Result<Self, Error> {
        let bucket = std::env::var(ENV_BUCKET).map_err(|_| {
            ValidationErr::InvalidBucketName(format!("environment variable {ENV_BUCKET} is not set"))
        })?;

        let mut builder = Self::new(bucket);

        if let Ok(endpoint) = std::env::var(ENV_ENDPOINT) {
            builder = builder.base_url(endpoint.parse::<BaseUrl>()?);
        }

        if let (Ok(access_key), Ok(secret_key)) = (
            std::env::var(ENV_ACCESS_KEY),
            std::env::var(ENV_SECRET_KEY),
        ) {
            builder = builder.provider(Some(StaticProvider::new(&access_key, &secret_key)));
        }

        let path_style = std::env::var(ENV_PATH_STYLE)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Ok(builder.path_style(path_style))
    }

    /// Set the endpoint of the S3 compatible service.
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = base_url;
        self
    }

    /// Set the credential provider. If not, set anonymous access is used.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    /// Force path-style addressing instead of virtual-hosted style.
    pub fn path_style(mut self, path_style: bool) -> Self {
        self.path_style = path_style;
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Set file for loading CAs certs to trust. This is in addition to the system
    /// trust store. The file must contain PEM encoded certificates.
    pub fn ssl_cert_file(mut self, ssl_cert_file: Option<&Path>) -> Self {
        self.ssl_cert_file = ssl_cert_file.map(PathBuf::from);
        self
    }

    /// Set flag to ignore certificate check. This is insecure and should only
    /// be used for testing.
    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    /// Configure the HTTP connection pool settings.
    pub fn connection_pool_config(mut self, config: ConnectionPoolConfig) -> Self {
        self.connection_pool_config = config;
        self
    }

    /// Build the Client.
    ///
    /// Fails with a [`ValidationErr`] when the bucket name cannot be used with the chosen
    /// addressing style.
    pub fn build(self) -> Result<Client, Error> {
        let mut base_url = self.base_url;
        if self.path_style {
            base_url.virtual_style = false;
        }
        // the bucket becomes part of the host name under virtual-hosted addressing
        check_bucket_name(&self.bucket, base_url.virtual_style)?;

        let pool_config = &self.connection_pool_config;
        let mut builder = reqwest::Client::builder()
            .no_gzip()
            .tcp_nodelay(pool_config.tcp_nodelay)
            .tcp_keepalive(pool_config.tcp_keepalive)
            .pool_max_idle_per_host(pool_config.max_idle_per_host)
            .pool_idle_timeout(pool_config.idle_timeout);

        let mut user_agent = String::from("s3lite (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") s3lite-rs/"
            + env!("CARGO_PKG_VERSION");

        if let Some((app_name, app_version)) = self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent);

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ignore_cert_check {
            builder = builder.danger_accept_invalid_certs(v);
        }

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ssl_cert_file {
            let mut buf = Vec::new();
            let mut file = File::open(v)?;
            file.read_to_end(&mut buf)?;

            let certs = reqwest::Certificate::from_pem_bundle(&buf).map_err(ValidationErr::from)?;
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }

        log::info!(
            "client for bucket '{}' at {} ({} addressing, {})",
            self.bucket,
            base_url.host(),
            if base_url.virtual_style {
                "virtual-hosted"
            } else {
                "path-style"
            },
            if self.provider.is_some() {
                "signed"
            } else {
                "anonymous"
            },
        );

        Ok(Client {
            http_client: builder.build().map_err(ValidationErr::from)?,
            shared: Arc::new(SharedClientItems {
                base_url,
                bucket: self.bucket,
                provider: self.provider,
            }),
        })
    }
}

/// Simple Storage Service (aka S3) client bound to a single bucket.
///
/// Cloning is cheap; clones share the same immutable configuration and connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
}

impl Client {
    /// Returns a builder for a client of given bucket.
    ///
    /// # Examples
    ///
    /// ```
    /// use s3lite::s3::Client;
    /// use s3lite::s3::creds::StaticProvider;
    ///
    /// let client = Client::builder("my-bucket")
    ///     .base_url("http://localhost:9000".parse().unwrap())
    ///     .provider(Some(StaticProvider::new("ACCESS", "SECRET")))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(client.bucket(), "my-bucket");
    /// ```
    pub fn builder(bucket: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(bucket)
    }

    /// Returns a client of given bucket, endpoint and optional credentials.
    pub fn new<P: Provider + Send + Sync + 'static>(
        bucket: impl Into<String>,
        base_url: BaseUrl,
        provider: Option<P>,
    ) -> Result<Self, Error> {
        ClientBuilder::new(bucket)
            .base_url(base_url)
            .provider(provider)
            .build()
    }

    /// Returns a handle on the object with given key.
    ///
    /// Leading and trailing slashes and spaces are trimmed from the key.
    pub fn object(&self, key: &str) -> Object {
        Object::new(self.clone(), key)
    }

    pub fn bucket(&self) -> &str {
        &self.shared.bucket
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    /// Returns whether this client uses HTTPS.
    pub fn is_secure(&self) -> bool {
        self.shared.base_url.https
    }

    pub(crate) fn credentials(&self) -> Option<Credentials> {
        self.shared.provider.as_ref().map(|p| p.fetch())
    }

    /// Builds, signs and sends a request, then checks its status against `expect`.
    pub(crate) async fn execute(
        &self,
        method: &Method,
        headers: &mut Multimap,
        query_params: &Multimap,
        object_name: Option<&str>,
        body: Option<Bytes>,
        expect: Expect,
    ) -> Result<reqwest::Response, Error> {
        let bucket = &self.shared.bucket;
        let url = self
            .shared
            .base_url
            .build_url(query_params, bucket, object_name);

        let date = utc_now();
        headers.set(DATE, to_http_header_value(date));

        if let Some(creds) = self.credentials() {
            let path = object_name
                .map(|o| format!("/{}", url_safe_key(o)))
                .unwrap_or_default();
            sign_v2_s3(
                method,
                bucket,
                &path,
                headers,
                query_params,
                &creds.access_key,
                &creds.secret_key,
                date,
            );
        }

        let header_map = to_header_map(headers)?;

        log::debug!("{method} {}", url.path);

        let mut req = self
            .http_client
            .request(method.clone(), url.to_string())
            .headers(header_map);
        if let Some(body) = body {
            req = req.body(body);
        }

        let resp = req.send().await?;
        check_response(resp, expect).await
    }
}

/// Converts request headers into a [`HeaderMap`], rejecting names and values that cannot
/// go on the wire.
fn to_header_map(headers: &Multimap) -> Result<HeaderMap, ValidationErr> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (key, values) in headers.iter_all() {
        let name = HeaderName::try_from(key.as_str())?;
        for value in values {
            let value = HeaderValue::try_from(value.as_str()).map_err(|source| {
                ValidationErr::InvalidHeaderValue {
                    name: key.clone(),
                    source,
                }
            })?;
            map.append(name.clone(), value);
        }
    }
    Ok(map)
}

/// Returns the response when its status is what `expect` asks for; otherwise consumes
/// it into an [`S3ServerError`].
pub(crate) async fn check_response(
    mut resp: reqwest::Response,
    expect: Expect,
) -> Result<reqwest::Response, Error> {
    let status = resp.status();
    if expect.matches(status) {
        return Ok(resp);
    }

    let headers: HeaderMap = mem::take(resp.headers_mut());
    let body: Bytes = resp.bytes().await.unwrap_or_else(|e| {
        log::debug!("cannot read error response body: {e}");
        Bytes::new()
    });
    let e = ErrorResponse::from_status(status, headers, body);
    log::debug!("unexpected response status: {e}");

    Err(Error::S3Server(S3ServerError::S3Error(Box::new(e))))
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    pub(crate) bucket: String,
    pub(crate) provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
}
