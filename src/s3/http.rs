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

use crate::s3::error::ValidationErr;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::utils::urlencode_object_key;
use http::Uri;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Host of the default Amazon S3 endpoint
pub const DEFAULT_HOST: &str = "s3.amazonaws.com";

#[derive(Clone, Debug)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    /// Already escaped path
    pub path: String,
    pub query: Multimap,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl Default for Url {
    fn default() -> Self {
        Self {
            https: true,
            host: String::default(),
            port: u16::default(),
            path: String::default(),
            query: Multimap::default(),
        }
    }
}

impl fmt::Display for Url {
    /// Renders the URL; the query string is the canonical query string, so the bytes on
    /// the wire are the bytes that were signed.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }

        f.write_str(&self.host_header_value())?;

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.get_canonical_query_string())?;
        }

        Ok(())
    }
}

fn is_ip_host(host: &str) -> bool {
    host.starts_with('[') || host.parse::<Ipv4Addr>().is_ok()
}

#[derive(Clone, Debug)]
/// Represents Base URL of S3 endpoint
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    /// Use virtual-hosted style addressing (`bucket.host`) instead of path style (`host/bucket`)
    pub virtual_style: bool,
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            https: true,
            host: DEFAULT_HOST.to_string(),
            port: 0,
            virtual_style: true,
        }
    }
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Convert a string to a BaseUrl.
    ///
    /// Enables use of [`str::parse`] method to create a [`BaseUrl`]. Hosts given as an IP
    /// address or `localhost` default to path-style addressing.
    ///
    /// # Examples
    ///
    /// ```
    /// use s3lite::s3::http::BaseUrl;
    /// use std::str::FromStr;
    ///
    /// // Get base URL from host name
    /// let base_url = "s3.amazonaws.com".parse::<BaseUrl>().unwrap();
    /// let base_url = BaseUrl::from_str("s3.amazonaws.com").unwrap();
    /// // Get base URL from host:port
    /// let base_url: BaseUrl = "storage.example.com:9000".parse().unwrap();
    /// // Get base URL from IPv4 address
    /// let base_url: BaseUrl = "http://192.168.124.63:9000".parse().unwrap();
    /// assert!(!base_url.virtual_style);
    /// // Get base URL from IPv6 address
    /// let base_url: BaseUrl = "[0:0:0:0:0:ffff:c0a8:7c3f]:9000".parse().unwrap();
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let url = s.parse::<Uri>()?;

        let https = match url.scheme() {
            None => true,
            Some(scheme) => match scheme.as_str() {
                "http" => false,
                "https" => true,
                _ => {
                    return Err(ValidationErr::InvalidBaseUrl(
                        "scheme must be http or https".into(),
                    ));
                }
            },
        };

        let mut host = match url.host() {
            Some(h) if !h.is_empty() => h,
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };

        let ipv6host = "[".to_string() + host + "]";
        if host.parse::<std::net::Ipv6Addr>().is_ok() {
            host = &ipv6host;
        }

        let mut port = match url.port() {
            Some(p) => p.as_u16(),
            _ => 0u16,
        };

        if (https && port == 443) || (!https && port == 80) {
            port = 0u16;
        }

        if url.path() != "/" && !url.path().is_empty() {
            return Err(ValidationErr::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }

        if url.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        let virtual_style = !is_ip_host(host) && !host.eq_ignore_ascii_case("localhost");

        Ok(BaseUrl {
            https,
            host: host.to_string(),
            port,
            virtual_style,
        })
    }
}

impl BaseUrl {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Builds URL for an S3 operation on given bucket and optional object.
    ///
    /// The object key is escaped here; callers pass the normalized, unescaped key.
    pub fn build_url(&self, query: &Multimap, bucket_name: &str, object_name: Option<&str>) -> Url {
        // A bucket name containing '.' breaks TLS certificate validation of the
        // virtual host.
        let path_style = !self.virtual_style || (bucket_name.contains('.') && self.https);
        self.url(query, bucket_name, object_name, path_style)
    }

    /// Builds a path-style URL, `/{bucket}/{object}`, regardless of the addressing style
    /// used for dispatched requests.
    pub fn build_path_style_url(
        &self,
        query: &Multimap,
        bucket_name: &str,
        object_name: Option<&str>,
    ) -> Url {
        self.url(query, bucket_name, object_name, true)
    }

    fn url(
        &self,
        query: &Multimap,
        bucket_name: &str,
        object_name: Option<&str>,
        path_style: bool,
    ) -> Url {
        let mut host = self.host.clone();
        let mut path = String::new();

        if path_style {
            path.push('/');
            path.push_str(bucket_name);
        } else {
            host = format!("{bucket_name}.{host}");
        }

        match object_name {
            Some(v) => {
                path.push('/');
                path.push_str(&urlencode_object_key(v));
            }
            None if path.is_empty() => path.push('/'),
            None => {}
        }

        Url {
            https: self.https,
            host,
            port: self.port,
            path,
            query: query.clone(),
        }
    }
}
