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

//! Response traits for accessing S3 metadata from HTTP response headers.
//!
//! Rather than exposing raw headers only, responses compose these traits to get uniform
//! accessors across operations: [`HasBucket`] and [`HasObject`] come from the request that
//! was sent, [`HasEtagFromHeaders`] from the `ETag` response header.

use crate::s3::header_constants::ETAG;
use crate::s3::types::S3Request;
use http::HeaderMap;

#[macro_export]
/// Implements the `FromS3Response` trait for response types made of `request` and
/// `headers`; the body, if any, is drained.
macro_rules! impl_from_s3response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::s3::types::FromS3Response for $ty {
                async fn from_s3response(
                    request: $crate::s3::types::S3Request,
                    response: Result<reqwest::Response, $crate::s3::error::Error>,
                ) -> Result<Self, $crate::s3::error::Error> {
                    let mut resp: reqwest::Response = response?;
                    let headers = std::mem::take(resp.headers_mut());
                    resp.bytes().await?;
                    Ok(Self { request, headers })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasS3Fields` trait for the specified types.
macro_rules! impl_has_s3fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::s3::response_traits::HasS3Fields for $ty {
                /// The request that was sent to the S3 API.
                fn request(&self) -> &$crate::s3::types::S3Request {
                    &self.request
                }

                /// The response headers of the S3 API.
                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }
            }
        )*
    };
}

pub trait HasS3Fields {
    /// The request that was sent to the S3 API.
    fn request(&self) -> &S3Request;
    /// HTTP headers returned by the server, containing metadata such as `Content-Type`, `ETag`, etc.
    fn headers(&self) -> &HeaderMap;

    /// Returns the value of given response header, or an empty string when it is absent
    /// or not visible ASCII.
    fn header(&self, name: &str) -> &str {
        self.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}

/// Returns the name of the S3 bucket.
pub trait HasBucket: HasS3Fields {
    /// Returns the name of the S3 bucket.
    #[inline]
    fn bucket(&self) -> &str {
        self.request().client.bucket()
    }
}

/// Returns the object key (name) of the S3 object.
pub trait HasObject: HasS3Fields {
    /// Returns the object key (name) of the S3 object.
    #[inline]
    fn object(&self) -> &str {
        self.request().object().unwrap_or_default()
    }
}

/// Returns the value of the `ETag` header, without surrounding quotes.
pub trait HasEtagFromHeaders: HasS3Fields {
    #[inline]
    fn etag(&self) -> &str {
        self.header(ETAG).trim_matches('"')
    }
}
