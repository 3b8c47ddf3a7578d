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

use crate::impl_has_s3fields;
use crate::s3::error::Error;
use crate::s3::response_traits::{HasBucket, HasEtagFromHeaders, HasObject};
use crate::s3::types::{FromS3Response, S3Request};
use async_trait::async_trait;
use bytes::Bytes;
use futures_util::{Stream, TryStreamExt};
use http::HeaderMap;
use std::mem;

/// Response of the [get()](crate::s3::client::Object::get) API call.
///
/// The body is not read until [`bytes`](Self::bytes) or [`into_stream`](Self::into_stream)
/// is called.
#[derive(Debug)]
pub struct GetObjectResponse {
    request: S3Request,
    headers: HeaderMap,
    resp: reqwest::Response,
}

impl_has_s3fields!(GetObjectResponse);

impl HasBucket for GetObjectResponse {}
impl HasObject for GetObjectResponse {}
impl HasEtagFromHeaders for GetObjectResponse {}

#[async_trait]
impl FromS3Response for GetObjectResponse {
    async fn from_s3response(
        request: S3Request,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        Ok(Self {
            request,
            headers: mem::take(resp.headers_mut()),
            resp,
        })
    }
}

impl GetObjectResponse {
    /// Size of the body, when the server announced it.
    pub fn content_length(&self) -> Option<u64> {
        self.resp.content_length()
    }

    /// Reads the whole object body.
    pub async fn bytes(self) -> Result<Bytes, Error> {
        Ok(self.resp.bytes().await?)
    }

    /// Returns the object body as a stream of chunks.
    pub fn into_stream(self) -> impl Stream<Item = Result<Bytes, Error>> + Send {
        self.resp.bytes_stream().map_err(Error::from)
    }
}
