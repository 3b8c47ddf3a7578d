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
use crate::s3::response_traits::{HasBucket, HasObject};
use crate::s3::types::{FromS3Response, S3Request};
use async_trait::async_trait;
use http::{HeaderMap, StatusCode};
use std::mem;

/// Response of the [exists()](crate::s3::client::Object::exists) API call.
///
/// The request accepts any status; the object exists iff the server answered `200 OK`.
#[derive(Clone, Debug)]
pub struct ObjectExistsResponse {
    request: S3Request,
    headers: HeaderMap,
    status: StatusCode,
}

impl_has_s3fields!(ObjectExistsResponse);

impl HasBucket for ObjectExistsResponse {}
impl HasObject for ObjectExistsResponse {}

#[async_trait]
impl FromS3Response for ObjectExistsResponse {
    async fn from_s3response(
        request: S3Request,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        Ok(Self {
            request,
            headers: mem::take(resp.headers_mut()),
            status: resp.status(),
        })
    }
}

impl ObjectExistsResponse {
    /// Returns `true` if the object exists, `false` otherwise.
    pub fn exists(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Status code the server answered with.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}
