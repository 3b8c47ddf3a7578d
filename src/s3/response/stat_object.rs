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

use crate::s3::error::{Error, ValidationErr};
use crate::s3::header_constants::*;
use crate::s3::response_traits::{HasBucket, HasEtagFromHeaders, HasObject, HasS3Fields};
use crate::s3::types::S3Request;
use crate::s3::utils::{UtcTime, from_http_header_value};
use crate::{impl_from_s3response, impl_has_s3fields};
use http::HeaderMap;

#[derive(Clone, Debug)]
/// Response from the [`stat`](crate::s3::client::Object::stat) API call, providing
/// metadata about an object.
///
/// Headers are parsed on access; a malformed value is reported as an error rather than
/// replaced by a default.
pub struct StatObjectResponse {
    request: S3Request,
    headers: HeaderMap,
}

impl_from_s3response!(StatObjectResponse);
impl_has_s3fields!(StatObjectResponse);

impl HasBucket for StatObjectResponse {}
impl HasObject for StatObjectResponse {}
impl HasEtagFromHeaders for StatObjectResponse {}

impl StatObjectResponse {
    /// Server time of the response (`Date` header).
    pub fn date(&self) -> Result<UtcTime, Error> {
        Ok(from_http_header_value(self.header(DATE))?)
    }

    /// Time the object was last modified (`Last-Modified` header).
    pub fn last_modified(&self) -> Result<UtcTime, Error> {
        Ok(from_http_header_value(self.header(LAST_MODIFIED))?)
    }

    /// Size of the object in bytes (`Content-Length` header).
    pub fn content_length(&self) -> Result<u64, Error> {
        Ok(self
            .header(CONTENT_LENGTH)
            .parse::<u64>()
            .map_err(ValidationErr::from)?)
    }

    /// Media type of the object (`Content-Type` header).
    pub fn content_type(&self) -> &str {
        self.header(CONTENT_TYPE)
    }
}
