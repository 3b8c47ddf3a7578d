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

use crate::s3::client::Client;
use crate::s3::error::{Error, ValidationErr};
use crate::s3::response::GetPresignedObjectUrlResponse;
use crate::s3::signer::presign_v2;
use crate::s3::utils::{UtcTime, check_object_name, url_safe_key, utc_now};
use chrono::Duration;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [presigned_url()](crate::s3::client::Object::presigned_url) API.
///
/// The URL is path-style on the client's endpoint. `expires_in` is not validated: zero or
/// negative durations give a URL the server already rejects.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetPresignedObjectUrl {
    #[builder(!default)] // force required
    client: Client,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
    #[builder(!default)] // force required
    method: Method,
    #[builder(!default)] // force required
    expires_in: Duration,
    /// Overrides the scheme of the client's endpoint
    #[builder(default, setter(into))]
    secure: Option<bool>,
    /// Clock used to compute the expiry; defaults to now
    #[builder(default, setter(into))]
    request_time: Option<UtcTime>,
}

pub type GetPresignedObjectUrlBldr =
    GetPresignedObjectUrlBuilder<((Client,), (String,), (Method,), (Duration,), (), ())>;

impl GetPresignedObjectUrl {
    /// Signs the URL. Nothing is sent to the server.
    pub fn generate(self) -> Result<GetPresignedObjectUrlResponse, Error> {
        check_object_name(&self.object)?;

        let creds = self
            .client
            .credentials()
            .ok_or(ValidationErr::MissingCredentials("pre-sign a URL"))?;

        let request_time = self.request_time.unwrap_or_else(utc_now);
        // Sum before truncating to whole seconds so sub-second parts carry over.
        let expires = request_time
            .timestamp_millis()
            .saturating_add(self.expires_in.num_milliseconds())
            .div_euclid(1000);
        let bucket = self.client.bucket();

        let query_params = presign_v2(
            &self.method,
            bucket,
            &url_safe_key(&self.object),
            &creds.access_key,
            &creds.secret_key,
            expires,
        );

        let mut url = self
            .client
            .base_url()
            .build_path_style_url(&query_params, bucket, Some(&self.object));
        if let Some(secure) = self.secure {
            url.https = secure;
        }

        Ok(GetPresignedObjectUrlResponse {
            bucket: bucket.to_string(),
            object: self.object,
            expires,
            url: url.to_string(),
        })
    }
}
