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

use crate::s3::builders::{GetPresignedObjectUrl, GetPresignedObjectUrlBldr};
use crate::s3::client::Object;
use chrono::Duration;
use http::Method;

impl Object {
    /// Creates a [`GetPresignedObjectUrl`] builder for a URL granting `method` on the
    /// object until `expires_in` from now.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::Duration;
    /// use http::Method;
    /// use s3lite::s3::Client;
    /// use s3lite::s3::creds::StaticProvider;
    ///
    /// let client = Client::builder("my-bucket")
    ///     .provider(Some(StaticProvider::new("ACCESS", "SECRET")))
    ///     .build()
    ///     .unwrap();
    /// let resp = client
    ///     .object("photo.jpg")
    ///     .presigned_url(Method::GET, Duration::hours(1))
    ///     .build()
    ///     .generate()
    ///     .unwrap();
    /// assert!(resp.url.starts_with("https://s3.amazonaws.com/my-bucket/photo.jpg?"));
    /// ```
    pub fn presigned_url(&self, method: Method, expires_in: Duration) -> GetPresignedObjectUrlBldr {
        GetPresignedObjectUrl::builder()
            .client(self.client.clone())
            .object(self.key.clone())
            .method(method)
            .expires_in(expires_in)
    }
}
