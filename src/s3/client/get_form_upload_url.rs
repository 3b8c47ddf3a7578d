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

use crate::s3::builders::{GetFormUploadUrl, GetFormUploadUrlBldr};
use crate::s3::client::Object;
use crate::s3::types::Acl;

impl Object {
    /// Creates a [`GetFormUploadUrl`] builder for a browser form upload of the object.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::Duration;
    /// use s3lite::s3::Client;
    /// use s3lite::s3::builders::PostPolicy;
    /// use s3lite::s3::creds::StaticProvider;
    /// use s3lite::s3::types::Acl;
    /// use s3lite::s3::utils::utc_now;
    ///
    /// let client = Client::builder("my-bucket")
    ///     .provider(Some(StaticProvider::new("ACCESS", "SECRET")))
    ///     .build()
    ///     .unwrap();
    /// let mut policy = PostPolicy::new("my-bucket", utc_now() + Duration::days(1));
    /// policy.add_equals_condition("key", "uploads/photo.jpg").unwrap();
    ///
    /// let resp = client
    ///     .object("uploads/photo.jpg")
    ///     .form_upload_url(Acl::PublicRead, policy)
    ///     .build()
    ///     .generate()
    ///     .unwrap();
    /// assert_eq!(resp.form_data.get("key").unwrap(), "uploads/photo.jpg");
    /// ```
    pub fn form_upload_url<P>(&self, acl: Acl, policy: P) -> GetFormUploadUrlBldr<P> {
        GetFormUploadUrl::builder()
            .client(self.client.clone())
            .object(self.key.clone())
            .acl(acl)
            .policy(policy)
    }
}
