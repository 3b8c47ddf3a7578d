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

use crate::s3::builders::{ObjectExists, ObjectExistsBldr};
use crate::s3::client::Object;

impl Object {
    /// Creates an [`ObjectExists`] request builder to check whether the object exists.
    ///
    /// A HEAD request is sent; any status is accepted and the response reports `true`
    /// only for `200 OK`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3lite::s3::Client;
    /// use s3lite::s3::creds::StaticProvider;
    /// use s3lite::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = Client::builder("my-bucket")
    ///         .provider(Some(StaticProvider::new("ACCESS", "SECRET")))
    ///         .build()
    ///         .unwrap();
    ///     let resp = client.object("photo.jpg").exists().build().send().await.unwrap();
    ///     println!("exists: {}", resp.exists());
    /// }
    /// ```
    pub fn exists(&self) -> ObjectExistsBldr {
        ObjectExists::builder()
            .client(self.client.clone())
            .object(self.key.clone())
    }
}
