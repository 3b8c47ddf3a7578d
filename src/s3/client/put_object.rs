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

use crate::s3::builders::{PutObject, PutObjectBldr};
use crate::s3::client::Object;
use crate::s3::object_writer::ObjectWriter;
use bytes::Bytes;

impl Object {
    /// Creates a [`PutObject`] request builder uploading `data` in a single PUT.
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
    ///     client
    ///         .object("notes.txt")
    ///         .put("hello")
    ///         .content_type(Some("text/plain".to_string()))
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    /// }
    /// ```
    pub fn put(&self, data: impl Into<Bytes>) -> PutObjectBldr {
        PutObject::builder()
            .client(self.client.clone())
            .object(self.key.clone())
            .data(data)
    }

    /// Returns a buffered writer whose content is uploaded on
    /// [`finalize`](ObjectWriter::finalize).
    pub fn writer(&self) -> ObjectWriter {
        ObjectWriter::new(self.clone())
    }
}
