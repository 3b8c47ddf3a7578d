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

use crate::s3::builders::{GetObject, GetObjectBldr};
use crate::s3::client::Object;

impl Object {
    /// Creates a [`GetObject`] request builder to download the object.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3lite::s3::Client;
    /// use s3lite::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = Client::builder("my-bucket").build().unwrap();
    ///     let resp = client.object("notes.txt").get().build().send().await.unwrap();
    ///     let data = resp.bytes().await.unwrap();
    ///     println!("{} bytes", data.len());
    /// }
    /// ```
    pub fn get(&self) -> GetObjectBldr {
        GetObject::builder()
            .client(self.client.clone())
            .object(self.key.clone())
    }
}
