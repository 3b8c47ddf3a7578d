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
use crate::s3::utils::{normalize_object_key, url_safe_key};

/// Handle on a single object key of a client's bucket.
///
/// Obtained from [`Client::object`]. The key is normalized once, on creation: leading and
/// trailing slashes and spaces are trimmed. Every operation on the handle is a request
/// builder; see the `impl Object` blocks of the operation modules.
#[derive(Clone, Debug)]
pub struct Object {
    pub(crate) client: Client,
    pub(crate) key: String,
}

impl Object {
    pub(crate) fn new(client: Client, key: &str) -> Self {
        Self {
            client,
            key: normalize_object_key(key),
        }
    }

    /// Returns the normalized object key
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Returns the key escaped for use in a request path
    pub fn url_safe_key(&self) -> String {
        url_safe_key(&self.key)
    }
}
