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

use crate::s3::multimap_ext::Multimap;

/// Response of [form_upload_url()](crate::s3::client::Object::form_upload_url)
#[derive(Clone, Debug)]
pub struct GetFormUploadUrlResponse {
    /// URL of the bucket root, carrying the form fields as its query string.
    pub url: String,

    /// Form fields: `AWSAccessKeyId`, `acl`, `key`, `signature`, `policy` and any extra fields.
    pub form_data: Multimap,
}
