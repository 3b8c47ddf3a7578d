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

/// Response of [presigned_url()](crate::s3::client::Object::presigned_url)
#[derive(Clone, Debug)]
pub struct GetPresignedObjectUrlResponse {
    /// The bucket containing the object.
    pub bucket: String,

    /// The key of the object.
    pub object: String,

    /// Unix time, in seconds, after which the URL is rejected.
    pub expires: i64,

    /// The presigned URL for the object.
    pub url: String,
}
