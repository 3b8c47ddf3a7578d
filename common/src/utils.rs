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

use crate::mock_server::RecordedRequest;
use rand::distr::{Alphanumeric, SampleString};
use s3lite::s3::signer::{get_authorization, get_string_to_sign, sign};

pub fn rand_bucket_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 8).to_lowercase()
}

pub fn rand_object_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 8)
}

/// Recomputes the `Authorization` header a correctly signed request must carry.
///
/// Works for path-style requests, where the request path already starts with the bucket and
/// the wire query is the canonical query.
pub fn expected_authorization(
    req: &RecordedRequest,
    access_key: &str,
    secret_key: &str,
) -> String {
    let mut resource = req.path.clone();
    if let Some(query) = req.query.as_deref().filter(|q| !q.is_empty()) {
        resource.push('?');
        resource.push_str(query);
    }
    let string_to_sign = get_string_to_sign(
        &req.method,
        req.header("content-md5").unwrap_or_default(),
        req.header("content-type").unwrap_or_default(),
        req.header("date").unwrap_or_default(),
        &resource,
    );
    get_authorization(access_key, &sign(secret_key, &string_to_sign))
}
