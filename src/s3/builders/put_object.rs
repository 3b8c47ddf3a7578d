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
use crate::s3::error::ValidationErr;
use crate::s3::header_constants::*;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::PutObjectResponse;
use crate::s3::types::{Expect, S3Api, S3Request, ToS3Request};
use crate::s3::utils::{check_object_name, md5sum_hash};
use bytes::Bytes;
use http::{Method, StatusCode};
use typed_builder::TypedBuilder;

/// Argument builder for the [put()](crate::s3::client::Object::put) API, a single PUT
/// carrying the whole object.
///
/// `Content-MD5` and `Content-Type` are both part of the string-to-sign.
#[derive(Clone, Debug, TypedBuilder)]
pub struct PutObject {
    #[builder(!default)] // force required
    client: Client,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
    #[builder(setter(into))]
    data: Bytes,
    /// Defaults to `application/octet-stream`
    #[builder(default, setter(into))]
    content_type: Option<String>,
}

pub type PutObjectBldr = PutObjectBuilder<((Client,), (), (), (String,), (Bytes,), ())>;

impl S3Api for PutObject {
    type S3Response = PutObjectResponse;
}

impl ToS3Request for PutObject {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_object_name(&self.object)?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.set(
            CONTENT_TYPE,
            self.content_type
                .unwrap_or_else(|| "application/octet-stream".into()),
        );
        headers.set(CONTENT_MD5, md5sum_hash(&self.data));

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::PUT)
            .object(self.object)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .body(self.data)
            .expect(Expect::Status(StatusCode::OK))
            .build())
    }
}
