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
use crate::s3::multimap_ext::Multimap;
use crate::s3::response::DeleteObjectResponse;
use crate::s3::types::{Expect, S3Api, S3Request, ToS3Request};
use crate::s3::utils::check_object_name;
use http::{Method, StatusCode};
use typed_builder::TypedBuilder;

/// Argument builder for the [delete()](crate::s3::client::Object::delete) API.
///
/// The server must answer `204 No Content`.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteObject {
    #[builder(!default)] // force required
    client: Client,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
}

pub type DeleteObjectBldr = DeleteObjectBuilder<((Client,), (), (), (String,))>;

impl S3Api for DeleteObject {
    type S3Response = DeleteObjectResponse;
}

impl ToS3Request for DeleteObject {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_object_name(&self.object)?;

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::DELETE)
            .object(self.object)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(self.extra_headers.unwrap_or_default())
            .expect(Expect::Status(StatusCode::NO_CONTENT))
            .build())
    }
}
