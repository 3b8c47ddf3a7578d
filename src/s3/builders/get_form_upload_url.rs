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
use crate::s3::error::{Error, ValidationErr};
use crate::s3::header_constants::*;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::GetFormUploadUrlResponse;
use crate::s3::signer::post_policy_signature;
use crate::s3::types::Acl;
use crate::s3::utils::{b64_encode, check_object_name};
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for the [form_upload_url()](crate::s3::client::Object::form_upload_url) API.
///
/// The policy is any serializable document, typically a [`PostPolicy`](crate::s3::builders::PostPolicy);
/// it is serialized to JSON, base64 encoded and signed.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetFormUploadUrl<P> {
    #[builder(!default)] // force required
    client: Client,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
    #[builder(!default)] // force required
    acl: Acl,
    #[builder(!default)] // force required
    policy: P,
    /// Fields added next to the signed ones; every value is kept
    #[builder(default)]
    extra_fields: Multimap,
    /// Overrides the scheme of the client's endpoint
    #[builder(default, setter(into))]
    secure: Option<bool>,
}

pub type GetFormUploadUrlBldr<P> =
    GetFormUploadUrlBuilder<P, ((Client,), (String,), (Acl,), (P,), (), ())>;

impl<P: Serialize> GetFormUploadUrl<P> {
    /// Signs the policy and assembles the form fields. Nothing is sent to the server.
    pub fn generate(self) -> Result<GetFormUploadUrlResponse, Error> {
        check_object_name(&self.object)?;

        let creds = self
            .client
            .credentials()
            .ok_or(ValidationErr::MissingCredentials("sign a form upload policy"))?;

        let encoded_policy = b64_encode(serde_json::to_vec(&self.policy)?);
        let signature = post_policy_signature(&creds.secret_key, &encoded_policy);

        let mut form_data = Multimap::new();
        form_data.add(AWS_ACCESS_KEY_ID, creds.access_key);
        form_data.add(ACL, self.acl.as_str());
        form_data.add(KEY, self.object);
        form_data.add(FORM_SIGNATURE, signature);
        form_data.add(POLICY, encoded_policy);
        form_data.add_multimap(self.extra_fields);

        let mut url = self
            .client
            .base_url()
            .build_url(&form_data, self.client.bucket(), None);
        if let Some(secure) = self.secure {
            url.https = secure;
        }

        Ok(GetFormUploadUrlResponse {
            url: url.to_string(),
            form_data,
        })
    }
}
