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

use crate::s3::error::ValidationErr;
use crate::s3::header_constants::*;
use crate::s3::utils::{UtcTime, to_iso8601utc};
use serde::{Serialize, Serializer};
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Post policy document for browser form uploads.
///
/// Serializes to `{"conditions": [...], "expiration": "..."}`. Conditions are emitted in a
/// stable order: the bucket condition, equals conditions, starts-with conditions, then the
/// content-length range.
///
/// See [Post Policy Conditions](https://docs.aws.amazon.com/AmazonS3/latest/userguide/HTTPPOSTForms.html#HTTPPOSTConstructPolicy)
/// for condition elements and their usage.
#[derive(Clone, Debug)]
pub struct PostPolicy {
    bucket: String,
    expiration: UtcTime,
    eq_conditions: BTreeMap<String, String>,
    starts_with_conditions: BTreeMap<String, String>,
    content_length_range: Option<(usize, usize)>,
}

impl PostPolicy {
    const EQ: &'static str = "eq";
    const STARTS_WITH: &'static str = "starts-with";

    /// Returns a post policy with given bucket name and expiration.
    ///
    /// # Examples
    ///
    /// ```
    /// use s3lite::s3::utils::*;
    /// use chrono::Duration;
    /// use s3lite::s3::builders::PostPolicy;
    /// let expiration = utc_now() + Duration::days(7);
    /// let policy = PostPolicy::new("bucket-name", expiration);
    /// ```
    pub fn new(bucket: &str, expiration: UtcTime) -> Self {
        Self {
            bucket: bucket.to_string(),
            expiration,
            eq_conditions: Default::default(),
            starts_with_conditions: Default::default(),
            content_length_range: None,
        }
    }

    fn trim_dollar(value: &str) -> String {
        value.strip_prefix('$').unwrap_or(value).to_string()
    }

    fn is_reserved_element(element: &str) -> bool {
        element.eq_ignore_ascii_case("bucket")
            || element.eq_ignore_ascii_case(AWS_ACCESS_KEY_ID)
            || element.eq_ignore_ascii_case(POLICY)
            || element.eq_ignore_ascii_case(FORM_SIGNATURE)
    }

    fn check_element(element: &str) -> Result<String, ValidationErr> {
        if element.is_empty() {
            return Err(ValidationErr::PostPolicyError(
                "condition element cannot be empty".into(),
            ));
        }

        let v = PostPolicy::trim_dollar(element);
        if v.eq_ignore_ascii_case("content-length-range") {
            return Err(ValidationErr::PostPolicyError(format!(
                "{element} must be set with add_content_length_range_condition"
            )));
        }

        if PostPolicy::is_reserved_element(&v) {
            return Err(ValidationErr::PostPolicyError(format!(
                "{element} cannot set"
            )));
        }
        Ok(v)
    }

    /// Adds equals condition for given element and value
    ///
    /// # Examples
    ///
    /// ```
    /// use s3lite::s3::utils::*;
    /// use chrono::Duration;
    /// use s3lite::s3::builders::PostPolicy;
    /// let mut policy = PostPolicy::new("my-bucket", utc_now() + Duration::days(7));
    ///
    /// // Add condition that 'key' (object name) equals to 'photo.jpg'
    /// policy.add_equals_condition("key", "photo.jpg").unwrap();
    /// ```
    pub fn add_equals_condition(
        &mut self,
        element: &str,
        value: &str,
    ) -> Result<(), ValidationErr> {
        let v = PostPolicy::check_element(element)?;
        self.eq_conditions.insert(v, value.to_string());
        Ok(())
    }

    /// Removes equals condition for given element
    pub fn remove_equals_condition(&mut self, element: &str) {
        self.eq_conditions.remove(&PostPolicy::trim_dollar(element));
    }

    /// Adds starts-with condition for given element and value
    ///
    /// # Examples
    ///
    /// ```
    /// use s3lite::s3::utils::*;
    /// use chrono::Duration;
    /// use s3lite::s3::builders::PostPolicy;
    /// let mut policy = PostPolicy::new("my-bucket", utc_now() + Duration::days(7));
    ///
    /// // Add condition that 'Content-Type' starts with 'image/'
    /// policy.add_starts_with_condition("Content-Type", "image/").unwrap();
    /// ```
    pub fn add_starts_with_condition(
        &mut self,
        element: &str,
        value: &str,
    ) -> Result<(), ValidationErr> {
        let v = PostPolicy::check_element(element)?;
        if v.eq_ignore_ascii_case("success_action_status") {
            return Err(ValidationErr::PostPolicyError(format!(
                "{element} is unsupported for starts-with condition",
            )));
        }
        self.starts_with_conditions.insert(v, value.to_string());
        Ok(())
    }

    /// Removes starts-with condition for given element
    pub fn remove_starts_with_condition(&mut self, element: &str) {
        self.starts_with_conditions
            .remove(&PostPolicy::trim_dollar(element));
    }

    /// Adds content-length range condition with given lower and upper limits
    ///
    /// # Examples
    ///
    /// ```
    /// use s3lite::s3::utils::*;
    /// use chrono::Duration;
    /// use s3lite::s3::builders::PostPolicy;
    /// let mut policy = PostPolicy::new("my-bucket", utc_now() + Duration::days(7));
    ///
    /// // Add condition that 'content-length-range' is between 64kiB to 10MiB
    /// policy.add_content_length_range_condition(64 * 1024, 10 * 1024 * 1024).unwrap();
    /// ```
    pub fn add_content_length_range_condition(
        &mut self,
        lower_limit: usize,
        upper_limit: usize,
    ) -> Result<(), ValidationErr> {
        if lower_limit > upper_limit {
            return Err(ValidationErr::PostPolicyError(
                "lower limit cannot be greater than upper limit".into(),
            ));
        }

        self.content_length_range = Some((lower_limit, upper_limit));
        Ok(())
    }

    /// Removes content-length range condition
    pub fn remove_content_length_range_condition(&mut self) {
        self.content_length_range = None;
    }

    /// Returns the policy document as JSON
    pub fn to_json(&self) -> Value {
        let mut conditions: Vec<Value> = Vec::new();
        conditions.push(json!([PostPolicy::EQ, "$bucket", self.bucket]));
        for (key, value) in &self.eq_conditions {
            conditions.push(json!([PostPolicy::EQ, String::from("$") + key, value]));
        }
        for (key, value) in &self.starts_with_conditions {
            conditions.push(json!([
                PostPolicy::STARTS_WITH,
                String::from("$") + key,
                value
            ]));
        }
        if let Some((lower, upper)) = self.content_length_range {
            conditions.push(json!(["content-length-range", lower, upper]));
        }

        json!({
            "expiration": to_iso8601utc(self.expiration),
            "conditions": conditions,
        })
    }
}

impl Serialize for PostPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
