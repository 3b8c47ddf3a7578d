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

//! Argument builders for [Object](crate::s3::client::Object) APIs

mod delete_object;
mod get_form_upload_url;
mod get_object;
mod get_presigned_object_url;
mod object_exists;
mod post_policy;
mod put_object;
mod stat_object;

pub use delete_object::*;
pub use get_form_upload_url::*;
pub use get_object::*;
pub use get_presigned_object_url::*;
pub use object_exists::*;
pub use post_policy::*;
pub use put_object::*;
pub use stat_object::*;
