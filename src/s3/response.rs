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

//! Responses for object operations and URL generation

mod delete_object;
mod get_form_upload_url;
mod get_object;
mod get_presigned_object_url;
mod object_exists;
mod put_object;
mod stat_object;

pub use delete_object::DeleteObjectResponse;
pub use get_form_upload_url::GetFormUploadUrlResponse;
pub use get_object::GetObjectResponse;
pub use get_presigned_object_url::GetPresignedObjectUrlResponse;
pub use object_exists::ObjectExistsResponse;
pub use put_object::PutObjectResponse;
pub use stat_object::StatObjectResponse;
