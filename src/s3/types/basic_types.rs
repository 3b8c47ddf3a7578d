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
use http::StatusCode;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// Canned access control level applied to an object at write time
pub enum Acl {
    #[default]
    Private,
    PublicRead,
    PublicReadWrite,
    AuthenticatedRead,
    BucketOwnerRead,
    BucketOwnerFullControl,
}

impl Acl {
    pub fn as_str(&self) -> &'static str {
        match self {
            Acl::Private => "private",
            Acl::PublicRead => "public-read",
            Acl::PublicReadWrite => "public-read-write",
            Acl::AuthenticatedRead => "authenticated-read",
            Acl::BucketOwnerRead => "bucket-owner-read",
            Acl::BucketOwnerFullControl => "bucket-owner-full-control",
        }
    }
}

impl fmt::Display for Acl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Acl {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "private" => Ok(Acl::Private),
            "public-read" => Ok(Acl::PublicRead),
            "public-read-write" => Ok(Acl::PublicReadWrite),
            "authenticated-read" => Ok(Acl::AuthenticatedRead),
            "bucket-owner-read" => Ok(Acl::BucketOwnerRead),
            "bucket-owner-full-control" => Ok(Acl::BucketOwnerFullControl),
            _ => Err(ValidationErr::InvalidAcl(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Response status a dispatched request must come back with
pub enum Expect {
    /// Any status is accepted and the raw response is returned
    Any,
    /// Any other status is turned into an error
    Status(StatusCode),
}

impl Default for Expect {
    fn default() -> Self {
        Expect::Status(StatusCode::OK)
    }
}

impl Expect {
    pub fn matches(&self, status: StatusCode) -> bool {
        match self {
            Expect::Any => true,
            Expect::Status(code) => *code == status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acl_round_trip() {
        for acl in [
            Acl::Private,
            Acl::PublicRead,
            Acl::PublicReadWrite,
            Acl::AuthenticatedRead,
            Acl::BucketOwnerRead,
            Acl::BucketOwnerFullControl,
        ] {
            assert_eq!(acl.to_string().parse::<Acl>().unwrap(), acl);
        }
        assert_eq!(Acl::BucketOwnerFullControl.as_str(), "bucket-owner-full-control");
    }

    #[test]
    fn test_acl_unknown() {
        assert!(matches!(
            "Private".parse::<Acl>(),
            Err(ValidationErr::InvalidAcl(_))
        ));
    }

    #[test]
    fn test_expect_matches() {
        assert!(Expect::Any.matches(StatusCode::FORBIDDEN));
        assert!(Expect::Any.matches(StatusCode::OK));
        assert!(Expect::Status(StatusCode::NO_CONTENT).matches(StatusCode::NO_CONTENT));
        assert!(!Expect::Status(StatusCode::NO_CONTENT).matches(StatusCode::OK));
        assert_eq!(Expect::default(), Expect::Status(StatusCode::OK));
    }
}
