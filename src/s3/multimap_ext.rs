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

use crate::s3::utils::query_escape;
use std::collections::BTreeMap;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Replaces all values of `key` with the single given value
    fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds a multimap to the current multimap
    fn add_multimap(&mut self, other: Multimap);

    /// Returns the first value of a key, comparing keys ASCII case-insensitively
    fn get_ignore_case(&self, key: &str) -> Option<&str>;

    /// Removes every entry whose key matches ASCII case-insensitively
    fn remove_ignore_case(&mut self, key: &str);

    /// Converts multimap to canonical query string.
    ///
    /// Keys are sorted byte-wise; the values of a key keep their insertion order. A key
    /// with an empty value is emitted alone, without `=`. The result doubles as the query
    /// string transmitted on the wire.
    fn get_canonical_query_string(&self) -> String;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        self.remove_ignore_case(&key);
        self.insert(key, value.into());
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            self.insert_many(key, values);
        }
    }

    fn get_ignore_case(&self, key: &str) -> Option<&str> {
        self.iter_all()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .and_then(|(_, values)| values.first())
            .map(String::as_str)
    }

    fn remove_ignore_case(&mut self, key: &str) {
        self.retain(|k, _| !k.eq_ignore_ascii_case(key));
    }

    fn get_canonical_query_string(&self) -> String {
        // BTreeMap on &str orders keys byte-wise
        let sorted: BTreeMap<&str, &Vec<String>> = self
            .iter_all()
            .map(|(key, values)| (key.as_str(), values))
            .collect();

        let mut query = String::new();
        for (key, values) in sorted {
            let key = query_escape(key);
            for value in values {
                // a pair with neither name nor value has no query form
                if key.is_empty() && value.is_empty() {
                    continue;
                }
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&key);
                if !value.is_empty() {
                    query.push('=');
                    query.push_str(&query_escape(value));
                }
            }
        }
        query
    }
}
