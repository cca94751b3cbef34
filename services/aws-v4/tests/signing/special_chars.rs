// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use super::{apigateway, parts, s3_signer, signature, signed_headers, signer_at};
use http::request::Parts;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use pretty_assertions::assert_eq;
use sigv4_aws::{canonical_uri, Credential, PathEncoding};
use sigv4_core::SigningRequest;
use test_case::test_case;

fn canonical_path(req: &Parts, path_encoding: PathEncoding) -> String {
    let req = SigningRequest::build(req).expect("request must be signable");
    canonical_uri(&req, path_encoding).expect("path must be valid")
}

#[test]
fn test_head_object_with_special_characters() {
    let path = utf8_percent_encode("!@#$%^&*()_+-=;:'><,/?.txt", NON_ALPHANUMERIC).to_string();
    let mut req = parts(
        "HEAD",
        &format!("https://examplebucket.s3.amazonaws.com/{path}"),
        &[],
    );

    // The encoded '/' is part of the key, not a separator.
    assert_eq!(
        canonical_path(&req, PathEncoding::Single),
        "/%21%40%23%24%25%5E%26%2A%28%29_%2B-%3D%3B%3A%27%3E%3C%2C%2F%3F.txt"
    );

    s3_signer().sign(&mut req, b"").expect("sign must succeed");
    assert_eq!(
        signature(&req),
        "bcc22101d72a6845e5f5141b893587c70a9e93361c65126ba3e779df7f690c1c"
    );
}

#[test]
fn test_get_object_with_unicode_characters() {
    let mut req = parts(
        "GET",
        "https://examplebucket.s3.amazonaws.com/%E4%BD%A0%E5%A5%BD.txt?prefix=CI/&delimiter=/",
        &[],
    );

    s3_signer().sign(&mut req, b"").expect("sign must succeed");

    assert_eq!(req.uri.path(), "/%E4%BD%A0%E5%A5%BD.txt");
    assert_eq!(req.uri.query(), Some("delimiter=%2F&prefix=CI%2F"));
    assert_eq!(
        signature(&req),
        "2f7913b32b6e155c2d749c396153ab45ec10ca567d4c39aa13d4a920716c1921"
    );
}

#[test_case("/restapis/a%20b", "c4fe60a10ba58d7011f505b8f8ed21e8ff1f970886f83be4767e985779b638e4" ; "encoded space")]
#[test_case("/restapis/a%2Fb", "72cb1ad3ff2770a8caaeb917bad2fe6cff8a9337c8f0137049d81d52ebb10992" ; "encoded slash")]
#[test_case("/restapis/%7Euser/stages", "9d47d9d0c755210c49c173ce5ef16372a7876a90a39c7632997aa6b69283b8e8" ; "encoded tilde")]
fn test_apigateway_path_is_encoded_twice(path: &str, expected: &str) {
    let signer = signer_at(
        "2015-01-01T00:00:00Z",
        apigateway(),
        Credential::new("akid", "secret", None),
    );
    let mut req = parts(
        "GET",
        &format!("https://apigateway.us-east-1.amazonaws.com{path}"),
        &[],
    );

    signer.sign(&mut req, b"").expect("sign must succeed");

    assert_eq!(req.uri.path(), path);
    assert_eq!(
        signed_headers(&req),
        ["host", "x-amz-content-sha256", "x-amz-date"]
    );
    assert_eq!(signature(&req), expected);
}

#[test_case("/test%20file%20with%20spaces.txt", "/test%2520file%2520with%2520spaces.txt" ; "encoded spaces")]
#[test_case("/a%2bb", "/a%252bb" ; "lowercase hex")]
#[test_case("/a%2Fb/c", "/a%252Fb/c" ; "encoded slash")]
#[test_case("/~user/file-name_1.txt", "/~user/file-name_1.txt" ; "unreserved")]
#[test_case("/%7Euser", "/%257Euser" ; "over encoded unreserved")]
fn test_path_is_encoded_twice_by_default(path: &str, expected: &str) {
    let req = parts(
        "GET",
        &format!("https://apigateway.us-east-1.amazonaws.com{path}"),
        &[],
    );

    assert_eq!(canonical_path(&req, PathEncoding::default()), expected);
}

#[test_case("/test%20file%20with%20spaces.txt", "/test%20file%20with%20spaces.txt" ; "encoded spaces")]
#[test_case("/a%2bb", "/a%2Bb" ; "lowercase hex")]
#[test_case("/a%2Fb/c", "/a%2Fb/c" ; "encoded slash")]
#[test_case("/~user/file-name_1.txt", "/~user/file-name_1.txt" ; "unreserved")]
#[test_case("/%7Euser", "/~user" ; "over encoded unreserved")]
fn test_s3_path_is_encoded_once(path: &str, expected: &str) {
    let req = parts(
        "GET",
        &format!("https://examplebucket.s3.amazonaws.com{path}"),
        &[],
    );

    assert_eq!(canonical_path(&req, PathEncoding::Single), expected);
}
