// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::collections::HashMap;

use revoke_client::{
    classify::ErrorStatusPolicy,
    requests::revocation::revoke_token,
    types::{
        BasicAuthEncoding, ClientCredentials, ResponseErrorType, RevocationRequest,
        client_credentials::JWT_BEARER_CLIENT_ASSERTION_TYPE,
    },
};
use wiremock::{
    Mock, Request, ResponseTemplate,
    matchers::{header, header_exists, method, path},
};

use crate::{CLIENT_ID, CLIENT_SECRET, TOKEN, client_secret_post, init_test};

const SPECIAL_CLIENT_ID: &str = "client!+ID";
const SPECIAL_CLIENT_SECRET: &str = "SECRET?%Gclient";
const CLIENT_ASSERTION: &str = "eyJhbGciOiJub25lIn0.eyJzdWIiOiJjbGllbnQifQ.";

fn body_fields(req: &Request) -> HashMap<String, String> {
    form_urlencoded::parse(&req.body).into_owned().collect()
}

#[tokio::test]
async fn pass_none() {
    let (http_client, mock_server, revocation_endpoint) = init_test().await;

    Mock::given(method("POST"))
        .and(path("/revoke"))
        .and(|req: &Request| {
            let fields = body_fields(req);
            fields.get("client_id").map(String::as_str) == Some(CLIENT_ID)
                && !fields.contains_key("client_secret")
                && !req.headers.contains_key("authorization")
        })
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = RevocationRequest::builder(revocation_endpoint.as_str(), TOKEN)
        .client_credentials(ClientCredentials::None {
            client_id: CLIENT_ID.to_owned(),
        })
        .build()
        .unwrap();

    let result = revoke_token(&http_client, &request, &ErrorStatusPolicy::default()).await;
    assert_eq!(result.error_type(), ResponseErrorType::None);
}

#[tokio::test]
async fn pass_client_secret_post() {
    let (http_client, mock_server, revocation_endpoint) = init_test().await;

    Mock::given(method("POST"))
        .and(path("/revoke"))
        .and(|req: &Request| {
            let fields = body_fields(req);
            fields.get("client_id").map(String::as_str) == Some(CLIENT_ID)
                && fields.get("client_secret").map(String::as_str) == Some(CLIENT_SECRET)
        })
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = RevocationRequest::builder(revocation_endpoint.as_str(), TOKEN)
        .client_credentials(client_secret_post())
        .build()
        .unwrap();

    let result = revoke_token(&http_client, &request, &ErrorStatusPolicy::default()).await;
    assert_eq!(result.error_type(), ResponseErrorType::None);
}

#[tokio::test]
async fn pass_client_secret_basic() {
    let (http_client, mock_server, revocation_endpoint) = init_test().await;

    // base64("client%21%2BID:SECRET%3F%25Gclient")
    Mock::given(method("POST"))
        .and(path("/revoke"))
        .and(header(
            "authorization",
            "Basic Y2xpZW50JTIxJTJCSUQ6U0VDUkVUJTNGJTI1R2NsaWVudA==",
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = RevocationRequest::builder(revocation_endpoint.as_str(), TOKEN)
        .client_credentials(ClientCredentials::ClientSecretBasic {
            client_id: SPECIAL_CLIENT_ID.to_owned(),
            client_secret: SPECIAL_CLIENT_SECRET.to_owned(),
        })
        .build()
        .unwrap();

    let result = revoke_token(&http_client, &request, &ErrorStatusPolicy::default()).await;
    assert_eq!(result.error_type(), ResponseErrorType::None);
}

#[tokio::test]
async fn pass_client_secret_basic_rfc2617() {
    let (http_client, mock_server, revocation_endpoint) = init_test().await;

    // base64("client!+ID:SECRET?%Gclient")
    Mock::given(method("POST"))
        .and(path("/revoke"))
        .and(header(
            "authorization",
            "Basic Y2xpZW50IStJRDpTRUNSRVQ/JUdjbGllbnQ=",
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = RevocationRequest::builder(revocation_endpoint.as_str(), TOKEN)
        .client_credentials(ClientCredentials::ClientSecretBasic {
            client_id: SPECIAL_CLIENT_ID.to_owned(),
            client_secret: SPECIAL_CLIENT_SECRET.to_owned(),
        })
        .basic_auth_encoding(BasicAuthEncoding::Rfc2617)
        .build()
        .unwrap();

    let result = revoke_token(&http_client, &request, &ErrorStatusPolicy::default()).await;
    assert_eq!(result.error_type(), ResponseErrorType::None);
}

#[tokio::test]
async fn pass_client_assertion() {
    let (http_client, mock_server, revocation_endpoint) = init_test().await;

    Mock::given(method("POST"))
        .and(path("/revoke"))
        .and(header_exists("content-type"))
        .and(|req: &Request| {
            let fields = body_fields(req);
            !fields.contains_key("client_id")
                && fields.get("client_assertion").map(String::as_str) == Some(CLIENT_ASSERTION)
                && fields.get("client_assertion_type").map(String::as_str)
                    == Some(JWT_BEARER_CLIENT_ASSERTION_TYPE)
        })
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = RevocationRequest::builder(revocation_endpoint.as_str(), TOKEN)
        .client_credentials(ClientCredentials::jwt_bearer_assertion(
            None,
            CLIENT_ASSERTION.to_owned(),
        ))
        .build()
        .unwrap();

    let result = revoke_token(&http_client, &request, &ErrorStatusPolicy::default()).await;
    assert_eq!(result.error_type(), ResponseErrorType::None);
}
