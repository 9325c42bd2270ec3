// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use revoke_client::types::ClientCredentials;
use url::Url;
use wiremock::MockServer;

mod types;

const CLIENT_ID: &str = "client";
const CLIENT_SECRET: &str = "secret";
const TOKEN: &str = "token";

async fn init_test() -> (reqwest::Client, MockServer, Url) {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let client = revoke_http::reqwest_client();
    let mock_server = MockServer::start().await;
    let revocation_endpoint = Url::parse(&mock_server.uri())
        .expect("Couldn't parse URL")
        .join("revoke")
        .expect("Couldn't build the revocation endpoint");

    (client, mock_server, revocation_endpoint)
}

fn client_secret_post() -> ClientCredentials {
    ClientCredentials::ClientSecretPost {
        client_id: CLIENT_ID.to_owned(),
        client_secret: CLIENT_SECRET.to_owned(),
    }
}
