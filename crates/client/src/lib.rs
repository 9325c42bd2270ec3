// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! An [OAuth 2.0 Token Revocation] client library.
//!
//! # Scope
//!
//! This crate covers a single request/response cycle against a revocation
//! endpoint: building the form-encoded request with the client
//! authentication, sending it through a [`Transport`], and classifying the
//! response in a [`RevocationResult`].
//!
//! It does not retry, cache or otherwise manage the lifecycle of tokens.
//!
//! # Outcomes
//!
//! Every call resolves to exactly one of:
//!
//! - [`RevocationResult::Success`]: the server answered with a 2xx status.
//! - [`RevocationResult::ProtocolError`]: the server answered with an
//!   [RFC 6749 error response].
//! - [`RevocationResult::HttpError`]: the server answered with an opaque error
//!   status, for example from a reverse proxy.
//! - [`RevocationResult::TransportException`]: no response could be obtained,
//!   or an error response did not follow the expected format.
//!
//! [OAuth 2.0 Token Revocation]: https://www.rfc-editor.org/rfc/rfc7009
//! [RFC 6749 error response]: https://www.rfc-editor.org/rfc/rfc6749#section-5.2
//! [`Transport`]: crate::http_service::Transport
//! [`RevocationResult`]: crate::types::RevocationResult
//! [`RevocationResult::Success`]: crate::types::RevocationResult::Success
//! [`RevocationResult::ProtocolError`]: crate::types::RevocationResult::ProtocolError
//! [`RevocationResult::HttpError`]: crate::types::RevocationResult::HttpError
//! [`RevocationResult::TransportException`]: crate::types::RevocationResult::TransportException

#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod classify;
pub mod error;
pub mod http_service;
pub mod requests;
pub mod types;
