#![deny(unsafe_code, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Extract `ApiKey <key>` credentials from the http `Authorization` header.
//!
//! Use [`get_api_key`] directly, or wrap a [tower](https://docs.rs/tower/latest/tower/)
//! service with an [`extension::ExtensionLayer`] to make the key available to handlers.

pub mod authorize;
pub mod extension;
pub mod extract;

pub use authorize::header::api_key::{get_api_key, ApiKey, ApiKeyHeaderError};
