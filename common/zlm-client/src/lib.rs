//! ZLM Client helps to
//!
//! Simplify working with the [HTTP API][1] of [ZLMediaKit] under Rust.
//!
//! [ZLMediaKit]: https://github.com/ZLMediaKit/ZLMediaKit
//! [1]: https://docs.zlmediakit.com/guide/media_server/restful_api.html

#![deny(
    rustdoc::broken_intra_doc_links,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![warn(
    deprecated_in_future,
    missing_docs,
    unreachable_pub,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

mod http_api;

pub use crate::http_api::{ErrorKind, StreamInfo, ZlmClient, ZlmClientError};
