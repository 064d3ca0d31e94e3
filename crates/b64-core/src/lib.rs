//! # b64-core
//!
//! Strict standard Base64 codec plus the calling convention used to expose it
//! to a scripting host (JavaScript, via `b64-wasm`).
//!
//! ## Quick start
//!
//! ```rust
//! use b64_core::{decode, encode};
//!
//! let b64 = encode("hello");
//! assert_eq!(b64, "aGVsbG8=");
//!
//! let back = decode(&b64).unwrap();
//! assert_eq!(back, "hello");
//! ```
//!
//! ## Modules
//!
//! - [`codec`] — string/bytes ⇄ standard Base64 (padded, strict decode)
//! - [`bridge`] — argument validation, dispatch by operation name, error
//!   replies, and the install/readiness sequence against a [`bridge::Host`]
//! - [`error`] — the flat error type shared by both

pub mod bridge;
pub mod codec;
pub mod error;

pub use bridge::{
    dispatch, install, ErrorReply, Host, HostValue, Operation, Readiness, Reply, ValueKind,
    READY_CALLBACK,
};
pub use codec::{decode, decode_bytes, encode, encode_bytes};
pub use error::CodecError;
