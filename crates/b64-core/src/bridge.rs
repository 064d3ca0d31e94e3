//! Host calling convention for the codec.
//!
//! A host (the JavaScript global object in `b64-wasm`, a plain map in tests)
//! gets two named entry points, `encode` and `decode`. Each takes exactly one
//! string argument and answers with either the converted string or an
//! [`ErrorReply`]. Nothing here throws: every failure is returned as data.
//!
//! # Startup
//!
//! [`install`] registers both operations, then looks up the optional
//! zero-argument [`READY_CALLBACK`] and invokes it. A missing or failing
//! callback is logged and setup carries on. Running [`install`] again
//! re-registers the same names and signals readiness again; handlers are
//! stateless, so the observable behavior does not change.
//!
//! # Logging
//!
//! Setup events go through `tracing` and only show up when the embedding
//! process installs a subscriber (native hosts, tests). The WASM build has no
//! subscriber; `b64-wasm` reports the same events on the JS console instead.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::codec;
use crate::error::{CodecError, Result};

/// Name of the host global invoked once setup has finished.
pub const READY_CALLBACK: &str = "wasmReady";

/// The operations published to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Encode,
    Decode,
}

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::Encode, Operation::Decode];

    /// The fixed name the operation is registered under.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Encode => "encode",
            Operation::Decode => "decode",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse type of a host value, mirroring JavaScript's `typeof` with `null`
/// split out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Null,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    Function,
    Object,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::BigInt => "bigint",
            ValueKind::String => "string",
            ValueKind::Symbol => "symbol",
            ValueKind::Function => "function",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value handed over by the host as a call argument.
pub trait HostValue {
    fn kind(&self) -> ValueKind;

    /// The string contents, when [`HostValue::kind`] is [`ValueKind::String`].
    fn as_text(&self) -> Option<String>;
}

/// Structured error answer: `{ "error": "<message>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReply {
    pub error: String,
}

impl From<&CodecError> for ErrorReply {
    fn from(e: &CodecError) -> Self {
        Self {
            error: e.to_string(),
        }
    }
}

impl From<CodecError> for ErrorReply {
    fn from(e: CodecError) -> Self {
        Self::from(&e)
    }
}

/// What an entry point hands back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Error(ErrorReply),
}

impl From<Result<String>> for Reply {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(text) => Reply::Text(text),
            Err(e) => Reply::Error(e.into()),
        }
    }
}

/// Pull the single string argument out of `args`.
pub fn expect_text<V: HostValue>(args: &[V]) -> Result<String> {
    let arg = match args {
        [] => return Err(CodecError::MissingArgument),
        [arg] => arg,
        _ => return Err(CodecError::ArgumentCount(args.len())),
    };
    match arg.kind() {
        ValueKind::String => arg.as_text().ok_or(CodecError::NotAString {
            found: ValueKind::String,
        }),
        found => Err(CodecError::NotAString { found }),
    }
}

/// Validate `args` and run `op` on them.
pub fn dispatch<V: HostValue>(op: Operation, args: &[V]) -> Result<String> {
    let input = expect_text(args)?;
    match op {
        Operation::Encode => Ok(codec::encode(&input)),
        Operation::Decode => codec::decode(&input),
    }
}

/// Outcome of looking up and invoking the readiness callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    Signaled,
    Absent,
    /// The callback exists but threw; carries the host's message.
    Failed(String),
}

/// A namespace the bridge can publish entry points into.
pub trait Host {
    type Error: fmt::Display;

    /// Publish a handler for `op` under `op.name()`, replacing any previous
    /// binding of that name.
    fn register(&mut self, op: Operation) -> std::result::Result<(), Self::Error>;

    /// Look up a zero-argument callback named `name` and call it if present.
    fn signal_ready(&mut self, name: &str) -> Readiness;
}

/// Register every operation on `host`, then signal readiness.
///
/// Only registration failures are returned; readiness problems are logged.
pub fn install<H: Host>(host: &mut H) -> std::result::Result<Readiness, H::Error> {
    for op in Operation::ALL {
        host.register(op)?;
        debug!(operation = op.name(), "registered entry point");
    }
    debug!("all entry points registered");

    let readiness = host.signal_ready(READY_CALLBACK);
    match &readiness {
        Readiness::Signaled => info!(callback = READY_CALLBACK, "readiness signaled"),
        Readiness::Absent => warn!(
            callback = READY_CALLBACK,
            "readiness callback not found; define it before loading the module"
        ),
        Readiness::Failed(reason) => {
            warn!(callback = READY_CALLBACK, %reason, "readiness callback failed")
        }
    }
    Ok(readiness)
}
