//! WASM bindings for b64-core.
//!
//! At instantiation the module publishes `encode` and `decode` on
//! `globalThis`, then calls `globalThis.wasmReady()` if the host defined it.
//! Both entry points take one string and return either a string or
//! `{ error: string }`; they never throw.
//!
//! The same functions are also module exports, alongside `install` (re-run
//! setup) and `version`.
//!
//! Diagnostics go to the JS console only. No `tracing` subscriber is
//! installed here, so the `tracing` events emitted by `b64-core` are dropped.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p b64-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/b64_wasm.wasm
//! ```
//!
//! ## Host usage
//!
//! ```js
//! self.wasmReady = () => {
//!   self.encode("hello");          // "aGVsbG8="
//!   self.decode("aGVsbG8=");       // "hello"
//!   self.decode("abc%");           // { error: "Error decoding Base64: ..." }
//! };
//! await init();                    // instantiates the module
//! ```

mod console;
mod host;

use b64_core::Operation;
use wasm_bindgen::prelude::*;

pub use host::{BindError, GlobalHost};

/// Module start: panic hook, then [`install_global`].
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    console::log("b64 (wasm): starting");
    install_global()
}

/// Register `encode`/`decode` on `globalThis` and signal readiness.
///
/// Safe to call again; the same handlers are republished.
#[wasm_bindgen(js_name = "install")]
pub fn install_global() -> Result<(), JsValue> {
    let mut host = GlobalHost::new();
    b64_core::install(&mut host)?;
    console::log("b64 (wasm): setup complete, entry points stay resident");
    Ok(())
}

/// Encode a string as standard Base64.
///
/// Returns the Base64 string, or `{ error }` if `input` is not a string.
#[wasm_bindgen]
pub fn encode(input: JsValue) -> JsValue {
    host::call(Operation::Encode, &host::single_arg(input))
}

/// Decode standard Base64 into a string.
///
/// Returns the decoded string, or `{ error }` if `input` is not a string or
/// is not valid Base64.
#[wasm_bindgen]
pub fn decode(input: JsValue) -> JsValue {
    host::call(Operation::Decode, &host::single_arg(input))
}

#[wasm_bindgen]
pub fn version() -> String {
    concat!("b64-wasm ", env!("CARGO_PKG_VERSION")).into()
}
