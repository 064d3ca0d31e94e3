//! `b64_core::bridge::Host` over the JavaScript global object.
//!
//! Handlers are created once per instance and cached in thread-local storage.
//! The cache is what keeps the closures alive after setup returns, and
//! re-running setup republishes the same `Function` objects instead of
//! leaking new ones.

use std::cell::RefCell;
use std::fmt;

use b64_core::{dispatch, ErrorReply, Host, HostValue, Operation, Readiness, Reply, ValueKind};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::console;

/// A host argument as seen by the bridge.
pub(crate) struct JsArg(JsValue);

impl HostValue for JsArg {
    fn kind(&self) -> ValueKind {
        let v = &self.0;
        if v.is_undefined() {
            ValueKind::Undefined
        } else if v.is_null() {
            ValueKind::Null
        } else if v.is_string() {
            ValueKind::String
        } else if v.as_bool().is_some() {
            ValueKind::Boolean
        } else if v.as_f64().is_some() {
            ValueKind::Number
        } else if v.is_bigint() {
            ValueKind::BigInt
        } else if v.is_symbol() {
            ValueKind::Symbol
        } else if v.is_function() {
            ValueKind::Function
        } else {
            ValueKind::Object
        }
    }

    fn as_text(&self) -> Option<String> {
        self.0.as_string()
    }
}

/// Argument list for a module export declared with one parameter.
///
/// An `undefined` input is treated as no argument at all.
pub(crate) fn single_arg(input: JsValue) -> Vec<JsArg> {
    if input.is_undefined() {
        Vec::new()
    } else {
        vec![JsArg(input)]
    }
}

/// Argument list exactly as the global handler was called, `undefined`s
/// included.
pub(crate) fn all_args(args: &js_sys::Array) -> Vec<JsArg> {
    args.iter().map(JsArg).collect()
}

/// Run `op` and turn the outcome into `string | {error: string}`.
pub(crate) fn call(op: Operation, args: &[JsArg]) -> JsValue {
    match Reply::from(dispatch(op, args)) {
        Reply::Text(text) => JsValue::from_str(&text),
        Reply::Error(reply) => error_object(&reply),
    }
}

fn error_object(reply: &ErrorReply) -> JsValue {
    serde_wasm_bindgen::to_value(reply).unwrap_or_else(|_| {
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&obj, &"error".into(), &JsValue::from_str(&reply.error));
        obj.into()
    })
}

// Rust closures have a fixed arity, so the published function is a JS shim
// that forwards its whole `arguments` list as one array.
const FORWARD_ARGUMENTS: &str =
    "return function () { return handler(Array.prototype.slice.call(arguments)); };";

struct Handler {
    _closure: Closure<dyn Fn(js_sys::Array) -> JsValue>,
    function: js_sys::Function,
}

impl Handler {
    fn new(op: Operation) -> Result<Self, BindError> {
        let closure = Closure::wrap(Box::new(move |args: js_sys::Array| {
            call(op, &all_args(&args))
        }) as Box<dyn Fn(js_sys::Array) -> JsValue>);

        let wrap = js_sys::Function::new_with_args("handler", FORWARD_ARGUMENTS);
        let function = wrap
            .call1(&JsValue::UNDEFINED, closure.as_ref())
            .map_err(|e| BindError(format!("failed to wrap '{op}': {}", describe(&e))))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| BindError(format!("wrapper for '{op}' is not a function")))?;

        Ok(Self {
            _closure: closure,
            function,
        })
    }
}

struct Handlers {
    encode: Handler,
    decode: Handler,
}

impl Handlers {
    fn new() -> Result<Self, BindError> {
        Ok(Self {
            encode: Handler::new(Operation::Encode)?,
            decode: Handler::new(Operation::Decode)?,
        })
    }

    fn function(&self, op: Operation) -> js_sys::Function {
        match op {
            Operation::Encode => self.encode.function.clone(),
            Operation::Decode => self.decode.function.clone(),
        }
    }
}

thread_local! {
    static HANDLERS: RefCell<Option<Handlers>> = const { RefCell::new(None) };
}

fn handler_function(op: Operation) -> Result<js_sys::Function, BindError> {
    HANDLERS.with(|cell| {
        let mut slot = cell.borrow_mut();
        let handlers = match slot.take() {
            Some(handlers) => handlers,
            None => Handlers::new()?,
        };
        let function = handlers.function(op);
        *slot = Some(handlers);
        Ok(function)
    })
}

/// Failure to publish a handler on the global object.
#[derive(Debug)]
pub struct BindError(String);

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<BindError> for JsValue {
    fn from(e: BindError) -> Self {
        js_sys::Error::new(&e.0).into()
    }
}

/// Render a thrown JS value as text.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        s
    } else if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        String::from(err.message())
    } else {
        format!("{value:?}")
    }
}

/// The JavaScript global object (`globalThis`).
pub struct GlobalHost {
    global: js_sys::Object,
}

impl GlobalHost {
    pub fn new() -> Self {
        Self {
            global: js_sys::global(),
        }
    }
}

impl Default for GlobalHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for GlobalHost {
    type Error = BindError;

    fn register(&mut self, op: Operation) -> Result<(), BindError> {
        let func = handler_function(op)?;
        match js_sys::Reflect::set(&self.global, &op.name().into(), &func) {
            Ok(true) => {
                console::log(&format!("b64 (wasm): exposed {op}"));
                Ok(())
            }
            Ok(false) => Err(BindError(format!(
                "global property '{op}' is not writable"
            ))),
            Err(e) => Err(BindError(format!(
                "failed to expose '{op}': {}",
                describe(&e)
            ))),
        }
    }

    fn signal_ready(&mut self, name: &str) -> Readiness {
        let callback = match js_sys::Reflect::get(&self.global, &name.into()) {
            Ok(v) => v,
            Err(e) => return Readiness::Failed(describe(&e)),
        };
        match callback.dyn_into::<js_sys::Function>() {
            Ok(func) => match func.call0(&self.global) {
                Ok(_) => {
                    console::log(&format!("b64 (wasm): invoked {name}()"));
                    Readiness::Signaled
                }
                Err(e) => {
                    let reason = describe(&e);
                    console::warn(&format!("b64 (wasm): {name}() threw: {reason}"));
                    Readiness::Failed(reason)
                }
            },
            Err(_) => {
                console::warn(&format!(
                    "b64 (wasm): {name} is not defined on the global object; \
                     define it before loading the module to be notified when ready"
                ));
                Readiness::Absent
            }
        }
    }
}
