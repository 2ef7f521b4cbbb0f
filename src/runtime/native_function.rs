use std::{fmt, rc::Rc};

use crate::runtime::{NativeFn, error::RuntimeError, leak_detector, value::Value};

/// Leading parameter slots that carry runtime bookkeeping rather than caller
/// arguments. Slot 0 always holds the self binding.
pub const SYNTHETIC_SLOTS: usize = 1;

/// The native function primitive a callable wraps.
///
/// `num_parameters` is the raw declared count and includes the synthetic
/// self slot, so a body written as `|self, a, b|` declares 3.
#[derive(Clone)]
pub struct NativeFunction {
    pub name: Rc<str>,
    pub num_parameters: usize,
    /// Accepts any number of trailing arguments past the declared ones.
    pub rest: bool,
    /// Self captured where the block literal was evaluated.
    pub self_binding: Value,
    pub func: NativeFn,
}

impl NativeFunction {
    pub fn new(
        name: &str,
        num_parameters: usize,
        func: impl Fn(&[Value]) -> Result<Value, RuntimeError> + 'static,
    ) -> Self {
        leak_detector::record_native_function();
        Self {
            name: name.into(),
            num_parameters,
            rest: false,
            self_binding: Value::Nil,
            func: Rc::new(func),
        }
    }

    /// Builds a function taking `params` real parameters; the synthetic slot is
    /// added on top.
    pub fn with_params(
        name: &str,
        params: usize,
        func: impl Fn(&[Value]) -> Result<Value, RuntimeError> + 'static,
    ) -> Self {
        Self::new(name, params + SYNTHETIC_SLOTS, func)
    }

    pub fn variadic(mut self) -> Self {
        self.rest = true;
        self
    }

    pub fn bound_to(mut self, self_binding: Value) -> Self {
        self.self_binding = self_binding;
        self
    }

    /// Number of real positional parameters.
    ///
    /// The synthetic slot is excluded so the result matches what the language
    /// reports. Variadic functions report `-(required + 1)`.
    pub fn arity(&self) -> i64 {
        let required = self.num_parameters.saturating_sub(SYNTHETIC_SLOTS) as i64;
        if self.rest { -(required + 1) } else { required }
    }

    /// Runs the body with `self_slot` in slot 0 followed by `args`.
    ///
    /// Positions the caller left empty, up to the declared count, are filled
    /// with `nil`. Extra arguments are passed through as-is.
    pub(crate) fn invoke(&self, self_slot: &Value, args: &[Value]) -> Result<Value, RuntimeError> {
        let width = self.num_parameters.max(SYNTHETIC_SLOTS + args.len());
        let mut frame = Vec::with_capacity(width);
        frame.push(self_slot.clone());
        frame.extend_from_slice(args);
        frame.resize(width, Value::Nil);
        (self.func)(&frame)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFunction({}/{})", self.name, self.arity())
    }
}
