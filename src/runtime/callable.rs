use crate::runtime::{
    error::RuntimeError, native_function::NativeFunction, proc::Proc, value::Value,
};

/// What the rest of the runtime needs from anything invocable.
pub trait Callable {
    fn call(&self, args: &[Value]) -> Result<Value, RuntimeError>;
    fn arity(&self) -> i64;
    fn is_lambda(&self) -> bool;
}

impl Callable for Proc {
    fn call(&self, args: &[Value]) -> Result<Value, RuntimeError> {
        Proc::call(self, args)
    }

    fn arity(&self) -> i64 {
        Proc::arity(self)
    }

    fn is_lambda(&self) -> bool {
        Proc::is_lambda(self)
    }
}

/// A native function that never went through `Proc::new` is strict.
impl Callable for NativeFunction {
    fn call(&self, args: &[Value]) -> Result<Value, RuntimeError> {
        self.invoke(&self.self_binding, args)
    }

    fn arity(&self) -> i64 {
        NativeFunction::arity(self)
    }

    fn is_lambda(&self) -> bool {
        true
    }
}
