//! Blocks, lambdas and bound methods.
//!
//! A [`Proc`] owns its [`NativeFunction`] behind an `Rc` together with its
//! [`ProcKind`] and the arity computed once at construction. The kind is the
//! strictness flag: only `Block` is lenient. Cloning a proc shares that
//! allocation, so every holder observes the same kind and arity.
use std::{fmt, rc::Rc};

use crate::runtime::{
    error::RuntimeError, leak_detector, native_function::NativeFunction, value::Value,
};

mod compose;
mod curry;
mod describe;
mod method;

pub use describe::{ProcInfo, ProcKindInfo};
pub use method::MethodBinding;

/// Calling-convention tag of a proc.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcKind {
    /// Built from a block literal; lenient argument handling.
    Block,
    /// Built through the lambda path; strict argument handling.
    Lambda,
    /// A method bound to its receiver; always strict.
    Method(MethodBinding),
}

impl ProcKind {
    pub fn is_strict(&self) -> bool {
        !matches!(self, ProcKind::Block)
    }
}

#[derive(Clone)]
pub struct Proc {
    inner: Rc<ProcData>,
}

struct ProcData {
    function: Rc<NativeFunction>,
    kind: ProcKind,
    arity: i64,
}

impl Proc {
    /// Builds a block-semantics proc from the block passed by the caller.
    pub fn new(block: Option<NativeFunction>) -> Result<Self, RuntimeError> {
        let Some(function) = block else {
            log::debug!("Proc.new called without a block");
            return Err(RuntimeError::no_block_given());
        };
        Ok(Self::build(Rc::new(function), ProcKind::Block))
    }

    /// Builds a lambda-semantics proc from the block passed by the caller.
    pub fn lambda(block: Option<NativeFunction>) -> Result<Self, RuntimeError> {
        let Some(function) = block else {
            log::debug!("lambda called without a block");
            return Err(RuntimeError::no_block_given());
        };
        Ok(Self::build(Rc::new(function), ProcKind::Lambda))
    }

    fn build(function: Rc<NativeFunction>, kind: ProcKind) -> Self {
        let arity = function.arity();
        leak_detector::record_proc();
        log::trace!(
            "built proc `{}` (arity {}, lambda {})",
            function.name,
            arity,
            kind.is_strict()
        );
        Self {
            inner: Rc::new(ProcData {
                function,
                kind,
                arity,
            }),
        }
    }

    /// Invokes the underlying function with `args` in order.
    ///
    /// The self slot is always the proc's own binding. No argument-count
    /// checks happen here; see [`crate::runtime::convention`].
    pub fn call(&self, args: &[Value]) -> Result<Value, RuntimeError> {
        log::trace!("calling `{}` with {} argument(s)", self.name(), args.len());
        self.inner.function.invoke(self.self_slot(), args)
    }

    /// `===`: calls with `value` and reports the truthiness of the result.
    pub fn case_eq(&self, value: &Value) -> Result<bool, RuntimeError> {
        Ok(self.call(std::slice::from_ref(value))?.is_truthy())
    }

    pub fn to_proc(&self) -> Proc {
        self.clone()
    }

    pub fn is_lambda(&self) -> bool {
        self.inner.kind.is_strict()
    }

    pub fn arity(&self) -> i64 {
        self.inner.arity
    }

    pub fn kind(&self) -> &ProcKind {
        &self.inner.kind
    }

    pub fn function(&self) -> &Rc<NativeFunction> {
        &self.inner.function
    }

    pub fn name(&self) -> &str {
        &self.inner.function.name
    }

    /// True when both handles share one allocation.
    pub fn ptr_eq(a: &Proc, b: &Proc) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }

    fn self_slot(&self) -> &Value {
        match &self.inner.kind {
            ProcKind::Method(binding) => &binding.receiver,
            ProcKind::Block | ProcKind::Lambda => &self.inner.function.self_binding,
        }
    }
}

impl PartialEq for Proc {
    fn eq(&self, other: &Self) -> bool {
        Proc::ptr_eq(self, other) || self.same_method(other)
    }
}

impl fmt::Debug for Proc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proc")
            .field("kind", &self.inner.kind)
            .field("function", &self.inner.function)
            .field("lambda", &self.is_lambda())
            .field("arity", &self.inner.arity)
            .finish()
    }
}

impl fmt::Display for Proc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.kind {
            ProcKind::Block => write!(f, "#<Proc:{}>", self.name()),
            ProcKind::Lambda => write!(f, "#<Proc:{} (lambda)>", self.name()),
            ProcKind::Method(binding) => {
                write!(f, "#<Method: {}#{}>", binding.owner(), binding.name)
            }
        }
    }
}
