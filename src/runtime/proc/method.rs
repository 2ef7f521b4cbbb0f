use std::rc::Rc;

use crate::runtime::{leak_detector, native_function::NativeFunction, value::Value};

use super::{Proc, ProcKind};

/// Receiver and lookup name of a bound method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodBinding {
    pub receiver: Value,
    pub name: Rc<str>,
}

impl MethodBinding {
    /// Class the method was looked up on.
    pub fn owner(&self) -> &str {
        self.receiver.type_name()
    }
}

impl Proc {
    /// Binds `function`, found by method lookup under `name`, to `receiver`.
    ///
    /// The function is shared with the method table it came from. Two bound
    /// methods compare equal when they pair an equal receiver with the same
    /// function allocation.
    pub fn from_method(receiver: Value, name: &str, function: Rc<NativeFunction>) -> Proc {
        leak_detector::record_method();
        Proc::build(
            function,
            ProcKind::Method(MethodBinding {
                receiver,
                name: name.into(),
            }),
        )
    }

    pub fn is_method(&self) -> bool {
        matches!(self.inner.kind, ProcKind::Method(_))
    }

    pub fn receiver(&self) -> Option<&Value> {
        self.binding().map(|binding| &binding.receiver)
    }

    pub fn method_name(&self) -> Option<&str> {
        self.binding().map(|binding| binding.name.as_ref())
    }

    pub fn owner(&self) -> Option<&str> {
        self.binding().map(MethodBinding::owner)
    }

    fn binding(&self) -> Option<&MethodBinding> {
        match &self.inner.kind {
            ProcKind::Method(binding) => Some(binding),
            ProcKind::Block | ProcKind::Lambda => None,
        }
    }

    pub(super) fn same_method(&self, other: &Proc) -> bool {
        match (self.binding(), other.binding()) {
            (Some(a), Some(b)) => {
                a.receiver.same_value(&b.receiver)
                    && Rc::ptr_eq(&self.inner.function, &other.inner.function)
            }
            _ => false,
        }
    }
}
