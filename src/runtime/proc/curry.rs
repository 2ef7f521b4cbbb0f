use std::rc::Rc;

use crate::runtime::{
    convention::{self, expected_arguments},
    error::RuntimeError,
    native_function::{NativeFunction, SYNTHETIC_SLOTS},
    value::Value,
};

use super::{Proc, ProcKind};

impl Proc {
    /// Returns a proc that collects arguments across calls and invokes `self`
    /// once `arity` of them (default: the required count) have arrived.
    ///
    /// For strict procs an explicit `arity` must be one the proc accepts.
    pub fn curry(&self, arity: Option<usize>) -> Result<Proc, RuntimeError> {
        let own = self.arity();
        let required = convention::required(own);
        let target = match arity {
            Some(n) => {
                let accepted = if own >= 0 { n == required } else { n >= required };
                if self.is_lambda() && !accepted {
                    return Err(RuntimeError::wrong_argument_count(
                        n,
                        &expected_arguments(own),
                    ));
                }
                n
            }
            None => required,
        };
        Ok(curried(self.clone(), Vec::new(), target))
    }
}

fn curried(target: Proc, collected: Vec<Value>, arity: usize) -> Proc {
    let kind = if target.is_lambda() {
        ProcKind::Lambda
    } else {
        ProcKind::Block
    };
    let name = format!("curried {}", target.name());
    let function = NativeFunction::new(&name, SYNTHETIC_SLOTS, move |frame| {
        let mut args = collected.clone();
        args.extend_from_slice(&frame[SYNTHETIC_SLOTS..]);
        if args.len() >= arity {
            convention::yield_to(&target, args)
        } else {
            Ok(Value::Proc(curried(target.clone(), args, arity)))
        }
    })
    .variadic();
    Proc::build(Rc::new(function), kind)
}
