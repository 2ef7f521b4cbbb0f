use std::rc::Rc;

use crate::runtime::{
    convention,
    native_function::{NativeFunction, SYNTHETIC_SLOTS},
};

use super::{Proc, ProcKind};

impl Proc {
    /// `self >> next`: the result of `self` is passed to `next`.
    pub fn then(&self, next: &Proc) -> Proc {
        compose(self.clone(), next.clone(), self.is_lambda())
    }

    /// `self << first`: the result of `first` is passed to `self`.
    pub fn compose_after(&self, first: &Proc) -> Proc {
        compose(first.clone(), self.clone(), self.is_lambda())
    }
}

// Variadic so the frame carries exactly what the caller passed; `first`
// applies its own convention to it.
fn compose(first: Proc, second: Proc, lambda: bool) -> Proc {
    let name = format!("{} >> {}", first.name(), second.name());
    let function = NativeFunction::new(&name, SYNTHETIC_SLOTS, move |frame| {
        let intermediate = convention::yield_to(&first, frame[SYNTHETIC_SLOTS..].to_vec())?;
        convention::yield_to(&second, vec![intermediate])
    })
    .variadic();
    let kind = if lambda {
        ProcKind::Lambda
    } else {
        ProcKind::Block
    };
    Proc::build(Rc::new(function), kind)
}
