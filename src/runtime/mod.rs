//! Callable runtime values and the calling conventions around them.
//!
//! # No-Cycle Invariant
//! Values are shared through `Rc` and are immutable once built. A proc may
//! capture values in its native body, but a captured value must never point
//! back at the capturing proc, or the reference counts never reach zero.
//!
//! # Threading
//! Everything here is single-threaded. `Proc` and `Value` are `!Send`; a host
//! that runs several interpreters keeps one set of values per thread.
use std::rc::Rc;

use crate::runtime::{error::RuntimeError, value::Value};

pub mod callable;
pub mod convention;
pub mod error;
pub mod leak_detector;
pub mod native_function;
pub mod object;
pub mod proc;
pub mod value;

/// Body of a native function. The slice starts with the synthetic self slot.
pub type NativeFn = Rc<dyn Fn(&[Value]) -> Result<Value, RuntimeError>>;
