//! Argument rules applied before a callable runs.
//!
//! Lambdas and bound methods are strict: the argument count must match the
//! arity. Blocks are lenient: a lone array argument is spread across several
//! parameters, extra arguments are dropped, and missing ones become `nil`.
use crate::runtime::{callable::Callable, error::RuntimeError, value::Value};

/// Calls `callable` under the convention its strictness flag selects.
pub fn yield_to<C: Callable + ?Sized>(
    callable: &C,
    args: Vec<Value>,
) -> Result<Value, RuntimeError> {
    let args = if callable.is_lambda() {
        check_strict(callable.arity(), args)?
    } else {
        shape_lenient(callable.arity(), args)
    };
    callable.call(&args)
}

pub fn check_strict(arity: i64, args: Vec<Value>) -> Result<Vec<Value>, RuntimeError> {
    let given = args.len();
    let accepted = if arity >= 0 {
        given == arity as usize
    } else {
        given >= required(arity)
    };
    if !accepted {
        return Err(RuntimeError::wrong_argument_count(
            given,
            &expected_arguments(arity),
        ));
    }
    Ok(args)
}

pub fn shape_lenient(arity: i64, mut args: Vec<Value>) -> Vec<Value> {
    let spreads = arity > 1 || arity < -1;
    let spread = match args.as_slice() {
        [Value::Array(items)] if spreads => Some(items.as_ref().clone()),
        _ => None,
    };
    if let Some(items) = spread {
        args = items;
    }
    if arity >= 0 {
        args.truncate(arity as usize);
    }
    args
}

/// Count of mandatory positional parameters for `arity`.
pub fn required(arity: i64) -> usize {
    if arity >= 0 {
        arity as usize
    } else {
        (-arity - 1) as usize
    }
}

/// Renders the expectation part of an argument-count error: `2` or `1+`.
pub fn expected_arguments(arity: i64) -> String {
    if arity >= 0 {
        arity.to_string()
    } else {
        format!("{}+", required(arity))
    }
}
