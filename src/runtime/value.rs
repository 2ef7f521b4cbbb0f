use std::{fmt, rc::Rc};

use crate::runtime::{object::Object, proc::Proc};

/// Runtime value passed to and returned from callables.
///
/// ## Memory Management Model
///
/// Heap-backed variants share their payload through `Rc`, so cloning a value is
/// O(1). Primitives (`Nil`, `Boolean`, `Integer`, `Float`) stay unboxed.
///
/// ### No-Cycle Invariant
///
/// Values are immutable after creation and must form acyclic graphs. A proc may
/// close over values, but a captured value must never reference the proc that
/// captures it: `Rc` cannot reclaim cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent-value sentinel. Fills parameter slots the caller left empty.
    Nil,
    /// Boolean value.
    Boolean(bool),
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit floating point number.
    Float(f64),
    /// UTF-8 string value.
    String(Rc<str>),
    /// Interned-style symbol, e.g. a method name.
    Symbol(Rc<str>),
    /// Ordered collection of values.
    Array(Rc<Vec<Value>>),
    /// Host object, typically a method receiver.
    Object(Rc<Object>),
    /// Block, lambda, or bound method.
    Proc(Proc),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Integer(v) => write!(f, "{}", v),
            Value::Float(v) => write_float(f, *v),
            Value::String(v) => write!(f, "\"{}\"", v),
            Value::Symbol(v) => write!(f, ":{}", v),
            Value::Array(elements) => {
                let items: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Value::Object(object) => write!(f, "{}", object),
            Value::Proc(proc) => write!(f, "{}", proc),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_nan() {
        write!(f, "NaN")
    } else if v.is_infinite() {
        write!(f, "{}Infinity", if v < 0.0 { "-" } else { "" })
    } else if v.fract() == 0.0 {
        write!(f, "{:.1}", v)
    } else {
        write!(f, "{}", v)
    }
}

impl Value {
    /// Same-value comparison used for method receivers.
    ///
    /// Floats compare by bit pattern and objects by identity, so a receiver is
    /// always the same as itself, NaN included.
    pub fn same_value(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Object(a), Value::Object(b)) => {
                Rc::ptr_eq(a, b) || a.object_id == b.object_id
            }
            (Value::Array(a), Value::Array(b)) => {
                Rc::ptr_eq(a, b)
                    || (a.len() == b.len()
                        && a.iter().zip(b.iter()).all(|(x, y)| x.same_value(y)))
            }
            _ => self == other,
        }
    }

    /// Returns the class name the host runtime reports for this value.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Nil => "NilClass",
            Value::Boolean(true) => "TrueClass",
            Value::Boolean(false) => "FalseClass",
            Value::Integer(_) => "Integer",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::Symbol(_) => "Symbol",
            Value::Array(_) => "Array",
            Value::Object(object) => &*object.class_name,
            Value::Proc(proc) if proc.is_method() => "Method",
            Value::Proc(_) => "Proc",
        }
    }

    /// Only `nil` and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Boolean(false))
    }

    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(Rc::new(elements))
    }

    pub fn string(text: &str) -> Self {
        Value::String(text.into())
    }
}

impl From<Proc> for Value {
    fn from(proc: Proc) -> Self {
        Value::Proc(proc)
    }
}
