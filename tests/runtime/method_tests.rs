use std::{collections::HashMap, rc::Rc};

use procs::runtime::{
    convention::yield_to,
    error::RuntimeError,
    native_function::NativeFunction,
    object::Object,
    proc::Proc,
    value::Value,
};

struct MethodTable {
    methods: HashMap<&'static str, Rc<NativeFunction>>,
}

impl MethodTable {
    fn counter_class() -> Self {
        let mut methods = HashMap::new();
        methods.insert(
            "count",
            Rc::new(NativeFunction::with_params("count", 0, |frame| {
                match &frame[0] {
                    Value::Object(object) => Ok(object.get("count").cloned().unwrap_or(Value::Nil)),
                    _ => Ok(Value::Nil),
                }
            })),
        );
        methods.insert(
            "add",
            Rc::new(NativeFunction::with_params("add", 1, |frame| {
                match (&frame[0], &frame[1]) {
                    (Value::Object(object), Value::Integer(n)) => match object.get("count") {
                        Some(Value::Integer(count)) => Ok(Value::Integer(count + n)),
                        _ => Ok(Value::Nil),
                    },
                    (_, other) => Err(RuntimeError::raised(
                        "TypeError",
                        format!("{} can't be coerced into Integer", other.type_name()),
                    )),
                }
            })),
        );
        Self { methods }
    }

    fn method(&self, receiver: &Value, name: &str) -> Option<Proc> {
        self.methods
            .get(name)
            .map(|function| Proc::from_method(receiver.clone(), name, function.clone()))
    }
}

fn counter(count: i64) -> Value {
    Value::Object(Object::with_attributes("Counter", vec![("count", Value::Integer(count))]))
}

#[test]
fn repeated_lookups_compare_equal() {
    let table = MethodTable::counter_class();
    let receiver = counter(2);
    let first = table.method(&receiver, "add").unwrap();
    let second = table.method(&receiver, "add").unwrap();
    assert_eq!(first, second);
    assert_ne!(first, table.method(&counter(2), "add").unwrap());
    assert_ne!(first, table.method(&receiver, "count").unwrap());
}

#[test]
fn bound_method_is_strict_under_convention() {
    let table = MethodTable::counter_class();
    let add = table.method(&counter(2), "add").unwrap();
    assert!(add.is_lambda());
    assert_eq!(add.arity(), 1);
    assert_eq!(yield_to(&add, vec![Value::Integer(5)]).unwrap(), Value::Integer(7));

    let err = yield_to(&add, vec![]).unwrap_err();
    assert_eq!(
        err,
        RuntimeError::Argument("wrong number of arguments (given 0, expected 1)".into())
    );
}

#[test]
fn direct_call_skips_arity_checks() {
    let table = MethodTable::counter_class();
    let add = table.method(&counter(2), "add").unwrap();
    let err = add.call(&[]).unwrap_err();
    assert_eq!(err, RuntimeError::raised("TypeError", "NilClass can't be coerced into Integer"));
}

#[test]
fn bound_method_composes_with_blocks() {
    let table = MethodTable::counter_class();
    let add = table.method(&counter(10), "add").unwrap();
    let negate = Proc::new(Some(NativeFunction::with_params("negate", 1, |frame| {
        match &frame[1] {
            Value::Integer(n) => Ok(Value::Integer(-n)),
            _ => Ok(Value::Nil),
        }
    })))
    .unwrap();

    let pipeline = add.then(&negate);
    assert!(pipeline.is_lambda());
    assert_eq!(pipeline.call(&[Value::Integer(5)]).unwrap(), Value::Integer(-15));
}
