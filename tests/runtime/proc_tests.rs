use procs::runtime::{
    callable::Callable,
    error::RuntimeError,
    native_function::NativeFunction,
    proc::{Proc, ProcKind},
    value::Value,
};

fn block_with_two_params() -> NativeFunction {
    NativeFunction::new("block in main", 3, |frame| {
        Ok(Value::array(vec![frame[1].clone(), frame[2].clone()]))
    })
}

fn run_generic<C: Callable>(callable: &C, args: &[Value]) -> Result<Value, RuntimeError> {
    callable.call(args)
}

#[test]
fn two_param_block_scenario() {
    let block = Proc::new(Some(block_with_two_params())).unwrap();
    assert_eq!(block.arity(), 2);
    assert!(!block.is_lambda());

    let result = block
        .call(&[Value::Integer(1), Value::string("two")])
        .unwrap();
    assert_eq!(
        result,
        Value::array(vec![Value::Integer(1), Value::string("two")])
    );

    let result = block.call(&[]).unwrap();
    assert_eq!(result, Value::array(vec![Value::Nil, Value::Nil]));
}

#[test]
fn missing_block_scenario() {
    for _ in 0..3 {
        assert_eq!(
            Proc::new(None).unwrap_err(),
            RuntimeError::Argument("no block given".into())
        );
    }
    assert_eq!(Proc::lambda(None).unwrap_err().class_name(), "ArgumentError");
}

#[test]
fn arity_is_declared_count_minus_one() {
    for declared in 1..6 {
        let function = NativeFunction::new("f", declared, |_| Ok(Value::Nil));
        let proc = Proc::new(Some(function)).unwrap();
        assert_eq!(proc.arity(), declared as i64 - 1);
    }
}

#[test]
fn to_proc_is_idempotent() {
    let block = Proc::new(Some(block_with_two_params())).unwrap();
    let once = block.to_proc();
    let twice = once.to_proc().to_proc();
    assert!(Proc::ptr_eq(&block, &twice));
    assert_eq!(once, twice);
}

#[test]
fn procs_are_values() {
    let lambda = Proc::lambda(Some(block_with_two_params())).unwrap();
    let value = Value::from(lambda.clone());
    match &value {
        Value::Proc(inner) => assert_eq!(inner.kind(), &ProcKind::Lambda),
        other => panic!("expected proc, got {}", other),
    }
    assert_eq!(value, Value::Proc(lambda));
    assert!(value.is_truthy());
}

#[test]
fn callable_trait_dispatches_every_variant() {
    let block = Proc::new(Some(block_with_two_params())).unwrap();
    let raw = block_with_two_params();
    let args = [Value::Integer(1), Value::Integer(2)];

    assert_eq!(run_generic(&block, &args), run_generic(&raw, &args));
    assert!(!Callable::is_lambda(&block));
    assert!(Callable::is_lambda(&raw));
    assert_eq!(Callable::arity(&raw), 2);
}

#[test]
fn raw_function_keeps_its_own_self_binding() {
    let raw = NativeFunction::with_params("whoami", 0, |frame| Ok(frame[0].clone()))
        .bound_to(Value::string("outer"));
    assert_eq!(run_generic(&raw, &[]).unwrap(), Value::string("outer"));
}
