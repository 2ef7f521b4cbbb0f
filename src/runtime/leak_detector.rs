//! Allocation counters for callable values.
//!
//! Counters are per thread: the runtime is single-threaded, and keeping the
//! counts thread-local lets each test thread observe only its own allocations.
use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeakStats {
    pub native_functions: usize,
    pub procs: usize,
    pub methods: usize,
}

thread_local! {
    static NATIVE_FUNCTIONS: Cell<usize> = const { Cell::new(0) };
    static PROCS: Cell<usize> = const { Cell::new(0) };
    static METHODS: Cell<usize> = const { Cell::new(0) };
}

fn bump(counter: &'static std::thread::LocalKey<Cell<usize>>) {
    counter.with(|count| count.set(count.get() + 1));
}

pub fn record_native_function() {
    bump(&NATIVE_FUNCTIONS);
}

pub fn record_proc() {
    bump(&PROCS);
}

pub fn record_method() {
    bump(&METHODS);
}

pub fn snapshot() -> LeakStats {
    LeakStats {
        native_functions: NATIVE_FUNCTIONS.with(Cell::get),
        procs: PROCS.with(Cell::get),
        methods: METHODS.with(Cell::get),
    }
}
