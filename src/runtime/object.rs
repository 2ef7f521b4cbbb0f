use std::{
    fmt,
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::runtime::value::Value;

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque host object, used as a method receiver.
///
/// Objects compare by identity: two objects are equal only if they carry the
/// same `object_id`, which is unique per allocation.
#[derive(Debug, Clone)]
pub struct Object {
    pub class_name: Rc<str>,
    pub object_id: u64,
    attributes: Vec<(Rc<str>, Value)>,
}

impl Object {
    pub fn new(class_name: &str) -> Rc<Self> {
        Self::with_attributes(class_name, Vec::new())
    }

    pub fn with_attributes(class_name: &str, attributes: Vec<(&str, Value)>) -> Rc<Self> {
        Rc::new(Self {
            class_name: class_name.into(),
            object_id: NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed),
            attributes: attributes
                .into_iter()
                .map(|(name, value)| (Rc::from(name), value))
                .collect(),
        })
    }

    /// Returns the attribute named `name`, if the object was built with one.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.object_id == other.object_id
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<{}:{}>", self.class_name, self.object_id)
    }
}
