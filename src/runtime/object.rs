//! Instances of a class.

use super::args::Args;
use super::class::Class;
use super::method::{MethodTable, Receiver, Surface};
use super::Unproxied;
use crate::error::Result;
use crate::value::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// An instance: its class plus named instance variables.
pub struct Object {
    class: Arc<Class>,
    ivars: RefCell<BTreeMap<String, Value>>,
}

impl Object {
    pub(crate) fn new(class: Arc<Class>) -> Self {
        Self {
            class,
            ivars: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn class(&self) -> &Arc<Class> {
        &self.class
    }

    /// Read an instance variable; unset variables read as `Nil`.
    pub fn ivar_get(&self, name: &str) -> Value {
        self.ivars.borrow().get(name).cloned().unwrap_or_default()
    }

    pub fn ivar_set(&self, name: impl Into<String>, value: impl Into<Value>) {
        self.ivars.borrow_mut().insert(name.into(), value.into());
    }

    /// Call an instance method.
    pub fn call(&self, name: &str, args: Args) -> Result<Value> {
        self.send(name, args)
    }

    pub fn respond_to(&self, name: &str) -> bool {
        self.class.method_defined(name)
    }

    /// A view that calls the original behavior of guarded instance methods.
    pub fn unproxied(&self) -> Unproxied<'_, Object> {
        Unproxied::new(self)
    }
}

impl Receiver for Object {
    const SURFACE: Surface = Surface::Instance;

    fn table(class: &Class) -> &MethodTable<Self> {
        class.instance_methods()
    }

    fn table_mut(class: &mut Class) -> &mut MethodTable<Self> {
        class.instance_methods_mut()
    }

    fn dispatch_class(&self) -> &Class {
        &self.class
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("class", &self.class.name())
            .field("ivars", &self.ivars.borrow())
            .finish()
    }
}
