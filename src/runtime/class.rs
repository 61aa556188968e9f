//! Classes: a name, an optional superclass and two method tables.

use super::args::Args;
use super::method::{MethodFn, MethodTable, ProxiedMethod, Receiver, Surface};
use super::object::Object;
use super::Unproxied;
use crate::error::Result;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// A class with independent class-level and instance-level methods.
///
/// Classes are built and guarded through `&mut Class` and shared as
/// `Arc<Class>` once instances exist, so every guard is in place before
/// the first object is created.
///
/// # Example
///
/// ```
/// use proxy_method::{args, Class, Value};
///
/// let mut turtle = Class::new("Turtle");
/// turtle.define_class_method("create", |_, _| Ok(Value::from("created")));
/// turtle.proxy_class_method("create", "Don't Create directly, use Interactor!")?;
///
/// let err = turtle.call("create", args![]).unwrap_err();
/// assert_eq!(err.to_string(), "Don't Create directly, use Interactor!");
/// assert_eq!(turtle.call("unproxied_create", args![])?, Value::from("created"));
/// # Ok::<(), proxy_method::Error>(())
/// ```
#[derive(Clone)]
pub struct Class {
    name: String,
    superclass: Option<Arc<Class>>,
    class_methods: MethodTable<Class>,
    instance_methods: MethodTable<Object>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            superclass: None,
            class_methods: MethodTable::new(),
            instance_methods: MethodTable::new(),
        }
    }

    /// A new class inheriting both surfaces from `superclass`.
    pub fn subclass(name: impl Into<String>, superclass: &Arc<Class>) -> Self {
        Self {
            superclass: Some(Arc::clone(superclass)),
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn superclass(&self) -> Option<&Arc<Class>> {
        self.superclass.as_ref()
    }

    /// Define a class-level method.
    pub fn define_class_method<F>(&mut self, name: impl Into<String>, body: F) -> &mut Self
    where
        F: Fn(&Class, Args) -> Result<Value> + Send + Sync + 'static,
    {
        self.class_methods.define(name, Arc::new(body));
        self
    }

    /// Define an instance method.
    pub fn define_method<F>(&mut self, name: impl Into<String>, body: F) -> &mut Self
    where
        F: Fn(&Object, Args) -> Result<Value> + Send + Sync + 'static,
    {
        self.instance_methods.define(name, Arc::new(body));
        self
    }

    pub fn class_methods(&self) -> &MethodTable<Class> {
        &self.class_methods
    }

    pub fn instance_methods(&self) -> &MethodTable<Object> {
        &self.instance_methods
    }

    pub(crate) fn instance_methods_mut(&mut self) -> &mut MethodTable<Object> {
        &mut self.instance_methods
    }

    /// Resolve `name` on the surface of `R`, walking up the superclass chain.
    pub fn lookup<R: Receiver>(&self, name: &str) -> Option<MethodFn<R>> {
        let mut class = Some(self);
        while let Some(current) = class {
            if let Some(method) = R::table(current).get(name) {
                return Some(Arc::clone(method));
            }
            class = current.superclass.as_deref();
        }
        None
    }

    /// Alias holding the original behavior of a guarded `name` on the
    /// surface of `R`.
    ///
    /// Only the nearest class defining `name` counts: an unguarded override
    /// in a subclass hides a guard further up the chain.
    pub fn alias_for<R: Receiver>(&self, name: &str) -> Option<&str> {
        let mut class = Some(self);
        while let Some(current) = class {
            let table = R::table(current);
            if let Some(alias) = table.alias_for(name) {
                return Some(alias);
            }
            if table.contains(name) {
                return None;
            }
            class = current.superclass.as_deref();
        }
        None
    }

    /// Whether the class responds to `name` as a class method.
    pub fn respond_to(&self, name: &str) -> bool {
        self.lookup::<Class>(name).is_some()
    }

    /// Whether instances respond to `name`.
    pub fn method_defined(&self, name: &str) -> bool {
        self.lookup::<Object>(name).is_some()
    }

    /// Methods guarded directly on this class, class surface first.
    pub fn proxied_methods(&self) -> Vec<ProxiedMethod> {
        let class_side = self.class_methods.aliases().map(|(m, a)| (Surface::Class, m, a));
        let instance_side = self
            .instance_methods
            .aliases()
            .map(|(m, a)| (Surface::Instance, m, a));
        class_side
            .chain(instance_side)
            .map(|(surface, method, alias)| ProxiedMethod {
                surface,
                method: method.to_string(),
                alias: alias.to_string(),
            })
            .collect()
    }

    /// Call a class method.
    pub fn call(&self, name: &str, args: Args) -> Result<Value> {
        self.send(name, args)
    }

    /// A view that calls the original behavior of guarded class methods.
    pub fn unproxied(&self) -> Unproxied<'_, Class> {
        Unproxied::new(self)
    }

    /// Create an instance.
    pub fn new_instance(self: &Arc<Self>) -> Object {
        Object::new(Arc::clone(self))
    }
}

impl Receiver for Class {
    const SURFACE: Surface = Surface::Class;

    fn table(class: &Class) -> &MethodTable<Self> {
        &class.class_methods
    }

    fn table_mut(class: &mut Class) -> &mut MethodTable<Self> {
        &mut class.class_methods
    }

    fn dispatch_class(&self) -> &Class {
        self
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name)
            .field("superclass", &self.superclass.as_ref().map(|s| s.name()))
            .field("class_methods", &self.class_methods)
            .field("instance_methods", &self.instance_methods)
            .finish()
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
