//! Method tables for the two call surfaces of a class.

use super::args::Args;
use super::class::Class;
use crate::error::Result;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A method body. `R` is the receiver: `Class` for class methods,
/// `Object` for instance methods.
pub type MethodFn<R> = Arc<dyn Fn(&R, Args) -> Result<Value> + Send + Sync>;

/// One of the two independent method namespaces of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    /// Class-level ("static") methods, called on the class itself.
    Class,
    /// Methods called on instances of the class.
    Instance,
}

impl Surface {
    /// Describe the receiver of this surface for error messages.
    pub fn describe(&self, class: &str) -> String {
        match self {
            Surface::Class => format!("class {}", class),
            Surface::Instance => format!("an instance of {}", class),
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Surface::Class => write!(f, "class"),
            Surface::Instance => write!(f, "instance"),
        }
    }
}

/// A guarded method recorded on a table: the original name and the alias
/// its pre-guard behavior lives under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxiedMethod {
    pub surface: Surface,
    pub method: String,
    pub alias: String,
}

/// Name-to-behavior bindings for one surface of one class.
pub struct MethodTable<R> {
    methods: BTreeMap<String, MethodFn<R>>,
    aliases: BTreeMap<String, String>,
}

impl<R> MethodTable<R> {
    pub fn new() -> Self {
        Self {
            methods: BTreeMap::new(),
            aliases: BTreeMap::new(),
        }
    }

    /// Bind `name`, replacing any previous binding in this table.
    pub fn define(&mut self, name: impl Into<String>, method: MethodFn<R>) {
        self.methods.insert(name.into(), method);
    }

    pub fn get(&self, name: &str) -> Option<&MethodFn<R>> {
        self.methods.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Names bound directly in this table, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    pub(crate) fn record_alias(&mut self, method: String, alias: String) {
        self.aliases.insert(method, alias);
    }

    /// Alias of a method guarded in this table.
    pub fn alias_for(&self, method: &str) -> Option<&str> {
        self.aliases.get(method).map(String::as_str)
    }

    /// `(method, alias)` pairs guarded in this table.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(m, a)| (m.as_str(), a.as_str()))
    }
}

impl<R> Default for MethodTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for MethodTable<R> {
    fn clone(&self) -> Self {
        Self {
            methods: self.methods.clone(),
            aliases: self.aliases.clone(),
        }
    }
}

impl<R> fmt::Debug for MethodTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodTable")
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .field("aliases", &self.aliases)
            .finish()
    }
}

/// A value methods can be called on.
///
/// Implemented by `Class` (class surface) and `Object` (instance surface).
/// Each receiver type is tied to exactly one surface, which keeps the two
/// namespaces from ever being consulted interchangeably.
pub trait Receiver: Sized + 'static {
    const SURFACE: Surface;

    /// The table for this surface on `class`.
    fn table(class: &Class) -> &MethodTable<Self>;

    fn table_mut(class: &mut Class) -> &mut MethodTable<Self>;

    /// The class whose tables dispatch calls on this receiver.
    fn dispatch_class(&self) -> &Class;

    /// Call `name` on this receiver.
    fn send(&self, name: &str, args: Args) -> Result<Value> {
        let class = self.dispatch_class();
        let method = class.lookup::<Self>(name).ok_or_else(|| {
            tracing::trace!(
                class = class.name(),
                surface = %Self::SURFACE,
                method = name,
                "no method"
            );
            crate::Error::no_method(class.name(), Self::SURFACE, name)
        })?;
        method(self, args)
    }
}
