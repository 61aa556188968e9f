//! Guard installation
//!
//! Installing a guard on a method does two things on one surface of a class:
//!
//! 1. the method's current behavior is bound to `prefix + name`
//!    (`unproxied_` by default), unchanged;
//! 2. `name` is rebound to the guard, which either raises a fixed message
//!    or delegates to a fallback with the caller's arguments and block.
//!
//! All names in one call are validated before any table is touched: a
//! missing method, an alias collision or an invalid alias aborts the whole
//! call and leaves the class as it was.

use crate::error::{Error, Result};
use crate::runtime::{Args, Class, MethodFn, Object, Receiver};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Message raised by guards installed without one.
pub const DEFAULT_PROXY_MESSAGE: &str = "Disabled by proxy_method";

/// Prefix of alias names when none is given.
pub const DEFAULT_PREFIX: &str = "unproxied_";

/// What a guarded name does when called.
pub enum Guard<R> {
    /// Fail with this message, whatever the arguments.
    Raise(String),
    /// Run this callable instead, with the caller's arguments and block.
    Fallback(MethodFn<R>),
}

impl<R: Receiver> Guard<R> {
    pub fn message(message: impl Into<String>) -> Self {
        Guard::Raise(message.into())
    }

    pub fn fallback<F>(body: F) -> Self
    where
        F: Fn(&R, Args) -> Result<Value> + Send + Sync + 'static,
    {
        Guard::Fallback(Arc::new(body))
    }

    fn into_method(self) -> MethodFn<R> {
        match self {
            Guard::Raise(message) => {
                Arc::new(move |_: &R, _: Args| -> Result<Value> {
                    Err(Error::raised(message.as_str()))
                })
            }
            Guard::Fallback(body) => body,
        }
    }
}

impl<R> Default for Guard<R> {
    fn default() -> Self {
        Guard::Raise(DEFAULT_PROXY_MESSAGE.to_string())
    }
}

impl<R> Clone for Guard<R> {
    fn clone(&self) -> Self {
        match self {
            Guard::Raise(message) => Guard::Raise(message.clone()),
            Guard::Fallback(body) => Guard::Fallback(Arc::clone(body)),
        }
    }
}

impl<R> fmt::Debug for Guard<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guard::Raise(message) => f.debug_tuple("Raise").field(message).finish(),
            Guard::Fallback(_) => f.write_str("Fallback(..)"),
        }
    }
}

impl<R> From<&str> for Guard<R> {
    fn from(message: &str) -> Self {
        Guard::Raise(message.to_string())
    }
}

impl<R> From<String> for Guard<R> {
    fn from(message: String) -> Self {
        Guard::Raise(message)
    }
}

/// One or more method names, normalized to an ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MethodNames(Vec<String>);

impl MethodNames {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for MethodNames {
    fn from(name: &str) -> Self {
        MethodNames(vec![name.to_string()])
    }
}

impl From<String> for MethodNames {
    fn from(name: String) -> Self {
        MethodNames(vec![name])
    }
}

impl From<Vec<String>> for MethodNames {
    fn from(names: Vec<String>) -> Self {
        MethodNames(names)
    }
}

impl From<Vec<&str>> for MethodNames {
    fn from(names: Vec<&str>) -> Self {
        MethodNames(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for MethodNames {
    fn from(names: &[&str]) -> Self {
        MethodNames(names.iter().map(|n| n.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for MethodNames {
    fn from(names: [&str; N]) -> Self {
        MethodNames(names.iter().map(|n| n.to_string()).collect())
    }
}

/// Guard plus alias prefix for one installation call.
///
/// ```
/// use proxy_method::{Class, ProxyOptions};
///
/// let options: ProxyOptions<Class> = ProxyOptions::new()
///     .prefix("pelican_")
///     .message("Use the interactor");
/// assert_eq!(options.alias("create"), "pelican_create");
/// ```
#[derive(Debug, Clone)]
pub struct ProxyOptions<R> {
    prefix: String,
    guard: Guard<R>,
}

impl<R: Receiver> ProxyOptions<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.guard = Guard::message(message);
        self
    }

    pub fn fallback<F>(mut self, body: F) -> Self
    where
        F: Fn(&R, Args) -> Result<Value> + Send + Sync + 'static,
    {
        self.guard = Guard::fallback(body);
        self
    }

    pub fn guard(mut self, guard: Guard<R>) -> Self {
        self.guard = guard;
        self
    }

    /// Alias name for `method` under these options.
    pub fn alias(&self, method: &str) -> String {
        format!("{}{}", self.prefix, method)
    }
}

impl<R> Default for ProxyOptions<R> {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            guard: Guard::default(),
        }
    }
}

impl<R> From<Guard<R>> for ProxyOptions<R> {
    fn from(guard: Guard<R>) -> Self {
        Self {
            guard,
            ..Self::default()
        }
    }
}

impl<R> From<&str> for ProxyOptions<R> {
    fn from(message: &str) -> Self {
        Guard::<R>::from(message).into()
    }
}

impl<R> From<String> for ProxyOptions<R> {
    fn from(message: String) -> Self {
        Guard::<R>::from(message).into()
    }
}

/// Guard class methods of `class`, keeping the originals at
/// `unproxied_<name>`.
pub fn install_static_guard(
    class: &mut Class,
    names: impl Into<MethodNames>,
    guard: impl Into<Guard<Class>>,
) -> Result<()> {
    install(class, &names.into(), ProxyOptions::from(guard.into()))
}

/// Guard instance methods of `class`, keeping the originals at
/// `unproxied_<name>`.
pub fn install_instance_guard(
    class: &mut Class,
    names: impl Into<MethodNames>,
    guard: impl Into<Guard<Object>>,
) -> Result<()> {
    install(class, &names.into(), ProxyOptions::from(guard.into()))
}

impl Class {
    /// Guard class methods, with a custom prefix if `options` sets one.
    pub fn proxy_class_method(
        &mut self,
        names: impl Into<MethodNames>,
        options: impl Into<ProxyOptions<Class>>,
    ) -> Result<&mut Self> {
        install(self, &names.into(), options.into())?;
        Ok(self)
    }

    /// Guard instance methods, with a custom prefix if `options` sets one.
    pub fn proxy_instance_method(
        &mut self,
        names: impl Into<MethodNames>,
        options: impl Into<ProxyOptions<Object>>,
    ) -> Result<&mut Self> {
        install(self, &names.into(), options.into())?;
        Ok(self)
    }

    /// Same as [`Class::proxy_instance_method`].
    pub fn proxy_method(
        &mut self,
        names: impl Into<MethodNames>,
        options: impl Into<ProxyOptions<Object>>,
    ) -> Result<&mut Self> {
        self.proxy_instance_method(names, options)
    }
}

fn install<R: Receiver>(
    class: &mut Class,
    names: &MethodNames,
    options: ProxyOptions<R>,
) -> Result<()> {
    let mut plan: Vec<(String, String, MethodFn<R>)> = Vec::with_capacity(names.len());

    for name in names.iter() {
        let original = class
            .lookup::<R>(name)
            .ok_or_else(|| Error::no_method(class.name(), R::SURFACE, name))?;

        let alias = options.alias(name);
        if !is_method_name(&alias) {
            return Err(Error::InvalidName(alias));
        }
        if class.lookup::<R>(&alias).is_some() || plan.iter().any(|(_, a, _)| *a == alias) {
            return Err(Error::AliasCollision {
                class: class.name().to_string(),
                surface: R::SURFACE,
                method: name.to_string(),
                alias,
            });
        }
        plan.push((name.to_string(), alias, original));
    }

    let guard = options.guard.into_method();
    let class_name = class.name().to_string();
    let table = R::table_mut(class);
    for (name, alias, original) in plan {
        tracing::debug!(
            class = class_name.as_str(),
            surface = %R::SURFACE,
            method = name.as_str(),
            alias = alias.as_str(),
            "proxied method"
        );
        table.define(alias.clone(), original);
        table.define(name.clone(), Arc::clone(&guard));
        table.record_alias(name, alias);
    }
    Ok(())
}

/// Letters, digits and `_`, not starting with a digit, with an optional
/// trailing `?`, `!` or `=`.
fn is_method_name(name: &str) -> bool {
    let body = name
        .strip_suffix(&['?', '!', '='][..])
        .unwrap_or(name);
    let mut chars = body.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
