//! Class Runtime
//!
//! Dynamic classes with two independent call surfaces. Methods are closures
//! registered by name; calls resolve the name on the receiver's surface,
//! walking up the superclass chain.

mod args;
mod class;
mod method;
mod object;

pub use args::{Args, Block};
pub use class::Class;
pub use method::{MethodFn, MethodTable, ProxiedMethod, Receiver, Surface};
pub use object::Object;

use crate::error::Result;
use crate::value::Value;

/// Calls the original behavior of guarded methods by their original names.
///
/// Obtained from `Class::unproxied` or `Object::unproxied`. Names without a
/// guard are passed through unchanged. The receiver itself stays guarded.
pub struct Unproxied<'a, R> {
    receiver: &'a R,
}

impl<'a, R: Receiver> Unproxied<'a, R> {
    pub(crate) fn new(receiver: &'a R) -> Self {
        Self { receiver }
    }

    /// The wrapped receiver, still guarded.
    pub fn receiver(&self) -> &'a R {
        self.receiver
    }

    pub fn call(&self, name: &str, args: Args) -> Result<Value> {
        let target = self
            .receiver
            .dispatch_class()
            .alias_for::<R>(name)
            .unwrap_or(name);
        self.receiver.send(target, args)
    }
}

impl<R: std::fmt::Debug> std::fmt::Debug for Unproxied<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Unproxied").field(self.receiver).finish()
    }
}
