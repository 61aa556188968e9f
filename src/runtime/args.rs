//! Call arguments: positional values plus an optional block.

use crate::error::{Error, Result};
use crate::value::{ConversionError, Value};
use std::fmt;
use std::sync::Arc;

/// A block passed along with a call, invoked with `Args::yield_block`.
pub type Block = Arc<dyn Fn(&[Value]) -> Result<Value> + Send + Sync>;

/// Arguments for a single method call.
///
/// Guards and aliases receive the caller's `Args` untouched, so whatever
/// the caller passed (including the block) reaches the original body.
#[derive(Clone, Default)]
pub struct Args {
    positional: Vec<Value>,
    block: Option<Block>,
}

impl Args {
    /// Empty argument list with no block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Attach a block.
    pub fn block<F>(mut self, block: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        self.block = Some(Arc::new(block));
        self
    }

    pub fn len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn block_given(&self) -> bool {
        self.block.is_some()
    }

    /// Raw positional argument, if present.
    pub fn value(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// Positional argument converted to `T`.
    ///
    /// A missing index or a value of the wrong kind is an argument error.
    pub fn get<T>(&self, index: usize) -> Result<T>
    where
        T: TryFrom<Value, Error = ConversionError>,
    {
        let value = self.positional.get(index).cloned().ok_or_else(|| {
            Error::argument(format!(
                "missing argument {} (given {})",
                index + 1,
                self.positional.len()
            ))
        })?;
        T::try_from(value)
            .map_err(|e| Error::argument(format!("argument {}: {}", index + 1, e)))
    }

    /// Check the number of positional arguments against `min..=max`.
    pub fn check_arity(&self, min: usize, max: usize) -> Result<()> {
        let given = self.positional.len();
        if given < min || given > max {
            let expected = if min == max {
                min.to_string()
            } else {
                format!("{}..{}", min, max)
            };
            return Err(Error::argument(format!(
                "wrong number of arguments (given {}, expected {})",
                given, expected
            )));
        }
        Ok(())
    }

    /// Call the block with `values`.
    pub fn yield_block(&self, values: &[Value]) -> Result<Value> {
        match &self.block {
            Some(block) => block(values),
            None => Err(Error::argument("no block given (yield)")),
        }
    }
}

impl From<Vec<Value>> for Args {
    fn from(positional: Vec<Value>) -> Self {
        Self {
            positional,
            block: None,
        }
    }
}

impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Args")
            .field("positional", &self.positional)
            .field("block", &self.block.is_some())
            .finish()
    }
}

/// Build `Args` from a list of expressions convertible into `Value`.
///
/// ```
/// use proxy_method::{args, Value};
///
/// let args = args!["feathers", 7];
/// assert_eq!(args.positional(), &[Value::from("feathers"), Value::S64(7)]);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Args::from(vec![$($crate::Value::from($value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_access_and_arity() {
        let args = Args::new().arg(6).arg(7);
        assert_eq!(args.get::<i64>(1).unwrap(), 7);
        assert!(args.check_arity(2, 2).is_ok());

        let err = args.check_arity(3, 3).unwrap_err();
        assert_eq!(err.to_string(), "wrong number of arguments (given 2, expected 3)");

        let err = args.get::<String>(0).unwrap_err();
        assert_eq!(err.to_string(), "argument 1: expected string, got s64");
    }

    #[test]
    fn yield_without_block_is_an_argument_error() {
        let err = Args::new().yield_block(&[]).unwrap_err();
        assert!(matches!(err, Error::Argument(_)));
    }

    #[test]
    fn block_receives_values() {
        let args = Args::new().block(|xs| {
            let sum: i64 = xs.iter().filter_map(Value::as_s64).sum();
            Ok(Value::S64(sum))
        });
        assert!(args.block_given());
        assert_eq!(args.yield_block(&[Value::S64(6), Value::S64(7)]).unwrap(), Value::S64(13));
    }
}
