//! proxy-method: guard methods while keeping the originals reachable
//!
//! Guarding a method replaces its behavior under its own name with a failure
//! (or a fallback) and keeps the original behavior reachable under an alias,
//! `unproxied_<name>` by default. The typical use is blocking direct calls to
//! dangerous entry points (say `create` or `save`) so callers go through a
//! higher-level API, while that API and the tests can still reach the
//! original explicitly.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              proxy-method               │
//! │                                         │
//! │  runtime  - classes, objects, tables    │
//! │  proxy    - guard installation          │
//! │  config   - declarative guard sets      │
//! │                                         │
//! ├─────────────────────────────────────────┤
//! │   #[proxy] (compile-time guard pairs)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Two surfaces
//!
//! Every class has class-level methods and instance methods, kept in separate
//! tables. A guard on the class method `create` never touches an instance
//! method `create`, and the other way round.
//!
//! ## Static types
//!
//! For ordinary Rust types, the `#[proxy]` attribute generates the same pair
//! of entry points at compile time:
//!
//! ```
//! use proxy_method::proxy;
//!
//! struct Turtle;
//!
//! #[proxy(
//!     class_method(create, message = "Don't Create directly, use Interactor!"),
//!     instance_method(save, message = "Don't Save directly, use Interactor!"),
//! )]
//! impl Turtle {
//!     fn create() -> &'static str {
//!         "created"
//!     }
//!
//!     fn save(&self) -> &'static str {
//!         "saved"
//!     }
//! }
//!
//! assert!(Turtle::create().is_err());
//! assert_eq!(Turtle::unproxied_create(), "created");
//! assert_eq!(Turtle.unproxied_save(), "saved");
//! ```

pub mod config;
pub mod error;
pub mod proxy;
pub mod runtime;
pub mod value;

pub use config::ProxyConfig;
pub use error::{Error, Result};
pub use proxy::{
    install_instance_guard, install_static_guard, Guard, MethodNames, ProxyOptions,
    DEFAULT_PREFIX, DEFAULT_PROXY_MESSAGE,
};
pub use proxy_method_macros::proxy;
pub use runtime::{
    Args, Block, Class, MethodFn, MethodTable, Object, ProxiedMethod, Receiver, Surface,
    Unproxied,
};
pub use value::{ConversionError, Value};
