//! Proc macros for proxy-method.
//!
//! Provides the `#[proxy]` attribute, which guards methods of an inherent
//! impl block at compile time. Use it through the `proxy-method` crate,
//! which re-exports it: the generated code refers to `::proxy_method`.

use proc_macro::TokenStream;
use syn::{parse_macro_input, ItemImpl};

mod codegen;
mod parse;

use parse::ProxyArgs;

/// Guard methods of an inherent impl block.
///
/// Each guarded method is renamed to its alias (`unproxied_<name>` unless a
/// `prefix` is given) and a new method takes over the original name. The new
/// method has the same parameters and returns
/// `Result<T, proxy_method::Error>`, where `T` is the original return type.
///
/// # Directives
///
/// - `class_method(names..., options...)` - associated fns without a receiver
/// - `instance_method(names..., options...)` - methods taking `self`
/// - `method(...)` - same as `instance_method`
///
/// Names may be listed directly or as a bracketed list, `[create, destroy_all]`.
///
/// # Options
///
/// - `message = "..."` - the guard fails with this message
///   (default `"Disabled by proxy_method"`)
/// - `with = path::to::fallback` - the guard calls this fn instead, passing
///   `self` (for instance methods) and every argument; it must return
///   `Result<T, proxy_method::Error>`, which is returned unchanged
/// - `prefix = "..."` - alias prefix
///
/// # Example
///
/// ```ignore
/// use proxy_method::{proxy, Error};
///
/// struct Meerkat;
///
/// #[proxy(
///     class_method(create, with = Self::create_indirectly),
///     method([save, update], prefix = "raw_"),
/// )]
/// impl Meerkat {
///     pub fn create() -> String { "created".into() }
///     pub fn save(&self) -> String { "saved".into() }
///     pub fn update(&self, what: &str) -> String { format!("updated {}", what) }
///
///     fn create_indirectly() -> Result<String, Error> {
///         Ok("indirectly created!".into())
///     }
/// }
///
/// assert_eq!(Meerkat::create()?, "indirectly created!");
/// assert!(Meerkat.save().is_err());
/// assert_eq!(Meerkat.raw_update("feathers"), "updated feathers");
/// ```
///
/// # Errors
///
/// Compile errors are reported for a name with no method on the requested
/// surface (a class method named like an instance method does not count),
/// an alias that is already defined, a name guarded twice, an invalid
/// prefix, and use on a trait impl.
#[proc_macro_attribute]
pub fn proxy(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as ProxyArgs);
    let item = parse_macro_input!(item as ItemImpl);

    codegen::expand(args, item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
