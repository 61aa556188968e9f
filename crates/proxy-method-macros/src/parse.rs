//! Parsing of `#[proxy(...)]` arguments.

use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{bracketed, parenthesized, Ident, LitStr, Path, Token};

/// Which surface a directive guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SurfaceKind {
    Class,
    Instance,
}

impl SurfaceKind {
    pub(crate) fn describe(self) -> &'static str {
        match self {
            SurfaceKind::Class => "class method",
            SurfaceKind::Instance => "instance method",
        }
    }
}

/// What the guarded name does.
#[derive(Debug, Clone)]
pub(crate) enum GuardKind {
    /// Fail with this message, or the default one.
    Raise(Option<LitStr>),
    /// Delegate to this function.
    With(Path),
}

/// One `class_method(...)`, `instance_method(...)` or `method(...)` entry.
#[derive(Debug, Clone)]
pub(crate) struct Directive {
    pub surface: SurfaceKind,
    pub names: Vec<Ident>,
    pub prefix: Option<LitStr>,
    pub guard: GuardKind,
}

impl Directive {
    pub(crate) fn prefix(&self) -> String {
        self.prefix
            .as_ref()
            .map(LitStr::value)
            .unwrap_or_else(|| String::from("unproxied_"))
    }
}

/// All directives of one `#[proxy(...)]` attribute.
#[derive(Debug, Clone)]
pub(crate) struct ProxyArgs {
    pub directives: Vec<Directive>,
}

impl Parse for ProxyArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(syn::Error::new(
                Span::call_site(),
                "expected at least one of `class_method(...)`, `instance_method(...)` or `method(...)`",
            ));
        }

        let directives = Punctuated::<Directive, Token![,]>::parse_terminated(input)?;
        Ok(ProxyArgs {
            directives: directives.into_iter().collect(),
        })
    }
}

impl Parse for Directive {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let kind: Ident = input.parse()?;
        let surface = match kind.to_string().as_str() {
            "class_method" => SurfaceKind::Class,
            // `method` is a synonym for `instance_method`
            "instance_method" | "method" => SurfaceKind::Instance,
            other => {
                return Err(syn::Error::new(
                    kind.span(),
                    format!(
                        "unexpected `{}`, expected `class_method`, `instance_method` or `method`",
                        other
                    ),
                ));
            }
        };

        let content;
        parenthesized!(content in input);

        let mut names = Vec::new();
        let mut prefix: Option<LitStr> = None;
        let mut message: Option<LitStr> = None;
        let mut with: Option<Path> = None;

        while !content.is_empty() {
            if content.peek(syn::token::Bracket) {
                let list;
                bracketed!(list in content);
                let listed = Punctuated::<Ident, Token![,]>::parse_terminated(&list)?;
                names.extend(listed);
            } else {
                let ident: Ident = content.parse()?;
                if content.peek(Token![=]) {
                    content.parse::<Token![=]>()?;
                    match ident.to_string().as_str() {
                        "message" => set_once(&mut message, &ident, content.parse()?)?,
                        "prefix" => set_once(&mut prefix, &ident, content.parse()?)?,
                        "with" => set_once(&mut with, &ident, content.parse()?)?,
                        other => {
                            return Err(syn::Error::new(
                                ident.span(),
                                format!(
                                    "unexpected option `{}`, expected `message`, `prefix` or `with`",
                                    other
                                ),
                            ));
                        }
                    }
                } else {
                    names.push(ident);
                }
            }

            // Consume optional comma
            if content.peek(Token![,]) {
                content.parse::<Token![,]>()?;
            }
        }

        if names.is_empty() {
            return Err(syn::Error::new(kind.span(), "expected at least one method name"));
        }

        let guard = match (message, with) {
            (Some(message), Some(_)) => {
                return Err(syn::Error::new(
                    message.span(),
                    "`message` and `with` cannot be combined",
                ));
            }
            (message, None) => GuardKind::Raise(message),
            (None, Some(path)) => GuardKind::With(path),
        };

        Ok(Directive {
            surface,
            names,
            prefix,
            guard,
        })
    }
}

fn set_once<T>(slot: &mut Option<T>, key: &Ident, value: T) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(key.span(), format!("`{}` given twice", key)));
    }
    *slot = Some(value);
    Ok(())
}
