//! Expansion of `#[proxy]` on an inherent impl block.

use crate::parse::{Directive, GuardKind, ProxyArgs, SurfaceKind};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use std::collections::HashSet;
use syn::{parse_quote, FnArg, Ident, ImplItem, ImplItemFn, ItemImpl, ReturnType, Signature, Type};

/// Rename every guarded fn to its alias and add a guarded fn under the
/// original name.
///
/// All directives are checked before anything is emitted, so a bad name
/// produces a compile error instead of a partially guarded type.
pub(crate) fn expand(args: ProxyArgs, mut item: ItemImpl) -> syn::Result<TokenStream> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[proxy] applies to inherent impl blocks; trait methods cannot be renamed",
        ));
    }

    let mut taken: HashSet<String> = item.items.iter().filter_map(item_name).collect();
    let mut guarded: HashSet<String> = HashSet::new();
    let mut guards = Vec::new();

    for directive in &args.directives {
        for name in &directive.names {
            if !guarded.insert(name.to_string()) {
                return Err(syn::Error::new(
                    name.span(),
                    format!("`{}` is proxied more than once", name),
                ));
            }

            let original = find_fn(&mut item, name, directive.surface)?;
            let alias = alias_ident(directive, name)?;
            if !taken.insert(alias.to_string()) {
                return Err(syn::Error::new(
                    name.span(),
                    format!("cannot proxy `{}`: `{}` is already defined", name, alias),
                ));
            }

            guards.push(guard_fn(directive, original, &alias)?);
            original.sig.ident = alias;
        }
    }

    item.items.extend(guards.into_iter().map(ImplItem::Fn));
    Ok(quote!(#item))
}

fn item_name(item: &ImplItem) -> Option<String> {
    match item {
        ImplItem::Fn(f) => Some(f.sig.ident.to_string()),
        ImplItem::Const(c) => Some(c.ident.to_string()),
        _ => None,
    }
}

/// Find the fn `name` on the requested surface. A fn of the same name on
/// the other surface does not count.
fn find_fn<'a>(
    item: &'a mut ItemImpl,
    name: &Ident,
    surface: SurfaceKind,
) -> syn::Result<&'a mut ImplItemFn> {
    item.items
        .iter_mut()
        .find_map(|member| match member {
            ImplItem::Fn(f) if f.sig.ident == *name && sig_surface(&f.sig) == surface => Some(f),
            _ => None,
        })
        .ok_or_else(|| {
            syn::Error::new(
                name.span(),
                format!("no {} `{}` in this impl block", surface.describe(), name),
            )
        })
}

fn sig_surface(sig: &Signature) -> SurfaceKind {
    match sig.receiver() {
        Some(_) => SurfaceKind::Instance,
        None => SurfaceKind::Class,
    }
}

fn alias_ident(directive: &Directive, name: &Ident) -> syn::Result<Ident> {
    let alias = format!("{}{}", directive.prefix(), name);
    let mut ident: Ident = syn::parse_str(&alias).map_err(|_| {
        let span = directive
            .prefix
            .as_ref()
            .map_or_else(|| name.span(), |prefix| prefix.span());
        syn::Error::new(span, format!("`{}` is not a valid method name", alias))
    })?;
    ident.set_span(name.span());
    Ok(ident)
}

/// Build the fn that takes over `original`'s name: same parameters, result
/// wrapped in `Result<_, proxy_method::Error>`.
fn guard_fn(
    directive: &Directive,
    original: &ImplItemFn,
    alias: &Ident,
) -> syn::Result<ImplItemFn> {
    let mut sig = original.sig.clone();
    sig.constness = None;
    sig.abi = None;

    let mut forwarded = Vec::new();
    for (index, input) in sig.inputs.iter_mut().enumerate() {
        match input {
            // the guard only moves `self`, never mutates it
            FnArg::Receiver(receiver) => receiver.mutability = None,
            FnArg::Typed(arg) => {
                let ident = format_ident!("__proxy_arg{}", index);
                arg.pat = Box::new(parse_quote!(#ident));
                forwarded.push(ident);
            }
        }
    }

    let output: Type = match &original.sig.output {
        ReturnType::Default => parse_quote!(()),
        ReturnType::Type(_, ty) => (**ty).clone(),
    };
    if let (Type::ImplTrait(_), GuardKind::Raise(_)) = (&output, &directive.guard) {
        return Err(syn::Error::new_spanned(
            &original.sig.output,
            "a method guarded with a message cannot return `impl Trait`",
        ));
    }
    sig.output = parse_quote!(-> ::core::result::Result<#output, ::proxy_method::Error>);

    let body = match &directive.guard {
        GuardKind::Raise(message) => {
            let message = match message {
                Some(message) => quote!(#message),
                None => quote!(::proxy_method::DEFAULT_PROXY_MESSAGE),
            };
            quote! {
                #(let _ = #forwarded;)*
                ::core::result::Result::Err(::proxy_method::Error::raised(#message))
            }
        }
        GuardKind::With(path) => {
            let receiver = sig.receiver().map(|_| quote!(self));
            let call = match receiver {
                Some(receiver) => quote!(#path(#receiver, #(#forwarded),*)),
                None => quote!(#path(#(#forwarded),*)),
            };
            match sig.asyncness {
                Some(_) => quote!(#call.await),
                None => call,
            }
        }
    };

    let doc = format!(" Guarded by `#[proxy]`. The original is [`Self::{}`].", alias);
    let cfgs = original.attrs.iter().filter(|attr| attr.path().is_ident("cfg"));
    let vis = &original.vis;

    Ok(parse_quote! {
        #[doc = #doc]
        #(#cfgs)*
        #vis #sig {
            #body
        }
    })
}
