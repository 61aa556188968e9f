//! Sample classes shared by the runtime tests.

#![allow(dead_code)]

use proxy_method::{Args, Class, Guard, Object, ProxyOptions, Result, Value};
use std::sync::Arc;

fn created(_: &Class, _: Args) -> Result<Value> {
    Ok(Value::from("created"))
}

fn saved(_: &Object, _: Args) -> Result<Value> {
    Ok(Value::from("saved"))
}

/// `blocky(a, b, &block)` yields both arguments to the block.
fn blocky<R>(_: &R, args: Args) -> Result<Value> {
    args.check_arity(2, 2)?;
    args.yield_block(args.positional())
}

pub fn turtle() -> Arc<Class> {
    let mut turtle = Class::new("Turtle");
    turtle
        .define_class_method("create", created)
        .define_method("save", saved)
        .define_method("update", |_, _| Ok(Value::from("updated")));

    turtle
        .proxy_class_method("create", "Don't Create directly, use Interactor!")
        .and_then(|t| t.proxy_instance_method("save", "Don't Save directly, use Interactor!"))
        .and_then(|t| t.proxy_method("update", "Don't Update directly, use Interactor!"))
        .expect("guard Turtle");
    Arc::new(turtle)
}

pub fn default_duck() -> Arc<Class> {
    let mut duck = Class::new("DefaultDuck");
    duck.define_class_method("create", created).define_method("save", saved);

    proxy_method::install_static_guard(&mut duck, "create", Guard::<Class>::default())
        .expect("guard DefaultDuck.create");
    proxy_method::install_instance_guard(&mut duck, "save", Guard::<Object>::default())
        .expect("guard DefaultDuck#save");
    Arc::new(duck)
}

pub fn methodical_meerkat() -> Arc<Class> {
    let mut meerkat = Class::new("MethodicalMeerkat");
    meerkat.define_class_method("create", created).define_method("save", saved);

    meerkat
        .proxy_class_method(
            "create",
            ProxyOptions::<Class>::new().fallback(|_, _| Ok(Value::from("indirectly created!"))),
        )
        .and_then(|m| {
            m.proxy_instance_method(
                "save",
                ProxyOptions::<Object>::new().fallback(|_, _| Ok(Value::from("indirectly saved!"))),
            )
        })
        .expect("guard MethodicalMeerkat");
    Arc::new(meerkat)
}

fn monkey_like(name: &str) -> Class {
    let mut class = Class::new(name);
    class
        .define_class_method("create", |_, args| {
            let what: String = if args.is_empty() { String::new() } else { args.get(0)? };
            Ok(Value::from(format!("created {}", what).trim_end()))
        })
        .define_class_method("destroy_all", |_, _| Ok(Value::from("destroyed")))
        .define_method("save", saved)
        .define_method("update", |_, args| {
            let what: String = args.get(0)?;
            Ok(Value::from(format!("updated {}", what)))
        });
    class
}

/// Guards several names in one call, passed as a `Vec`.
pub fn multi_monkey() -> Arc<Class> {
    let mut monkey = monkey_like("MultiMonkey");
    monkey
        .proxy_class_method(vec!["create", "destroy_all"], ProxyOptions::<Class>::new())
        .and_then(|m| {
            m.proxy_instance_method(vec!["save", "update"], ProxyOptions::<Object>::new())
        })
        .expect("guard MultiMonkey");
    Arc::new(monkey)
}

/// Guards several names in one call, passed as an array.
pub fn listy_leopard() -> Arc<Class> {
    let mut leopard = monkey_like("ListyLeopard");
    leopard
        .proxy_class_method(["create", "destroy_all"], ProxyOptions::<Class>::new())
        .and_then(|l| l.proxy_instance_method(["save", "update"], ProxyOptions::<Object>::new()))
        .expect("guard ListyLeopard");
    Arc::new(leopard)
}

pub fn prefix_pelican() -> Arc<Class> {
    let mut pelican = Class::new("PrefixPelican");
    pelican.define_class_method("create", created).define_method("save", saved);

    pelican
        .proxy_class_method("create", ProxyOptions::<Class>::new().prefix("pelican_"))
        .and_then(|p| {
            p.proxy_instance_method("save", ProxyOptions::<Object>::new().prefix("pelican_"))
        })
        .expect("guard PrefixPelican");
    Arc::new(pelican)
}

pub fn argumentative_aardvark() -> Arc<Class> {
    let mut aardvark = Class::new("ArgumentativeAardvark");
    aardvark
        .define_class_method("blocky", blocky::<Class>)
        .define_method("blocky", blocky::<Object>);

    aardvark
        .proxy_class_method("blocky", ProxyOptions::<Class>::new())
        .and_then(|a| a.proxy_instance_method("blocky", ProxyOptions::<Object>::new()))
        .expect("guard ArgumentativeAardvark");
    Arc::new(aardvark)
}

/// Block computing `a + b`.
pub fn sum_block(values: &[Value]) -> Result<Value> {
    let sum = values.iter().filter_map(Value::as_s64).sum::<i64>();
    Ok(Value::S64(sum))
}
