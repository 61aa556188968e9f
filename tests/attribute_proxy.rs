//! Guards generated at compile time by `#[proxy]`.

use proxy_method::{proxy, Error};
use std::cell::Cell;

fn message<T: std::fmt::Debug>(result: Result<T, Error>) -> String {
    match result {
        Err(Error::Raised(message)) => message,
        other => panic!("expected a raised error, got {:?}", other),
    }
}

struct Turtle;

#[proxy(
    class_method(create, message = "Don't Create directly, use Interactor!"),
    instance_method(save, message = "Don't Save directly, use Interactor!"),
    method(update, message = "Don't Update directly, use Interactor!"),
)]
impl Turtle {
    pub fn create() -> String {
        String::from("created")
    }

    pub fn save(&self) -> String {
        String::from("saved")
    }

    pub fn update(&self) -> String {
        String::from("updated")
    }
}

struct DefaultDuck;

#[proxy(class_method(create), instance_method(save))]
impl DefaultDuck {
    pub fn create(what: &str) -> String {
        format!("created {}", what)
    }

    pub fn save(&self) -> &'static str {
        "saved"
    }
}

struct MethodicalMeerkat;

#[proxy(
    class_method(create, with = Self::create_indirectly),
    instance_method(save, with = Self::save_indirectly),
)]
impl MethodicalMeerkat {
    pub fn create() -> String {
        String::from("created")
    }

    pub fn save(&self) -> String {
        String::from("saved")
    }

    fn create_indirectly() -> Result<String, Error> {
        Ok(String::from("indirectly created!"))
    }

    fn save_indirectly(&self) -> Result<String, Error> {
        Ok(String::from("indirectly saved!"))
    }
}

#[derive(Debug)]
struct MultiMonkey {
    saves: Cell<u32>,
}

#[proxy(class_method(create, destroy_all), instance_method([save, update]))]
impl MultiMonkey {
    pub fn create() -> Self {
        MultiMonkey { saves: Cell::new(0) }
    }

    pub fn destroy_all() -> usize {
        0
    }

    pub fn save(&self) {
        self.saves.set(self.saves.get() + 1);
    }

    pub fn update(&mut self, what: &str) -> String {
        format!("updated {}", what)
    }
}

struct PrefixPelican;

#[proxy(
    class_method(create, prefix = "pelican_"),
    instance_method(save, prefix = "pelican_"),
)]
impl PrefixPelican {
    pub fn create() -> &'static str {
        "created"
    }

    pub fn save(&self) -> &'static str {
        "saved"
    }
}

struct ArgumentativeAardvark;

#[proxy(
    class_method(blocky),
    instance_method(blocky_sum, with = Self::blocky_redirect),
)]
impl ArgumentativeAardvark {
    pub fn blocky<F: Fn(i64, i64) -> i64>(a: i64, b: i64, block: F) -> i64 {
        block(a, b)
    }

    pub fn blocky_sum(&self, a: i64, b: i64, block: impl Fn(i64, i64) -> i64) -> i64 {
        block(a, b)
    }

    fn blocky_redirect(
        &self,
        a: i64,
        b: i64,
        block: impl Fn(i64, i64) -> i64,
    ) -> Result<i64, Error> {
        if a < 0 {
            return Err(Error::argument("negative input"));
        }
        Ok(block(a, b) * 10)
    }
}

struct BusyBuilder {
    steps: u32,
}

#[proxy(instance_method(finish, message = "Finish through the pipeline"))]
impl BusyBuilder {
    pub fn finish(mut self) -> u32 {
        self.steps += 1;
        self.steps
    }
}

// ============================================================================
// Class methods
// ============================================================================

#[test]
fn class_method_original_name_raises() {
    assert_eq!(message(Turtle::create()), "Don't Create directly, use Interactor!");
}

#[test]
fn class_method_alias_runs_original() {
    assert_eq!(Turtle::unproxied_create(), "created");
}

#[test]
fn class_method_default_message() {
    assert_eq!(message(DefaultDuck::create("feathers")), "Disabled by proxy_method");
    assert_eq!(DefaultDuck::unproxied_create("feathers"), "created feathers");
}

#[test]
fn class_method_fallback_runs_instead() {
    assert_eq!(MethodicalMeerkat::create().unwrap(), "indirectly created!");
    assert_eq!(MethodicalMeerkat::unproxied_create(), "created");
}

#[test]
fn several_class_methods_in_one_directive() {
    assert_eq!(message(MultiMonkey::create()), "Disabled by proxy_method");
    assert_eq!(message(MultiMonkey::destroy_all()), "Disabled by proxy_method");
    assert_eq!(MultiMonkey::unproxied_destroy_all(), 0);
}

#[test]
fn class_method_custom_prefix() {
    assert_eq!(message(PrefixPelican::create()), "Disabled by proxy_method");
    assert_eq!(PrefixPelican::pelican_create(), "created");
}

#[test]
fn class_method_arguments_and_block() {
    assert!(ArgumentativeAardvark::blocky(6, 7, |a, b| a + b).is_err());
    assert_eq!(ArgumentativeAardvark::unproxied_blocky(6, 7, |a, b| a + b), 13);
}

// ============================================================================
// Instance methods
// ============================================================================

#[test]
fn instance_method_original_name_raises() {
    assert_eq!(message(Turtle.save()), "Don't Save directly, use Interactor!");
}

#[test]
fn instance_method_alias_runs_original() {
    assert_eq!(Turtle.unproxied_save(), "saved");
}

#[test]
fn method_is_instance_synonym() {
    assert_eq!(message(Turtle.update()), "Don't Update directly, use Interactor!");
    assert_eq!(Turtle.unproxied_update(), "updated");
}

#[test]
fn instance_method_default_message() {
    assert_eq!(message(DefaultDuck.save()), "Disabled by proxy_method");
    assert_eq!(DefaultDuck.unproxied_save(), "saved");
}

#[test]
fn instance_method_fallback_runs_instead() {
    assert_eq!(MethodicalMeerkat.save().unwrap(), "indirectly saved!");
}

#[test]
fn guard_has_no_side_effects() {
    let mut monkey = MultiMonkey::unproxied_create();
    assert!(monkey.save().is_err());
    assert_eq!(monkey.saves.get(), 0);

    monkey.unproxied_save();
    assert_eq!(monkey.saves.get(), 1);

    assert_eq!(message(monkey.update("feathers")), "Disabled by proxy_method");
    assert_eq!(monkey.unproxied_update("feathers"), "updated feathers");
}

#[test]
fn instance_method_custom_prefix() {
    assert_eq!(message(PrefixPelican.save()), "Disabled by proxy_method");
    assert_eq!(PrefixPelican.pelican_save(), "saved");
}

#[test]
fn fallback_receives_arguments_and_block() {
    let aardvark = ArgumentativeAardvark;
    assert_eq!(aardvark.blocky_sum(6, 7, |a, b| a + b).unwrap(), 130);
    assert_eq!(aardvark.unproxied_blocky_sum(6, 7, |a, b| a + b), 13);
}

#[test]
fn fallback_errors_propagate_unchanged() {
    let err = ArgumentativeAardvark.blocky_sum(-1, 7, |a, b| a + b).unwrap_err();
    assert!(matches!(err, Error::Argument(ref m) if m == "negative input"));
}

#[test]
fn owned_receiver_guard_consumes_without_running() {
    assert_eq!(message(BusyBuilder { steps: 1 }.finish()), "Finish through the pipeline");
    assert_eq!(BusyBuilder { steps: 1 }.unproxied_finish(), 2);
}
