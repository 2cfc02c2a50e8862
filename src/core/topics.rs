use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;

use super::display::literal;
use super::{Callable, JsObject, Method, Property, Result, RjsError, Symbol, Value};

/// A single notebook topic: one self-contained demonstration that produces
/// the lines it would print.
pub struct Topic {
    pub key: &'static str,
    pub title: &'static str,
    demo: fn() -> Result<Vec<String>>,
}

impl Topic {
    /// Runs the demonstration and returns its output lines in order.
    ///
    /// # Errors
    /// Propagates any lookup failure from the demonstration itself. The
    /// shipped topics never fail.
    pub fn run(&self) -> Result<Vec<String>> {
        debug!("running topic '{}' ({})", self.key, self.title);
        (self.demo)()
    }
}

/// Every topic in the order the source material presents them.
pub const TOPICS: &[Topic] = &[
    Topic {
        key: "primitives",
        title: "Primitive values and their type tags",
        demo: primitives,
    },
    Topic {
        key: "variables",
        title: "Reassignment, shadowing, and constants",
        demo: variables,
    },
    Topic {
        key: "truthiness",
        title: "The six falsy values and boolean coercion",
        demo: truthiness,
    },
    Topic {
        key: "control-flow",
        title: "Three-way branching and multi-way dispatch",
        demo: control_flow,
    },
    Topic {
        key: "functions",
        title: "Two ways to define a callable",
        demo: functions,
    },
    Topic {
        key: "higher-order",
        title: "Callables that take and return callables",
        demo: higher_order,
    },
    Topic {
        key: "objects",
        title: "Object literals, methods, and property access",
        demo: objects,
    },
    Topic {
        key: "computed-keys",
        title: "Property keys computed at creation time",
        demo: computed_keys,
    },
    Topic {
        key: "descriptors",
        title: "Attaching data and getter properties",
        demo: descriptors,
    },
    Topic {
        key: "enumeration",
        title: "Four ways to iterate an object",
        demo: enumeration,
    },
    Topic {
        key: "constructors",
        title: "Constructor-style object creation",
        demo: constructors,
    },
    Topic {
        key: "prototypes",
        title: "Delegation through a prototype chain",
        demo: prototypes,
    },
    Topic {
        key: "closures",
        title: "Private state captured by an inner callable",
        demo: closures,
    },
];

/// Runs every topic in registry order and returns the concatenated lines.
///
/// # Errors
/// Propagates the first topic failure. The shipped topics never fail.
pub fn run_all() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for topic in TOPICS {
        lines.extend(topic.run()?);
    }

    Ok(lines)
}

/// Runs the topic registered under `key`.
///
/// # Errors
/// Returns `Err(RjsError::UnknownTopic(key))` if no topic carries `key`.
pub fn run_topic(key: &str) -> Result<Vec<String>> {
    TOPICS
        .iter()
        .find(|topic| topic.key == key)
        .ok_or_else(|| RjsError::UnknownTopic(key.to_owned()))?
        .run()
}

/// Appends the smiling emoji to `input`.
#[must_use]
pub fn add_smiley(input: &str) -> String {
    format!("{} 🙂", input)
}

/// Reports which arm of a primary/secondary/fallback branch runs for the
/// given conditions. Exactly one arm runs per call.
#[must_use]
pub fn branch(primary: &Value, secondary: &Value) -> &'static str {
    if primary.is_truthy() {
        "Do this"
    } else if secondary.is_truthy() {
        "Do that"
    } else {
        "Do the other thing"
    }
}

/// Dispatches on a fruit name to its emoji, with a formatted apology for
/// anything not on the menu.
#[must_use]
pub fn pick_fruit(fruit: &str) -> String {
    match fruit {
        "Grape" => "🍇".to_owned(),
        "Banana" => "🍌".to_owned(),
        "Apple" => "🍎".to_owned(),
        "Strawberry" => "🍓".to_owned(),
        "Lemon" => "🍋".to_owned(),
        _ => format!("Sorry, we are out of {}s.", fruit),
    }
}

/// Announces the download and then hands control to `callback`, returning
/// both reports in the order they happened.
pub fn download(callback: impl FnOnce() -> String) -> Vec<String> {
    vec!["loading files".to_owned(), callback()]
}

/// Returns a callable that multiplies its argument by `factor`. Each
/// returned callable owns its factor independently.
pub fn multiplier(factor: f64) -> impl Fn(f64) -> f64 {
    move |x| x * factor
}

/// Returns a counter backed by private state. Every call increments and
/// returns the count; independent counters do not share state.
pub fn make_counter() -> impl FnMut() -> u64 {
    let mut count = 0;
    move || {
        count += 1;
        count
    }
}

/// Derives a five character base-36 property key from the clock, the moral
/// equivalent of the sheet's random key helper.
#[must_use]
pub fn random_key() -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |t| t.as_nanos());

    let mut key = String::with_capacity(5);
    for _ in 0..5 {
        key.push(DIGITS[(seed % 36) as usize] as char);
        seed /= 36;
    }

    key
}

/// Builds a tree object the constructor-function way: fields from the
/// arguments, a derived timestamp, and a method reading instance state.
///
/// # Errors
/// Never fails for the shipped construction; the signature mirrors the rest
/// of the object API.
pub fn new_tree(species: &str) -> Result<JsObject> {
    let mut tree = JsObject::new();
    tree.set("species", Value::String(species.to_owned()));
    tree.set("planted", Callable::Clock.call(&tree)?);
    tree.set(
        "grow",
        Value::method(|this| {
            Ok(Value::String(format!(
                "{} tree is growing",
                this.get("species")?
            )))
        }),
    );

    Ok(tree)
}

fn call_method(object: &JsObject, name: &str) -> Result<Value> {
    match object.get(name)? {
        Value::Callable(f) => f.call(object),
        other => Ok(other),
    }
}

fn primitives() -> Result<Vec<String>> {
    let samples = vec![
        Value::Bool(true),
        Value::Undefined,
        Value::Null,
        Value::Number(1.0),
        Value::BigInt(1),
        Value::String("hello world".to_owned()),
        Value::Symbol(Symbol::new("sym")),
    ];

    Ok(samples.iter().map(|v| v.type_of().to_owned()).collect())
}

fn variables() -> Result<Vec<String>> {
    let mut lines = Vec::new();

    // A mutable binding can be reassigned, reading its previous value.
    let mut x = "ex";
    x = &x[1..];
    lines.push(x.to_owned());

    // A rebinding shadows the one before it.
    let y = "Y";
    let y = y.to_lowercase();
    lines.push(y);

    // A constant can never be reassigned.
    const Z: &str = "z";
    lines.push(Z.to_owned());

    Ok(lines)
}

fn truthiness() -> Result<Vec<String>> {
    let falsy = [
        Value::Undefined,
        Value::Null,
        Value::Bool(false),
        Value::Number(0.0),
        Value::Number(f64::NAN),
        Value::String(String::new()),
    ];

    let mut lines: Vec<String> = falsy
        .iter()
        .map(|value| format!("{} is falsy", literal(value)))
        .collect();

    let variable = Value::Undefined;

    // The equality-to-absent check: it works here, but misses the other
    // five falsy values.
    if variable == Value::Undefined {
        lines.push("Dont do this".to_owned());
    }

    // The coercion check covers every falsy value at once.
    if !variable.is_truthy() {
        lines.push("Do this".to_owned());
    }

    Ok(lines)
}

fn control_flow() -> Result<Vec<String>> {
    let truthy = Value::Undefined;

    // The sheet's secondary condition is a loose comparison against the
    // empty values, which holds for an unassigned binding.
    let secondary = Value::Bool(truthy == Value::Undefined || truthy == Value::Null);

    Ok(vec![
        branch(&truthy, &secondary).to_owned(),
        pick_fruit("Strawberry"),
    ])
}

fn functions() -> Result<Vec<String>> {
    // The closure-expression equivalent of a named fn.
    let add_frowny = |input: &str| format!("{} ☹️", input);

    Ok(vec![add_smiley("happy"), add_frowny("sad")])
}

fn higher_order() -> Result<Vec<String>> {
    let mut lines = download(|| "loading complete".to_owned());

    let doubler = multiplier(2.0);
    let tripler = multiplier(3.0);
    lines.push(doubler(3.0).to_string());
    lines.push(tripler(3.0).to_string());

    Ok(lines)
}

fn objects() -> Result<Vec<String>> {
    let mut lines = Vec::new();

    let mut stats = JsObject::new();
    stats.set("weight", Value::Number(2910.0));
    stats.set("horsepower", Value::Number(139.0));
    stats.set("mpg", Value::Number(40.0));

    let mut car = JsObject::new();
    car.set("make", Value::String("Toyota".to_owned()));
    car.set("model", Value::String("Corolla".to_owned()));
    car.set("year", Value::Number(2021.0));
    car.set("stats", Value::Object(stats.into_ref()));
    car.set(
        "fullName",
        Value::method(|this| {
            Ok(Value::String(format!(
                "{} {}",
                this.get("make")?,
                this.get("model")?
            )))
        }),
    );
    // A duplicate key keeps a single entry; the later definition wins.
    car.set(
        "fullName",
        Value::method(|this| {
            Ok(Value::String(format!(
                "{} {} {}",
                this.get("year")?,
                this.get("make")?,
                this.get("model")?
            )))
        }),
    );

    // Index-style set and get.
    car.set("model", Value::String("Camry".to_owned()));
    lines.push(car.get("model")?.to_string());

    lines.push(call_method(&car, "fullName")?.to_string());

    // Building the same shape without a literal: empty object, then
    // dot-style set and get.
    let mut bike = JsObject::new();
    bike.set("brand", Value::String("Huffy".to_owned()));
    lines.push(bike.get("brand")?.to_string());

    Ok(lines)
}

fn computed_keys() -> Result<Vec<String>> {
    let mut obj = JsObject::new();

    // The key is computed from a function call as the object is built. The
    // key itself varies run to run; the stored value does not.
    obj.set(&random_key(), Value::Bool(true));

    let mut lines = Vec::new();
    for key in obj.keys() {
        lines.push(obj.get(&key)?.to_string());
    }

    Ok(lines)
}

fn descriptors() -> Result<Vec<String>> {
    let mut obj = JsObject::new();

    obj.define_property("emoji", Property::Data(Value::String("🙂".to_owned())));
    obj.define_property(
        "getEmoji",
        Property::Getter(Method::new(|this| this.get("emoji"))),
    );

    Ok(vec![
        obj.get("emoji")?.to_string(),
        obj.get("getEmoji")?.to_string(),
    ])
}

fn enumeration() -> Result<Vec<String>> {
    let mut dog = JsObject::new();
    dog.set("name", Value::String("Fido".to_owned()));
    dog.set("age", Value::Number(3.0));
    dog.set("picture", Value::String("🐶".to_owned()));

    let mut lines = Vec::new();

    // Property names, own and inherited.
    lines.extend(dog.keys_with_inherited());

    // Values only.
    for value in dog.values()? {
        lines.push(value.to_string());
    }

    // Own property names only.
    lines.extend(dog.keys());

    // Name/value pairs.
    for (key, value) in dog.entries()? {
        lines.push(format!("{} {}", key, value));
    }

    Ok(lines)
}

fn constructors() -> Result<Vec<String>> {
    let new_tree = new_tree("Birch")?;

    Ok(vec![call_method(&new_tree, "grow")?.to_string()])
}

fn prototypes() -> Result<Vec<String>> {
    let mut car = JsObject::new();
    car.set("make", Value::String("Toyota".to_owned()));
    car.set("model", Value::String("Corolla".to_owned()));
    car.set("year", Value::Number(2021.0));
    let car = car.into_ref();

    // The new object delegates to car; its own property set is empty.
    let vehicle = JsObject::with_prototype(Rc::clone(&car));

    let mut lines = vec![vehicle.to_string()];

    // A missed own lookup falls through to the delegation parent.
    lines.push(vehicle.lookup("make")?.to_string());

    // The parent handed back is the original object.
    if let Some(prototype) = vehicle.prototype() {
        lines.push(prototype.borrow().to_string());
    }

    Ok(lines)
}

fn closures() -> Result<Vec<String>> {
    let mut counter = make_counter();

    Ok(vec![
        counter().to_string(),
        counter().to_string(),
        counter().to_string(),
    ])
}
