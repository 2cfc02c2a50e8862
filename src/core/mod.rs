use std::fmt;
use std::rc::Rc;
use std::result;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

mod display;
mod object;
mod topics;

pub type JsObject = object::JsObject;
pub type ObjectRef = object::ObjectRef;
pub type Property = object::Property;
pub type Result<T> = result::Result<T, RjsError>;
pub type Topic = topics::Topic;

pub use topics::{
    add_smiley, branch, download, make_counter, multiplier, new_tree, pick_fruit, random_key,
    run_all, run_topic, TOPICS,
};

#[derive(Error, Debug, PartialEq)]
pub enum RjsError {
    /// A property was queried that exists neither in an object's own set nor
    /// anywhere along its prototype chain.
    #[error("runtime error: Undefined property '{0}'.")]
    UndefinedProperty(String),
    /// A topic was requested by a key the registry does not carry.
    #[error("error: unknown topic '{0}'")]
    UnknownTopic(String),
}

/// Emulates the value domain of a dynamically typed scripting language.
///
/// Every value a demonstration touches belongs to a fixed set of categories:
/// the primitives, the native clock reading, and the two reference kinds
/// (objects and callables). Rather than downcasting from a common root the
/// way the source language's runtime does, `Value` offers the full domain as
/// one sum type with the category as the variant.
#[derive(Clone, Debug)]
pub enum Value {
    /// A logical entity that is either `true` or `false`.
    Bool(bool),
    /// A binding that has not been given a value.
    Undefined,
    /// An explicitly empty value, distinct from [`Value::Undefined`].
    Null,
    /// A double-precision IEEE 754 value. `NaN` lives here too.
    Number(f64),
    /// A wide integer standing in for the language's arbitrary-precision kind.
    BigInt(i128),
    /// A sequence of characters used to represent text.
    String(String),
    /// A token guaranteed to be distinct from every other token.
    Symbol(Symbol),
    /// The return type of the native clock.
    Time(u128),
    /// A shared, mutable property map.
    Object(ObjectRef),
    Callable(Callable),
}

impl Value {
    /// Returns the language's type tag for self.
    ///
    /// The historical quirk that the explicit-empty value reports itself as
    /// an object is reproduced deliberately.
    #[must_use]
    pub fn type_of(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Undefined => "undefined",
            Self::Null | Self::Object(_) => "object",
            Self::Number(_) | Self::Time(_) => "number",
            Self::BigInt(_) => "bigint",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Callable(_) => "function",
        }
    }

    /// Classifies self the way a logical context would coerce it.
    ///
    /// Exactly six values are falsy: undefined, null, `false`, `0`, `NaN`,
    /// and the empty string. Everything else is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null | Self::Bool(false) => false,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::BigInt(i) => *i != 0,
            Self::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Wraps a receiver-reading closure as a callable `Value`.
    pub fn method(f: impl Fn(&JsObject) -> Result<Value> + 'static) -> Self {
        Value::Callable(Callable::Method(Method::new(f)))
    }
}

/// Equality follows the source language's strict comparison: primitives
/// compare by content (`NaN` is unequal to itself), objects and methods by
/// identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Number(l), Self::Number(r)) => l == r,
            (Self::BigInt(l), Self::BigInt(r)) => l == r,
            (Self::String(l), Self::String(r)) => l == r,
            (Self::Symbol(l), Self::Symbol(r)) => l == r,
            (Self::Time(l), Self::Time(r)) => l == r,
            (Self::Object(l), Self::Object(r)) => Rc::ptr_eq(l, r),
            (Self::Callable(l), Self::Callable(r)) => l == r,
            _ => false,
        }
    }
}

static NEXT_SYMBOL: AtomicUsize = AtomicUsize::new(0);

/// A unique token. Two symbols are never equal, even when they carry the
/// same description.
#[derive(Clone, Debug)]
pub struct Symbol {
    id: usize,
    description: String,
}

impl Symbol {
    #[must_use]
    pub fn new(description: &str) -> Self {
        Symbol {
            id: NEXT_SYMBOL.fetch_add(1, Ordering::Relaxed),
            description: description.to_owned(),
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Callable {
    /// The native millisecond clock.
    Clock,
    /// A user-supplied callable evaluated against its receiver.
    Method(Method),
}

impl Callable {
    /// Invokes self with `receiver` bound as the instance state the callable
    /// may read. The clock ignores its receiver.
    pub fn call(&self, receiver: &JsObject) -> Result<Value> {
        match self {
            Self::Clock => {
                // The system clock only predates the epoch on a misconfigured
                // host; report such a reading as the epoch itself.
                let now = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map_or(0, |t| t.as_millis());
                Ok(Value::Time(now))
            }
            Self::Method(f) => f.call(receiver),
        }
    }
}

/// A callable bound to a receiver at invocation time.
#[derive(Clone)]
pub struct Method(Rc<dyn Fn(&JsObject) -> Result<Value>>);

impl Method {
    pub fn new(f: impl Fn(&JsObject) -> Result<Value> + 'static) -> Self {
        Method(Rc::new(f))
    }

    pub fn call(&self, receiver: &JsObject) -> Result<Value> {
        (self.0)(receiver)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "<fn>")
    }
}

impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
