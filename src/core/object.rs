use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use super::{Method, Result, RjsError, Value};

/// A shared handle to an object. Delegation parents, nested values, and
/// method receivers all hold the same allocation, so identity comparisons
/// behave like the source language's reference equality.
pub type ObjectRef = Rc<RefCell<JsObject>>;

/// A single own property: either plain data or a getter evaluated against
/// the object it is read from.
#[derive(Clone, Debug, PartialEq)]
pub enum Property {
    Data(Value),
    Getter(Method),
}

/// A collection of key/value properties with an optional delegation parent.
///
/// Keys are unique strings kept in insertion order. A missed own lookup
/// falls back to the parent chain one level at a time, the own set always
/// winning over anything inherited.
#[derive(Clone, Debug, Default)]
pub struct JsObject {
    properties: IndexMap<String, Property>,
    prototype: Option<ObjectRef>,
}

impl JsObject {
    /// Creates a new empty object with no delegation parent.
    #[must_use]
    pub fn new() -> Self {
        JsObject {
            properties: IndexMap::new(),
            prototype: None,
        }
    }

    /// Creates a new empty object whose missed lookups delegate to
    /// `prototype`.
    #[must_use]
    pub fn with_prototype(prototype: ObjectRef) -> Self {
        JsObject {
            properties: IndexMap::new(),
            prototype: Some(prototype),
        }
    }

    /// Wraps self in a shared handle.
    #[must_use]
    pub fn into_ref(self) -> ObjectRef {
        Rc::new(RefCell::new(self))
    }

    /// Inserts `(name : value)` as a data property of self.
    ///
    /// Index-style and dot-style access are the same operation; this is the
    /// single write path for both. Writing an existing name keeps the entry
    /// at its original position and replaces the value, so the last of a run
    /// of duplicates wins.
    pub fn set(&mut self, name: &str, value: Value) {
        self.define_property(name, Property::Data(value));
    }

    /// Attaches `property` to self without literal syntax, data and getter
    /// variants alike.
    pub fn define_property(&mut self, name: &str, property: Property) {
        self.properties.insert(name.to_owned(), property);
    }

    /// Returns the value of `name` in self's own property set.
    ///
    /// A getter is evaluated against self on every read.
    ///
    /// # Errors
    /// Returns `Err(RjsError::UndefinedProperty(name))` if `name` is not an
    /// own property.
    pub fn get(&self, name: &str) -> Result<Value> {
        match self.properties.get(name) {
            Some(Property::Data(v)) => Ok(v.clone()),
            Some(Property::Getter(f)) => f.call(self),
            None => Err(RjsError::UndefinedProperty(name.to_owned())),
        }
    }

    /// Returns the value of `name` in the first object it's found in,
    /// walking the delegation chain from self upward.
    ///
    /// # Errors
    /// Returns `Err(RjsError::UndefinedProperty(name))` if `name` is not
    /// found anywhere along the chain.
    pub fn lookup(&self, name: &str) -> Result<Value> {
        if self.properties.contains_key(name) {
            return self.get(name);
        }

        if let Some(parent) = &self.prototype {
            return parent.borrow().lookup(name);
        }

        Err(RjsError::UndefinedProperty(name.to_owned()))
    }

    /// Returns the delegation parent of self, if any. The handle is the
    /// original parent object, not a copy.
    #[must_use]
    pub fn prototype(&self) -> Option<ObjectRef> {
        self.prototype.as_ref().map(Rc::clone)
    }

    /// Returns the own property names of self in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.properties.keys().cloned().collect()
    }

    /// Returns the own property names of self followed by every name
    /// visible through the delegation chain that self does not shadow.
    #[must_use]
    pub fn keys_with_inherited(&self) -> Vec<String> {
        let mut keys = self.keys();

        let mut parent = self.prototype();
        while let Some(p) = parent {
            let p = p.borrow();
            for key in p.properties.keys() {
                if !keys.contains(key) {
                    keys.push(key.clone());
                }
            }
            parent = p.prototype();
        }

        keys
    }

    /// Returns the own property values of self in insertion order, getters
    /// evaluated.
    ///
    /// # Errors
    /// Propagates the first getter failure.
    pub fn values(&self) -> Result<Vec<Value>> {
        let mut values = Vec::with_capacity(self.len());
        for key in self.properties.keys() {
            values.push(self.get(key)?);
        }

        Ok(values)
    }

    /// Returns the own `(name, value)` pairs of self in insertion order.
    ///
    /// # Errors
    /// Propagates the first getter failure.
    pub fn entries(&self) -> Result<Vec<(String, Value)>> {
        let mut entries = Vec::with_capacity(self.len());
        for key in self.properties.keys() {
            entries.push((key.clone(), self.get(key)?));
        }

        Ok(entries)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&String, &Property)> {
        self.properties.iter()
    }
}
