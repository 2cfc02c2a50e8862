use std::fmt;
use std::result;

use super::{Callable, JsObject, Property, Symbol, Value};

/// Renders `value` the way it would appear inside an object literal:
/// strings quoted, everything else in its plain printed form.
pub(crate) fn literal(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s),
        other => other.to_string(),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Number(n) => write!(f, "{}", n),
            Self::BigInt(i) => write!(f, "{}n", i),
            Self::String(s) => write!(f, "{}", s),
            Self::Symbol(s) => write!(f, "{}", s),
            Self::Time(t) => write!(f, "{}", t),
            Self::Object(o) => write!(f, "{}", o.borrow()),
            Self::Callable(c) => write!(f, "{}", c),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "Symbol({})", self.description)
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        match self {
            Self::Clock => write!(f, "<native fn>"),
            Self::Method(_) => write!(f, "<fn>"),
        }
    }
}

impl fmt::Display for JsObject {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        if self.is_empty() {
            return write!(f, "{{}}");
        }

        write!(f, "{{ ")?;
        for (i, (key, property)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match property {
                Property::Data(value) => write!(f, "{}: {}", key, literal(value))?,
                Property::Getter(_) => write!(f, "{}: [Getter]", key)?,
            }
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::super::ObjectRef;
    use super::*;

    #[test]
    fn it_prints_primitives_in_their_plain_form() {
        assert_eq!("true", Value::Bool(true).to_string());
        assert_eq!("undefined", Value::Undefined.to_string());
        assert_eq!("null", Value::Null.to_string());
        assert_eq!("3", Value::Number(3.0).to_string());
        assert_eq!("NaN", Value::Number(f64::NAN).to_string());
        assert_eq!("1n", Value::BigInt(1).to_string());
        assert_eq!("Fido", Value::String("Fido".to_owned()).to_string());
        assert_eq!("Symbol(sym)", Value::Symbol(Symbol::new("sym")).to_string());
    }

    #[test]
    fn it_quotes_strings_in_literal_position() {
        assert_eq!("'Fido'", literal(&Value::String("Fido".to_owned())));
        assert_eq!("''", literal(&Value::String(String::new())));
        assert_eq!("3", literal(&Value::Number(3.0)));
        assert_eq!("undefined", literal(&Value::Undefined));
    }

    #[test]
    fn it_prints_an_empty_object_as_braces() {
        assert_eq!("{}", JsObject::new().to_string());
    }

    #[test]
    fn it_prints_object_entries_in_insertion_order() {
        let mut object = JsObject::new();
        object.set("make", Value::String("Toyota".to_owned()));
        object.set("year", Value::Number(2021.0));

        assert_eq!("{ make: 'Toyota', year: 2021 }", object.to_string());
    }

    #[test]
    fn it_prints_nested_objects_recursively() {
        let mut stats = JsObject::new();
        stats.set("mpg", Value::Number(40.0));

        let mut car = JsObject::new();
        car.set("make", Value::String("Toyota".to_owned()));
        car.set("stats", Value::Object(stats.into_ref()));

        assert_eq!(
            "{ make: 'Toyota', stats: { mpg: 40 } }",
            car.to_string()
        );
    }

    #[test]
    fn it_prints_callables_by_kind() {
        assert_eq!("<native fn>", Callable::Clock.to_string());

        let method = Value::method(|_| Ok(Value::Undefined));
        assert_eq!("<fn>", method.to_string());
    }

    #[test]
    fn it_prints_shared_objects_through_value() {
        let object: ObjectRef = JsObject::new().into_ref();
        assert_eq!("{}", Value::Object(object).to_string());
    }
}
