use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

/// A dynamically typed value in the script-value model.
///
/// `Array` and `Object` are handles: cloning a `Value` clones the handle, so
/// two clones observe the same underlying storage. Everything else is a plain
/// scalar copied by value.
#[derive(Clone, Debug)]
pub enum Value {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Array(Arc<Mutex<Vec<Value>>>),
    Object(Arc<Mutex<HashMap<String, Value>>>),
    Null,
    Undefined,
}

impl Value {
    pub fn array(items: Vec<Value>) -> Value {
        Value::Array(Arc::new(Mutex::new(items)))
    }

    pub fn object(entries: HashMap<String, Value>) -> Value {
        Value::Object(Arc::new(Mutex::new(entries)))
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(number) => Some(*number),
            _ => None,
        }
    }

    /// Numeric view of the value, widening integers.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Integer(number) => Some(*number as f64),
            Value::Float(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Snapshot of an array's elements. `None` for non-array values.
    pub fn items(&self) -> Option<Vec<Value>> {
        match self {
            Value::Array(items) => Some(items.lock().unwrap().clone()),
            _ => None,
        }
    }

    /// Snapshot of an object's entries. `None` for non-object values.
    pub fn entries(&self) -> Option<Vec<(String, Value)>> {
        match self {
            Value::Object(entries) => {
                let entries_lock = entries.lock().unwrap();
                let mut snapshot = Vec::with_capacity(entries_lock.len());
                for (key, value) in entries_lock.iter() {
                    snapshot.push((key.clone(), value.clone()));
                }
                Some(snapshot)
            }
            _ => None,
        }
    }

    /// Property lookup on an object value. Absent keys and non-object
    /// receivers yield `Undefined`.
    pub fn get(&self, key: &str) -> Value {
        match self {
            Value::Object(entries) => entries
                .lock()
                .unwrap()
                .get(key)
                .cloned()
                .unwrap_or(Value::Undefined),
            _ => Value::Undefined,
        }
    }

    /// Strict equality: numbers compare across integer/float by numeric
    /// value, arrays and objects compare by handle identity, and no other
    /// cross-type pair is equal.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Integer(a), Value::Float(b)) | (Value::Float(b), Value::Integer(a)) => {
                *a as f64 == *b
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            (Value::Null, Value::Null) => true,
            (Value::Undefined, Value::Undefined) => true,
            _ => false,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Boolean(flag) => *flag,
            Value::Integer(number) => *number != 0,
            Value::Float(number) => *number != 0.0,
            Value::String(text) => !text.is_empty(),
            Value::Null | Value::Undefined => false,
            _ => true,
        }
    }

    pub fn from_json(json: &serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(flag) => Value::Boolean(*flag),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(integer) => Value::Integer(integer),
                None => Value::Float(number.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(text) => Value::String(text.clone()),
            serde_json::Value::Array(elements) => {
                let mut items = Vec::with_capacity(elements.len());
                for element in elements {
                    items.push(Value::from_json(element));
                }
                Value::array(items)
            }
            serde_json::Value::Object(fields) => {
                let mut entries = HashMap::with_capacity(fields.len());
                for (key, value) in fields {
                    entries.insert(key.clone(), Value::from_json(value));
                }
                Value::object(entries)
            }
        }
    }

    /// JSON rendering. `Undefined` and non-finite floats have no JSON
    /// counterpart and degrade to null.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Integer(number) => serde_json::Value::from(*number),
            Value::Float(number) => serde_json::Number::from_f64(*number)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(text) => serde_json::Value::String(text.clone()),
            Value::Boolean(flag) => serde_json::Value::Bool(*flag),
            Value::Array(items) => {
                let items_lock = items.lock().unwrap();
                let mut elements = Vec::with_capacity(items_lock.len());
                for item in items_lock.iter() {
                    elements.push(item.to_json());
                }
                serde_json::Value::Array(elements)
            }
            Value::Object(entries) => {
                let entries_lock = entries.lock().unwrap();
                let mut fields = serde_json::Map::new();
                for (key, value) in entries_lock.iter() {
                    fields.insert(key.clone(), value.to_json());
                }
                serde_json::Value::Object(fields)
            }
            Value::Null | Value::Undefined => serde_json::Value::Null,
        }
    }
}

/// Structural equality: scalars follow `strict_eq`, arrays and objects
/// compare by contents instead of handle identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => {
                if Arc::ptr_eq(a, b) {
                    return true;
                }
                let left = a.lock().unwrap();
                let right = b.lock().unwrap();
                *left == *right
            }
            (Value::Object(a), Value::Object(b)) => {
                if Arc::ptr_eq(a, b) {
                    return true;
                }
                let left = a.lock().unwrap();
                let right = b.lock().unwrap();
                *left == *right
            }
            _ => self.strict_eq(other),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(number) => write!(formatter, "{}", number),
            Value::Float(number) => {
                if number.fract() == 0.0 && number.is_finite() {
                    write!(formatter, "{:.1}", number)
                } else {
                    write!(formatter, "{}", number)
                }
            }
            Value::String(text) => write!(formatter, "{}", text),
            Value::Boolean(flag) => write!(formatter, "{}", flag),
            Value::Array(items) => {
                let items_lock = items.lock().unwrap();
                let rendered: Vec<String> =
                    items_lock.iter().map(|item| item.to_string()).collect();
                write!(formatter, "[{}]", rendered.join(", "))
            }
            Value::Object(entries) => {
                let entries_lock = entries.lock().unwrap();
                let rendered: Vec<String> = entries_lock
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, value))
                    .collect();
                write!(formatter, "{{{}}}", rendered.join(", "))
            }
            Value::Null => write!(formatter, "null"),
            Value::Undefined => write!(formatter, "undefined"),
        }
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Value {
        Value::Integer(number)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Value {
        Value::Float(number)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Value {
        Value::Boolean(flag)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Value {
        Value::String(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Value {
        Value::String(text)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Value {
        Value::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_equality_across_number_variants() {
        assert!(Value::Integer(2).strict_eq(&Value::Float(2.0)));
        assert!(Value::Float(2.0).strict_eq(&Value::Integer(2)));
        assert!(!Value::Integer(2).strict_eq(&Value::Float(2.5)));
    }

    #[test]
    fn nan_is_not_strict_equal_to_itself() {
        let nan = Value::Float(f64::NAN);
        assert!(!nan.strict_eq(&nan));
    }

    #[test]
    fn null_and_undefined_are_distinct() {
        assert!(Value::Null.strict_eq(&Value::Null));
        assert!(Value::Undefined.strict_eq(&Value::Undefined));
        assert!(!Value::Null.strict_eq(&Value::Undefined));
    }

    #[test]
    fn arrays_are_strict_equal_by_handle_only() {
        let original = Value::array(vec![Value::Integer(1)]);
        let same_handle = original.clone();
        let same_contents = Value::array(vec![Value::Integer(1)]);

        assert!(original.strict_eq(&same_handle));
        assert!(!original.strict_eq(&same_contents));
        assert_eq!(original, same_contents);
    }

    #[test]
    fn cross_type_pairs_are_never_strict_equal() {
        assert!(!Value::Integer(0).strict_eq(&Value::Boolean(false)));
        assert!(!Value::String("1".into()).strict_eq(&Value::Integer(1)));
        assert!(!Value::Integer(0).strict_eq(&Value::Null));
    }
}
