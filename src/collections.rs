//! Collection utilities over dynamic values.
//!
//! Every operation here walks its input with explicit indexed loops rather
//! than iterator adapters, so each function's traversal is its own. Functions
//! that produce a sequence always allocate a fresh array handle; arguments
//! are never mutated. A non-array sequence argument behaves as an empty
//! sequence.

use crate::types::Value;

fn sequence_items(sequence: &Value) -> Vec<Value> {
    match sequence.items() {
        Some(items) => items,
        None => Vec::new(),
    }
}

/// Returns the argument unchanged. Array and object handles keep their
/// identity.
pub fn identity(value: Value) -> Value {
    value
}

/// First element of the sequence, or with `count` the first
/// `min(count, len)` elements as a new array.
pub fn first(sequence: &Value, count: Option<usize>) -> Value {
    let items = sequence_items(sequence);
    match count {
        Some(wanted) => {
            let take = wanted.min(items.len());
            let mut taken = Vec::with_capacity(take);
            let mut index = 0;
            while index < take {
                taken.push(items[index].clone());
                index += 1;
            }
            Value::array(taken)
        }
        None => match items.first() {
            Some(element) => element.clone(),
            None => Value::Undefined,
        },
    }
}

/// Last element of the sequence, or with `count` the last `min(count, len)`
/// elements as a new array, in original order.
pub fn last(sequence: &Value, count: Option<usize>) -> Value {
    let items = sequence_items(sequence);
    match count {
        Some(wanted) => {
            let take = wanted.min(items.len());
            let mut taken = Vec::with_capacity(take);
            let mut index = items.len() - take;
            while index < items.len() {
                taken.push(items[index].clone());
                index += 1;
            }
            Value::array(taken)
        }
        None => match items.last() {
            Some(element) => element.clone(),
            None => Value::Undefined,
        },
    }
}

/// Invokes `callback(element, index_or_key, collection)` once per element of
/// an array or per entry of an object. Array iteration re-reads the length
/// every step, so elements appended by the callback are visited too. Objects
/// iterate in unspecified order. Any other value is returned unchanged;
/// otherwise the return value is `Undefined` and carries no meaning.
pub fn each<F>(collection: &Value, mut callback: F) -> Value
where
    F: FnMut(&Value, &Value, &Value),
{
    match collection {
        Value::Array(items) => {
            let mut index = 0;
            loop {
                // Lock only long enough to copy the element out, so the
                // callback is free to touch the same array.
                let element = {
                    let items_lock = items.lock().unwrap();
                    match items_lock.get(index) {
                        Some(element) => element.clone(),
                        None => break,
                    }
                };
                callback(&element, &Value::Integer(index as i64), collection);
                index += 1;
            }
            Value::Undefined
        }
        Value::Object(entries) => {
            let mut snapshot: Vec<(String, Value)> = Vec::new();
            {
                let entries_lock = entries.lock().unwrap();
                for (key, value) in entries_lock.iter() {
                    snapshot.push((key.clone(), value.clone()));
                }
            }
            for (key, value) in snapshot {
                callback(&value, &Value::String(key), collection);
            }
            Value::Undefined
        }
        other => other.clone(),
    }
}

/// Index of the first element strictly equal to `target`, or -1.
pub fn index_of(sequence: &Value, target: &Value) -> i64 {
    let items = sequence_items(sequence);
    let mut index = 0;
    while index < items.len() {
        if items[index].strict_eq(target) {
            return index as i64;
        }
        index += 1;
    }
    -1
}

/// New array of the elements whose predicate result is exactly
/// `Boolean(true)`. A truthy result of any other type excludes the element.
pub fn filter<F>(sequence: &Value, mut predicate: F) -> Value
where
    F: FnMut(&Value) -> Value,
{
    let items = sequence_items(sequence);
    let mut kept = Vec::new();
    let mut index = 0;
    while index < items.len() {
        if let Value::Boolean(true) = predicate(&items[index]) {
            kept.push(items[index].clone());
        }
        index += 1;
    }
    Value::array(kept)
}

/// New array of the elements whose predicate result is exactly
/// `Boolean(false)`. Not the complement of `filter`: a falsy result of any
/// other type excludes the element here too.
pub fn reject<F>(sequence: &Value, mut predicate: F) -> Value
where
    F: FnMut(&Value) -> Value,
{
    let items = sequence_items(sequence);
    let mut kept = Vec::new();
    let mut index = 0;
    while index < items.len() {
        if let Value::Boolean(false) = predicate(&items[index]) {
            kept.push(items[index].clone());
        }
        index += 1;
    }
    Value::array(kept)
}

/// New array keeping the first occurrence of each distinct element, in
/// original order. Distinctness is strict equality of `iterator(element)`
/// values; without an iterator the element itself is the key. The iterator
/// is invoked once per element and its key is reused for later comparisons,
/// so it must be pure: an iterator whose output varies between calls on the
/// same element makes distinctness unspecified.
///
/// `is_sorted` is accepted for calling-convention compatibility and reserved
/// for a future fast path; the result never depends on it.
pub fn uniq(
    sequence: &Value,
    _is_sorted: bool,
    mut iterator: Option<&mut dyn FnMut(&Value) -> Value>,
) -> Value {
    let items = sequence_items(sequence);
    let mut accepted = Vec::new();
    let mut accepted_keys: Vec<Value> = Vec::new();
    let mut index = 0;
    while index < items.len() {
        let key = match iterator.as_mut() {
            Some(extract) => extract(&items[index]),
            None => items[index].clone(),
        };
        let mut already_seen = false;
        let mut scan = 0;
        while scan < accepted_keys.len() {
            if accepted_keys[scan].strict_eq(&key) {
                already_seen = true;
            }
            scan += 1;
        }
        if !already_seen {
            accepted_keys.push(key);
            accepted.push(items[index].clone());
        }
        index += 1;
    }
    Value::array(accepted)
}

/// New array of `callback(element)` for each element, same length and order.
/// The callback sees only the element, never its index.
pub fn map<F>(sequence: &Value, mut callback: F) -> Value
where
    F: FnMut(&Value) -> Value,
{
    let items = sequence_items(sequence);
    let mut mapped = Vec::with_capacity(items.len());
    let mut index = 0;
    while index < items.len() {
        mapped.push(callback(&items[index]));
        index += 1;
    }
    Value::array(mapped)
}

/// New array of the `key` property of each record. Records missing the key,
/// and non-object elements, contribute `Undefined`.
pub fn pluck(sequence: &Value, key: &str) -> Value {
    let items = sequence_items(sequence);
    let mut plucked = Vec::with_capacity(items.len());
    let mut index = 0;
    while index < items.len() {
        plucked.push(items[index].get(key));
        index += 1;
    }
    Value::array(plucked)
}

/// Folds the sequence into a single value.
///
/// With `initial` (any value counts as provided, including `Integer(0)`) the
/// callback runs once per element starting from index 0. Without it, the
/// first element seeds the accumulator and the callback starts at index 1.
/// An empty sequence without an initial value folds to `Undefined`.
pub fn reduce<F>(sequence: &Value, mut callback: F, initial: Option<Value>) -> Value
where
    F: FnMut(Value, &Value) -> Value,
{
    let items = sequence_items(sequence);
    let mut index = 0;
    let mut accumulator = match initial {
        Some(seed) => seed,
        None => {
            index = 1;
            match items.first() {
                Some(element) => element.clone(),
                None => Value::Undefined,
            }
        }
    };
    while index < items.len() {
        accumulator = callback(accumulator, &items[index]);
        index += 1;
    }
    accumulator
}
