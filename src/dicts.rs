//! JSON object helpers: case-insensitive lookup and key path listing.

use std::collections::HashSet;

use serde_json::{Map, Value};

/// Look up `key` in lowercase, then in uppercase.
pub fn get<'m>(map: &'m Map<String, Value>, key: &str) -> Option<&'m Value> {
    map.get(&key.to_lowercase())
        .or_else(|| map.get(&key.to_uppercase()))
}

/// Like [`get`], with a fallback value.
pub fn get_or_default(map: &Map<String, Value>, key: &str, default: Value) -> Value {
    get(map, key).cloned().unwrap_or(default)
}

/// Return a copy of `items` with `item` inserted at `index` (clamped to the length).
pub fn insert_at<T: Clone>(items: &[T], index: usize, item: T) -> Vec<T> {
    let index = index.min(items.len());
    let mut out = Vec::with_capacity(items.len() + 1);
    out.extend_from_slice(&items[..index]);
    out.push(item);
    out.extend_from_slice(&items[index..]);
    out
}

/// Remove duplicates, keeping the first occurrence of each string.
pub fn remove_duplicates(items: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(item.as_str()))
        .cloned()
        .collect()
}

/// List every dotted key path of a JSON value.
///
/// Keys are visited in insertion order. Containers list their own path
/// before their children. Objects inside an array contribute their keys
/// under the array's path, without an index.
/// Array indices only appear when the value itself (or an array nested
/// directly in an array) is iterated.
pub fn keys(value: &Value) -> Vec<String> {
    let mut out = Vec::new();
    collect_keys("", value, &mut out);
    remove_duplicates(&out)
}

fn collect_keys(parent: &str, value: &Value, out: &mut Vec<String>) {
    let entries: Vec<(String, &Value)> = match value {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => return,
    };

    for (key, child) in entries {
        let path = if parent.is_empty() {
            key
        } else {
            format!("{parent}.{key}")
        };
        out.push(path.clone());

        match child {
            Value::Object(_) => collect_keys(&path, child, out),
            Value::Array(items) => {
                for element in items {
                    if element.is_object() || element.is_array() {
                        collect_keys(&path, element, out);
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_case_insensitive() {
        let data = json!({"name": "Ada", "ID": 7});
        let map = data.as_object().unwrap();
        assert_eq!(get(map, "NAME"), Some(&json!("Ada")));
        assert_eq!(get(map, "id"), Some(&json!(7)));
        assert_eq!(get(map, "Missing"), None);
        assert_eq!(get_or_default(map, "missing", json!(0)), json!(0));
    }

    #[test]
    fn test_insert_at() {
        assert_eq!(insert_at(&[1, 2, 4], 2, 3), vec![1, 2, 3, 4]);
        assert_eq!(insert_at(&[1, 2], 10, 3), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_duplicates() {
        let items: Vec<String> = ["b", "a", "b", "c", "a"].iter().map(|s| s.to_string()).collect();
        assert_eq!(remove_duplicates(&items), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_keys_nested() {
        let data = json!({
            "user": {"name": "Ada", "address": {"city": "İzmir"}},
            "tags": ["x", "y"],
            "orders": [{"id": 1}, {"id": 2, "total": 5}]
        });
        assert_eq!(
            keys(&data),
            vec![
                "user",
                "user.name",
                "user.address",
                "user.address.city",
                "tags",
                "orders",
                "orders.id",
                "orders.total",
            ]
        );
    }
}
