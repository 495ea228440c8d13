//! Validation of the `POST /n-new` body.

use crate::error::AppError;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::{Number, Value};
use std::fmt;

/// The only key accepted in an ingestion payload.
pub const N_NEW_KEY: &str = "n-new";

/// Every entry of a JSON object in document order. Unlike `serde_json::Map`,
/// repeated keys are kept so they can be counted.
struct Entries(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = Entries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Entries, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, Value>()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Parse an ingestion body. It must be a JSON object with exactly one entry,
/// keyed `n-new`, whose value is a JSON number. Strings that look numeric,
/// booleans and null are all rejected.
pub fn parse_n_new(body: &[u8]) -> Result<Number, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest("empty body".into()));
    }
    let Entries(mut entries) = serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("invalid JSON: {}", e)))?;
    if entries.len() != 1 {
        return Err(AppError::BadRequest(format!(
            "expected exactly one entry, got {}",
            entries.len()
        )));
    }
    let (key, value) = entries.remove(0);
    if key != N_NEW_KEY {
        return Err(AppError::BadRequest(format!("unexpected key: {}", key)));
    }
    match value {
        Value::Number(n) => Ok(n),
        other => Err(AppError::BadRequest(format!("{} is not a number: {}", N_NEW_KEY, other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejects(body: &str) {
        let res = parse_n_new(body.as_bytes());
        assert!(
            matches!(res, Err(AppError::BadRequest(_))),
            "expected rejection for {:?}, got {:?}",
            body,
            res
        );
    }

    #[test]
    fn accepts_numbers() {
        assert_eq!(parse_n_new(br#"{"n-new": 5}"#).unwrap(), Number::from(5));
        assert_eq!(parse_n_new(br#"{"n-new": 0}"#).unwrap(), Number::from(0));
        assert_eq!(
            parse_n_new(br#"{"n-new": -432154321.9876}"#).unwrap().as_f64(),
            Some(-432154321.9876)
        );
        assert_eq!(parse_n_new(br#" {"n-new":34000} "#).unwrap(), Number::from(34000));
    }

    #[test]
    fn rejects_non_numeric_values() {
        rejects(r#"{"n-new": "one"}"#);
        rejects(r#"{"n-new": "4"}"#);
        rejects(r#"{"n-new": "34_000"}"#);
        rejects(r#"{"n-new": true}"#);
        rejects(r#"{"n-new": null}"#);
        rejects(r#"{"n-new": [4]}"#);
        rejects(r#"{"n-new": {"v": 4}}"#);
    }

    #[test]
    fn rejects_wrong_shape() {
        rejects("");
        rejects("   ");
        rejects("{}");
        rejects("null");
        rejects("4");
        rejects("[4]");
        rejects(r#"{"n-query": 4}"#);
        rejects(r#"{"N-NEW": 23}"#);
        rejects(r#"{"n_new": 34}"#);
        rejects(r#"{"n-new": 3, "n-query": 4}"#);
    }

    #[test]
    fn rejects_duplicate_keys() {
        rejects(r#"{"n-new": 4, "n-new": 4}"#);
    }

    #[test]
    fn rejects_malformed_input() {
        rejects("'n-new':4,'n-new':4");
        rejects("<n-new>4</n-new>");
        rejects(r#"{"n-new": 4"#);
        rejects(r#"{"n-new": 4} trailing"#);
    }
}
