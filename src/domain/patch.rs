//! Presence-aware deserialization for partial updates.
//!
//! Update DTOs must distinguish "field absent" (leave unchanged) from
//! "field set to null" (clear a nullable value). A plain `Option<T>` folds
//! both into `None`; a double `Option` keeps them apart when paired with
//! `#[serde(default, deserialize_with = "deserialize_some")]`:
//!
//! - field omitted        -> `None`
//! - `"field": null`      -> `Some(None)`
//! - `"field": value`     -> `Some(Some(value))`

use serde::{Deserialize, Deserializer};

pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "super::deserialize_some")]
        code: Option<Option<i32>>,
    }

    #[test]
    fn absent_field_is_outer_none() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.code, None);
    }

    #[test]
    fn null_field_is_some_none() {
        let patch: Patch = serde_json::from_str(r#"{"code": null}"#).unwrap();
        assert_eq!(patch.code, Some(None));
    }

    #[test]
    fn value_field_is_some_some() {
        let patch: Patch = serde_json::from_str(r#"{"code": 7}"#).unwrap();
        assert_eq!(patch.code, Some(Some(7)));
    }
}
