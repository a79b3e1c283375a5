use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A content field that is either plain text or a map of locale code to text.
///
/// Wraps the raw JSON value so deserialization never fails; whatever the
/// document holds is kept and interpreted at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Localized(Value);

impl Localized {
    pub fn resolve(&self, locale: &str) -> String {
        resolve(&self.0, locale)
    }

    /// Like [`resolve`](Self::resolve), but a bare number is shown as its
    /// decimal text. Stat figures are often written as plain numbers.
    pub fn display(&self, locale: &str) -> String {
        match &self.0 {
            Value::Number(n) => n.to_string(),
            value => resolve(value, locale),
        }
    }

}

impl From<&str> for Localized {
    fn from(value: &str) -> Self {
        Localized(Value::String(value.to_string()))
    }
}

impl From<Value> for Localized {
    fn from(value: Value) -> Self {
        Localized(value)
    }
}

/// Resolve a localized value for `locale`.
///
/// Strings come back unchanged. Maps try `locale`, then `en`, then the first
/// entry in insertion order. Anything else resolves to an empty string.
pub fn resolve(value: &Value, locale: &str) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get(locale)
            .and_then(text_of)
            .or_else(|| map.get("en").and_then(text_of))
            .or_else(|| map.values().next().and_then(text_of))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

// Empty strings count as missing so the next fallback gets a chance.
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Deserialize a list, dropping elements that don't fit `T`. A value that
/// isn't an array at all becomes an empty list.
pub(crate) fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Deserialize `T`, falling back to its default when the shape is wrong.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_string_is_returned_unchanged() {
        assert_eq!(resolve(&json!("Vernazza"), "fr"), "Vernazza");
        assert_eq!(resolve(&json!(""), "en"), "");
    }

    #[test]
    fn map_prefers_requested_locale() {
        let value = json!({"en": "Beaches", "fr": "Plages"});
        assert_eq!(resolve(&value, "fr"), "Plages");
        assert_eq!(resolve(&value, "en"), "Beaches");
    }

    #[test]
    fn map_falls_back_to_english_then_first_entry() {
        let value = json!({"it": "Spiagge", "en": "Beaches"});
        assert_eq!(resolve(&value, "fr"), "Beaches");

        let value = json!({"it": "Spiagge", "de": "Strände"});
        assert_eq!(resolve(&value, "fr"), "Spiagge");
    }

    #[test]
    fn empty_translation_falls_through() {
        let value = json!({"fr": "", "en": "Hiking"});
        assert_eq!(resolve(&value, "fr"), "Hiking");
    }

    #[test]
    fn everything_else_resolves_to_empty() {
        assert_eq!(resolve(&json!({}), "en"), "");
        assert_eq!(resolve(&Value::Null, "en"), "");
        assert_eq!(resolve(&json!(true), "en"), "");
        assert_eq!(resolve(&json!(["a"]), "en"), "");
        assert_eq!(resolve(&json!(42), "en"), "");
    }

    #[test]
    fn display_shows_bare_numbers() {
        assert_eq!(Localized::from(json!(42)).display("en"), "42");
        assert_eq!(Localized::from(json!({"en": 7})).display("en"), "7");
        assert_eq!(Localized::from(json!("12 km")).display("en"), "12 km");
        assert_eq!(Localized::default().display("en"), "");
    }

    #[test]
    fn localized_deserializes_from_anything() {
        let parsed: Vec<Localized> =
            serde_json::from_value(json!(["a", {"en": "b"}, null, 3, [1]])).unwrap();
        let resolved: Vec<String> = parsed.iter().map(|l| l.resolve("en")).collect();
        assert_eq!(resolved, vec!["a", "b", "", "", ""]);
    }
}
