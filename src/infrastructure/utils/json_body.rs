use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Deserializes a request body that must be a JSON object.
///
/// Derived `Deserialize` impls also accept a sequence and fill the fields by
/// position, so the body is read as a map first.
pub fn from_json_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    let object: Map<String, Value> = serde_json::from_slice(body)?;
    serde_json::from_value(Value::Object(object))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Form {
        name: String,
        email: String,
    }

    #[test]
    fn object_bodies_are_accepted() {
        let form: Form = from_json_object(br#"{"name": "Ada"}"#).unwrap();
        assert_eq!(form, Form { name: "Ada".into(), email: "".into() });
    }

    #[test]
    fn positional_array_bodies_are_rejected() {
        assert!(from_json_object::<Form>(br#"["Ada", "ada@example.com"]"#).is_err());
        assert!(from_json_object::<Form>(b"[]").is_err());
    }

    #[test]
    fn scalars_and_null_are_rejected() {
        for body in [&b"null"[..], b"\"Ada\"", b"42", b""] {
            assert!(from_json_object::<Form>(body).is_err());
        }
    }
}
