use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::schema::Domain;

/// Parse one protocol domain from JSON text.
pub fn domain_from_str(src: &str) -> Result<Domain> {
    from_str_with_path(src)
}

pub fn domain_from_slice(bytes: &[u8]) -> Result<Domain> {
    from_slice_with_path(bytes)
}

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(into_schema_error)
}

pub fn from_slice_with_path<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize::<_, T>(de).map_err(into_schema_error)
}

fn into_schema_error(err: serde_path_to_error::Error<serde_json::Error>) -> Error {
    let path = err.path().to_string();
    Error::Schema { path, message: err.into_inner().to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_a_minimal_domain() {
        let domain = domain_from_str(r#"{ "domain": "Page", "description": "Page actions." }"#).unwrap();
        assert_eq!(domain.name, "Page");
        assert_eq!(domain.description, "Page actions.");
    }

    #[test]
    fn error_reports_json_path() {
        let src = r#"{ "domain": "Page", "commands": [ { "name": "reload", "parameters": 3 } ] }"#;
        let err = domain_from_slice(src.as_bytes()).unwrap_err();
        match err {
            Error::Schema { path, .. } => assert_eq!(path, "commands[0].parameters"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_names_pass_through_empty() {
        let src = r#"{
            "types": [ { "type": "object", "properties": [ { "type": "string" } ] } ],
            "commands": [ { "description": "Nameless." } ],
            "events": [ {} ]
        }"#;
        let domain = domain_from_str(src).unwrap();
        assert_eq!(domain.name, "");
        assert_eq!(domain.types[0].id, "");
        assert_eq!(domain.types[0].properties[0].name, "");
        assert_eq!(domain.commands[0].name, "");
        assert_eq!(domain.events[0].name, "");
    }
}
