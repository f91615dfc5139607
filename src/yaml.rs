//! Manifest parsing into typed resources
//!
//! YAML is parsed with yaml-rust2 and converted to `serde_json::Value`, which
//! then deserializes into the target resource type.

use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};
use yaml_rust2::{Yaml, YamlLoader};

use crate::crd::Issuer;
use crate::Error;

/// Parse the first document of a YAML manifest into a JSON value
///
/// Empty input yields `Value::Null`.
pub fn parse_yaml(input: &str) -> Result<Value, Error> {
    let docs = YamlLoader::load_from_str(input).map_err(|e| Error::serialization(e.to_string()))?;
    docs.into_iter()
        .next()
        .map_or(Ok(Value::Null), to_json)
}

/// Parse a YAML manifest into a typed resource
pub fn from_yaml<T: DeserializeOwned>(kind: &str, input: &str) -> Result<T, Error> {
    let value = parse_yaml(input)?;
    serde_json::from_value(value).map_err(|e| Error::serialization_for(kind, e.to_string()))
}

/// Parse an Issuer manifest
pub fn parse_issuer(input: &str) -> Result<Issuer, Error> {
    from_yaml("Issuer", input)
}

fn to_json(yaml: Yaml) -> Result<Value, Error> {
    match yaml {
        Yaml::Array(items) => items
            .into_iter()
            .map(to_json)
            .collect::<Result<_, _>>()
            .map(Value::Array),
        Yaml::Hash(entries) => entries
            .into_iter()
            .map(|(k, v)| -> Result<(String, Value), Error> { Ok((map_key(k)?, to_json(v)?)) })
            .collect::<Result<Map<String, Value>, Error>>()
            .map(Value::Object),
        other => scalar(other),
    }
}

/// Convert a scalar node; aliases are resolved by the loader before we see them
fn scalar(yaml: Yaml) -> Result<Value, Error> {
    Ok(match yaml {
        Yaml::Null => Value::Null,
        Yaml::Boolean(b) => b.into(),
        Yaml::Integer(i) => i.into(),
        Yaml::String(s) => s.into(),
        Yaml::Real(raw) => raw
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| Error::serialization(format!("invalid float: {raw}")))?,
        _ => return Err(Error::serialization("unsupported YAML node")),
    })
}

/// Mapping keys become JSON object keys; only scalars are accepted
fn map_key(key: Yaml) -> Result<String, Error> {
    match key {
        Yaml::String(s) | Yaml::Real(s) => Ok(s),
        Yaml::Null => Ok("null".to_string()),
        other @ (Yaml::Integer(_) | Yaml::Boolean(_)) => Ok(scalar(other)?.to_string()),
        _ => Err(Error::serialization("mapping keys must be scalars")),
    }
}
