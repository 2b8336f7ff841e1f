use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::model::{CommunicationProfile, EnvironmentProfile};

/// Errors that can occur while reading profile documents.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input was not valid JSON or did not match the profile layout.
    #[error("failed to parse profile JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to read input file.
    #[error("failed to read profile file: {0}")]
    Io(#[from] std::io::Error),
}

/// Either kind of profile document, as detected from its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileDocument {
    Communication(CommunicationProfile),
    Environment(EnvironmentProfile),
}

impl ProfileDocument {
    pub fn name(&self) -> &str {
        match self {
            ProfileDocument::Communication(profile) => &profile.name,
            ProfileDocument::Environment(env) => &env.name,
        }
    }
}

/// Parse a communication profile from JSON bytes.
pub fn parse_communication(json: &[u8]) -> Result<CommunicationProfile, ParseError> {
    from_slice(json)
}

/// Parse an environment profile from JSON bytes.
pub fn parse_environment(json: &[u8]) -> Result<EnvironmentProfile, ParseError> {
    from_slice(json)
}

/// Parse either document kind.
///
/// Documents carrying `supportedCommunications` are environments; everything
/// else is read as a communication profile.
pub fn parse_document(json: &[u8]) -> Result<ProfileDocument, ParseError> {
    let value: serde_json::Value = serde_json::from_slice(json)?;
    if value.get("supportedCommunications").is_some() {
        Ok(ProfileDocument::Environment(serde_json::from_value(value)?))
    } else {
        Ok(ProfileDocument::Communication(serde_json::from_value(value)?))
    }
}

/// Parse a communication profile from a JSON file.
pub fn parse_communication_file(path: &Path) -> Result<CommunicationProfile, ParseError> {
    let bytes = fs::read(path)?;
    parse_communication(&bytes)
}

/// Parse an environment profile from a JSON file.
pub fn parse_environment_file(path: &Path) -> Result<EnvironmentProfile, ParseError> {
    let bytes = fs::read(path)?;
    parse_environment(&bytes)
}

/// Parse either document kind from a JSON file.
pub fn parse_document_file(path: &Path) -> Result<ProfileDocument, ParseError> {
    let bytes = fs::read(path)?;
    parse_document(&bytes)
}

fn from_slice<T: DeserializeOwned>(json: &[u8]) -> Result<T, ParseError> {
    Ok(serde_json::from_slice(json)?)
}

#[cfg(test)]
mod tests {
    use super::{parse_communication, parse_document, parse_environment, ProfileDocument};
    use crate::model::{AttributeItem, BaseType};

    #[test]
    fn missing_and_null_dimensions_are_empty() {
        let profile = parse_communication(
            br#"{"name":"bare","baseType":"MQTT","qosType":null}"#,
        )
        .expect("parse");
        assert_eq!(profile.base_type, BaseType::Mqtt);
        assert!(profile.qos_type.is_empty());
        assert!(profile.communication_type.is_empty());
    }

    #[test]
    fn accepts_item_name_and_name_fields() {
        let env = parse_environment(
            br#"{"name":"edge","supportedCommunications":[{"id":1,"itemName":"a"},{"id":2,"name":"b"}]}"#,
        )
        .expect("parse");
        assert_eq!(
            env.supported_communications,
            vec![AttributeItem::new(1, "a"), AttributeItem::new(2, "b")]
        );
    }

    #[test]
    fn detects_document_kind() {
        let doc = parse_document(br#"{"name":"edge","supportedCommunications":[]}"#).expect("env");
        assert!(matches!(doc, ProfileDocument::Environment(_)));
        let doc = parse_document(br#"{"name":"c","baseType":"NEW"}"#).expect("comm");
        assert!(matches!(doc, ProfileDocument::Communication(_)));
        assert_eq!(doc.name(), "c");
    }

    #[test]
    fn rejects_profile_without_base_type() {
        assert!(parse_communication(br#"{"name":"c"}"#).is_err());
    }
}
