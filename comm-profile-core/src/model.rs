use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// One entry of a categorical dimension (a header-size bucket, an
/// authentication mode, ...).
///
/// Two items are equal only when both `id` and `name` match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeItem {
    pub id: i64,
    #[serde(rename = "itemName", alias = "name")]
    pub name: String,
}

impl AttributeItem {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Returns whether any item in `items` carries `name`, regardless of id.
pub fn contains_name(items: &[AttributeItem], name: &str) -> bool {
    items.iter().any(|item| item.name == name)
}

/// One categorical attribute axis of a communication profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    CommunicationType,
    CommunicationPattern,
    RequestType,
    HeaderSize,
    PayloadType,
    PayloadSize,
    SecurityType,
    AuthenticationType,
    QosType,
    IotLevel,
}

impl Dimension {
    pub const ALL: [Dimension; 10] = [
        Dimension::CommunicationType,
        Dimension::CommunicationPattern,
        Dimension::RequestType,
        Dimension::HeaderSize,
        Dimension::PayloadType,
        Dimension::PayloadSize,
        Dimension::SecurityType,
        Dimension::AuthenticationType,
        Dimension::QosType,
        Dimension::IotLevel,
    ];

    /// Field name used in profile documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::CommunicationType => "communicationType",
            Dimension::CommunicationPattern => "communicationPattern",
            Dimension::RequestType => "requestType",
            Dimension::HeaderSize => "headerSize",
            Dimension::PayloadType => "payloadType",
            Dimension::PayloadSize => "payloadSize",
            Dimension::SecurityType => "securityType",
            Dimension::AuthenticationType => "authenticationType",
            Dimension::QosType => "qosType",
            Dimension::IotLevel => "iotLevel",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Well-known protocol a profile customizes, or `NEW` for protocols that are
/// not derived from a known one.
///
/// Unrecognized tags are kept verbatim in [`BaseType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BaseType {
    Amqp,
    Stomp,
    Mqtt,
    Http,
    Coap,
    Xmpp,
    Dds,
    New,
    Other(String),
}

impl BaseType {
    pub const KNOWN: [BaseType; 7] = [
        BaseType::Amqp,
        BaseType::Stomp,
        BaseType::Mqtt,
        BaseType::Http,
        BaseType::Coap,
        BaseType::Xmpp,
        BaseType::Dds,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            BaseType::Amqp => "AMQP",
            BaseType::Stomp => "STOMP",
            BaseType::Mqtt => "MQTT",
            BaseType::Http => "HTTP",
            BaseType::Coap => "CoAP",
            BaseType::Xmpp => "XMPP",
            BaseType::Dds => "DDS",
            BaseType::New => "NEW",
            BaseType::Other(raw) => raw,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, BaseType::New)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, BaseType::New | BaseType::Other(_))
    }
}

impl From<String> for BaseType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "AMQP" => BaseType::Amqp,
            "STOMP" => BaseType::Stomp,
            "MQTT" => BaseType::Mqtt,
            "HTTP" => BaseType::Http,
            "CoAP" => BaseType::Coap,
            "XMPP" => BaseType::Xmpp,
            "DDS" => BaseType::Dds,
            "NEW" => BaseType::New,
            _ => BaseType::Other(raw),
        }
    }
}

impl From<&str> for BaseType {
    fn from(raw: &str) -> Self {
        BaseType::from(raw.to_string())
    }
}

impl From<BaseType> for String {
    fn from(base: BaseType) -> Self {
        match base {
            BaseType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A communication protocol configuration described by categorical dimensions.
///
/// Missing or `null` dimensions deserialize to empty sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationProfile {
    pub name: String,
    pub base_type: BaseType,
    #[serde(default, deserialize_with = "nullable_set")]
    pub communication_type: Vec<AttributeItem>,
    #[serde(default, deserialize_with = "nullable_set")]
    pub communication_pattern: Vec<AttributeItem>,
    #[serde(default, deserialize_with = "nullable_set")]
    pub request_type: Vec<AttributeItem>,
    #[serde(default, deserialize_with = "nullable_set")]
    pub header_size: Vec<AttributeItem>,
    #[serde(default, deserialize_with = "nullable_set")]
    pub payload_type: Vec<AttributeItem>,
    #[serde(default, deserialize_with = "nullable_set")]
    pub payload_size: Vec<AttributeItem>,
    #[serde(default, deserialize_with = "nullable_set")]
    pub security_type: Vec<AttributeItem>,
    #[serde(default, deserialize_with = "nullable_set")]
    pub authentication_type: Vec<AttributeItem>,
    #[serde(default, deserialize_with = "nullable_set")]
    pub qos_type: Vec<AttributeItem>,
    #[serde(default, deserialize_with = "nullable_set")]
    pub iot_level: Vec<AttributeItem>,
}

impl CommunicationProfile {
    /// Create a profile with every dimension empty.
    pub fn new(name: impl Into<String>, base_type: BaseType) -> Self {
        Self {
            name: name.into(),
            base_type,
            communication_type: Vec::new(),
            communication_pattern: Vec::new(),
            request_type: Vec::new(),
            header_size: Vec::new(),
            payload_type: Vec::new(),
            payload_size: Vec::new(),
            security_type: Vec::new(),
            authentication_type: Vec::new(),
            qos_type: Vec::new(),
            iot_level: Vec::new(),
        }
    }

    pub fn dimension(&self, dimension: Dimension) -> &[AttributeItem] {
        match dimension {
            Dimension::CommunicationType => &self.communication_type,
            Dimension::CommunicationPattern => &self.communication_pattern,
            Dimension::RequestType => &self.request_type,
            Dimension::HeaderSize => &self.header_size,
            Dimension::PayloadType => &self.payload_type,
            Dimension::PayloadSize => &self.payload_size,
            Dimension::SecurityType => &self.security_type,
            Dimension::AuthenticationType => &self.authentication_type,
            Dimension::QosType => &self.qos_type,
            Dimension::IotLevel => &self.iot_level,
        }
    }

    pub fn dimension_mut(&mut self, dimension: Dimension) -> &mut Vec<AttributeItem> {
        match dimension {
            Dimension::CommunicationType => &mut self.communication_type,
            Dimension::CommunicationPattern => &mut self.communication_pattern,
            Dimension::RequestType => &mut self.request_type,
            Dimension::HeaderSize => &mut self.header_size,
            Dimension::PayloadType => &mut self.payload_type,
            Dimension::PayloadSize => &mut self.payload_size,
            Dimension::SecurityType => &mut self.security_type,
            Dimension::AuthenticationType => &mut self.authentication_type,
            Dimension::QosType => &mut self.qos_type,
            Dimension::IotLevel => &mut self.iot_level,
        }
    }

    /// Builder-style helper that appends one item to a dimension.
    pub fn with_item(mut self, dimension: Dimension, id: i64, name: &str) -> Self {
        self.dimension_mut(dimension)
            .push(AttributeItem::new(id, name));
        self
    }
}

/// A deployment environment and the communication profiles it supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentProfile {
    pub name: String,
    #[serde(default, deserialize_with = "nullable_set")]
    pub supported_communications: Vec<AttributeItem>,
}

impl EnvironmentProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supported_communications: Vec::new(),
        }
    }

    /// Names of the referenced communication profiles, in document order.
    pub fn supported_names(&self) -> impl Iterator<Item = &str> {
        self.supported_communications
            .iter()
            .map(|item| item.name.as_str())
    }

    pub fn supports(&self, communication: &str) -> bool {
        contains_name(&self.supported_communications, communication)
    }
}

fn nullable_set<'de, D>(deserializer: D) -> Result<Vec<AttributeItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<AttributeItem>>::deserialize(deserializer)?.unwrap_or_default())
}
