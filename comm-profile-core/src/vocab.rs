//! Item names the comparison rules and scoring react to.
//!
//! Profiles may carry any item names; only these are given special meaning.

pub const REQUEST_SYNC: &str = "Blocking (Sync.)";
pub const REQUEST_ASYNC: &str = "Not Blocking (Async.)";

pub const HEADER_SMALL: &str = "Small";
pub const HEADER_MEDIUM: &str = "Medium";
pub const HEADER_LARGE: &str = "Large";

pub const PAYLOAD_TEXT: &str = "Text";
pub const PAYLOAD_BINARY: &str = "Binary Array";
pub const PAYLOAD_MIME: &str = "Various MIME Types";

pub const SECURITY_DTLS: &str = "DTLS";
pub const SECURITY_TLS: &str = "TLS";

pub const AUTH_SIMPLE: &str = "Simple (Login/Password)";
pub const AUTH_SASL: &str = "SASL";

pub const QOS_TCP: &str = "TCP";
pub const QOS_THREE_LEVEL: &str = "3-level QOS";
pub const QOS_COMPLEX: &str = "Complex";
