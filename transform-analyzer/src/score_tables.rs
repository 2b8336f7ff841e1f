//! Base transformation costs.
//!
//! Two asymmetric lookup tables provide the starting points of every candidate
//! score:
//!
//! - the **known-type** table, keyed by the `(old, new)` base protocol pair,
//!   used when both profiles derive from a well-known protocol;
//! - the **novel-type** table, keyed by the `(old, new)` communication
//!   topology pair, used when either profile has base type `NEW`.
//!
//! Both tables ship as embedded TOML (`tables/*.toml`) and fall back to the
//! same values compiled in when the embedded data cannot be read. A table file
//! can replace either table at runtime; tables never change after loading.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use comm_profile_core::BaseType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cost of a known-type pair that has no table entry (including identity).
pub const KNOWN_DEFAULT_POINTS: u32 = 0;
/// Cost of a novel-type pair that has no table entry.
pub const NOVEL_DEFAULT_POINTS: u32 = 150;

/// Abstract communication topology of a profile not based on a known protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Topology {
    #[serde(rename = "Client/Server (One-directional)")]
    ClientServerOneWay,
    #[serde(rename = "Client/Server (Bi-directional)")]
    ClientServerTwoWay,
    #[serde(rename = "Brokered Messaging")]
    Brokered,
    #[serde(rename = "Brokerless Messaging")]
    Brokerless,
    #[serde(rename = "Data-Centric Brokered Messaging")]
    DataCentricBrokered,
    #[serde(rename = "Data-Centric Brokerless Messaging")]
    DataCentricBrokerless,
}

impl Topology {
    pub const ALL: [Topology; 6] = [
        Topology::ClientServerOneWay,
        Topology::ClientServerTwoWay,
        Topology::Brokered,
        Topology::Brokerless,
        Topology::DataCentricBrokered,
        Topology::DataCentricBrokerless,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Topology::ClientServerOneWay => "Client/Server (One-directional)",
            Topology::ClientServerTwoWay => "Client/Server (Bi-directional)",
            Topology::Brokered => "Brokered Messaging",
            Topology::Brokerless => "Brokerless Messaging",
            Topology::DataCentricBrokered => "Data-Centric Brokered Messaging",
            Topology::DataCentricBrokerless => "Data-Centric Brokerless Messaging",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KnownCost {
    pub from: BaseType,
    pub to: BaseType,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NovelCost {
    pub from: Topology,
    pub to: Topology,
    pub points: u32,
}

#[derive(Debug, Default, Deserialize)]
struct TableFile {
    #[serde(default)]
    known: Vec<KnownCost>,
    #[serde(default)]
    novel: Vec<NovelCost>,
}

/// Errors returned when loading score table files.
#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("failed to read score tables {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse score tables {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("score tables {path} contain no [[known]] or [[novel]] rows")]
    Empty { path: String },
    #[error("score tables {path}: known-type row {from} -> {to} must use known protocols")]
    NotKnownProtocol {
        path: String,
        from: String,
        to: String,
    },
}

/// Immutable base-cost lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTables {
    known: BTreeMap<(BaseType, BaseType), u32>,
    novel: BTreeMap<(Topology, Topology), u32>,
    source: String,
}

impl ScoreTables {
    fn from_rows(known: Vec<KnownCost>, novel: Vec<NovelCost>, source: String) -> Self {
        Self {
            known: known
                .into_iter()
                .map(|row| ((row.from, row.to), row.points))
                .collect(),
            novel: novel
                .into_iter()
                .map(|row| ((row.from, row.to), row.points))
                .collect(),
            source,
        }
    }

    /// Base cost between two profiles derived from known protocols.
    ///
    /// Unlisted pairs, identity pairs and unrecognized tags cost
    /// [`KNOWN_DEFAULT_POINTS`].
    pub fn known_points(&self, from: &BaseType, to: &BaseType) -> u32 {
        self.known
            .get(&(from.clone(), to.clone()))
            .copied()
            .unwrap_or(KNOWN_DEFAULT_POINTS)
    }

    /// Base cost between two topologies, named as in profile documents.
    ///
    /// Unlisted pairs and unrecognized names cost [`NOVEL_DEFAULT_POINTS`].
    pub fn novel_points(&self, from: &str, to: &str) -> u32 {
        match (Topology::from_name(from), Topology::from_name(to)) {
            (Some(from), Some(to)) => self
                .novel
                .get(&(from, to))
                .copied()
                .unwrap_or(NOVEL_DEFAULT_POINTS),
            _ => NOVEL_DEFAULT_POINTS,
        }
    }

    /// Where the tables came from: `embedded`, `fallback` or `file:<path>`.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn known_len(&self) -> usize {
        self.known.len()
    }

    pub fn novel_len(&self) -> usize {
        self.novel.len()
    }
}

/// Built-in tables.
pub fn default_score_tables() -> ScoreTables {
    let known = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tables/known_types.toml"
    ));
    let novel = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tables/novel_types.toml"
    ));

    let known_rows = parse_table_file(known, "embedded known-type table".to_string())
        .map(|file| file.known)
        .unwrap_or_default();
    let novel_rows = parse_table_file(novel, "embedded novel-type table".to_string())
        .map(|file| file.novel)
        .unwrap_or_default();

    if known_rows.is_empty() || novel_rows.is_empty() {
        return ScoreTables::from_rows(
            fallback_known_costs(),
            fallback_novel_costs(),
            "fallback".to_string(),
        );
    }
    ScoreTables::from_rows(known_rows, novel_rows, "embedded".to_string())
}

/// Load tables from a TOML file holding `[[known]]` and/or `[[novel]]` rows.
///
/// A table without rows in the file keeps its built-in values.
pub fn load_score_tables(path: &Path) -> Result<ScoreTables, TableLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| TableLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let label = path.display().to_string();
    let file = parse_table_file(&raw, label.clone())?;
    if file.known.is_empty() && file.novel.is_empty() {
        return Err(TableLoadError::Empty { path: label });
    }
    if let Some(row) = file
        .known
        .iter()
        .find(|row| !row.from.is_known() || !row.to.is_known())
    {
        return Err(TableLoadError::NotKnownProtocol {
            path: label,
            from: row.from.to_string(),
            to: row.to.to_string(),
        });
    }

    let defaults = default_score_tables();
    let mut tables = ScoreTables::from_rows(file.known, file.novel, format!("file:{label}"));
    if tables.known.is_empty() {
        tables.known = defaults.known;
    }
    if tables.novel.is_empty() {
        tables.novel = defaults.novel;
    }
    Ok(tables)
}

fn parse_table_file(raw: &str, path: String) -> Result<TableFile, TableLoadError> {
    toml::from_str(raw).map_err(|source| TableLoadError::Parse { path, source })
}

fn fallback_known_costs() -> Vec<KnownCost> {
    const ROWS: &[(&str, &str, u32)] = &[
        ("AMQP", "STOMP", 275),
        ("AMQP", "MQTT", 275),
        ("AMQP", "HTTP", 275),
        ("AMQP", "CoAP", 275),
        ("AMQP", "XMPP", 450),
        ("AMQP", "DDS", 750),
        ("STOMP", "AMQP", 200),
        ("STOMP", "MQTT", 200),
        ("STOMP", "HTTP", 200),
        ("STOMP", "CoAP", 200),
        ("STOMP", "XMPP", 450),
        ("STOMP", "DDS", 750),
        ("MQTT", "AMQP", 175),
        ("MQTT", "STOMP", 175),
        ("MQTT", "HTTP", 225),
        ("MQTT", "CoAP", 225),
        ("MQTT", "XMPP", 450),
        ("MQTT", "DDS", 750),
        ("HTTP", "AMQP", 200),
        ("HTTP", "STOMP", 200),
        ("HTTP", "MQTT", 250),
        ("HTTP", "CoAP", 100),
        ("HTTP", "XMPP", 450),
        ("HTTP", "DDS", 750),
        ("CoAP", "AMQP", 200),
        ("CoAP", "STOMP", 200),
        ("CoAP", "MQTT", 250),
        ("CoAP", "HTTP", 100),
        ("CoAP", "XMPP", 450),
        ("CoAP", "DDS", 750),
        ("XMPP", "AMQP", 450),
        ("XMPP", "STOMP", 450),
        ("XMPP", "MQTT", 450),
        ("XMPP", "HTTP", 450),
        ("XMPP", "CoAP", 450),
        ("XMPP", "DDS", 450),
        ("DDS", "AMQP", 750),
        ("DDS", "STOMP", 750),
        ("DDS", "MQTT", 750),
        ("DDS", "HTTP", 750),
        ("DDS", "CoAP", 750),
        ("DDS", "XMPP", 450),
    ];
    ROWS.iter()
        .map(|&(from, to, points)| KnownCost {
            from: BaseType::from(from),
            to: BaseType::from(to),
            points,
        })
        .collect()
}

fn fallback_novel_costs() -> Vec<NovelCost> {
    use Topology::*;

    const ROWS: &[(Topology, Topology, u32)] = &[
        (ClientServerOneWay, ClientServerTwoWay, 200),
        (ClientServerOneWay, Brokered, 300),
        (ClientServerOneWay, Brokerless, 300),
        (ClientServerOneWay, DataCentricBrokered, 500),
        (ClientServerOneWay, DataCentricBrokerless, 500),
        (ClientServerTwoWay, ClientServerOneWay, 300),
        (ClientServerTwoWay, Brokered, 300),
        (ClientServerTwoWay, Brokerless, 300),
        (ClientServerTwoWay, DataCentricBrokered, 500),
        (ClientServerTwoWay, DataCentricBrokerless, 500),
        (Brokered, ClientServerOneWay, 300),
        (Brokered, ClientServerTwoWay, 300),
        (Brokered, Brokerless, 300),
        (Brokered, DataCentricBrokered, 500),
        (Brokered, DataCentricBrokerless, 500),
        (Brokerless, ClientServerOneWay, 300),
        (Brokerless, ClientServerTwoWay, 300),
        (Brokerless, Brokered, 300),
        (Brokerless, DataCentricBrokered, 500),
        (Brokerless, DataCentricBrokerless, 500),
        (DataCentricBrokered, ClientServerOneWay, 500),
        (DataCentricBrokered, ClientServerTwoWay, 500),
        (DataCentricBrokered, Brokered, 500),
        (DataCentricBrokered, Brokerless, 500),
        (DataCentricBrokered, DataCentricBrokerless, 300),
        (DataCentricBrokerless, ClientServerOneWay, 500),
        (DataCentricBrokerless, ClientServerTwoWay, 500),
        (DataCentricBrokerless, Brokered, 500),
        (DataCentricBrokerless, Brokerless, 500),
        (DataCentricBrokerless, DataCentricBrokered, 300),
    ];
    ROWS.iter()
        .map(|&(from, to, points)| NovelCost { from, to, points })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use comm_profile_core::BaseType;
    use tempfile::tempdir;

    use super::{
        default_score_tables, fallback_known_costs, fallback_novel_costs, load_score_tables,
        ScoreTables, TableLoadError, Topology, KNOWN_DEFAULT_POINTS, NOVEL_DEFAULT_POINTS,
    };

    #[test]
    fn embedded_tables_parse() {
        let tables = default_score_tables();
        assert_eq!(tables.source(), "embedded");
        assert_eq!(tables.known_len(), 42);
        assert_eq!(tables.novel_len(), 30);
    }

    #[test]
    fn embedded_tables_match_fallback() {
        let fallback = ScoreTables::from_rows(
            fallback_known_costs(),
            fallback_novel_costs(),
            "embedded".to_string(),
        );
        assert_eq!(default_score_tables(), fallback);
    }

    #[test]
    fn known_table_is_asymmetric() {
        let tables = default_score_tables();
        assert_eq!(tables.known_points(&BaseType::Amqp, &BaseType::Stomp), 275);
        assert_eq!(tables.known_points(&BaseType::Stomp, &BaseType::Amqp), 200);
        assert_eq!(tables.known_points(&BaseType::Http, &BaseType::Coap), 100);
        assert_eq!(tables.known_points(&BaseType::Xmpp, &BaseType::Dds), 450);
        assert_eq!(tables.known_points(&BaseType::Dds, &BaseType::Xmpp), 450);
        assert_eq!(tables.known_points(&BaseType::Dds, &BaseType::Mqtt), 750);
    }

    #[test]
    fn known_table_defaults_to_zero() {
        let tables = default_score_tables();
        assert_eq!(
            tables.known_points(&BaseType::Mqtt, &BaseType::Mqtt),
            KNOWN_DEFAULT_POINTS
        );
        assert_eq!(
            tables.known_points(&BaseType::from("ZigBee"), &BaseType::Http),
            KNOWN_DEFAULT_POINTS
        );
    }

    #[test]
    fn novel_table_defaults_to_unknown_cost_floor() {
        let tables = default_score_tables();
        assert_eq!(
            tables.novel_points("Brokered Messaging", "Data-Centric Brokered Messaging"),
            500
        );
        assert_eq!(
            tables.novel_points(
                "Client/Server (One-directional)",
                "Client/Server (Bi-directional)"
            ),
            200
        );
        assert_eq!(
            tables.novel_points(
                "Client/Server (Bi-directional)",
                "Client/Server (One-directional)"
            ),
            300
        );
        assert_eq!(
            tables.novel_points("Brokered Messaging", "Brokered Messaging"),
            NOVEL_DEFAULT_POINTS
        );
        assert_eq!(
            tables.novel_points("Token Ring", "Brokered Messaging"),
            NOVEL_DEFAULT_POINTS
        );
    }

    #[test]
    fn topology_names_round_trip() {
        for topology in Topology::ALL {
            assert_eq!(Topology::from_name(topology.as_str()), Some(topology));
        }
    }

    #[test]
    fn file_override_replaces_only_listed_table() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("tables.toml");
        fs::write(
            &path,
            r#"
[[known]]
from = "HTTP"
to = "CoAP"
points = 42
"#,
        )
        .expect("write tables");

        let tables = load_score_tables(&path).expect("load tables");
        assert!(tables.source().starts_with("file:"));
        assert_eq!(tables.known_points(&BaseType::Http, &BaseType::Coap), 42);
        assert_eq!(tables.known_points(&BaseType::Http, &BaseType::Mqtt), 0);
        assert_eq!(tables.novel_len(), 30);
    }

    #[test]
    fn rejects_empty_and_broken_files() {
        let dir = tempdir().expect("tempdir");
        let empty = dir.path().join("empty.toml");
        fs::write(&empty, "# nothing\n").expect("write empty");
        assert!(matches!(
            load_score_tables(&empty),
            Err(TableLoadError::Empty { .. })
        ));

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "[[known]\nfrom =").expect("write broken");
        assert!(matches!(
            load_score_tables(&broken),
            Err(TableLoadError::Parse { .. })
        ));
    }

    #[test]
    fn rejects_new_in_known_table() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("tables.toml");
        fs::write(
            &path,
            "[[known]]\nfrom = \"NEW\"\nto = \"HTTP\"\npoints = 1\n",
        )
        .expect("write tables");
        assert!(matches!(
            load_score_tables(&path),
            Err(TableLoadError::NotKnownProtocol { .. })
        ));
    }
}
