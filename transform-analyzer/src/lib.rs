//! Communication protocol transformation analysis.
//!
//! Given the communication profile used in one deployment environment and the
//! profiles another environment supports, this crate decides whether the
//! communication has to be transformed, how hard each replacement would be,
//! which replacement to suggest and which capabilities it would lose.
//!
//! # Architecture
//!
//! ## Analysis
//!
//! - [`score_tables`]: Base costs between known protocols and between topologies
//! - [`scoring`]: Per-candidate points, losses and calculation trace
//! - [`loss`]: Capability losses derived from dimension differences
//! - [`difficulty`]: Points to difficulty bucket and feasibility
//! - [`rank`]: Suggested candidate selection
//! - [`engine`]: Requirement detection and outcome assembly
//! - [`outcome`]: Analysis result and its ordered JSON form
//!
//! ## Data access and reporting
//!
//! - [`catalog`]: Read-only profile data directory
//! - [`report`]: Colored terminal rendering
//!
//! Attribute-set comparison, the profile model and JSON parsing live in
//! `comm_profile_core`.
//!
//! # Example
//!
//! ```no_run
//! use transform_analyzer::catalog::Catalog;
//! use transform_analyzer::engine::{analyze, AnalysisRequest};
//! use transform_analyzer::score_tables::default_score_tables;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::open("fixtures/json_data")?;
//! let from = catalog.environment("cloud")?;
//! let to = catalog.environment("edge")?;
//! let old = catalog.communication("http-rest")?;
//! let candidates = catalog.supported_communications(&to)?;
//!
//! let request = AnalysisRequest {
//!     old_environment: &from,
//!     new_environment: &to,
//!     old_communication: &old,
//!     candidates: &candidates,
//! };
//! let outcome = analyze(&request, &default_score_tables())?;
//! println!("{}", serde_json::to_string(&outcome)?);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod difficulty;
pub mod engine;
pub mod loss;
pub mod outcome;
pub mod rank;
pub mod report;
pub mod score_tables;
pub mod scoring;

pub use engine::{analyze, analyze_with_candidates, Analysis, AnalysisRequest};
pub use outcome::AnalysisOutcome;
pub use score_tables::{default_score_tables, load_score_tables, ScoreTables};
pub use scoring::{AnalysisError, ScoredCandidate};
