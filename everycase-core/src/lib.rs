//! everycase core library: manifest lookups and the combination engine.
//!
//! - [`search`]: depth-first search over the manifest document
//! - [`domain`]: attribute value domains from type text
//! - [`combinations`]: Cartesian product of domains, pruning and transforms
//! - [`lookup`]: tag enumeration and attribute listing
//! - [`config`]: optional `everycase.yaml`
//! - [`error`]: [`CoreError`]

pub mod combinations;
pub mod config;
pub mod domain;
pub mod error;
pub mod lookup;
pub mod search;
pub mod types;

pub use combinations::{combinations, generate_combinations, CombinationOptions, Identity, Transform};
pub use config::{Config, ResolutionStep, TagConfig};
pub use domain::{collect_domains, extract_domain, AttributeFilter};
pub use error::CoreError;
pub use lookup::{attributes, tag_names};
pub use search::{find_node, find_tag};
pub use types::{AttributeDeclaration, AttributeDomains, Combination, ComponentDeclaration, Manifest};
