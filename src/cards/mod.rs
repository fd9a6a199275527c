//! Card system: definitions, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CardKey`: Catalog key of a definition (what save data stores)
//! - `CardType`: Action, Echo or Recursor
//! - `CardDefinition`: Static card data with its effect
//! - `CardInstance`: One copy of a definition dealt into a match
//! - `CardCatalog`: Definition lookup, including legacy aliases

pub mod definition;
pub mod instance;
pub mod registry;
pub mod standard;

pub use definition::{CardDefinition, CardKey, CardType};
pub use instance::CardInstance;
pub use registry::CardCatalog;
pub use standard::{DEFAULT_DECK_KEYS, LEGACY_ALIASES};
