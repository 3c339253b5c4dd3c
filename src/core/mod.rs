//! Translation catalog engine.
//!
//! ## Module Structure
//!
//! - `key_path`: Dotted key splitting and joining
//! - `node`: Tagged catalog tree (`Leaf` / `Branch`) and recursive key sorting
//! - `flatten`: Nested tree to dotted-key mapping
//! - `persist`: File reads, backups and canonical JSON writes
//! - `store`: Multi-language store (missing keys, sort, add)
//! - `scanner`: Source tree scan for unused keys

pub mod flatten;
pub mod key_path;
pub mod node;
pub mod persist;
pub mod scanner;
pub mod store;

pub use flatten::{FlatKeySet, flatten, flatten_tree};
pub use node::{Node, Tree};
pub use scanner::{UsageReport, UsageScanner};
pub use store::{CatalogStore, MissingEntry, SortOutcome, add_translation};
