//! i18n-manager - JSON translation catalog manager
//!
//! A CLI tool and library for keeping per-language JSON translation files in
//! shape: it reports keys missing from some languages, sorts catalogs into a
//! canonical layout, finds keys no source file mentions, adds new keys, and
//! resolves single strings with light templating.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog engine (key paths, flattening, store, usage scanner)
//! - `error`: Typed errors for the library layer
//! - `resolve`: Single-key lookup with templating and embedded fallbacks

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod resolve;
