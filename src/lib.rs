//! Propcheck - missing-key checker for .properties i18n bundles
//!
//! Propcheck is a CLI tool and library for auditing a directory of
//! `.properties` localization files. It builds the union of all translation
//! keys across the bundle set and reports, per file, the keys that file
//! omits, together with the values other locales assign to each omitted key.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, report printing)
//! - `config`: Configuration file loading and parsing
//! - `core`: Bundle data model, key universe, locale filter, scan orchestration
//! - `issues`: Report type definitions
//! - `parsers`: `.properties` file parsing
//! - `rules`: Missing-key resolution

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod parsers;
pub mod rules;
