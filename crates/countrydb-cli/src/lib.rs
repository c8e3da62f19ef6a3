//! countrydb-cli
//! =============
//!
//! Command-line interface for the `countrydb-core` country records.
//!
//! The binary (`countrydb`) is the primary deliverable. The library target
//! holds the interactive menu and the output formatting so they can be
//! tested without a terminal.
//!
//! Basic usage:
//!
//! ```text
//! countrydb --help
//! countrydb stats
//! countrydb search ar
//! countrydb --json range population 1000000 50000000
//! countrydb                # interactive menu
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod render;
pub mod shell;

pub use render::OutputFormat;
pub use shell::Shell;
