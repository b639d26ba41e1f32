//! envdoctor - Validate `.env` files and generate deployment artifacts.
//!
//! envdoctor reads the text of a `.env` file and runs it through three
//! stages: a lossy parser, a rule-based validator that sorts findings into
//! errors, warnings and suggestions, and a generator that derives
//! `.env.example`, a deployment checklist, a `docker-compose.yml` stub and
//! a `vercel.json` stub.
//!
//! # Modules
//!
//! - [`parser`] - Line-oriented `.env` parsing
//! - [`lint`] - Validation rules, the rule registry, and report formatters
//! - [`generate`] - Artifact generation
//! - [`pipeline`] - The caller boundary that runs all three stages
//! - [`config`] - `.envdoctor.yml` loading, parsing, and validation
//! - [`samples`] - Bundled sample `.env` files
//! - [`cli`] - Command-line interface and argument parsing
//! - [`ui`] - Terminal output
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use envdoctor::generate::generate;
//! use envdoctor::lint::validate;
//! use envdoctor::parser::parse;
//!
//! let doc = parse("NODE_ENV=production\nPORT=70000\n");
//! let results = validate(&doc);
//! assert_eq!(results.errors.len(), 1);
//!
//! let outputs = generate(&doc, &results);
//! assert!(outputs.deployment_checklist.contains("## Issues to Address"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod lint;
pub mod parser;
pub mod pipeline;
pub mod samples;
pub mod ui;

pub use error::{EnvDoctorError, Result};
