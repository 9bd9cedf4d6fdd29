//! # gutenscan
//!
//! Fetch a public-domain text and scan it for bounded phrase windows.
//!
//! The stock configuration downloads *Frankenstein* from Project
//! Gutenberg and finds every `for <1..=12 letter-only words> years`
//! phrase, writing a CSV of all matches and a markdown preview of the
//! first twenty.
//!
//! ## Pipeline
//!
//! ```text
//! ┌────────┐   ┌────────┐   ┌────────┐   ┌─────────────┐
//! │ fetch  │──▶│  trim  │──▶│  scan  │──▶│   report    │
//! │ HTTP/FS│   │ markers│   │ regex  │   │ CSV + MD    │
//! └────────┘   └────────┘   └────────┘   └─────────────┘
//! ```
//!
//! A single forward pass: the source text is downloaded (or read from a
//! local file), distributor boilerplate is optionally stripped, the
//! phrase pattern is scanned non-overlapping left-to-right, and the
//! matches are serialized. Each stage consumes the previous stage's
//! full output; any failure aborts the run.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration with built-in defaults |
//! | [`fetch`] | HTTP and local-file source text acquisition |
//! | [`trim`] | Gutenberg header/footer trimming |
//! | [`scan`] | Bounded phrase-window matcher |
//! | [`models`] | Match data type |
//! | [`report`] | CSV and markdown writers |
//! | [`pipeline`] | Stage orchestration |

pub mod config;
pub mod fetch;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod scan;
pub mod trim;
