//! # dlt - DeepL Translation CLI
//!
//! `dlt` translates plain text or the textual portions of a markdown file
//! from a source language to a target language, via the hosted DeepL
//! free-tier API or a user-supplied proxy endpoint.
//!
//! Markdown is split into fenced code blocks and single text lines; only the
//! text lines are sent to the backend. Code blocks, blank lines, and bare
//! image references pass through verbatim, so the output file mirrors the
//! structure of the input.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate inline text with the free-tier API
//! dlt translate --text "hello world!" -s EN -t ZH
//!
//! # Translate through a proxy endpoint
//! dlt translate --text "hello world!" -s EN -t ZH -p http://127.0.0.1/v2/translate
//!
//! # Translate a markdown file (writes <file>.deepl.md by default)
//! dlt translate --file ./notes.md -s EN -t ZH
//! ```
//!
//! ## Configuration
//!
//! Defaults live in `~/.config/dlt/config.toml`:
//!
//! ```toml
//! [dlt]
//! source_lang = "EN"
//! target_lang = "ZH"
//! auth_key = "your-deepl-key"
//! proxy_api = "http://127.0.0.1/v2/translate"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and resolution.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading for file-mode translation.
pub mod input;

/// Markdown segmentation into code and text blocks.
pub mod markdown;

/// Global output configuration (quiet mode, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Append-only output sink for translated chunks.
pub mod sink;

/// Translation backends and the document translation pipeline.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
