// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the avp-search command-line interface.
//!
//! Four subcommands: `index` to emit the search index the site ships, `search`
//! to query it (optionally replaying modal key presses), `toc` to list a
//! markdown page's anchors, and `inspect` to examine a site definition.

pub mod display;
pub mod replay;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Site definition used when `--config` is not given.
pub const DEFAULT_SITE: &str = "data/site.json";

#[derive(Parser)]
#[command(
    name = "avp-search",
    about = "Search index and navigation tooling for the Agent Validator Protocol docs",
    version
)]
pub struct Cli {
    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the search index and write it as content-hashed JSON
    Index {
        /// Site definition (navigation, validators, search settings)
        #[arg(short, long, default_value = DEFAULT_SITE)]
        config: PathBuf,

        /// Output directory for the index file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Filter the index the way the search modal does
    Search {
        /// Search query (empty string previews the first entries)
        query: String,

        /// Site definition
        #[arg(short, long, default_value = DEFAULT_SITE)]
        config: PathBuf,

        /// Maximum number of rows to print
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Replay modal keys after typing the query, comma separated
        ///
        /// Accepts `up`, `down`, `enter` and `esc`. Prints where Enter would
        /// navigate, or that the modal stayed open.
        #[arg(long, value_delimiter = ',')]
        keys: Vec<String>,
    },

    /// List the anchored headings of a markdown page
    Toc {
        /// Path to a markdown file
        file: PathBuf,
    },

    /// Show the navigation tree, index size and validator catalogue
    Inspect {
        /// Site definition
        #[arg(short, long, default_value = DEFAULT_SITE)]
        config: PathBuf,

        /// Current page, used to expand the sidebar and mark active tabs
        #[arg(long, default_value = "/")]
        path: String,
    },
}
