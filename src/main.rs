// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use avp_search::build::run_build;
use avp_search::nav::{tab_states, SidebarState};
use avp_search::{
    build_index_with, extract_toc, filter_refs, validators_by_category, Key, SiteConfig,
};

mod cli;
use cli::display::{
    result_row, row, section_bot, section_mid, section_top, themed, toc_row, validator_row, CYAN,
    GRAY, GREEN, YELLOW,
};
use cli::replay::{parse_replay_key, replay_keys, ReplayOutcome};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&cli.log_level) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Index { config, output } => run_index(&config, &output),
        Commands::Search {
            query,
            config,
            limit,
            keys,
        } => run_search(&config, &query, limit, &keys),
        Commands::Toc { file } => run_toc(&file),
        Commands::Inspect { config, path } => run_inspect(&config, &path),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for piping.
fn init_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("avp_search={}", level)))
        .with_context(|| format!("invalid log level: {}", level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    Ok(())
}

fn load_site(path: &Path) -> Result<SiteConfig> {
    SiteConfig::load(path).with_context(|| format!("failed to load site from {}", path.display()))
}

fn run_index(config: &Path, output: &Path) -> Result<()> {
    let site = load_site(config)?;
    let built = run_build(&site, output)?;
    eprintln!(
        "✅ {} entries │ {} bytes",
        built.entry_count, built.bytes
    );
    println!("{}", built.path.display());
    Ok(())
}

fn run_search(config: &Path, query: &str, limit: usize, keys: &[String]) -> Result<()> {
    let site = load_site(config)?;
    let index = build_index_with(&site.navigation, &site.validators, &site.search);

    if keys.is_empty() {
        let results = filter_refs(&index, query, site.search.preview_limit);
        section_top(&format!("{} results", results.len()));
        if results.is_empty() {
            row(&format!(" No results found for \"{}\"", query));
        }
        for entry in results.iter().take(limit) {
            result_row(entry, false);
        }
        section_bot();
        return Ok(());
    }

    let keys: Vec<Key> = keys
        .iter()
        .map(|k| parse_replay_key(k))
        .collect::<Result<_>>()?;
    let replay = replay_keys(index, &site.search, query, &keys);

    section_top(&format!("{} results", replay.results.len()));
    if let Some(message) = &replay.empty_message {
        row(&format!(" {}", message));
    }
    for (i, entry) in replay.results.iter().enumerate().take(limit) {
        result_row(entry, Some(i) == replay.selected);
    }
    section_mid("outcome");
    let outcome = match &replay.outcome {
        ReplayOutcome::Navigate(href) => format!("navigate → {}", href),
        ReplayOutcome::Dismissed => "closed".to_string(),
        ReplayOutcome::StillOpen => "modal still open".to_string(),
    };
    row(&format!(" {}", themed(GREEN, &[], &outcome)));
    section_bot();
    Ok(())
}

fn run_toc(file: &Path) -> Result<()> {
    let markdown =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    let items = extract_toc(&markdown);

    section_top("On this page");
    if items.is_empty() {
        row(" (no anchored headings)");
    }
    for item in &items {
        toc_row(item);
    }
    section_bot();
    Ok(())
}

fn run_inspect(config: &Path, path: &str) -> Result<()> {
    let site = load_site(config)?;
    let index = build_index_with(&site.navigation, &site.validators, &site.search);

    section_top("Navigation");
    let tabs: Vec<String> = tab_states(&site.top_nav_tabs, path)
        .into_iter()
        .map(|(tab, active)| {
            if active {
                themed(GREEN, &[], &format!("[{}]", tab.title))
            } else {
                tab.title.clone()
            }
        })
        .collect();
    if !tabs.is_empty() {
        row(&format!(" tabs: {}", tabs.join("  ")));
    }

    let sidebar = SidebarState::new(&site.navigation, path);
    for sidebar_row in sidebar.visible_rows(&site.navigation) {
        let indent = "  ".repeat(sidebar_row.depth);
        let label = if sidebar_row.is_group() {
            let arrow = if sidebar_row.expanded { "▾" } else { "▸" };
            themed(CYAN, &[], &format!("{} {}", arrow, sidebar_row.node.title))
        } else if sidebar_row.active {
            themed(GREEN, &[], &format!("● {}", sidebar_row.node.title))
        } else {
            format!("  {}", sidebar_row.node.title)
        };
        row(&format!(" {}{}", indent, label));
    }

    section_mid("Index");
    let nav_entries = index.len() - site.validators.len();
    row(&format!(
        " {} entries ({} navigation, {} validators), preview {}",
        index.len(),
        nav_entries,
        site.validators.len(),
        site.search.preview_limit
    ));
    row(&format!(
        " scroll spy root margin: {}",
        themed(GRAY, &[], &site.search.scroll_spy.root_margin())
    ));

    for (category, validators) in validators_by_category(&site.validators, &site.search.fallback_tag)
    {
        section_mid(&format!("Validators: {}", category));
        for validator in validators {
            validator_row(validator);
        }
    }
    if site.validators.is_empty() {
        row(&themed(YELLOW, &[], " no validators defined"));
    }
    section_bot();
    Ok(())
}
