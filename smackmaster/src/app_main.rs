// SPDX-License-Identifier: GPL-3.0-only

//! Command-line entry point
//!
//! Stands in for a UI: it forwards intents to the controller and renders the
//! state snapshots it publishes.

use crate::cli;
use crate::config::SmackConfig;
use crate::controller::{AppState, RoastController};
use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use clap::parser::ValueSource;
use log::{debug, info, warn};
use smackmaster_shared::logger::{self, BOLD_WHITE, CYAN};
use smackmaster_shared::{RoastClient, Tone};
use std::path::Path;

/// Main entry point
///
/// # Errors
///
/// Returns an error if the roast fails or the configuration cannot be saved.
pub async fn run() -> Result<()> {
    let matches = cli::build().get_matches();
    let Some((name, sub)) = matches.subcommand() else {
        bail!("No command given");
    };

    logger::init(sub.get_flag("verbose"));
    let config = effective_config(sub);

    match name {
        "roast" => handle_roast_command(sub, &config).await,
        "tones" => {
            handle_tones_command().await;
            Ok(())
        }
        "config" => {
            let rendered = handle_config_command(sub, config, &SmackConfig::config_path())?;
            print!("{rendered}");
            Ok(())
        }
        other => bail!("Unknown command: {other}"),
    }
}

/// Saved configuration with explicit command-line values on top
fn effective_config(matches: &ArgMatches) -> SmackConfig {
    let mut config = SmackConfig::load();

    if matches.value_source("base-url") == Some(ValueSource::CommandLine) {
        if let Some(base_url) = matches.get_one::<String>("base-url") {
            config.api.base_url.clone_from(base_url);
        }
    }
    if matches.value_source("endpoint") == Some(ValueSource::CommandLine) {
        if let Some(endpoint) = matches.get_one::<String>("endpoint") {
            config.api.roast_endpoint.clone_from(endpoint);
        }
    }

    config
}

/// Handle the roast subcommand - submit and wait for the outcome
async fn handle_roast_command(matches: &ArgMatches, config: &SmackConfig) -> Result<()> {
    let comment = matches
        .get_one::<String>("comment")
        .context("Missing comment")?;
    let tone = matches
        .get_one::<Tone>("tone")
        .copied()
        .unwrap_or(config.ui.default_tone);
    let copy = matches.get_flag("copy");
    let target = config.target();

    info!("Roasting with tone {} via {}", tone.label(), target.url());

    let client = RoastClient::new().context("Failed to create HTTP client")?;
    let handle = RoastController::spawn(client, |text: &str| {
        debug!("Clipboard received {} chars", text.len());
        println!("{text}");
    });

    handle.update_comment(comment.as_str())?;
    handle.roast_with_tone(tone, target)?;

    let state = tokio::select! {
        state = handle.wait_until_idle() => state?,
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted, cancelling roast");
            handle.shutdown().await;
            bail!("Roast cancelled");
        }
    };

    if let Some(warning) = &state.warning_message {
        handle.shutdown().await;
        bail!("{warning}");
    }

    render(&state).await;

    if copy {
        handle.copy()?;
        let state = handle.current_state().await?;
        if let Some(toast) = &state.toast_message {
            logger::copied(toast).await;
        }
    }

    handle.shutdown().await;
    Ok(())
}

async fn render(state: &AppState) {
    logger::roast(&state.roast).await;
    if let Some(toast) = &state.toast_message {
        logger::toast(toast).await;
    }
}

/// Handle the tones subcommand - list machine names and labels
async fn handle_tones_command() {
    for tone in Tone::all_tones() {
        let line = format!(
            "{}  {}",
            logger::paint(BOLD_WHITE, &format!("{:<8}", tone.machine_name())),
            logger::paint(CYAN, tone.label())
        );
        logger::print_color("", &line).await;
    }
}

/// Handle the config subcommand - render the effective configuration,
/// writing it to `config_path` only when `--save` is given
fn handle_config_command(
    matches: &ArgMatches,
    mut config: SmackConfig,
    config_path: &Path,
) -> Result<String> {
    if let Some(tone) = matches.get_one::<Tone>("default-tone") {
        config.ui.default_tone = *tone;
    }
    if matches.get_flag("save") {
        config
            .save_to(config_path)
            .map_err(|e| anyhow::anyhow!("Failed to save config: {e}"))?;
        info!("Saved config to {}", config_path.display());
    }

    let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
    Ok(format!("# {}\n{rendered}", config_path.display()))
}
