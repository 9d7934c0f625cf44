// SPDX-License-Identifier: GPL-3.0-only
use clap::{ArgAction, Command, arg, command, value_parser};
use smackmaster_shared::Tone;

use crate::config::{DEFAULT_BASE_URL, DEFAULT_ROAST_ENDPOINT};

#[must_use]
pub fn build() -> Command {
    command!()
    .about("🔥 SmackMaster - roast any comment in the tone of your choice")
    .long_about(
        "Sends a comment and a tone to a roast generation service and prints the roast it comes back with."
    )
    .subcommand_required(true)
    .arg_required_else_help(true)
    .subcommand(
        Command::new("roast")
            .about("🎤 Roast a comment")
            .long_about("Submit a comment with the selected tone and wait for the generated roast.")
            .arg(
                arg!(<comment> "The comment to roast")
                .required(true)
            )
            .arg(
                arg!(-t --tone <tone> "Tone of the roast (defaults to the configured tone)")
                .required(false)
                .ignore_case(true)
                .value_parser(value_parser!(Tone))
            )
            .arg(
                arg!(-c --copy "Copy the roast and print the copied text")
                .action(ArgAction::SetTrue)
            )
    )
    .subcommand(
        Command::new("tones")
            .about("🎭 List available tones")
    )
    .subcommand(
        Command::new("config")
            .about("⚙️ Show the effective configuration")
            .long_about("Print the configuration after command-line overrides, optionally saving it.")
            .arg(
                arg!(--save "Persist the effective configuration")
                .action(ArgAction::SetTrue)
            )
            .arg(
                arg!(--"default-tone" <tone> "Tone used when roast is called without --tone")
                .required(false)
                .ignore_case(true)
                .value_parser(value_parser!(Tone))
            )
    )
    .arg(
        arg!(--"base-url" <url> "Base URL of the roast service")
        .default_value(DEFAULT_BASE_URL)
        .required(false)
        .global(true)
    )
    .arg(
        arg!(--endpoint <path> "Roast endpoint appended to the base URL")
        .default_value(DEFAULT_ROAST_ENDPOINT)
        .required(false)
        .global(true)
    )
    .arg(
        arg!(-v --verbose "Enable verbose logging")
        .action(ArgAction::SetTrue)
        .global(true)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        build().debug_assert();
    }

    #[test]
    fn test_roast_parses_tone_case_insensitively() {
        let matches = build()
            .try_get_matches_from(["smackmaster", "roast", "nice try", "--tone", "RUDE"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "roast");
        assert_eq!(sub.get_one::<String>("comment").unwrap(), "nice try");
        assert_eq!(sub.get_one::<Tone>("tone"), Some(&Tone::Rude));
        assert!(!sub.get_flag("copy"));
    }

    #[test]
    fn test_unknown_tone_is_rejected() {
        assert!(
            build()
                .try_get_matches_from(["smackmaster", "roast", "x", "--tone", "savage"])
                .is_err()
        );
    }

    #[test]
    fn test_global_overrides_after_subcommand() {
        let matches = build()
            .try_get_matches_from([
                "smackmaster",
                "roast",
                "x",
                "--base-url",
                "https://roast.example.com",
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(
            sub.get_one::<String>("base-url").unwrap(),
            "https://roast.example.com"
        );
        assert_eq!(
            sub.value_source("base-url"),
            Some(clap::parser::ValueSource::CommandLine)
        );
        assert_eq!(
            sub.value_source("endpoint"),
            Some(clap::parser::ValueSource::DefaultValue)
        );
    }
}
