// SPDX-License-Identifier: GPL-3.0-only
use tokio::io::{AsyncWriteExt, stdout};

// ANSI color codes
pub const RED: &str = "\x1b[0;31m";
pub const CYAN: &str = "\x1b[0;36m";
pub const NC: &str = "\x1b[0m"; // No Color

// ANSI bold colors
pub const BOLD_WHITE: &str = "\x1b[1;37m";

// Line prefixes
const PREFIX_ROAST: &str = "\x1b[1;35mROAST   \x1b[0m";
const PREFIX_TOAST: &str = "\x1b[1;36mTOAST   \x1b[0m";
const PREFIX_COPY: &str = "\x1b[1;32mCOPIED  \x1b[0m";

/// Initialize the `log` backend - `RUST_LOG` wins, otherwise Info (Debug when verbose)
pub fn init(verbose: bool) {
    let result = if std::env::var("RUST_LOG").is_ok() {
        env_logger::try_init()
    } else {
        let log_level = if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::from_default_env()
            .filter_level(log_level)
            .try_init()
    };
    if let Err(e) = result {
        eprintln!("Logger already initialized: {e}");
    }
}

#[must_use]
pub fn paint(color: &str, message: &str) -> String {
    format!("{color}{message}{NC}")
}

// Function to print messages in color
pub async fn print_color(color: &str, message: &str) {
    let parsed_message = format!("{}\n", paint(color, message));
    let mut stdout = stdout();
    if let Err(e) = stdout.write_all(parsed_message.as_bytes()).await {
        println!("Failed to write to stdout. Defaulting to println!(). Error: {e}");
        println!("{parsed_message}");
    }
    if let Err(e) = stdout.flush().await {
        println!("Failed to flush stdout. Error: {e}");
    }
}

pub async fn roast(message: &str) {
    print_color(PREFIX_ROAST, message).await;
}

pub async fn toast(message: &str) {
    print_color(PREFIX_TOAST, message).await;
}

pub async fn copied(message: &str) {
    print_color(PREFIX_COPY, message).await;
}
