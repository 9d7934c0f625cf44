// SPDX-License-Identifier: GPL-3.0-only
pub mod client;
pub mod error;
pub mod models;
pub mod utils;

// Re-export commonly used types for convenience
pub use client::{RoastClient, RoastService};
pub use error::RoastError;
pub use models::protocol::{RoastRequest, RoastResponse, RoastTarget};
pub use models::tone::Tone;
pub use utils::logger;
