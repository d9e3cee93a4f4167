//! Domain layer: component values, builders and the placement policy
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod components;
pub mod error;
pub mod layout;
pub mod message;
pub mod placement;

pub use builder::{ButtonBuilder, ButtonOptions, RowBuilder, TreeBuilder};
pub use components::{Button, ButtonStyle, Component, ComponentTree, Emote, Row};
pub use error::{ConfigResult, ConfigurationError};
pub use layout::{ButtonLayout, LayoutDocument, RowLayout};
pub use message::OutgoingMessage;
pub use placement::{resolve_placement, Placement};

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
///
/// Leaves the input untouched if a variable cannot be resolved.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
