//! Message component builder.
//!
//! Builds a bounded tree of rows holding buttons, validating cardinality and
//! field limits as the tree is configured, then freezes it into an immutable
//! [`domain::ComponentTree`] ready for a transport.
//!
//! ```
//! use msgcomp::domain::{ButtonOptions, ButtonStyle, TreeBuilder};
//!
//! let mut builder = TreeBuilder::new();
//! builder.add_button(
//!     "Accept",
//!     ButtonOptions {
//!         style: ButtonStyle::Success,
//!         custom_id: Some("invite:accept".into()),
//!         ..ButtonOptions::default()
//!     },
//! )?;
//! let tree = builder.build()?;
//! assert_eq!(tree.component_count(), 1);
//! # Ok::<(), msgcomp::domain::ConfigurationError>(())
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod util;
