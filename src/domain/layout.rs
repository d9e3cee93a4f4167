//! Declarative layout documents.
//!
//! A layout describes one outgoing message. Explicit `rows` are assigned to the
//! tree wholesale first, then top-level `buttons` go through the placement
//! policy in document order.

use serde::Deserialize;
use tracing::warn;

use crate::domain::builder::{ButtonBuilder, RowBuilder, TreeBuilder};
use crate::domain::components::{ButtonStyle, Component, ComponentTree, Emote};
use crate::domain::error::ConfigResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutDocument {
    /// Message text sent alongside the components.
    pub content: Option<String>,
    pub rows: Option<Vec<RowLayout>>,
    pub buttons: Vec<ButtonLayout>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RowLayout {
    pub buttons: Vec<ButtonLayout>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonLayout {
    pub label: Option<String>,
    pub style: Option<ButtonStyle>,
    pub emoji: Option<Emote>,
    pub custom_id: Option<String>,
    pub url: Option<String>,
    pub disabled: bool,
    /// Requested row; only used for top-level buttons, ignored with a warning inside `rows`.
    pub row: isize,
}

impl ButtonLayout {
    pub fn to_builder(&self, default_style: ButtonStyle) -> ConfigResult<ButtonBuilder> {
        let mut builder = ButtonBuilder::new();
        builder
            .with_style(self.style.unwrap_or(default_style))
            .with_disabled(self.disabled);
        if let Some(label) = &self.label {
            builder.with_label(label.as_str())?;
        }
        if let Some(emoji) = &self.emoji {
            builder.with_emote(emoji.clone());
        }
        if let Some(custom_id) = &self.custom_id {
            builder.with_custom_id(custom_id.as_str())?;
        }
        if let Some(url) = &self.url {
            builder.with_url(url.as_str());
        }
        Ok(builder)
    }
}

impl RowLayout {
    pub fn to_builder(&self, default_style: ButtonStyle) -> ConfigResult<RowBuilder> {
        for (index, button) in self.buttons.iter().enumerate() {
            if button.row != 0 {
                warn!(
                    index,
                    row = button.row,
                    "row ignored for button inside an explicit row"
                );
            }
        }
        let components = self
            .buttons
            .iter()
            .map(|b| b.to_builder(default_style).map(|b| Component::from(b.build())))
            .collect::<ConfigResult<Vec<_>>>()?;
        let mut row = RowBuilder::new();
        row.with_components(components)?;
        Ok(row)
    }
}

impl LayoutDocument {
    pub fn to_tree_builder(&self, default_style: ButtonStyle) -> ConfigResult<TreeBuilder> {
        let mut tree = TreeBuilder::new();
        if let Some(rows) = &self.rows {
            let rows = rows
                .iter()
                .map(|r| r.to_builder(default_style))
                .collect::<ConfigResult<Vec<_>>>()?;
            tree.with_rows(rows)?;
        }
        for button in &self.buttons {
            tree.attach(button.to_builder(default_style)?, button.row)?;
        }
        Ok(tree)
    }

    pub fn build(&self, default_style: ButtonStyle) -> ConfigResult<ComponentTree> {
        self.to_tree_builder(default_style)?.build()
    }
}
