//! Mutable builders that freeze into [`ComponentTree`] values.
//!
//! Every setter validates its own input immediately; a rejected call leaves
//! the builder unchanged so the caller can correct the input and retry.

use tracing::{debug, warn};

use crate::domain::components::{Button, ButtonStyle, Component, ComponentTree, Emote, Row};
use crate::domain::error::{ConfigResult, ConfigurationError};
use crate::domain::placement::{resolve_placement, Placement};

/// Optional fields for [`TreeBuilder::add_button`].
///
/// `Default` gives a primary, enabled button without emote, id or url, aimed at row 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonOptions {
    pub style: ButtonStyle,
    pub emote: Option<Emote>,
    pub custom_id: Option<String>,
    pub url: Option<String>,
    pub disabled: bool,
    pub row: isize,
}

/// Accumulates rows and routes buttons into them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeBuilder {
    rows: Option<Vec<RowBuilder>>,
}

impl TreeBuilder {
    pub const MAX_ROW_COUNT: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Rows added so far, in insertion order.
    pub fn rows(&self) -> &[RowBuilder] {
        self.rows.as_deref().unwrap_or(&[])
    }

    /// Replace all rows at once. At most [`Self::MAX_ROW_COUNT`] rows are accepted.
    pub fn with_rows(&mut self, rows: Vec<RowBuilder>) -> ConfigResult<&mut Self> {
        if rows.len() > Self::MAX_ROW_COUNT {
            return Err(ConfigurationError::TooManyRows {
                found: rows.len(),
                limit: Self::MAX_ROW_COUNT,
            });
        }
        self.rows = Some(rows);
        Ok(self)
    }

    /// Build a labeled button from `label` and `options`, then place it at `options.row`.
    ///
    /// Buttons without a label (emote only) are configured on a [`ButtonBuilder`]
    /// and placed with [`Self::attach`].
    pub fn add_button(
        &mut self,
        label: impl Into<String>,
        options: ButtonOptions,
    ) -> ConfigResult<&mut Self> {
        let ButtonOptions {
            style,
            emote,
            custom_id,
            url,
            disabled,
            row,
        } = options;

        let mut button = ButtonBuilder::new();
        button
            .with_label(label)?
            .with_style(style)
            .with_disabled(disabled);
        if let Some(emote) = emote {
            button.with_emote(emote);
        }
        if let Some(custom_id) = custom_id {
            button.with_custom_id(custom_id)?;
        }
        if let Some(url) = url {
            button.with_url(url);
        }

        self.attach(button, row)
    }

    /// Freeze `button` and place it according to [`resolve_placement`].
    pub fn attach(&mut self, button: ButtonBuilder, row: isize) -> ConfigResult<&mut Self> {
        let component = Component::from(button.build());
        let rows = self.rows.get_or_insert_with(Vec::new);
        let placement = resolve_placement(rows.len(), row);
        debug!(
            requested = row,
            row_count = rows.len(),
            ?placement,
            target = placement.target_index(rows.len()),
            "attach button"
        );

        match placement {
            Placement::SeedFirstRow | Placement::AppendRow => {
                let mut new_row = RowBuilder::new();
                new_row.add_component(component)?;
                rows.push(new_row);
                // The append path does not enforce the row cap, only `with_rows` does.
                if rows.len() > Self::MAX_ROW_COUNT {
                    warn!(
                        row_count = rows.len(),
                        limit = Self::MAX_ROW_COUNT,
                        "auto-appended row exceeds row limit"
                    );
                }
            }
            Placement::ExistingRow(index) => {
                rows[index].add_component(component)?;
            }
            Placement::FallbackFirstRow => {
                rows[0].add_component(component)?;
            }
        }
        Ok(self)
    }

    /// Freeze all rows. A builder that never received a row yields [`ComponentTree::EMPTY`].
    pub fn build(self) -> ConfigResult<ComponentTree> {
        match self.rows {
            None => Ok(ComponentTree::EMPTY),
            Some(rows) => {
                let rows = rows
                    .into_iter()
                    .map(RowBuilder::build)
                    .collect::<ConfigResult<Vec<Row>>>()?;
                debug!(rows = rows.len(), "built component tree");
                Ok(ComponentTree::new(rows))
            }
        }
    }
}

/// Holds one row's components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowBuilder {
    components: Option<Vec<Component>>,
}

impl RowBuilder {
    pub const MAX_CHILD_COUNT: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn components(&self) -> &[Component] {
        self.components.as_deref().unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.components().len()
    }

    pub fn is_empty(&self) -> bool {
        self.components().is_empty()
    }

    /// Replace all components at once. At most [`Self::MAX_CHILD_COUNT`] are accepted.
    pub fn with_components(&mut self, components: Vec<Component>) -> ConfigResult<&mut Self> {
        if components.len() > Self::MAX_CHILD_COUNT {
            return Err(ConfigurationError::TooManyComponents {
                found: components.len(),
                limit: Self::MAX_CHILD_COUNT,
            });
        }
        self.components = Some(components);
        Ok(self)
    }

    /// Drop all components; the row is unpopulated again.
    pub fn clear(&mut self) -> &mut Self {
        self.components = None;
        self
    }

    /// Append one component, respecting [`Self::MAX_CHILD_COUNT`].
    pub fn add_component(&mut self, component: impl Into<Component>) -> ConfigResult<&mut Self> {
        let components = self.components.get_or_insert_with(Vec::new);
        if components.len() >= Self::MAX_CHILD_COUNT {
            return Err(ConfigurationError::TooManyComponents {
                found: components.len() + 1,
                limit: Self::MAX_CHILD_COUNT,
            });
        }
        components.push(component.into());
        Ok(self)
    }

    /// Freeze the row. An explicitly assigned empty sequence yields an empty row;
    /// a row that was never populated (or was cleared) is rejected.
    pub fn build(self) -> ConfigResult<Row> {
        match self.components {
            Some(components) => Ok(Row::new(components)),
            None => Err(ConfigurationError::EmptyRow),
        }
    }
}

/// Configures a single button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonBuilder {
    style: ButtonStyle,
    label: Option<String>,
    emote: Option<Emote>,
    custom_id: Option<String>,
    url: Option<String>,
    disabled: bool,
}

impl ButtonBuilder {
    pub const MAX_LABEL_LENGTH: usize = 80;
    pub const MAX_CUSTOM_ID_LENGTH: usize = 100;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self) -> ButtonStyle {
        self.style
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn custom_id(&self) -> Option<&str> {
        self.custom_id.as_deref()
    }

    pub fn with_label(&mut self, label: impl Into<String>) -> ConfigResult<&mut Self> {
        let label = label.into();
        let found = label.chars().count();
        if found > Self::MAX_LABEL_LENGTH {
            return Err(ConfigurationError::LabelTooLong {
                found,
                limit: Self::MAX_LABEL_LENGTH,
            });
        }
        self.label = Some(label);
        Ok(self)
    }

    pub fn with_custom_id(&mut self, custom_id: impl Into<String>) -> ConfigResult<&mut Self> {
        let custom_id = custom_id.into();
        let found = custom_id.chars().count();
        if found > Self::MAX_CUSTOM_ID_LENGTH {
            return Err(ConfigurationError::CustomIdTooLong {
                found,
                limit: Self::MAX_CUSTOM_ID_LENGTH,
            });
        }
        self.custom_id = Some(custom_id);
        Ok(self)
    }

    pub fn with_style(&mut self, style: ButtonStyle) -> &mut Self {
        self.style = style;
        self
    }

    pub fn with_emote(&mut self, emote: Emote) -> &mut Self {
        self.emote = Some(emote);
        self
    }

    pub fn with_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_disabled(&mut self, disabled: bool) -> &mut Self {
        self.disabled = disabled;
        self
    }

    /// Snapshot the current fields. Link/custom_id consistency is left to the platform.
    pub fn build(self) -> Button {
        Button::new(
            self.style,
            self.label,
            self.emote,
            self.custom_id,
            self.url,
            self.disabled,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(label: &str) -> ButtonBuilder {
        let mut builder = ButtonBuilder::new();
        builder.with_label(label).unwrap();
        builder
    }

    fn labels(tree: &ComponentTree) -> Vec<Vec<String>> {
        tree.rows()
            .iter()
            .map(|row| {
                row.components()
                    .iter()
                    .filter_map(Component::as_button)
                    .map(|b| b.label().unwrap_or_default().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn given_rejected_label_when_retrying_then_builder_keeps_previous_value() {
        let mut builder = button("ok");

        let result = builder.with_label("x".repeat(81));

        assert!(result.is_err());
        assert_eq!(builder.label(), Some("ok"));
    }

    #[test]
    fn given_unset_style_when_building_then_primary() {
        let built = ButtonBuilder::new().build();

        assert_eq!(built.style(), ButtonStyle::Primary);
        assert_eq!(built.label(), None);
        assert!(!built.disabled());
    }

    #[test]
    fn given_full_row_when_adding_component_then_rejects_and_keeps_row() {
        let mut row = RowBuilder::new();
        for i in 0..RowBuilder::MAX_CHILD_COUNT {
            row.add_component(button(&i.to_string()).build()).unwrap();
        }

        let err = row.add_component(button("six").build()).unwrap_err();

        assert_eq!(
            err,
            ConfigurationError::TooManyComponents { found: 6, limit: 5 }
        );
        assert_eq!(row.len(), 5);
    }

    #[test]
    fn given_cleared_row_when_building_then_empty_row_error() {
        let mut row = RowBuilder::new();
        row.add_component(button("a").build()).unwrap();
        row.clear();

        assert_eq!(row.build(), Err(ConfigurationError::EmptyRow));
    }

    #[test]
    fn given_mixed_placements_when_building_then_preserves_insertion_order() {
        let mut tree = TreeBuilder::new();
        tree.attach(button("a"), 0)
            .unwrap()
            .attach(button("b"), 2)
            .unwrap()
            .attach(button("c"), 1)
            .unwrap()
            .attach(button("d"), 0)
            .unwrap();

        let built = tree.build().unwrap();

        // c asks for row 1, which exists once b has been appended
        assert_eq!(labels(&built), vec![vec!["a", "d"], vec!["b", "c"]]);
    }

    #[test]
    fn given_repeated_appends_when_exceeding_row_limit_then_still_appends() {
        let mut tree = TreeBuilder::new();
        tree.attach(button("0"), 0).unwrap();
        for count in 1..=TreeBuilder::MAX_ROW_COUNT {
            tree.attach(button(&count.to_string()), count as isize + 1)
                .unwrap();
        }

        assert_eq!(tree.rows().len(), TreeBuilder::MAX_ROW_COUNT + 1);
        assert_eq!(tree.build().unwrap().rows().len(), 6);
    }

    #[test]
    fn given_assigned_empty_row_list_when_building_then_zero_rows_not_empty_marker() {
        let mut tree = TreeBuilder::new();
        tree.with_rows(Vec::new()).unwrap();

        let built = tree.build().unwrap();

        assert!(!built.is_empty_marker());
        assert!(built.rows().is_empty());
    }

    #[test]
    fn given_add_button_with_too_long_custom_id_when_adding_then_tree_unchanged() {
        let mut tree = TreeBuilder::new();
        let options = ButtonOptions {
            custom_id: Some("x".repeat(101)),
            ..ButtonOptions::default()
        };

        let err = tree.add_button("label", options).unwrap_err();

        assert_eq!(err.field(), "custom_id");
        assert!(tree.rows().is_empty());
    }
}
