//! Immutable component values handed to the transport.
//!
//! Values are only produced by the builders in [`crate::domain::builder`];
//! fields are private and there are no mutators.

use std::fmt;
use std::str::FromStr;

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Visual style of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Link,
}

impl fmt::Display for ButtonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ButtonStyle::Primary => "primary",
            ButtonStyle::Secondary => "secondary",
            ButtonStyle::Success => "success",
            ButtonStyle::Danger => "danger",
            ButtonStyle::Link => "link",
        };
        f.write_str(name)
    }
}

impl FromStr for ButtonStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(ButtonStyle::Primary),
            "secondary" => Ok(ButtonStyle::Secondary),
            "success" => Ok(ButtonStyle::Success),
            "danger" => Ok(ButtonStyle::Danger),
            "link" => Ok(ButtonStyle::Link),
            other => Err(format!("unknown button style: {other}")),
        }
    }
}

/// Opaque reference to a standard or custom emoji.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Emote {
    /// Guild emoji, referenced by id.
    Custom {
        id: u64,
        name: String,
        #[serde(default)]
        animated: bool,
    },
    /// Standard unicode emoji.
    Unicode { name: String },
}

impl Emote {
    pub fn unicode(name: impl Into<String>) -> Self {
        Emote::Unicode { name: name.into() }
    }

    pub fn custom(id: u64, name: impl Into<String>, animated: bool) -> Self {
        Emote::Custom {
            id,
            name: name.into(),
            animated,
        }
    }
}

impl fmt::Display for Emote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emote::Unicode { name } => f.write_str(name),
            Emote::Custom {
                id,
                name,
                animated: true,
            } => write!(f, "<a:{name}:{id}>"),
            Emote::Custom { id, name, .. } => write!(f, "<:{name}:{id}>"),
        }
    }
}

/// Clickable leaf component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    style: ButtonStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(rename = "emoji", skip_serializing_if = "Option::is_none")]
    emote: Option<Emote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    disabled: bool,
}

impl Button {
    pub(crate) fn new(
        style: ButtonStyle,
        label: Option<String>,
        emote: Option<Emote>,
        custom_id: Option<String>,
        url: Option<String>,
        disabled: bool,
    ) -> Self {
        Self {
            style,
            label,
            emote,
            custom_id,
            url,
            disabled,
        }
    }

    pub fn style(&self) -> ButtonStyle {
        self.style
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn emote(&self) -> Option<&Emote> {
        self.emote.as_ref()
    }

    pub fn custom_id(&self) -> Option<&str> {
        self.custom_id.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }
}

/// A renderable leaf inside a row.
///
/// New leaf kinds are added as variants; rows and trees only see `Component`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Component {
    Button(Button),
}

impl Component {
    /// Wire name of the component kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Component::Button(_) => "button",
        }
    }

    pub fn as_button(&self) -> Option<&Button> {
        match self {
            Component::Button(button) => Some(button),
        }
    }
}

impl From<Button> for Component {
    fn from(button: Button) -> Self {
        Component::Button(button)
    }
}

/// Ordered, frozen sequence of components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row {
    components: Vec<Component>,
}

impl Row {
    pub(crate) fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// The full set of rows attached to one outgoing message.
///
/// [`ComponentTree::EMPTY`] stands for "no components" and is distinct from a
/// tree that was explicitly given zero rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComponentTree {
    rows: Option<Vec<Row>>,
}

impl ComponentTree {
    pub const EMPTY: ComponentTree = ComponentTree { rows: None };

    pub(crate) fn new(rows: Vec<Row>) -> Self {
        Self { rows: Some(rows) }
    }

    pub fn rows(&self) -> &[Row] {
        self.rows.as_deref().unwrap_or(&[])
    }

    /// True only for the canonical empty value.
    pub fn is_empty_marker(&self) -> bool {
        self.rows.is_none()
    }

    pub fn component_count(&self) -> usize {
        self.rows().iter().map(Row::len).sum()
    }
}

impl Serialize for ComponentTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}
