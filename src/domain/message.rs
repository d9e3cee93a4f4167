//! Outgoing message payload handed to a [`MessageSink`](crate::infrastructure::traits::MessageSink).

use serde::Serialize;

use crate::domain::components::ComponentTree;

/// One message with its frozen component tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OutgoingMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    components: ComponentTree,
}

impl OutgoingMessage {
    pub fn new(content: Option<String>, components: ComponentTree) -> Self {
        Self {
            content,
            components,
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn components(&self) -> &ComponentTree {
        &self.components
    }
}
