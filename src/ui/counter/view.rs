//! Typed view description for the counter.
//!
//! [`build`] is a pure function of the state. It knows nothing about
//! terminals; `ui::render` and the headless driver each present the tree
//! their own way.

use serde::Serialize;

use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::CounterState;

pub const APP_TITLE: &str = "Counter App";
pub const CONTAINER_CLASS: &str = "app-container";
pub const INCREMENT_LABEL: &str = "Increment";
pub const RESET_LABEL: &str = "Reset";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewNode {
    Container {
        class: &'static str,
        children: Vec<ViewNode>,
    },
    Heading {
        text: String,
    },
    Paragraph {
        text: String,
    },
    Button {
        label: String,
        action: CounterIntent,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ViewTree {
    root: ViewNode,
}

/// Text shown in the paragraph for `value`.
pub fn count_text(value: i64) -> String {
    format!("Count: {}", value)
}

pub fn build(state: &CounterState) -> ViewTree {
    ViewTree {
        root: ViewNode::Container {
            class: CONTAINER_CLASS,
            children: vec![
                ViewNode::Heading {
                    text: APP_TITLE.to_string(),
                },
                ViewNode::Paragraph {
                    text: count_text(state.value()),
                },
                ViewNode::Button {
                    label: INCREMENT_LABEL.to_string(),
                    action: CounterIntent::Increment,
                },
                ViewNode::Button {
                    label: RESET_LABEL.to_string(),
                    action: CounterIntent::Reset,
                },
            ],
        },
    }
}

impl ViewTree {
    pub fn root(&self) -> &ViewNode {
        &self.root
    }

    /// Depth-first, in document order.
    pub fn nodes(&self) -> Vec<&ViewNode> {
        let mut out = Vec::new();
        collect(&self.root, &mut out);
        out
    }

    pub fn heading(&self) -> Option<&str> {
        self.nodes().into_iter().find_map(|node| match node {
            ViewNode::Heading { text } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn paragraph(&self) -> Option<&str> {
        self.nodes().into_iter().find_map(|node| match node {
            ViewNode::Paragraph { text } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn buttons(&self) -> Vec<(&str, CounterIntent)> {
        self.nodes()
            .into_iter()
            .filter_map(|node| match node {
                ViewNode::Button { label, action } => Some((label.as_str(), *action)),
                _ => None,
            })
            .collect()
    }

    /// Plain-text rendition, one line per row of the layout.
    pub fn text_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut buttons = Vec::new();
        for node in self.nodes() {
            match node {
                ViewNode::Heading { text } | ViewNode::Paragraph { text } => {
                    lines.push(text.clone())
                }
                ViewNode::Button { label, .. } => buttons.push(format!("[ {} ]", label)),
                ViewNode::Container { .. } => {}
            }
        }
        if !buttons.is_empty() {
            lines.push(buttons.join(" "));
        }
        lines
    }
}

fn collect<'a>(node: &'a ViewNode, out: &mut Vec<&'a ViewNode>) {
    out.push(node);
    if let ViewNode::Container { children, .. } = node {
        for child in children {
            collect(child, out);
        }
    }
}
