//! Tree rendering of built components for `msgcomp show`.

use itertools::Itertools;
use termtree::Tree;

use crate::domain::{Button, Component, ComponentTree, Row};

pub trait ToTermTree {
    fn to_term_tree(&self) -> Tree<String>;
}

impl ToTermTree for ComponentTree {
    fn to_term_tree(&self) -> Tree<String> {
        if self.is_empty_marker() {
            return Tree::new("(no components)".to_string());
        }
        let root = format!("message ({} rows)", self.rows().len());
        let leaves = self
            .rows()
            .iter()
            .enumerate()
            .map(|(index, row)| row_tree(index, row))
            .collect::<Vec<_>>();
        Tree::new(root).with_leaves(leaves)
    }
}

fn row_tree(index: usize, row: &Row) -> Tree<String> {
    let leaves = row.components().iter().map(describe).collect::<Vec<_>>();
    Tree::new(format!("row {index}")).with_leaves(leaves)
}

fn describe(component: &Component) -> String {
    match component.as_button() {
        Some(button) => describe_button(button),
        None => component.kind().to_string(),
    }
}

fn describe_button(button: &Button) -> String {
    let mut parts = vec![format!("[{}]", button.style())];
    if let Some(emote) = button.emote() {
        parts.push(emote.to_string());
    }
    if let Some(label) = button.label() {
        parts.push(format!("{label:?}"));
    }
    if let Some(custom_id) = button.custom_id() {
        parts.push(format!("id={custom_id}"));
    }
    if let Some(url) = button.url() {
        parts.push(format!("url={url}"));
    }
    if button.disabled() {
        parts.push("disabled".to_string());
    }
    parts.iter().join(" ")
}
