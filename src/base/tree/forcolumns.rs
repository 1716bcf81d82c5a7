use std::sync::Arc;

use crate::base;

/// Draws a pivot's column header tree, annotating each header that spans more
/// than one data column with its span.
#[derive(Debug, PartialEq)]
pub struct Config {
    pub charset: base::Charset,
    pub result: Arc<base::PivotResult>,
}

impl Config {
    pub fn to_tree(&self) -> base::Tree<'_> {
        fn add_nodes(parent: &mut base::tree::Node, nodes: &[base::ColumnNode]) {
            for node in nodes {
                let data = if node.col_span > 1 {
                    format!("{} ({})", node.value.label(), node.col_span)
                } else {
                    node.value.label()
                };
                let mut child = base::tree::Node::new(data.into());
                add_nodes(&mut child, &node.children);
                parent.children.push(child);
            }
        }

        let mut root = base::tree::Node::default();
        add_nodes(&mut root, &self.result.column_tree);
        base::Tree {
            charset: &self.charset,
            root,
        }
    }
}
