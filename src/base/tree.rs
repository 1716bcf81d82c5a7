pub mod forcolumns;

use crate::base;

pub struct Tree<'a> {
    charset: &'a base::Charset,
    root: Node,
}

#[derive(Default)]
struct Node {
    data: std::borrow::Cow<'static, str>,
    children: Vec<Self>,
}

impl Node {
    fn new(data: std::borrow::Cow<'static, str>) -> Self {
        Self {
            data,
            children: Vec::new(),
        }
    }
}

impl Tree<'_> {
    /// Writes `nodes` one per line below a parent whose descendants are
    /// indented by `prefix`.
    fn write_nodes(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        nodes: &[Node],
        prefix: &str,
    ) -> std::fmt::Result {
        for (i, node) in nodes.iter().enumerate() {
            let (branch, indent) = if i + 1 == nodes.len() {
                (self.charset.tree_corner, self.charset.tree_space)
            } else {
                (self.charset.tree_sideways_t, self.charset.tree_pipe_gap)
            };
            writeln!(f, "{}{}{}", prefix, branch, node.data)?;
            self.write_nodes(f, &node.children, &format!("{}{}", prefix, indent))?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Tree<'_> {
    /// Writes top level nodes flush left, each followed by its indented
    /// descendants. Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for top in &self.root.children {
            writeln!(f, "{}", top.data)?;
            self.write_nodes(f, &top.children, "")?;
        }
        Ok(())
    }
}
