use crate::base;
use crate::base::pivot::keys;

/// One header cell of the column tree: a value of the column field at this
/// node's depth, within the subset selected by its ancestors.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnNode {
    pub value: base::Value,
    /// Values from the root down to and including this node.
    pub full_path: Vec<base::Value>,
    /// Number of leaf columns under this node, 1 for a leaf.
    pub col_span: usize,
    pub children: Vec<ColumnNode>,
}

impl ColumnNode {
    pub const TOTAL: &str = "Total";

    /// The single leaf used when there are no column fields. Its empty path
    /// addresses the unconditional total.
    pub fn total() -> Self {
        Self {
            value: base::Value::text(Self::TOTAL),
            full_path: Vec::new(),
            col_span: 1,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Partitions `txs` by each of `fields` in turn. Only value combinations
/// that occur in `txs` produce nodes.
pub fn build_column_tree(txs: &[&base::Transaction], fields: &[base::GroupField]) -> Vec<ColumnNode> {
    fn build(
        txs: &[&base::Transaction],
        fields: &[base::GroupField],
        path: &[base::Value],
    ) -> Vec<ColumnNode> {
        let Some((&field, rest)) = fields.split_first() else {
            return Vec::new();
        };
        keys::distinct_values(txs.iter().copied(), field)
            .into_iter()
            .map(|value| {
                let subset = txs
                    .iter()
                    .copied()
                    .filter(|t| t.value(field) == &value)
                    .collect::<Vec<_>>();
                let mut full_path = path.to_vec();
                full_path.push(value.clone());
                let children = build(&subset, rest, &full_path);
                let col_span = if children.is_empty() {
                    1
                } else {
                    children.iter().map(|c| c.col_span).sum()
                };
                ColumnNode {
                    value,
                    full_path,
                    col_span,
                    children,
                }
            })
            .collect()
    }

    build(txs, fields, &[])
}

/// Returns the childless nodes of `tree` in depth-first order.
pub fn leaves(tree: &[ColumnNode]) -> Vec<ColumnNode> {
    fn collect(nodes: &[ColumnNode], out: &mut Vec<ColumnNode>) {
        for node in nodes {
            if node.is_leaf() {
                out.push(node.clone());
            } else {
                collect(&node.children, out);
            }
        }
    }

    let mut out = Vec::new();
    collect(tree, &mut out);
    out
}

/// Returns the nodes at exactly `depth`, where the roots are at depth 0,
/// from left to right.
pub fn header_nodes_at_depth(tree: &[ColumnNode], depth: usize) -> Vec<&ColumnNode> {
    if depth == 0 {
        return tree.iter().collect();
    }
    tree.iter()
        .flat_map(|node| header_nodes_at_depth(&node.children, depth - 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::fixture;
    use rstest::rstest;

    use super::*;
    use crate::base::GroupField::*;

    #[fixture]
    fn txs() -> Vec<base::Transaction> {
        vec![
            base::Transaction::new("invoice", 100.0, "paid", "2024"),
            base::Transaction::new("invoice", 50.0, "unpaid", "2024"),
            base::Transaction::new("bill", 25.5, "paid", "2025"),
            base::Transaction::new("bill", 24.5, "paid", "2024"),
        ]
    }

    fn values(nodes: &[&ColumnNode]) -> Vec<String> {
        nodes.iter().map(|n| n.value.to_string()).collect()
    }

    fn assert_spans(nodes: &[ColumnNode]) {
        for node in nodes {
            if node.is_leaf() {
                assert_eq!(node.col_span, 1);
            } else {
                let sum = node.children.iter().map(|c| c.col_span).sum::<usize>();
                assert_eq!(node.col_span, sum);
                assert_spans(&node.children);
            }
        }
    }

    #[rstest]
    fn test_no_fields(txs: Vec<base::Transaction>) {
        let subset = txs.iter().collect::<Vec<_>>();
        let tree = build_column_tree(&subset, &[]);
        assert!(tree.is_empty());
        assert!(leaves(&tree).is_empty());
    }

    #[test]
    fn test_empty_subset() {
        assert!(build_column_tree(&[], &[Status, Year]).is_empty());
    }

    #[rstest]
    fn test_one_field(txs: Vec<base::Transaction>) {
        let subset = txs.iter().collect::<Vec<_>>();
        let tree = build_column_tree(&subset, &[Year]);
        let roots = header_nodes_at_depth(&tree, 0);
        assert_eq!(values(&roots), ["2024", "2025"]);
        assert!(tree.iter().all(|n| n.is_leaf() && n.col_span == 1));
        assert_eq!(tree[1].full_path, [base::Value::from("2025")]);
        assert_eq!(leaves(&tree), tree);
    }

    #[rstest]
    fn test_sparse_two_fields(txs: Vec<base::Transaction>) {
        let subset = txs.iter().collect::<Vec<_>>();
        let tree = build_column_tree(&subset, &[Status, Year]);
        assert_spans(&tree);

        let depth0 = header_nodes_at_depth(&tree, 0);
        let depth1 = header_nodes_at_depth(&tree, 1);
        assert_eq!(values(&depth0), ["paid", "unpaid"]);
        assert_eq!(values(&depth1), ["2024", "2025", "2024"]);
        assert_eq!(depth0[0].col_span, 2);
        assert_eq!(depth0[1].col_span, 1);
        assert!(header_nodes_at_depth(&tree, 2).is_empty());

        let leaf_paths = leaves(&tree)
            .into_iter()
            .map(|n| n.full_path.iter().map(|v| v.to_string()).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        assert_eq!(
            leaf_paths,
            [["paid", "2024"], ["paid", "2025"], ["unpaid", "2024"]]
        );
    }

    #[rstest]
    fn test_three_fields(txs: Vec<base::Transaction>) {
        let subset = txs.iter().collect::<Vec<_>>();
        let tree = build_column_tree(&subset, &[Year, Status, TransactionType]);
        assert_spans(&tree);
        let leaf_count = leaves(&tree).len();
        assert_eq!(leaf_count, 4);
        assert_eq!(tree.iter().map(|n| n.col_span).sum::<usize>(), leaf_count);
        assert!(leaves(&tree).iter().all(|n| n.full_path.len() == 3));
    }

    #[test]
    fn test_span_invariant_on_generated_data() {
        let types = ["invoice", "bill", "direct_expense"];
        let statuses = ["paid", "unpaid", "partially_paid"];
        let txs = (0..60)
            .filter(|i| i % 7 != 3)
            .map(|i| {
                base::Transaction::new(
                    types[i % 3],
                    i as f64,
                    statuses[(i / 3) % 3],
                    base::Value::from(2020 + (i as i32 % 5)),
                )
            })
            .collect::<Vec<_>>();
        let subset = txs.iter().collect::<Vec<_>>();
        for fields in [
            vec![Year],
            vec![Status, Year],
            vec![Year, Status, TransactionType],
        ] {
            let tree = build_column_tree(&subset, &fields);
            assert_spans(&tree);
            assert_eq!(
                tree.iter().map(|n| n.col_span).sum::<usize>(),
                leaves(&tree).len()
            );
            for depth in 0..fields.len() {
                let nodes = header_nodes_at_depth(&tree, depth);
                assert_eq!(
                    nodes.iter().map(|n| n.col_span).sum::<usize>(),
                    leaves(&tree).len()
                );
            }
        }
    }

    #[test]
    fn test_total_leaf() {
        let leaf = ColumnNode::total();
        assert_eq!(leaf.value.to_string(), "Total");
        assert!(leaf.full_path.is_empty());
        assert_eq!(leaf.col_span, 1);
        assert!(leaf.is_leaf());
    }
}
