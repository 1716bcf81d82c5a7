//! Pivot aggregation: row labels, a sparse column header tree, and nested
//! sums for every (row, leaf column) cell plus a grand total row.

mod aggregate;
mod cache;
mod columns;
mod keys;

use std::collections::BTreeMap;

pub use aggregate::Aggregate;
pub use cache::PivotCache;
pub use columns::ColumnNode;
pub use columns::build_column_tree;
pub use columns::header_nodes_at_depth;
pub use keys::distinct_values;

use crate::base;

/// Everything needed to render one pivot table. Immutable once computed and
/// shared through `Arc` by [`PivotCache`].
#[derive(Debug, Clone, PartialEq)]
pub struct PivotResult {
    pub selection: base::Selection,
    /// Distinct row field values in canonical order.
    pub row_values: Vec<base::Value>,
    /// Empty when the selection has no column fields.
    pub column_tree: Vec<ColumnNode>,
    /// Data columns from left to right. A single [`ColumnNode::total`] when
    /// the selection has no column fields.
    pub leaves: Vec<ColumnNode>,
    pub pivot_map: BTreeMap<base::Value, Aggregate>,
    pub total_map: Aggregate,
}

impl PivotResult {
    pub fn compute(txs: &[base::Transaction], selection: &base::Selection) -> Self {
        let row_values = distinct_values(txs, selection.row());
        let subset = txs.iter().collect::<Vec<_>>();
        let column_tree = build_column_tree(&subset, selection.cols());
        let aggregate::Aggregates { rows, total } = aggregate::aggregate(txs, selection);
        let leaves = if selection.cols().is_empty() {
            vec![ColumnNode::total()]
        } else {
            columns::leaves(&column_tree)
        };
        Self {
            selection: selection.clone(),
            row_values,
            column_tree,
            leaves,
            pivot_map: rows,
            total_map: total,
        }
    }

    /// Returns the sum for `row` under `leaf`, zero if no transaction falls
    /// in that cell.
    pub fn cell(&self, row: &base::Value, leaf: &ColumnNode) -> f64 {
        self.pivot_map
            .get(row)
            .map_or(0.0, |agg| agg.lookup(&leaf.full_path))
    }

    /// Returns the grand total row's sum under `leaf`.
    pub fn total_cell(&self, leaf: &ColumnNode) -> f64 {
        self.total_map.lookup(&leaf.full_path)
    }

    pub fn grand_total(&self) -> f64 {
        self.total_map.sum()
    }

    /// Returns the number of header rows needed to draw the column tree.
    pub fn header_depth(&self) -> usize {
        self.selection.cols().len().max(1)
    }
}
