use std::collections::BTreeMap;

use crate::base;

/// Sums keyed by successive column-field values. The nesting depth equals the
/// number of column fields; with no column fields an aggregate is a single
/// total.
#[derive(Debug, Clone, PartialEq)]
pub enum Aggregate {
    Total(f64),
    Nested(BTreeMap<base::Value, Aggregate>),
}

impl Aggregate {
    /// Returns an empty aggregate `depth` levels deep.
    pub fn empty(depth: usize) -> Self {
        if depth == 0 {
            Self::Total(0.0)
        } else {
            Self::Nested(BTreeMap::new())
        }
    }

    /// Adds `amount` at `path`, creating intermediate levels on first touch.
    /// `path` must be as long as this aggregate is deep.
    pub fn add(&mut self, path: &[&base::Value], amount: f64) {
        let mut node = self;
        for (i, &key) in path.iter().enumerate() {
            let remaining = path.len() - i - 1;
            node = match node {
                Aggregate::Nested(m) => m
                    .entry(key.clone())
                    .or_insert_with(|| Aggregate::empty(remaining)),
                Aggregate::Total(_) => unreachable!("path should not be deeper than the aggregate"),
            };
        }
        match node {
            Aggregate::Total(sum) => *sum += amount,
            Aggregate::Nested(_) => unreachable!("path should reach a total"),
        }
    }

    /// Returns the level below `key`, if any transaction reached it.
    pub fn get(&self, key: &base::Value) -> Option<&Aggregate> {
        match self {
            Aggregate::Nested(m) => m.get(key),
            Aggregate::Total(_) => None,
        }
    }

    pub fn as_total(&self) -> Option<f64> {
        match self {
            Aggregate::Total(sum) => Some(*sum),
            Aggregate::Nested(_) => None,
        }
    }

    /// Returns the total at `path`, or zero if no transaction reached it.
    pub fn lookup(&self, path: &[base::Value]) -> f64 {
        path.iter()
            .try_fold(self, |node, key| node.get(key))
            .and_then(Aggregate::as_total)
            .unwrap_or_default()
    }

    /// Returns the sum of every total in this aggregate.
    pub fn sum(&self) -> f64 {
        match self {
            Aggregate::Total(sum) => *sum,
            Aggregate::Nested(m) => m.values().map(Aggregate::sum).sum(),
        }
    }
}

/// Per-row aggregates and the row-agnostic grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregates {
    pub rows: BTreeMap<base::Value, Aggregate>,
    pub total: Aggregate,
}

/// Buckets every transaction under its row value and column path in one pass,
/// mirroring each addition into the grand total.
pub fn aggregate(txs: &[base::Transaction], selection: &base::Selection) -> Aggregates {
    let depth = selection.cols().len();
    let mut rows = BTreeMap::<base::Value, Aggregate>::new();
    let mut total = Aggregate::empty(depth);
    let mut path = Vec::with_capacity(depth);
    for t in txs {
        let amount = t.amount().measure();
        path.clear();
        path.extend(selection.cols().iter().map(|&col| t.value(col)));
        rows.entry(t.value(selection.row()).clone())
            .or_insert_with(|| Aggregate::empty(depth))
            .add(&path, amount);
        total.add(&path, amount);
    }
    Aggregates { rows, total }
}
