use crate::base;

/// Returns the distinct values of `field` among `txs`, in canonical order.
pub fn distinct_values<'a, I>(txs: I, field: base::GroupField) -> Vec<base::Value>
where
    I: IntoIterator<Item = &'a base::Transaction>,
{
    txs.into_iter()
        .map(|t| t.value(field))
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .cloned()
        .collect()
}
