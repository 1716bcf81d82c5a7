use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::OnceLock;

use crate::base;

type Slot = Arc<OnceLock<Arc<base::PivotResult>>>;

/// Memoizes pivot results per transaction collection identity and selection.
///
/// The cache only records [`base::TransactionsId`]s, so it never keeps a
/// collection alive. Entries stay until [`PivotCache::forget`] is called for
/// their collection. Concurrent first requests for the same key compute once;
/// requests for different keys do not wait on each other's computation.
#[derive(Debug, Default)]
pub struct PivotCache {
    slots: Mutex<HashMap<base::TransactionsId, HashMap<base::Selection, Slot>>>,
}

impl PivotCache {
    /// Returns the cached result for `txs` and `selection`, computing it on
    /// first request.
    pub fn get_or_compute(
        &self,
        txs: &base::Transactions,
        selection: &base::Selection,
    ) -> Arc<base::PivotResult> {
        let slot = self.slot(txs.id(), selection);
        let mut computed = false;
        let result = slot.get_or_init(|| {
            computed = true;
            let result = base::PivotResult::compute(txs.as_slice(), selection);
            log::debug!(
                "computed pivot {} for collection {}: {} rows, {} columns, grand total {}",
                selection,
                txs.id(),
                result.row_values.len(),
                result.leaves.len(),
                result.grand_total()
            );
            Arc::new(result)
        });
        if !computed {
            log::debug!("pivot {} for collection {} served from cache", selection, txs.id());
        }
        Arc::clone(result)
    }

    fn slot(&self, id: base::TransactionsId, selection: &base::Selection) -> Slot {
        let mut slots = self
            .slots
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let inner = slots.entry(id).or_default();
        if let Some(slot) = inner.get(selection) {
            return Arc::clone(slot);
        }
        let slot = Slot::default();
        inner.insert(selection.clone(), Arc::clone(&slot));
        slot
    }

    /// Drops every result computed for the collection `id`.
    pub fn forget(&self, id: base::TransactionsId) {
        let removed = self
            .slots
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .remove(&id);
        if let Some(inner) = removed {
            log::debug!("dropped {} cached pivots for collection {}", inner.len(), id);
        }
    }

    /// Returns the number of cached selections for the collection `id`.
    #[cfg(test)]
    pub fn len(&self, id: base::TransactionsId) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(&id)
            .map_or(0, HashMap::len)
    }
}
