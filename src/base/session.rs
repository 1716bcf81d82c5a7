use std::sync::Arc;

use crate::base;

/// The currently loaded transactions and the pivots computed from them.
#[derive(Debug, Default)]
pub struct Session {
    transactions: Arc<base::Transactions>,
    cache: base::pivot::PivotCache,
}

impl Session {
    pub fn new(transactions: base::Transactions) -> Self {
        let mut session = Self::default();
        session.load(transactions);
        session
    }

    pub fn transactions(&self) -> &Arc<base::Transactions> {
        &self.transactions
    }

    /// Replaces the loaded transactions, dropping every pivot cached for the
    /// previous collection.
    pub fn load(&mut self, transactions: base::Transactions) {
        let previous = std::mem::replace(&mut self.transactions, Arc::new(transactions));
        self.cache.forget(previous.id());
        log::debug!(
            "replaced collection {} with collection {}",
            previous.id(),
            self.transactions.id()
        );
    }

    pub fn pivot(&self, selection: &base::Selection) -> Arc<base::PivotResult> {
        self.cache.get_or_compute(&self.transactions, selection)
    }
}
