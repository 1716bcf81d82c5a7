use crate::base;

/// Opaque identity of one loaded transaction collection. Two collections
/// with equal contents still have different identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("#{_0}")]
pub struct TransactionsId(u64);

impl TransactionsId {
    fn next() -> Self {
        static NEXT: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);
        Self(NEXT.fetch_add(1, std::sync::atomic::Ordering::Relaxed))
    }
}

/// An immutable collection of transactions. Every construction, including
/// [`Clone::clone`], yields a collection with a fresh [`TransactionsId`].
#[derive(Debug)]
pub struct Transactions {
    id: TransactionsId,
    inner: Vec<base::Transaction>,
}

impl Transactions {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_vec(inner: Vec<base::Transaction>) -> Self {
        Self {
            id: TransactionsId::next(),
            inner,
        }
    }

    pub fn id(&self) -> TransactionsId {
        self.id
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn as_slice(&self) -> &[base::Transaction] {
        &self.inner
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Transaction> {
        self.inner.iter()
    }
}

impl Default for Transactions {
    fn default() -> Self {
        Self::from_vec(Vec::new())
    }
}

impl Clone for Transactions {
    fn clone(&self) -> Self {
        Self::from_vec(self.inner.clone())
    }
}

/// Compares contents only.
impl PartialEq for Transactions {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl FromIterator<base::Transaction> for Transactions {
    fn from_iter<T: IntoIterator<Item = base::Transaction>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Transactions {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(&self.inner).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid transaction list")]
pub struct ParseError(#[from] serde_json::Error);

impl std::str::FromStr for Transactions {
    type Err = ParseError;

    /// Parses a JSON array of raw transaction records. Blank input is an
    /// empty collection.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::new());
        }
        let txs = serde_json::from_str::<Vec<base::Transaction>>(s)?
            .into_iter()
            .collect::<Self>();
        for t in txs.iter().filter(|t| !t.amount().is_known()) {
            match t.transaction_number() {
                Some(n) => log::warn!("transaction {} has a non-numeric amount, counting it as zero", n),
                None => log::warn!("a transaction has a non-numeric amount, counting it as zero"),
            }
        }
        log::info!("loaded {} transactions as collection {}", txs.len(), txs.id());
        Ok(txs)
    }
}

impl TryFrom<&str> for Transactions {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
