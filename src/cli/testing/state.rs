use crate::base;

/// Returns an [`base::Fs`] over a fresh temporary directory, which is removed
/// when the returned guard is dropped.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    (base::Fs::new(td.path()), td)
}

/// The expected or actual objects deserialized from a working directory.
/// Unset fields correspond to nonexistent files.
#[derive(Debug, PartialEq, Default)]
pub struct State {
    config: Option<base::Config>,
    transactions: Option<base::Transactions>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Sets the directory's [`base::Transactions`].
    pub fn with_transactions<T>(mut self, transactions: T) -> Self
    where
        T: TryInto<base::Transactions> + std::fmt::Debug,
        <T as TryInto<base::Transactions>>::Error: std::fmt::Debug,
    {
        self.transactions = Some(transactions.try_into().unwrap());
        self
    }

    /// Deserializes objects from `fs`. Files that fail to parse are left
    /// unset.
    pub fn from_fs(fs: &base::Fs) -> Self {
        macro_rules! read {
            ($t:ty) => {{
                let p = fs.path::<$t>();
                if p.exists() {
                    fs.read::<$t>().ok()
                } else {
                    None
                }
            }};
        }

        Self {
            config: read!(base::Config),
            transactions: read!(base::Transactions),
        }
    }
}

/// Representation of a working directory's file contents. Unset fields
/// correspond to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    transactions: Option<&'a str>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory's [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Sets the directory's [`base::Transactions`] file contents. Contents
    /// need not parse, so that loading failures can be tested.
    pub fn with_transactions(mut self, s: &'a str) -> Self {
        self.transactions = Some(s);
        self
    }

    /// Writes string contents verbatim to `fs`.
    pub fn to_fs(&self, fs: &base::Fs) {
        fn write<T>(fs: &base::Fs, field: Option<&str>)
        where
            T: base::fs::Io,
        {
            if let Some(s) = field {
                std::fs::write(fs.path::<T>(), s).unwrap()
            }
        }

        write::<base::Config>(fs, self.config);
        write::<base::Transactions>(fs, self.transactions);
    }

    /// Returns the parsed state. Files that fail to parse are left out, as
    /// they are not expected to be touched by the command under test.
    pub fn to_state(&self) -> State {
        State {
            config: self.config.and_then(|s| s.parse().ok()),
            transactions: self.transactions.and_then(|s| s.parse().ok()),
        }
    }
}
