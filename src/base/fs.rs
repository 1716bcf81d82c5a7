use crate::base::Config;
use crate::base::Transactions;

/// Application filesystem.
pub struct Fs {
    dir: std::path::PathBuf,
}

/// Marker for types that are serialized to or deserialized from files.
pub trait Io: Default + ToString + std::str::FromStr {
    const FILENAME: &'static str;
}
impl Io for Config {
    const FILENAME: &'static str = ".pivot.json";
}
impl Io for Transactions {
    const FILENAME: &'static str = "transactions.json";
}

impl Fs {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { dir: dir.into() }
    }

    /// Returns the working directory.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    /// Returns true if the working directory holds a config file.
    pub fn is_initialized(&self) -> bool {
        self.path::<Config>().is_file()
    }

    /// Returns the path which `T` will be serialized to and deserialized from.
    pub fn path<T>(&self) -> std::path::PathBuf
    where
        T: Io,
    {
        self.dir.join(T::FILENAME)
    }

    /// Deserializes `T` from its file. A missing file reads as `T::default()`.
    pub fn read<T>(&self) -> Result<T, ReadError>
    where
        T: Io,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        let s = match std::fs::read_to_string(self.path::<T>()) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("'{}' not found, using defaults", T::FILENAME);
                return Ok(T::default());
            }
            Err(e) => return Err(ReadError::Io(e)),
        };
        log::debug!("read {} bytes from '{}'", s.len(), T::FILENAME);
        s.parse::<T>().map_err(|e| ReadError::Parse(Box::new(e)))
    }

    /// Serializes `obj` to its file, replacing any previous contents.
    pub fn write<T>(&self, obj: &T) -> std::io::Result<()>
    where
        T: Io,
    {
        let s = obj.to_string();
        log::debug!("writing {} bytes to '{}'", s.len(), T::FILENAME);
        std::fs::write(self.path::<T>(), s)
    }
}

/// Failure to load a file-backed type. Both variants display their cause
/// unchanged, leaving the file name to the caller's context.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(std::io::Error),
    #[error(transparent)]
    Parse(Box<dyn std::error::Error + Send + Sync>),
}
