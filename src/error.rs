use thiserror::Error;

use crate::sys::EngineSysError;

#[derive(Error, Debug)]
pub enum FunctionalError {
    /// The EnergyPlus API library could not be found or loaded.
    #[error("EnergyPlus library not found: {0}")]
    LibraryNotFound(String),

    /// A required entry point is missing from the loaded library.
    #[error("Symbol not found in EnergyPlus library: {0}")]
    SymbolNotFound(String),

    /// The identifier cannot be passed across the C boundary
    /// (it contains an interior NUL byte).
    #[error("Invalid identifier {0:?}: contains a NUL byte")]
    InvalidName(String),

    /// The engine returned a null handle from a `*New` entry point.
    #[error("EnergyPlus could not create {entity} \"{name}\"")]
    HandleCreation { entity: &'static str, name: String },
}

impl From<EngineSysError> for FunctionalError {
    fn from(e: EngineSysError) -> Self {
        match e {
            EngineSysError::LibraryLoadFailed(msg) => Self::LibraryNotFound(msg),
            EngineSysError::SymbolNotFound(sym) => Self::SymbolNotFound(sym),
        }
    }
}

pub type Result<T> = std::result::Result<T, FunctionalError>;
