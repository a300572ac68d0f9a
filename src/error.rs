use thiserror::Error;

/// Errors raised while setting up or mutating an Ising simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IsingError {
    /// Rejected construction parameters (lattice size, temperature, coupling).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A spin value outside of {+1, -1}.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl IsingError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    pub fn state<T: Into<String>>(msg: T) -> Self {
        Self::InvalidState(msg.into())
    }
}

pub type Result<T, E = IsingError> = std::result::Result<T, E>;
