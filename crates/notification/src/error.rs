use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome of a single delivery attempt
pub type DeliveryResult = Result<(), DeliveryError>;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("invalid address {address:?}: {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("unable to reach relay {host}:{port}: {source}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: BoxError,
    },

    #[error("STARTTLS upgrade failed: {0}")]
    Tls(#[source] BoxError),

    #[error("relay rejected credentials: {0}")]
    Auth(#[source] BoxError),

    #[error("relay refused message: {0}")]
    Send(#[source] BoxError),

    #[error("delivery worker aborted: {0}")]
    Aborted(#[from] tokio::task::JoinError),
}
