/// Core error type for the relay.
///
/// Adapter crates map their specific errors into this type so the bot core
/// can handle failures consistently (fatal configuration vs transient
/// runtime). Per-request completion failures carry their own typed error and
/// never reach this level; see `model::types::CompletionError`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
