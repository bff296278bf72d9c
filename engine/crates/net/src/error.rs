use std::io;

#[derive(Debug, thiserror::Error)]
pub enum NetError {
    /// Fatal at startup: the listener never comes up.
    #[error("failed to bind command listener on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to accept controller connection: {0}")]
    Accept(#[from] io::Error),
}
