use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Socket error: {0}")]
    SocketError(#[from] std::io::Error),

    #[error("Could not resolve endpoint: {0}")]
    Unresolvable(String),

    #[error("Payload of {len} bytes exceeds datagram limit of {max}")]
    OversizedPayload { len: usize, max: usize },

    #[error("Short send: {sent} of {expected} bytes")]
    ShortSend { sent: usize, expected: usize },
}
