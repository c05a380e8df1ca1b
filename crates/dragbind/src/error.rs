#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid button spec {spec:?}: {reason}")]
    InvalidButtonSpec { spec: String, reason: &'static str },
    #[error("unsupported client message format: {0}")]
    UnsupportedFormat(u8),
    #[error("unknown cursor glyph: {0:?}")]
    UnknownCursorGlyph(String),
    #[error("failed to load environment variables")]
    EnvVar(#[from] envy::Error),
    #[cfg(feature = "x11")]
    #[error("failed to connect to X server")]
    Connect(#[from] x11rb::errors::ConnectError),
    #[cfg(feature = "x11")]
    #[error("X connection error")]
    Connection(#[from] x11rb::errors::ConnectionError),
    #[cfg(feature = "x11")]
    #[error("X request failed")]
    Reply(#[from] x11rb::errors::ReplyError),
    #[cfg(feature = "x11")]
    #[error("X request failed")]
    ReplyOrId(#[from] x11rb::errors::ReplyOrIdError),
}

pub type Result<T> = std::result::Result<T, Error>;
