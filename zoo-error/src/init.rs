use thiserror::Error;

/// Errors raised while wiring up the application context.
#[derive(Error, Debug)]
pub enum InitContextError {
    /// Context accessed before initialization completed
    #[error("context not initialized: {0}")]
    NotInitialized(String),
    /// Context initialized more than once
    #[error("context already initialized")]
    AlreadyInitialized,
    #[error("primitive error: {0}")]
    Primitive(String),
}
