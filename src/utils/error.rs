use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    #[error("operation invoked on an absent value")]
    NullDereference,
}

pub type Result<T> = std::result::Result<T, DemoError>;
