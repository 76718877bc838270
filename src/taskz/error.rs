use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskzError {
    #[error("I'm sorry, but I don't know what \"{0}\" means :-(")]
    UnknownCommand(String),

    #[error("{0}")]
    InvalidFormat(String),

    #[error("\"{0}\" is a wrong date format! Please use YYYY-MM-DD format.")]
    InvalidDateFormat(String),

    #[error("\"{0}\" is not a valid number!")]
    InvalidNumber(String),

    #[error("Task number {0} was given more than once!")]
    DuplicateIndex(i64),

    #[error("Task {index} does not exist (the list has {len} tasks)")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Invalid input! Please key in either \"y\" or \"n\"")]
    InvalidYesNo,

    #[error("Corrupt data file at line {line}: {reason}")]
    CorruptPersistedRow { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, TaskzError>;
