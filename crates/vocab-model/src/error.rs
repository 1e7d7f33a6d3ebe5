use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("word at rank {rank} is blank")]
    BlankWord { rank: usize },
    #[error("word index {index} is outside the catalog (size {size})")]
    IndexOutOfRange { index: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
