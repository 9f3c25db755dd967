//! Codec 错误类型定义

use thiserror::Error;

use crate::core::types::DataType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Column index {index} out of bounds (schema has {num_columns} columns)")]
    ColumnIndexOutOfBounds { index: usize, num_columns: usize },

    #[error("Row index {index} out of bounds (batch has {num_rows} rows)")]
    RowIndexOutOfBounds { index: usize, num_rows: usize },

    /// 请求的类型与列声明的逻辑类型不一致，不做任何隐式转换
    #[error("invalid type {requested} provided for column '{column}' (expected {actual})")]
    TypeMismatch {
        requested: DataType,
        column: String,
        actual: DataType,
    },

    #[error("column '{0}' is NULL")]
    ValueIsNull(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl CodecError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CodecError::ColumnNotFound(_))
    }

    pub fn is_null_value(&self) -> bool {
        matches!(self, CodecError::ValueIsNull(_))
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
pub type CodecResult<T> = std::result::Result<T, CodecError>;
