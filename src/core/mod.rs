pub mod codec;
pub mod schema;
pub mod types;

// 错误和结果类型
pub use codec::{CodecError, CodecResult};

// 行访问
pub use codec::{Redaction, RowView, ScanBatch};

// Schema 与类型
pub use schema::{ColumnSchema, ColumnTypeAttributes, Schema};
pub use types::{DataType, Datum, TypeTraits};
