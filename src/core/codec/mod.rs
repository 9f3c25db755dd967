//! Codec 模块 - 扫描行解码
//!
//! 按外部提供的 schema 读取定长二进制行，提供类型检查的字段访问、空值语义，
//! 以及调试字符串与 CSV 渲染。只读，不负责编码。
//!
//! ## 架构
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │            codec::mod.rs            │
//! │       模块入口和公共类型导出         │
//! └─────────────────────────────────────┘
//!              │
//!    ┌─────────┼──────────┬───────────┐
//!    ▼         ▼          ▼           ▼
//! ┌──────┐ ┌────────┐ ┌─────────┐ ┌─────────┐
//! │error │ │scan_   │ │row_view │ │redaction│
//! │      │ │batch   │ │         │ │         │
//! └──────┘ └────────┘ └─────────┘ └─────────┘
//!                          │
//!                          ▼
//!                    ┌───────────┐
//!                    │cell_format│
//!                    └───────────┘
//! ```
//!
//! ## 二进制格式
//!
//! 批次由两块缓冲区组成：
//! - 直接缓冲区：每行一个定长区域，列按声明顺序紧密排列（小端），
//!   其后是空值位图（每个可空列一位，低位在前）
//! - 间接缓冲区：STRING/BINARY/VARCHAR 的载荷；定长槽位中存放
//!   `u64 偏移 + u64 长度` 的描述符
//!
//! ## 使用示例
//!
//! ```ignore
//! use scanrow::core::codec::ScanBatch;
//! use scanrow::core::types::{Int64Type, StringType};
//!
//! let batch = ScanBatch::new(&schema, &direct, &indirect, num_rows)?;
//! for row in &batch {
//!     let key = row.get::<Int64Type>(0)?;
//!     match row.get_by_name::<StringType>("payload") {
//!         Ok(s) => println!("{} => {}", key, s),
//!         Err(e) if e.is_null_value() => println!("{} => NULL", key),
//!         Err(e) => return Err(e),
//!     }
//! }
//! ```

pub mod cell_format;
pub mod error;
pub mod redaction;
pub mod row_view;
pub mod scan_batch;

#[cfg(test)]
pub(crate) mod test_util;

pub use cell_format::{CellRef, RowCell, INVALID_MARKER, NULL_MARKER};
pub use error::{CodecError, CodecResult, Result};
pub use redaction::{Redaction, REDACTED_MARKER};
pub use row_view::RowView;
pub use scan_batch::{ScanBatch, ScanBatchIter};
