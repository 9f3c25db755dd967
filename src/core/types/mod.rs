// 核心类型系统模块
//
// 包含扫描行的逻辑类型定义：封闭的 DataType 枚举、按类型参数化的解码标签，
// 以及动态解码得到的 Datum

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod datum;
pub mod traits;

pub use datum::Datum;
pub use traits::{
    BinaryType, BoolType, DateType, Decimal128Type, Decimal32Type, Decimal64Type, DoubleType,
    FloatType, IndirectRef, Int128Type, Int16Type, Int32Type, Int64Type, Int8Type, IsDeletedType,
    StringType, TypeTraits, UnixtimeMicrosType, VarcharType, INDIRECT_REF_SIZE,
};

/// 列的逻辑类型
///
/// 集合是封闭的：所有按类型分派的地方都使用穷尽匹配，新增类型会在编译期暴露遗漏。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    Float,
    Double,
    String,
    Binary,
    Varchar,
    Date,
    UnixtimeMicros,
    Decimal32,
    Decimal64,
    Decimal128,
    /// 仅在变更跟踪类扫描中出现的虚拟列，标记该行已被删除
    IsDeleted,
}

impl DataType {
    pub const fn name(&self) -> &'static str {
        match self {
            DataType::Bool => "bool",
            DataType::Int8 => "int8",
            DataType::Int16 => "int16",
            DataType::Int32 => "int32",
            DataType::Int64 => "int64",
            DataType::Int128 => "int128",
            DataType::Float => "float",
            DataType::Double => "double",
            DataType::String => "string",
            DataType::Binary => "binary",
            DataType::Varchar => "varchar",
            DataType::Date => "date",
            DataType::UnixtimeMicros => "unixtime_micros",
            DataType::Decimal32 => "decimal32",
            DataType::Decimal64 => "decimal64",
            DataType::Decimal128 => "decimal128",
            DataType::IsDeleted => "is_deleted",
        }
    }

    /// 定长槽位宽度（字节）。变长类型返回间接引用描述符的宽度，而不是载荷长度
    pub const fn byte_width(&self) -> usize {
        match self {
            DataType::Bool | DataType::Int8 | DataType::IsDeleted => 1,
            DataType::Int16 => 2,
            DataType::Int32 | DataType::Float | DataType::Date | DataType::Decimal32 => 4,
            DataType::Int64
            | DataType::Double
            | DataType::UnixtimeMicros
            | DataType::Decimal64 => 8,
            DataType::Int128 | DataType::Decimal128 => 16,
            DataType::String | DataType::Binary | DataType::Varchar => INDIRECT_REF_SIZE,
        }
    }

    /// 值是否存放在间接缓冲区中
    pub const fn is_indirect(&self) -> bool {
        matches!(self, DataType::String | DataType::Binary | DataType::Varchar)
    }

    pub const fn is_decimal(&self) -> bool {
        matches!(
            self,
            DataType::Decimal32 | DataType::Decimal64 | DataType::Decimal128
        )
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
