//! Datum - 单元格值的动态表示
//!
//! 变长类型借用间接缓冲区，不做拷贝

use crate::core::codec::error::CodecResult;

use super::traits::*;
use super::DataType;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Datum<'a> {
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Int128(i128),
    Float(f32),
    Double(f64),
    String(&'a str),
    Binary(&'a [u8]),
    Varchar(&'a str),
    Date(i32),
    UnixtimeMicros(i64),
    Decimal32(i32),
    Decimal64(i64),
    Decimal128(i128),
    IsDeleted(bool),
}

impl<'a> Datum<'a> {
    /// 按逻辑类型解码一个非空单元格
    pub fn decode(data_type: DataType, slot: &'a [u8], indirect: &'a [u8]) -> CodecResult<Self> {
        Ok(match data_type {
            DataType::Bool => Datum::Bool(BoolType::decode(slot, indirect)?),
            DataType::Int8 => Datum::Int8(Int8Type::decode(slot, indirect)?),
            DataType::Int16 => Datum::Int16(Int16Type::decode(slot, indirect)?),
            DataType::Int32 => Datum::Int32(Int32Type::decode(slot, indirect)?),
            DataType::Int64 => Datum::Int64(Int64Type::decode(slot, indirect)?),
            DataType::Int128 => Datum::Int128(Int128Type::decode(slot, indirect)?),
            DataType::Float => Datum::Float(FloatType::decode(slot, indirect)?),
            DataType::Double => Datum::Double(DoubleType::decode(slot, indirect)?),
            DataType::String => Datum::String(StringType::decode(slot, indirect)?),
            DataType::Binary => Datum::Binary(BinaryType::decode(slot, indirect)?),
            DataType::Varchar => Datum::Varchar(VarcharType::decode(slot, indirect)?),
            DataType::Date => Datum::Date(DateType::decode(slot, indirect)?),
            DataType::UnixtimeMicros => {
                Datum::UnixtimeMicros(UnixtimeMicrosType::decode(slot, indirect)?)
            }
            DataType::Decimal32 => Datum::Decimal32(Decimal32Type::decode(slot, indirect)?),
            DataType::Decimal64 => Datum::Decimal64(Decimal64Type::decode(slot, indirect)?),
            DataType::Decimal128 => Datum::Decimal128(Decimal128Type::decode(slot, indirect)?),
            DataType::IsDeleted => Datum::IsDeleted(IsDeletedType::decode(slot, indirect)?),
        })
    }

    pub fn data_type(&self) -> DataType {
        match self {
            Datum::Bool(_) => DataType::Bool,
            Datum::Int8(_) => DataType::Int8,
            Datum::Int16(_) => DataType::Int16,
            Datum::Int32(_) => DataType::Int32,
            Datum::Int64(_) => DataType::Int64,
            Datum::Int128(_) => DataType::Int128,
            Datum::Float(_) => DataType::Float,
            Datum::Double(_) => DataType::Double,
            Datum::String(_) => DataType::String,
            Datum::Binary(_) => DataType::Binary,
            Datum::Varchar(_) => DataType::Varchar,
            Datum::Date(_) => DataType::Date,
            Datum::UnixtimeMicros(_) => DataType::UnixtimeMicros,
            Datum::Decimal32(_) => DataType::Decimal32,
            Datum::Decimal64(_) => DataType::Decimal64,
            Datum::Decimal128(_) => DataType::Decimal128,
            Datum::IsDeleted(_) => DataType::IsDeleted,
        }
    }

    /// 十进制值的非缩放整数，非十进制类型返回 `None`
    pub fn unscaled_decimal(&self) -> Option<i128> {
        match *self {
            Datum::Decimal32(v) => Some(i128::from(v)),
            Datum::Decimal64(v) => Some(i128::from(v)),
            Datum::Decimal128(v) => Some(v),
            _ => None,
        }
    }
}
