//! 类型标签
//!
//! 每个逻辑类型对应一个零大小的标签类型，标签通过 [`TypeTraits`] 携带：
//! - `TYPE`：与列声明比较的逻辑类型
//! - `Native<'a>`：解码结果的原生类型（变长类型为借用自间接缓冲区的视图）
//! - `decode`：从定长槽位（以及间接缓冲区）解码
//!
//! `RowView::get::<T>` 只有一份实现，按标签参数化。

use crate::core::codec::error::{CodecError, CodecResult};

use super::DataType;

/// 间接引用描述符的宽度：u64 偏移 + u64 长度
pub const INDIRECT_REF_SIZE: usize = 16;

pub trait TypeTraits {
    const TYPE: DataType;
    type Native<'a>;

    fn decode<'a>(slot: &'a [u8], indirect: &'a [u8]) -> CodecResult<Self::Native<'a>>;
}

fn read_fixed<const N: usize>(bytes: &[u8], what: &str) -> CodecResult<[u8; N]> {
    bytes
        .get(..N)
        .and_then(|b| b.try_into().ok())
        .ok_or_else(|| {
            CodecError::InvalidData(format!(
                "cell too short for {}: need {} bytes, have {}",
                what,
                N,
                bytes.len()
            ))
        })
}

/// 变长值在定长槽位中的描述符，偏移相对于批次的间接缓冲区起点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndirectRef {
    pub offset: u64,
    pub len: u64,
}

impl IndirectRef {
    pub fn decode(slot: &[u8]) -> CodecResult<Self> {
        let offset = u64::from_le_bytes(read_fixed::<8>(slot, "indirect offset")?);
        let len = u64::from_le_bytes(read_fixed::<8>(
            slot.get(8..).unwrap_or_default(),
            "indirect length",
        )?);
        Ok(Self { offset, len })
    }

    /// 在间接缓冲区中定位载荷，零拷贝
    pub fn resolve<'a>(&self, indirect: &'a [u8]) -> CodecResult<&'a [u8]> {
        let bounds = usize::try_from(self.offset)
            .ok()
            .zip(usize::try_from(self.len).ok())
            .and_then(|(start, len)| Some((start, start.checked_add(len)?)))
            .filter(|&(_, end)| end <= indirect.len());

        match bounds {
            Some((start, end)) => Ok(&indirect[start..end]),
            None => {
                log::warn!(
                    "indirect reference (offset={}, len={}) exceeds indirect buffer of {} bytes",
                    self.offset,
                    self.len,
                    indirect.len()
                );
                Err(CodecError::InvalidData(format!(
                    "indirect reference out of bounds: offset {} len {} (buffer {} bytes)",
                    self.offset,
                    self.len,
                    indirect.len()
                )))
            }
        }
    }
}

macro_rules! fixed_width_type {
    ($(#[$meta:meta])* $tag:ident => $data_type:ident, $native:ty, $width:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $tag;

        impl TypeTraits for $tag {
            const TYPE: DataType = DataType::$data_type;
            type Native<'a> = $native;

            fn decode<'a>(slot: &'a [u8], _indirect: &'a [u8]) -> CodecResult<Self::Native<'a>> {
                read_fixed::<$width>(slot, Self::TYPE.name()).map(<$native>::from_le_bytes)
            }
        }
    };
}

macro_rules! flag_type {
    ($(#[$meta:meta])* $tag:ident => $data_type:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $tag;

        impl TypeTraits for $tag {
            const TYPE: DataType = DataType::$data_type;
            type Native<'a> = bool;

            fn decode<'a>(slot: &'a [u8], _indirect: &'a [u8]) -> CodecResult<Self::Native<'a>> {
                read_fixed::<1>(slot, Self::TYPE.name()).map(|[b]| b != 0)
            }
        }
    };
}

flag_type!(BoolType => Bool);
flag_type!(
    /// 删除标记虚拟列，按布尔值读取
    IsDeletedType => IsDeleted
);

fixed_width_type!(Int8Type => Int8, i8, 1);
fixed_width_type!(Int16Type => Int16, i16, 2);
fixed_width_type!(Int32Type => Int32, i32, 4);
fixed_width_type!(Int64Type => Int64, i64, 8);
fixed_width_type!(Int128Type => Int128, i128, 16);
fixed_width_type!(FloatType => Float, f32, 4);
fixed_width_type!(DoubleType => Double, f64, 8);
fixed_width_type!(
    /// 自 Unix 纪元起的天数
    DateType => Date, i32, 4
);
fixed_width_type!(
    /// 自 Unix 纪元（UTC）起的微秒数
    UnixtimeMicrosType => UnixtimeMicros, i64, 8
);
fixed_width_type!(Decimal32Type => Decimal32, i32, 4);
fixed_width_type!(Decimal64Type => Decimal64, i64, 8);
fixed_width_type!(Decimal128Type => Decimal128, i128, 16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryType;

impl TypeTraits for BinaryType {
    const TYPE: DataType = DataType::Binary;
    type Native<'a> = &'a [u8];

    fn decode<'a>(slot: &'a [u8], indirect: &'a [u8]) -> CodecResult<Self::Native<'a>> {
        IndirectRef::decode(slot)?.resolve(indirect)
    }
}

fn decode_utf8<'a>(slot: &'a [u8], indirect: &'a [u8], data_type: DataType) -> CodecResult<&'a str> {
    let bytes = IndirectRef::decode(slot)?.resolve(indirect)?;
    std::str::from_utf8(bytes)
        .map_err(|e| CodecError::InvalidData(format!("invalid UTF-8 in {} value: {}", data_type, e)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringType;

impl TypeTraits for StringType {
    const TYPE: DataType = DataType::String;
    type Native<'a> = &'a str;

    fn decode<'a>(slot: &'a [u8], indirect: &'a [u8]) -> CodecResult<Self::Native<'a>> {
        decode_utf8(slot, indirect, Self::TYPE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarcharType;

impl TypeTraits for VarcharType {
    const TYPE: DataType = DataType::Varchar;
    type Native<'a> = &'a str;

    fn decode<'a>(slot: &'a [u8], indirect: &'a [u8]) -> CodecResult<Self::Native<'a>> {
        decode_utf8(slot, indirect, Self::TYPE)
    }
}
