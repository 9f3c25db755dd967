//! Schema定义
//!
//! 描述一行定长区域的布局：列按声明顺序紧密排列，空值位图紧随定长区域之后，
//! 每个可空列占一位（按可空列的声明顺序编号，字节内低位在前）。

use std::collections::HashMap;

use crate::core::codec::error::{CodecError, CodecResult};
use crate::core::types::DataType;

/// 类型附加属性：十进制的精度/标度，varchar 的最大长度
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnTypeAttributes {
    pub precision: u8,
    pub scale: u8,
    pub length: u16,
}

impl ColumnTypeAttributes {
    pub fn decimal(precision: u8, scale: u8) -> Self {
        Self {
            precision,
            scale,
            length: 0,
        }
    }

    pub fn varchar(length: u16) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }
}

/// 列定义
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    name: String,
    data_type: DataType,
    nullable: bool,
    attributes: ColumnTypeAttributes,
}

impl ColumnSchema {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: false,
            attributes: ColumnTypeAttributes::default(),
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn with_attributes(mut self, attributes: ColumnTypeAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn attributes(&self) -> &ColumnTypeAttributes {
        &self.attributes
    }

    pub fn byte_width(&self) -> usize {
        self.data_type.byte_width()
    }
}

/// 扫描投影的 Schema
#[derive(Debug, Clone, Default)]
pub struct Schema {
    columns: Vec<ColumnSchema>,
    offsets: Vec<usize>,
    null_ordinals: Vec<Option<usize>>,
    name_to_index: HashMap<String, usize>,
    byte_size: usize,
    num_nullable: usize,
    is_deleted_idx: Option<usize>,
}

impl Schema {
    pub fn new(columns: Vec<ColumnSchema>) -> CodecResult<Self> {
        let mut offsets = Vec::with_capacity(columns.len());
        let mut null_ordinals = Vec::with_capacity(columns.len());
        let mut name_to_index = HashMap::with_capacity(columns.len());
        let mut byte_size = 0;
        let mut num_nullable = 0;
        let mut is_deleted_idx = None;

        for (idx, col) in columns.iter().enumerate() {
            if name_to_index.insert(col.name.clone(), idx).is_some() {
                return Err(CodecError::InvalidArgument(format!(
                    "duplicate column name '{}'",
                    col.name
                )));
            }

            if col.data_type == DataType::IsDeleted {
                if let Some(first) = is_deleted_idx {
                    return Err(CodecError::InvalidArgument(format!(
                        "column '{}' is a second IS_DELETED virtual column (first is at index {})",
                        col.name, first
                    )));
                }
                is_deleted_idx = Some(idx);
            }

            offsets.push(byte_size);
            byte_size += col.byte_width();

            if col.nullable {
                null_ordinals.push(Some(num_nullable));
                num_nullable += 1;
            } else {
                null_ordinals.push(None);
            }
        }

        Ok(Self {
            columns,
            offsets,
            null_ordinals,
            name_to_index,
            byte_size,
            num_nullable,
            is_deleted_idx,
        })
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[ColumnSchema] {
        &self.columns
    }

    pub fn column(&self, idx: usize) -> Option<&ColumnSchema> {
        self.columns.get(idx)
    }

    pub fn find_column(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }

    /// 列在定长区域中的偏移，`idx` 必须有效
    pub fn column_offset(&self, idx: usize) -> usize {
        self.offsets[idx]
    }

    /// 定长区域的总宽度，也是空值位图的起始位置
    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    pub fn num_nullable_columns(&self) -> usize {
        self.num_nullable
    }

    /// 列在空值位图中的位序号；不可空列没有位
    pub fn nullable_ordinal(&self, idx: usize) -> Option<usize> {
        self.null_ordinals.get(idx).copied().flatten()
    }

    pub fn null_bitmap_size(&self) -> usize {
        self.num_nullable.div_ceil(8)
    }

    /// 一行在批次直接缓冲区中占用的字节数
    pub fn row_stride(&self) -> usize {
        self.byte_size + self.null_bitmap_size()
    }

    pub fn first_is_deleted_virtual_column_idx(&self) -> Option<usize> {
        self.is_deleted_idx
    }
}
