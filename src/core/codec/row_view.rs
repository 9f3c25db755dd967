//! RowView - 扫描行的零拷贝访问器
//!
//! `RowView` 借用三样东西：schema、本行的定长区域（含其后的空值位图）以及批次的间接缓冲区。
//! 它不拥有任何内存，复制代价很低；借用检查保证它不会比所属批次活得更久。
//!
//! ## 取值流程
//!
//! 1. 按名字访问时先解析为列下标，找不到返回 `ColumnNotFound`
//! 2. 比较列声明的逻辑类型与请求的类型，不一致返回 `TypeMismatch`
//! 3. 可空列检查空值位，已置位返回 `ValueIsNull`
//! 4. 从 `row_data[offset..]` 读取定长值，或解析间接引用得到借用视图
//!
//! ```ignore
//! use scanrow::core::types::{Int32Type, StringType};
//!
//! let row = RowView::new(&schema, row_bytes, indirect_bytes)?;
//! let id: i32 = row.get::<Int32Type>(0)?;
//! let name: &str = row.get_by_name::<StringType>("name")?;
//! ```

use std::fmt;

use crate::core::schema::{ColumnSchema, Schema};
use crate::core::types::{
    DataType, Datum, Decimal128Type, Decimal32Type, Decimal64Type, IsDeletedType, TypeTraits,
};

use super::cell_format::RowCell;
use super::error::{CodecError, CodecResult};
use super::redaction::Redaction;

#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    schema: &'a Schema,
    row_data: &'a [u8],
    indirect_data: &'a [u8],
}

impl<'a> RowView<'a> {
    /// `row_data` 至少要覆盖一整行（定长区域加空值位图），多出的部分会被截掉
    pub fn new(
        schema: &'a Schema,
        row_data: &'a [u8],
        indirect_data: &'a [u8],
    ) -> CodecResult<Self> {
        let stride = schema.row_stride();
        if row_data.len() < stride {
            return Err(CodecError::InvalidData(format!(
                "row data has {} bytes, schema requires {}",
                row_data.len(),
                stride
            )));
        }
        Ok(Self::from_parts(schema, &row_data[..stride], indirect_data))
    }

    /// 调用方保证 `row_data` 恰好是一整行
    pub(crate) fn from_parts(
        schema: &'a Schema,
        row_data: &'a [u8],
        indirect_data: &'a [u8],
    ) -> Self {
        debug_assert_eq!(row_data.len(), schema.row_stride());
        Self {
            schema,
            row_data,
            indirect_data,
        }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn row_data(&self) -> &'a [u8] {
        self.row_data
    }

    pub fn indirect_data(&self) -> &'a [u8] {
        self.indirect_data
    }

    /// 按列下标取值，`T` 为类型标签（如 `Int32Type`）
    pub fn get<T: TypeTraits>(&self, col_idx: usize) -> CodecResult<T::Native<'a>> {
        let col = self.column(col_idx)?;
        if col.data_type() != T::TYPE {
            return Err(bad_type(T::TYPE, col));
        }
        if self.null_bit(col_idx) {
            return Err(CodecError::ValueIsNull(col.name().to_string()));
        }
        T::decode(self.slot(col_idx), self.indirect_data)
    }

    pub fn get_by_name<T: TypeTraits>(&self, col_name: &str) -> CodecResult<T::Native<'a>> {
        self.get::<T>(self.find_column(col_name)?)
    }

    /// 不可空列恒为 `false`
    pub fn is_null(&self, col_idx: usize) -> CodecResult<bool> {
        self.column(col_idx)?;
        Ok(self.null_bit(col_idx))
    }

    pub fn is_null_by_name(&self, col_name: &str) -> CodecResult<bool> {
        self.is_null(self.find_column(col_name)?)
    }

    /// 读取删除标记虚拟列；只有部分变更跟踪扫描会带这一列
    pub fn is_deleted(&self) -> CodecResult<bool> {
        let col_idx = self
            .schema
            .first_is_deleted_virtual_column_idx()
            .ok_or_else(|| CodecError::ColumnNotFound("IS_DELETED virtual column".to_string()))?;
        self.get::<IsDeletedType>(col_idx)
    }

    /// 按列的物理宽度读取十进制值，并带符号扩展为 i128
    pub fn get_unscaled_decimal(&self, col_idx: usize) -> CodecResult<i128> {
        let col = self.column(col_idx)?;
        match col.data_type() {
            DataType::Decimal32 => self.get::<Decimal32Type>(col_idx).map(i128::from),
            DataType::Decimal64 => self.get::<Decimal64Type>(col_idx).map(i128::from),
            DataType::Decimal128 => self.get::<Decimal128Type>(col_idx),
            other => Err(CodecError::InvalidArgument(format!(
                "invalid type {} provided for column '{}' (expected decimal)",
                other,
                col.name()
            ))),
        }
    }

    pub fn get_unscaled_decimal_by_name(&self, col_name: &str) -> CodecResult<i128> {
        self.get_unscaled_decimal(self.find_column(col_name)?)
    }

    /// 单元格的定长槽位原始字节，不做空值和类型检查
    pub fn cell(&self, col_idx: usize) -> CodecResult<&'a [u8]> {
        self.column(col_idx)?;
        Ok(self.slot(col_idx))
    }

    /// 按列声明的类型动态解码，空值返回 `None`
    pub fn value(&self, col_idx: usize) -> CodecResult<Option<Datum<'a>>> {
        let col = self.column(col_idx)?;
        if self.null_bit(col_idx) {
            return Ok(None);
        }
        Datum::decode(col.data_type(), self.slot(col_idx), self.indirect_data).map(Some)
    }

    pub fn value_by_name(&self, col_name: &str) -> CodecResult<Option<Datum<'a>>> {
        self.value(self.find_column(col_name)?)
    }

    /// 调试字符串，例如 `(int32 id=42, string name=NULL)`
    ///
    /// 显式请求调试输出即视为有意披露，因此固定不脱敏
    pub fn to_debug_string(&self) -> String {
        self.to_debug_string_with(Redaction::Disabled)
    }

    pub fn to_debug_string_with(&self, redaction: Redaction) -> String {
        let mut ret = String::new();
        // 写入 String 不会失败
        let _ = self.write_debug(&mut ret, redaction);
        ret
    }

    /// 以 CSV 形式重建 `ret`（先清空），返回其内容
    pub fn to_csv_row_string<'s>(&self, ret: &'s mut String) -> &'s str {
        ret.clear();
        for (i, col) in self.schema.columns().iter().enumerate() {
            if i > 0 {
                ret.push(',');
            }
            let _ = col.append_csv_cell(&RowCell::new(*self, i), ret);
        }
        ret.as_str()
    }

    fn write_debug<W: fmt::Write>(&self, out: &mut W, redaction: Redaction) -> fmt::Result {
        out.write_char('(')?;
        for (i, col) in self.schema.columns().iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            col.append_debug_cell(&RowCell::new(*self, i), redaction, out)?;
        }
        out.write_char(')')
    }

    fn column(&self, col_idx: usize) -> CodecResult<&'a ColumnSchema> {
        self.schema
            .column(col_idx)
            .ok_or(CodecError::ColumnIndexOutOfBounds {
                index: col_idx,
                num_columns: self.schema.num_columns(),
            })
    }

    fn find_column(&self, col_name: &str) -> CodecResult<usize> {
        self.schema
            .find_column(col_name)
            .ok_or_else(|| CodecError::ColumnNotFound(col_name.to_string()))
    }

    pub(crate) fn null_bit(&self, col_idx: usize) -> bool {
        match self.schema.nullable_ordinal(col_idx) {
            Some(bit) => {
                let bitmap = &self.row_data[self.schema.byte_size()..];
                bitmap[bit >> 3] & (1 << (bit & 7)) != 0
            }
            None => false,
        }
    }

    pub(crate) fn slot(&self, col_idx: usize) -> &'a [u8] {
        let offset = self.schema.column_offset(col_idx);
        let width = self.schema.columns()[col_idx].byte_width();
        &self.row_data[offset..offset + width]
    }
}

impl fmt::Display for RowView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_debug(f, Redaction::Disabled)
    }
}

fn bad_type(requested: DataType, col: &ColumnSchema) -> CodecError {
    CodecError::TypeMismatch {
        requested,
        column: col.name().to_string(),
        actual: col.data_type(),
    }
}
