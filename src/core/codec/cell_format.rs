//! 单元格渲染
//!
//! 渲染由列定义驱动：`ColumnSchema` 知道如何按自己的逻辑类型打印一个单元格，
//! 单元格本身只需提供空值判断和定长槽位（见 [`CellRef`]）。
//!
//! - 调试格式：`<类型名> <列名>=<值>`，空值为 `NULL`
//! - CSV 格式：只输出值；字符串/二进制一律加双引号，内部双引号写成两个
//!
//! 无法解码的单元格（例如越界的间接引用）渲染为 `<invalid>`，不会让整行渲染失败。

use std::fmt::{self, Write};

use chrono::{DateTime, NaiveDate};

use crate::core::schema::ColumnSchema;
use crate::core::types::{BinaryType, Datum, TypeTraits};

use super::redaction::{Redaction, REDACTED_MARKER};
use super::row_view::RowView;

pub const NULL_MARKER: &str = "NULL";
pub const INVALID_MARKER: &str = "<invalid>";

/// 0001-01-01 到 1970-01-01 的天数
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// 渲染所需的最小单元格接口
pub trait CellRef<'a> {
    fn is_null(&self) -> bool;

    /// 定长槽位的原始字节
    fn ptr(&self) -> &'a [u8];

    /// 变长值所在的间接缓冲区
    fn indirect_data(&self) -> &'a [u8];
}

/// 行中的一个单元格
#[derive(Debug, Clone, Copy)]
pub struct RowCell<'a> {
    row: RowView<'a>,
    col_idx: usize,
}

impl<'a> RowCell<'a> {
    /// `col_idx` 必须是行 schema 中的有效下标
    pub(crate) fn new(row: RowView<'a>, col_idx: usize) -> Self {
        debug_assert!(col_idx < row.schema().num_columns());
        Self { row, col_idx }
    }
}

impl<'a> CellRef<'a> for RowCell<'a> {
    fn is_null(&self) -> bool {
        self.row.null_bit(self.col_idx)
    }

    fn ptr(&self) -> &'a [u8] {
        self.row.slot(self.col_idx)
    }

    fn indirect_data(&self) -> &'a [u8] {
        self.row.indirect_data()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteStyle {
    Debug,
    Csv,
}

impl ColumnSchema {
    pub fn append_debug_cell<'a, C, W>(
        &self,
        cell: &C,
        redaction: Redaction,
        out: &mut W,
    ) -> fmt::Result
    where
        C: CellRef<'a>,
        W: Write,
    {
        write!(out, "{} {}=", self.data_type().name(), self.name())?;
        if self.is_nullable() && cell.is_null() {
            return out.write_str(NULL_MARKER);
        }
        if redaction.is_enabled() {
            return out.write_str(REDACTED_MARKER);
        }
        self.append_value(cell, QuoteStyle::Debug, out)
    }

    pub fn append_csv_cell<'a, C, W>(&self, cell: &C, out: &mut W) -> fmt::Result
    where
        C: CellRef<'a>,
        W: Write,
    {
        if self.is_nullable() && cell.is_null() {
            return out.write_str(NULL_MARKER);
        }
        self.append_value(cell, QuoteStyle::Csv, out)
    }

    fn append_value<'a, C, W>(&self, cell: &C, style: QuoteStyle, out: &mut W) -> fmt::Result
    where
        C: CellRef<'a>,
        W: Write,
    {
        let data_type = self.data_type();

        // 字符串按字节渲染，非法 UTF-8 也能以转义形式输出
        if data_type.is_indirect() {
            return match BinaryType::decode(cell.ptr(), cell.indirect_data()) {
                Ok(bytes) => write_quoted(out, bytes, style),
                Err(_) => out.write_str(INVALID_MARKER),
            };
        }

        match Datum::decode(data_type, cell.ptr(), cell.indirect_data()) {
            Ok(datum) => self.write_datum(out, datum),
            Err(_) => out.write_str(INVALID_MARKER),
        }
    }

    fn write_datum<W: Write>(&self, out: &mut W, datum: Datum<'_>) -> fmt::Result {
        match datum {
            Datum::Bool(v) | Datum::IsDeleted(v) => write!(out, "{}", v),
            Datum::Int8(v) => write!(out, "{}", v),
            Datum::Int16(v) => write!(out, "{}", v),
            Datum::Int32(v) => write!(out, "{}", v),
            Datum::Int64(v) => write!(out, "{}", v),
            Datum::Int128(v) => write!(out, "{}", v),
            Datum::Float(v) => write!(out, "{}", v),
            Datum::Double(v) => write!(out, "{}", v),
            Datum::Date(days) => write_date(out, days),
            Datum::UnixtimeMicros(micros) => write_timestamp(out, micros),
            Datum::Decimal32(_) | Datum::Decimal64(_) | Datum::Decimal128(_) => {
                let unscaled = datum.unscaled_decimal().unwrap_or_default();
                write_decimal(out, unscaled, self.attributes().scale)
            }
            Datum::String(s) | Datum::Varchar(s) => {
                write_quoted(out, s.as_bytes(), QuoteStyle::Debug)
            }
            Datum::Binary(b) => write_quoted(out, b, QuoteStyle::Debug),
        }
    }
}

fn write_quoted<W: Write>(out: &mut W, bytes: &[u8], style: QuoteStyle) -> fmt::Result {
    out.write_char('"')?;
    for chunk in bytes.utf8_chunks() {
        for c in chunk.valid().chars() {
            match c {
                '"' if style == QuoteStyle::Csv => out.write_str("\"\"")?,
                '"' => out.write_str("\\\"")?,
                '\\' => out.write_str("\\\\")?,
                '\n' => out.write_str("\\n")?,
                '\r' => out.write_str("\\r")?,
                '\t' => out.write_str("\\t")?,
                c if c.is_control() => write!(out, "\\x{:02x}", c as u32)?,
                c => out.write_char(c)?,
            }
        }
        for b in chunk.invalid() {
            write!(out, "\\x{:02x}", b)?;
        }
    }
    out.write_char('"')
}

fn write_date<W: Write>(out: &mut W, days: i32) -> fmt::Result {
    match days
        .checked_add(UNIX_EPOCH_DAYS_FROM_CE)
        .and_then(NaiveDate::from_num_days_from_ce_opt)
    {
        Some(date) => write!(out, "{}", date.format("%Y-%m-%d")),
        None => write!(out, "{}", days),
    }
}

fn write_timestamp<W: Write>(out: &mut W, micros: i64) -> fmt::Result {
    match DateTime::from_timestamp_micros(micros) {
        Some(ts) => write!(out, "{}", ts.format("%Y-%m-%dT%H:%M:%S%.6fZ")),
        None => write!(out, "{}", micros),
    }
}

fn write_decimal<W: Write>(out: &mut W, unscaled: i128, scale: u8) -> fmt::Result {
    if scale == 0 {
        return write!(out, "{}", unscaled);
    }

    let sign = if unscaled < 0 { "-" } else { "" };
    let digits = unscaled.unsigned_abs().to_string();
    let scale = usize::from(scale);

    if digits.len() > scale {
        let (int_part, frac_part) = digits.split_at(digits.len() - scale);
        write!(out, "{}{}.{}", sign, int_part, frac_part)
    } else {
        write!(out, "{}0.{:0>width$}", sign, digits, width = scale)
    }
}
