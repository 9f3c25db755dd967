//! ScanBatch - 一批扫描结果的借用视图
//!
//! 直接缓冲区按行步长连续存放各行的定长区域，间接缓冲区存放所有变长载荷。
//! 两块缓冲区都由调用方持有，批次只做行寻址，不分配也不释放内存。

use std::iter::FusedIterator;

use crate::core::schema::Schema;

use super::error::{CodecError, CodecResult};
use super::row_view::RowView;

#[derive(Debug, Clone, Copy)]
pub struct ScanBatch<'a> {
    schema: &'a Schema,
    direct_data: &'a [u8],
    indirect_data: &'a [u8],
    num_rows: usize,
    row_stride: usize,
}

impl<'a> ScanBatch<'a> {
    pub fn new(
        schema: &'a Schema,
        direct_data: &'a [u8],
        indirect_data: &'a [u8],
        num_rows: usize,
    ) -> CodecResult<Self> {
        let row_stride = schema.row_stride();
        let required = row_stride.checked_mul(num_rows).ok_or_else(|| {
            CodecError::InvalidData(format!(
                "batch size overflows: {} rows of {} bytes",
                num_rows, row_stride
            ))
        })?;

        if direct_data.len() < required {
            return Err(CodecError::InvalidData(format!(
                "direct data has {} bytes, {} rows of {} bytes require {}",
                direct_data.len(),
                num_rows,
                row_stride,
                required
            )));
        }

        log::debug!(
            "scan batch: {} rows, stride {} bytes, {} columns, {} indirect bytes",
            num_rows,
            row_stride,
            schema.num_columns(),
            indirect_data.len()
        );

        Ok(Self {
            schema,
            direct_data,
            indirect_data,
            num_rows,
            row_stride,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    pub fn row(&self, idx: usize) -> CodecResult<RowView<'a>> {
        if idx >= self.num_rows {
            return Err(CodecError::RowIndexOutOfBounds {
                index: idx,
                num_rows: self.num_rows,
            });
        }
        Ok(self.row_unchecked(idx))
    }

    pub fn iter(&self) -> ScanBatchIter<'a> {
        ScanBatchIter {
            batch: *self,
            next: 0,
        }
    }

    pub fn projection_schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn direct_data(&self) -> &'a [u8] {
        self.direct_data
    }

    pub fn indirect_data(&self) -> &'a [u8] {
        self.indirect_data
    }

    fn row_unchecked(&self, idx: usize) -> RowView<'a> {
        let start = idx * self.row_stride;
        RowView::from_parts(
            self.schema,
            &self.direct_data[start..start + self.row_stride],
            self.indirect_data,
        )
    }
}

impl<'a> IntoIterator for ScanBatch<'a> {
    type Item = RowView<'a>;
    type IntoIter = ScanBatchIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &ScanBatch<'a> {
    type Item = RowView<'a>;
    type IntoIter = ScanBatchIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct ScanBatchIter<'a> {
    batch: ScanBatch<'a>,
    next: usize,
}

impl<'a> Iterator for ScanBatchIter<'a> {
    type Item = RowView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.batch.num_rows {
            return None;
        }
        let row = self.batch.row_unchecked(self.next);
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.batch.num_rows - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScanBatchIter<'_> {}

impl FusedIterator for ScanBatchIter<'_> {}
