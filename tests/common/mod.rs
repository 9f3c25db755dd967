//! 集成测试共享工具模块
//!
//! 按 schema 的行布局手工拼出批次缓冲区，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;

use scanrow::core::codec::ScanBatch;
use scanrow::core::schema::Schema;

/// 一个单元格的写入方式
#[derive(Debug, Clone)]
pub enum CellValue {
    Fixed(Vec<u8>),
    Indirect(Vec<u8>),
    Null,
}

impl CellValue {
    pub fn i32(v: i32) -> Self {
        CellValue::Fixed(v.to_le_bytes().to_vec())
    }

    pub fn i64(v: i64) -> Self {
        CellValue::Fixed(v.to_le_bytes().to_vec())
    }

    pub fn bool(v: bool) -> Self {
        CellValue::Fixed(vec![u8::from(v)])
    }

    pub fn str(s: &str) -> Self {
        CellValue::Indirect(s.as_bytes().to_vec())
    }

    pub fn bytes(b: &[u8]) -> Self {
        CellValue::Indirect(b.to_vec())
    }
}

/// 测试批次构建器
///
/// 直接缓冲区按行步长追加，所有变长载荷追加到共享的间接缓冲区
pub struct TestBatch {
    pub schema: Schema,
    pub direct: Vec<u8>,
    pub indirect: Vec<u8>,
    pub num_rows: usize,
}

impl TestBatch {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            direct: Vec::new(),
            indirect: Vec::new(),
            num_rows: 0,
        }
    }

    /// 追加一行，`cells` 按列声明顺序给出
    pub fn push_row(&mut self, cells: Vec<CellValue>) -> &mut Self {
        assert_eq!(cells.len(), self.schema.num_columns(), "每列需要一个单元格");

        let stride = self.schema.row_stride();
        let start = self.direct.len();
        self.direct.resize(start + stride, 0);

        for (col_idx, cell) in cells.into_iter().enumerate() {
            let offset = start + self.schema.column_offset(col_idx);
            match cell {
                CellValue::Fixed(bytes) => {
                    self.direct[offset..offset + bytes.len()].copy_from_slice(&bytes);
                }
                CellValue::Indirect(payload) => {
                    let payload_offset = self.indirect.len() as u64;
                    self.indirect.extend_from_slice(&payload);
                    self.direct[offset..offset + 8].copy_from_slice(&payload_offset.to_le_bytes());
                    self.direct[offset + 8..offset + 16]
                        .copy_from_slice(&(payload.len() as u64).to_le_bytes());
                }
                CellValue::Null => {
                    let bit = self
                        .schema
                        .nullable_ordinal(col_idx)
                        .expect("不可空列不能写入 NULL");
                    self.direct[start + self.schema.byte_size() + bit / 8] |= 1 << (bit % 8);
                }
            }
        }

        self.num_rows += 1;
        self
    }

    pub fn batch(&self) -> ScanBatch<'_> {
        ScanBatch::new(&self.schema, &self.direct, &self.indirect, self.num_rows)
            .expect("测试批次应该有效")
    }
}
