//! 单元测试用的行编码工具
//!
//! 按 schema 布局手工拼出直接缓冲区和间接缓冲区

use crate::core::schema::Schema;

#[derive(Debug, Clone)]
pub(crate) enum Cell {
    Fixed(Vec<u8>),
    Indirect(Vec<u8>),
    Null,
}

impl Cell {
    pub(crate) fn fixed(bytes: impl AsRef<[u8]>) -> Self {
        Cell::Fixed(bytes.as_ref().to_vec())
    }

    pub(crate) fn int32(v: i32) -> Self {
        Cell::fixed(v.to_le_bytes())
    }

    pub(crate) fn boolean(v: bool) -> Self {
        Cell::Fixed(vec![u8::from(v)])
    }

    pub(crate) fn text(s: &str) -> Self {
        Cell::Indirect(s.as_bytes().to_vec())
    }
}

/// 编码多行，返回 (直接缓冲区, 间接缓冲区)
pub(crate) fn encode_rows(schema: &Schema, rows: &[Vec<Cell>]) -> (Vec<u8>, Vec<u8>) {
    let stride = schema.row_stride();
    let mut direct = vec![0u8; stride * rows.len()];
    let mut indirect = Vec::new();

    for (row_idx, cells) in rows.iter().enumerate() {
        assert_eq!(cells.len(), schema.num_columns(), "one cell per column");
        let row = &mut direct[row_idx * stride..(row_idx + 1) * stride];

        for (col_idx, cell) in cells.iter().enumerate() {
            let offset = schema.column_offset(col_idx);
            match cell {
                Cell::Fixed(bytes) => {
                    row[offset..offset + bytes.len()].copy_from_slice(bytes);
                }
                Cell::Indirect(payload) => {
                    let start = indirect.len() as u64;
                    indirect.extend_from_slice(payload);
                    row[offset..offset + 8].copy_from_slice(&start.to_le_bytes());
                    row[offset + 8..offset + 16]
                        .copy_from_slice(&(payload.len() as u64).to_le_bytes());
                }
                Cell::Null => {
                    let bit = schema
                        .nullable_ordinal(col_idx)
                        .expect("NULL cell in a non-nullable column");
                    row[schema.byte_size() + bit / 8] |= 1 << (bit % 8);
                }
            }
        }
    }

    (direct, indirect)
}

pub(crate) fn encode_row(schema: &Schema, cells: &[Cell]) -> (Vec<u8>, Vec<u8>) {
    encode_rows(schema, &[cells.to_vec()])
}
