//! 测试数据生成模块
//!
//! 提供常用的 schema 和行数据

use scanrow::core::schema::{ColumnSchema, ColumnTypeAttributes, Schema};
use scanrow::core::types::DataType;

use super::{CellValue, TestBatch};

/// `{id: INT32 NOT NULL, name: STRING NULL}`
pub fn id_name_schema() -> Schema {
    Schema::new(vec![
        ColumnSchema::new("id", DataType::Int32),
        ColumnSchema::new("name", DataType::String).nullable(true),
    ])
    .expect("schema 应该有效")
}

/// 覆盖所有逻辑类型的 schema，除删除标记外全部可空
pub fn all_types_schema() -> Schema {
    Schema::new(vec![
        ColumnSchema::new("c_bool", DataType::Bool).nullable(true),
        ColumnSchema::new("c_int8", DataType::Int8).nullable(true),
        ColumnSchema::new("c_int16", DataType::Int16).nullable(true),
        ColumnSchema::new("c_int32", DataType::Int32).nullable(true),
        ColumnSchema::new("c_int64", DataType::Int64).nullable(true),
        ColumnSchema::new("c_int128", DataType::Int128).nullable(true),
        ColumnSchema::new("c_float", DataType::Float).nullable(true),
        ColumnSchema::new("c_double", DataType::Double).nullable(true),
        ColumnSchema::new("c_string", DataType::String).nullable(true),
        ColumnSchema::new("c_binary", DataType::Binary).nullable(true),
        ColumnSchema::new("c_varchar", DataType::Varchar)
            .nullable(true)
            .with_attributes(ColumnTypeAttributes::varchar(32)),
        ColumnSchema::new("c_date", DataType::Date).nullable(true),
        ColumnSchema::new("c_ts", DataType::UnixtimeMicros).nullable(true),
        ColumnSchema::new("c_dec32", DataType::Decimal32)
            .nullable(true)
            .with_attributes(ColumnTypeAttributes::decimal(9, 2)),
        ColumnSchema::new("c_dec64", DataType::Decimal64)
            .nullable(true)
            .with_attributes(ColumnTypeAttributes::decimal(18, 4)),
        ColumnSchema::new("c_dec128", DataType::Decimal128)
            .nullable(true)
            .with_attributes(ColumnTypeAttributes::decimal(38, 0)),
        ColumnSchema::new("is_deleted", DataType::IsDeleted),
    ])
    .expect("schema 应该有效")
}

/// `all_types_schema` 的一行非空数据
pub fn all_types_row() -> Vec<CellValue> {
    vec![
        CellValue::bool(true),
        CellValue::Fixed((-5i8).to_le_bytes().to_vec()),
        CellValue::Fixed(1234i16.to_le_bytes().to_vec()),
        CellValue::i32(-42),
        CellValue::i64(1 << 40),
        CellValue::Fixed((-(1i128 << 100)).to_le_bytes().to_vec()),
        CellValue::Fixed(2.5f32.to_le_bytes().to_vec()),
        CellValue::Fixed((-0.125f64).to_le_bytes().to_vec()),
        CellValue::str("héllo"),
        CellValue::bytes(&[0xff, 0x00]),
        CellValue::str("vc"),
        CellValue::i32(18_262),
        CellValue::i64(1_577_836_800_123_456),
        CellValue::i32(-7),
        CellValue::i64(-7),
        CellValue::Fixed((-7i128).to_le_bytes().to_vec()),
        CellValue::bool(false),
    ]
}

/// `all_types_schema` 的一行全空数据（删除标记为 true）
pub fn all_null_row() -> Vec<CellValue> {
    let mut cells = vec![CellValue::Null; 16];
    cells.push(CellValue::bool(true));
    cells
}

/// 生成 `count` 行 `id_name_schema` 数据，偶数行的 name 为空
pub fn generate_id_name_batch(count: usize) -> TestBatch {
    let mut batch = TestBatch::new(id_name_schema());
    for i in 0..count {
        let name = if i % 2 == 0 {
            CellValue::Null
        } else {
            CellValue::str(&format!("user{}", i))
        };
        batch.push_row(vec![CellValue::i32(i as i32), name]);
    }
    batch
}
