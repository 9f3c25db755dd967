//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use scanrow::core::codec::CodecError;

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言结果失败并匹配错误消息
pub fn assert_err_with<T: std::fmt::Debug, E: std::fmt::Display>(result: Result<T, E>, expected_msg: &str) {
    let err = result.expect_err("操作应该失败");
    let err_str = err.to_string();
    assert!(
        err_str.contains(expected_msg),
        "错误消息应包含 '{}', 实际是 '{}'",
        expected_msg,
        err_str
    );
}

/// 断言为类型不匹配错误，且携带列的真实类型名
pub fn assert_type_mismatch<T: std::fmt::Debug>(result: Result<T, CodecError>, column: &str, actual: &str) {
    match result {
        Err(CodecError::TypeMismatch {
            column: col,
            actual: real,
            ..
        }) => {
            assert_eq!(col, column, "列名不匹配");
            assert_eq!(real.name(), actual, "真实类型名不匹配");
        }
        other => panic!("应该返回 TypeMismatch, 实际是 {:?}", other),
    }
}

/// 断言为空值错误
pub fn assert_null<T: std::fmt::Debug>(result: Result<T, CodecError>) {
    match result {
        Err(CodecError::ValueIsNull(_)) => {}
        other => panic!("应该返回 ValueIsNull, 实际是 {:?}", other),
    }
}
