//! 敏感值脱敏开关
//!
//! 脱敏策略以值的形式显式传入渲染函数，作用范围就是这一次调用，
//! 调用返回后没有任何需要恢复的状态。

use crate::config::RenderConfig;

/// 替代被脱敏单元格的文本
pub const REDACTED_MARKER: &str = "<redacted>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redaction {
    /// 非空值一律渲染为 [`REDACTED_MARKER`]
    Enabled,
    Disabled,
}

impl Redaction {
    pub fn from_config(config: &RenderConfig) -> Self {
        if config.redact_values {
            Redaction::Enabled
        } else {
            Redaction::Disabled
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Redaction::Enabled
    }
}
