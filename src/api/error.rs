// ==========================================
// 仓储监控分析系统 - API 层错误类型
// ==========================================
// 传播策略: 导入/配置错误原样上抛 (致命);
// 富集阶段的关联缺口不在此出现 (已降级为哨兵值)
// ==========================================

use crate::config::ConfigError;
use crate::importer::ImportError;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("输入签名计算失败 ({path}): {message}")]
    SignatureError { path: String, message: String },

    #[error("报表写出失败: {0}")]
    ReportError(String),

    #[error("内部错误: {0}")]
    InternalError(String),
}

impl From<csv::Error> for PipelineError {
    fn from(err: csv::Error) -> Self {
        PipelineError::ReportError(err.to_string())
    }
}

/// Result 类型别名
pub type PipelineResult<T> = Result<T, PipelineError>;
