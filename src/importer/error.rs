// ==========================================
// 仓储监控分析系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 传播策略: 导入/规范化错误在本层即为致命, 终止整次运行
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 模式校验错误 =====
    #[error("数据源 {source_name} 缺少必需列: {column}")]
    MissingColumn {
        source_name: String,
        column: String,
    },

    // ===== 数据映射错误 =====
    #[error("主键缺失 (数据源 {source_name}, 行 {row}): {field} 为空")]
    PrimaryKeyMissing {
        source_name: String,
        row: usize,
        field: String,
    },

    #[error("主键重复 (数据源 {source_name}, 行 {row}): {value}")]
    DuplicateKey {
        source_name: String,
        row: usize,
        value: String,
    },

    #[error("类型转换失败 (行 {row}, 字段 {field}): {message}")]
    TypeConversionError {
        row: usize,
        field: String,
        message: String,
    },

    #[error("时间格式错误 (行 {row}, 字段 {field}): 无法解析 {value}")]
    TimestampFormatError {
        row: usize,
        field: String,
        value: String,
    },
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
