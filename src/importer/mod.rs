// ==========================================
// 仓储监控分析系统 - 导入层
// ==========================================
// 职责: 外部表格数据加载 + 规范化, 生成内部数据
// 支持: Excel, CSV
// 失败语义: 本层错误致命, 终止整次运行
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod dataset_loader;
pub mod error;
pub mod field_mapper;
pub mod file_parser;

// 重导出核心类型
pub use data_cleaner::DataCleaner;
pub use dataset_loader::DatasetLoader;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{
    CsvParser, ExcelParser, FileParser, ParsedTable, RawRecord, UniversalFileParser,
};
