// ==========================================
// 仓储监控分析系统 - 配置层
// ==========================================
// 职责: 管线参数集中管理, 替代散落各处的硬编码口径
// ==========================================

pub mod pipeline_config;

// 重导出核心配置类型
pub use pipeline_config::{defaults, ConfigError, PipelineConfig};
