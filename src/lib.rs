// ==========================================
// 仓储监控分析系统 - 核心库
// ==========================================
// 定位: 数据富集管线 (展示层为外部协作方)
// 流向: 导入层 → 引擎层 → 富集快照 (不可变) → 展示层
// 红线: 管线对三张输入表是纯函数, 同输入必得字节级同输出
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部数据加载与规范化
pub mod importer;

// 引擎层 - 业务规则 (富集/分级/合规/评分)
pub mod engine;

// 配置层 - 管线参数
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 展示层只读接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    AbcClass, ComplianceStatus, UnmatchedSlotPolicy, ZONE_AMBIENT, ZONE_FROZEN,
    ZONE_REFRIGERATED, ZONE_UNKNOWN,
};

// 领域实体
pub use domain::{EnrichedSku, EnrichedSnapshot, JoinGapStats, OrderLine, RawDatasets, SkuRecord, Slot};

// 导入层
pub use importer::{DatasetLoader, ImportError, ImportResult};

// 引擎
pub use engine::{AbcClassifier, EnrichmentEngine};

// 配置
pub use config::{ConfigError, PipelineConfig};

// API
pub use api::{DashboardApi, PipelineError, PipelineResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "仓储监控分析系统";
