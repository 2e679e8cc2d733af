// ==========================================
// 仓储监控分析系统 - 领域层
// ==========================================
// 职责: 实体与值类型定义
// 红线: 领域对象在单次运行内均为只读快照
// ==========================================

pub mod enriched;
pub mod sku;
pub mod types;

// 重导出核心类型
pub use enriched::{EnrichedSku, EnrichedSnapshot, JoinGapStats};
pub use sku::{OrderLine, RawDatasets, SkuRecord, Slot};
pub use types::{
    AbcClass, ComplianceStatus, UnmatchedSlotPolicy, ZONE_AMBIENT, ZONE_FROZEN,
    ZONE_REFRIGERATED, ZONE_UNKNOWN,
};
