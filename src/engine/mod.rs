// ==========================================
// 仓储监控分析系统 - 引擎层
// ==========================================
// 职责: 业务规则计算 (富集 / 分级 / 合规 / 评分)
// 红线: 引擎只读输入, 富集快照构建后不可变
// ==========================================

// 模块声明
pub mod abc;
pub mod compliance;
pub mod enricher;
pub mod scoring;

// 重导出核心类型
pub use abc::AbcClassifier;
pub use compliance::{temp_compliant, weight_compliant};
pub use enricher::EnrichmentEngine;
pub use scoring::{priority_score, severity, spoilage_risk};
