// ==========================================
// 仓储监控分析系统 - API 层
// ==========================================
// 职责: 面向展示层的只读接口 (快照 / 投影 / 报表)
// 红线: 展示层是外部协作方, 本层不含任何渲染逻辑
// ==========================================

// 模块声明
pub mod dashboard_api;
pub mod error;
pub mod report;
pub mod views;

// 重导出核心类型
pub use dashboard_api::DashboardApi;
pub use error::{PipelineError, PipelineResult};
pub use views::{
    CategoryFinancials, ComplianceSummary, ExecutiveSummary, OverviewMetrics, ZoneCongestion,
};
