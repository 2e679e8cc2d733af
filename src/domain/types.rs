// ==========================================
// 仓储监控分析系统 - 领域类型定义
// ==========================================
// 职责: 管线公用的值类型与枚举
// 温区取值域: frozen / refrigerated / ambient (规范化后)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 温区常量
// ==========================================
// 规范化后 (TRIM + 小写) 的温区取值域
// 取值域之外的字符串原样保留, 参与比较但永不匹配
pub const ZONE_FROZEN: &str = "frozen";
pub const ZONE_REFRIGERATED: &str = "refrigerated";
pub const ZONE_AMBIENT: &str = "ambient";

// 库位关联失败时 current_zone 的哨兵值
// 红线: EnrichedSku.current_zone 永不为空, 要么是温区值要么是该哨兵
pub const ZONE_UNKNOWN: &str = "unknown";

// ==========================================
// ABC 分类 (ABC Class)
// ==========================================
// 红线: 按周拣选量累计占比分级, 不是评分制
// A = 累计占比 <=80%, B = <=95%, C = 其余
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbcClass {
    A, // 高频拣选
    B, // 中频拣选
    C, // 低频拣选
}

impl fmt::Display for AbcClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbcClass::A => write!(f, "A"),
            AbcClass::B => write!(f, "B"),
            AbcClass::C => write!(f, "C"),
        }
    }
}

// ==========================================
// 合规状态 (Compliance Status)
// ==========================================
// 报表导出使用的展示标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceStatus {
    Compliant, // 温区合规
    Violation, // 温区违规
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceStatus::Compliant => write!(f, "Compliant"),
            ComplianceStatus::Violation => write!(f, "Violation"),
        }
    }
}

// ==========================================
// 未匹配库位的重量合规策略
// ==========================================
// 业务口径未定: 库位缺失时重量上限未知,
// 判违规 (安全优先) 还是判合规 (缺数据不追责) 由配置显式决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedSlotPolicy {
    TreatAsViolation, // 默认: 重量未知视为安全隐患
    TreatAsCompliant, // 宽松: 缺数据不计违规
}

impl Default for UnmatchedSlotPolicy {
    fn default() -> Self {
        UnmatchedSlotPolicy::TreatAsViolation
    }
}

impl fmt::Display for UnmatchedSlotPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnmatchedSlotPolicy::TreatAsViolation => write!(f, "treat_as_violation"),
            UnmatchedSlotPolicy::TreatAsCompliant => write!(f, "treat_as_compliant"),
        }
    }
}
