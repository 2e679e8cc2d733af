// ==========================================
// 仓储监控分析系统 - 视图投影
// ==========================================
// 职责: 富集快照上的只读聚合, 供各命名视图取数
// (总览 / 温控合规 / 巷道拥堵 / 储位规划 / 财务影响 / 管理摘要)
// 红线: 本层只读, 不回写快照, 不做任何再富集
// ==========================================

use crate::domain::enriched::{EnrichedSku, EnrichedSnapshot};
use crate::domain::types::AbcClass;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// 指标结构
// ==========================================

/// 仓库健康总览指标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewMetrics {
    pub total_skus: usize,        // SKU 总数
    pub temp_mismatches: usize,   // 温区失配数
    pub high_risk_skus: usize,    // 高风险数 (priority_score 高于中位数)
    pub median_priority: f64,     // 优先级中位数 (高风险口径)
}

/// 温控合规汇总
///
/// 两个计数恒同时给出, 即使一侧为 0 (报表列固定)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    pub compliant: usize,
    pub violation: usize,
}

/// 单温区拥堵指标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneCongestion {
    pub zone: String,       // 温区 (含 "unknown" 哨兵)
    pub sku_count: usize,   // 在该温区的 SKU 数
    pub total_picks: u64,   // 该温区周拣选总量
}

/// 单分组财务影响
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFinancials {
    pub category: String,        // 商品分组
    pub violation_count: usize,  // 温区违规 SKU 数
    pub spoilage_total: f64,     // 损耗风险合计金额
}

/// 管理摘要 (全视图的收口数字)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    pub total_skus: usize,
    pub violation_count: usize,
    pub violation_rate: f64,           // 违规占比 (0 SKU 时为 0)
    pub total_spoilage_risk: f64,      // 损耗风险总额
    pub class_a_count: usize,          // A 类 SKU 数
    pub top_risk_sku_id: Option<String>, // 最高风险 SKU
}

// ==========================================
// 投影函数 (输入只读, 输出全新值)
// ==========================================

/// 总览指标
///
/// 高风险口径: priority_score 严格高于全体中位数
/// (偶数行取中间两值均值, 与历史口径一致)
pub fn overview(snapshot: &EnrichedSnapshot) -> OverviewMetrics {
    let median = median_priority(&snapshot.skus);
    OverviewMetrics {
        total_skus: snapshot.skus.len(),
        temp_mismatches: snapshot.skus.iter().filter(|s| s.temp_violation()).count(),
        high_risk_skus: snapshot
            .skus
            .iter()
            .filter(|s| (s.priority_score as f64) > median)
            .count(),
        median_priority: median,
    }
}

/// 风险最高的前 N 个 SKU (快照已固定排序, 直接取前缀)
pub fn top_risk(snapshot: &EnrichedSnapshot, n: usize) -> Vec<&EnrichedSku> {
    snapshot.skus.iter().take(n).collect()
}

/// 温控合规汇总
pub fn compliance_summary(snapshot: &EnrichedSnapshot) -> ComplianceSummary {
    let violation = snapshot.skus.iter().filter(|s| s.temp_violation()).count();
    ComplianceSummary {
        compliant: snapshot.skus.len() - violation,
        violation,
    }
}

/// 温区违规行 (保持快照排序)
pub fn violations(snapshot: &EnrichedSnapshot) -> Vec<&EnrichedSku> {
    snapshot.skus.iter().filter(|s| s.temp_violation()).collect()
}

/// 温区拥堵分布 (按温区名排序, 含 "unknown")
pub fn zone_congestion(snapshot: &EnrichedSnapshot) -> Vec<ZoneCongestion> {
    let mut by_zone: BTreeMap<&str, (usize, u64)> = BTreeMap::new();
    for sku in &snapshot.skus {
        let entry = by_zone.entry(sku.current_zone.as_str()).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += sku.weekly_picks;
    }

    by_zone
        .into_iter()
        .map(|(zone, (sku_count, total_picks))| ZoneCongestion {
            zone: zone.to_string(),
            sku_count,
            total_picks,
        })
        .collect()
}

/// 分组财务影响 (按分组名排序)
pub fn category_financials(snapshot: &EnrichedSnapshot) -> Vec<CategoryFinancials> {
    let mut by_category: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for sku in &snapshot.skus {
        let entry = by_category
            .entry(sku.category.as_str())
            .or_insert((0, 0.0));
        if sku.temp_violation() {
            entry.0 += 1;
        }
        entry.1 += sku.spoilage_risk;
    }

    by_category
        .into_iter()
        .map(|(category, (violation_count, spoilage_total))| CategoryFinancials {
            category: category.to_string(),
            violation_count,
            spoilage_total,
        })
        .collect()
}

/// 管理摘要
pub fn executive_summary(snapshot: &EnrichedSnapshot) -> ExecutiveSummary {
    let total = snapshot.skus.len();
    let violation_count = snapshot.skus.iter().filter(|s| s.temp_violation()).count();

    ExecutiveSummary {
        total_skus: total,
        violation_count,
        violation_rate: if total == 0 {
            0.0
        } else {
            violation_count as f64 / total as f64
        },
        total_spoilage_risk: snapshot.skus.iter().map(|s| s.spoilage_risk).sum(),
        class_a_count: snapshot
            .skus
            .iter()
            .filter(|s| s.abc_class == AbcClass::A)
            .count(),
        top_risk_sku_id: snapshot.skus.first().map(|s| s.sku_id.clone()),
    }
}

/// 优先级中位数 (空集为 0)
fn median_priority(skus: &[EnrichedSku]) -> f64 {
    if skus.is_empty() {
        return 0.0;
    }

    let mut scores: Vec<i64> = skus.iter().map(|s| s.priority_score).collect();
    scores.sort_unstable();

    let mid = scores.len() / 2;
    if scores.len() % 2 == 0 {
        (scores[mid - 1] + scores[mid]) as f64 / 2.0
    } else {
        scores[mid] as f64
    }
}
