// ==========================================
// 仓储监控分析系统 - 合规判定
// ==========================================
// 职责: 温区合规 / 重量合规标记
// 前提: 两侧比较键已在导入层完成规范化, 本层只做相等性比较
// ==========================================

use crate::config::PipelineConfig;
use crate::domain::sku::Slot;
use crate::domain::types::UnmatchedSlotPolicy;

/// 温区合规: required_temp == current_zone (规范化值)
///
/// current_zone 为 "unknown" 哨兵时自然不等, 正确表现为违规
pub fn temp_compliant(required_temp: &str, current_zone: &str) -> bool {
    required_temp == current_zone
}

/// 重量合规: weight_kg <= 所在库位承重上限
///
/// 库位失配或任一侧重量缺失时上限未知, 按配置策略判定
/// (默认判违规: 重量未知是安全隐患, 不是豁免)
pub fn weight_compliant(
    weight_kg: Option<f64>,
    slot: Option<&Slot>,
    config: &PipelineConfig,
) -> bool {
    match (weight_kg, slot.and_then(|s| s.max_weight_kg)) {
        (Some(w), Some(max)) => w <= max,
        // 数据缺口: 按策略, 永不中断运行
        _ => match config.unmatched_slot_policy {
            UnmatchedSlotPolicy::TreatAsViolation => false,
            UnmatchedSlotPolicy::TreatAsCompliant => true,
        },
    }
}
