// ==========================================
// 仓储监控分析系统 - 富集结果领域模型
// ==========================================
// 管线唯一输出: 每个 SkuRecord 对应恰好一行 EnrichedSku
// 红线: 快照构建完成后不可变, 供任意多读方并发只读
// ==========================================

use crate::domain::types::{AbcClass, ComplianceStatus, ZONE_UNKNOWN};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// EnrichedSku - 富集后的单 SKU 行
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedSku {
    // ===== SkuRecord 原始字段 =====
    pub sku_id: String,               // SKU 唯一标识
    pub current_slot: Option<String>, // 当前库位
    pub required_temp: String,        // 要求温区 (规范化)
    pub category: String,             // 商品分组
    pub weight_kg: Option<f64>,       // 单件重量 (kg)
    pub is_fragile: bool,             // 易碎标记

    // ===== 库位关联派生 =====
    pub current_zone: String, // 所在库位温区; 关联失败为 "unknown", 永不为空
    pub aisle_id: Option<String>, // 所在巷道 (关联失败为空)

    // ===== 拣选量派生 =====
    pub weekly_picks: u64, // 周拣选次数; 无订单历史为 0, 永不缺失

    // ===== 合规标记 =====
    pub temp_compliant: bool,   // required_temp == current_zone (规范化后)
    pub weight_compliant: bool, // weight_kg <= 库位承重上限 (失配按策略判定)

    // ===== 分级与评分 =====
    pub abc_class: AbcClass, // ABC 拣选量分级
    pub severity: u8,        // 温控违规严重度 (0-3)
    pub priority_score: i64, // severity * 1000 + weekly_picks (严重度恒占主导)

    // ===== 财务口径 =====
    pub spoilage_risk: f64, // 损耗风险金额; 仅易腐且温区违规时非零
}

impl EnrichedSku {
    /// 温区违规标记 (temp_compliant 的逻辑反)
    pub fn temp_violation(&self) -> bool {
        !self.temp_compliant
    }

    /// 库位关联是否失败
    pub fn zone_unknown(&self) -> bool {
        self.current_zone == ZONE_UNKNOWN
    }

    /// 报表展示标签
    pub fn status(&self) -> ComplianceStatus {
        if self.temp_compliant {
            ComplianceStatus::Compliant
        } else {
            ComplianceStatus::Violation
        }
    }
}

// ==========================================
// JoinGapStats - 关联缺口统计
// ==========================================
// 关联缺口不是错误: 降级为哨兵值并在此计数, 永不中断运行
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinGapStats {
    pub unmatched_slots: usize,  // current_slot 无对应库位的 SKU 数
    pub zero_pick_skus: usize,   // 无任何订单历史的 SKU 数
    pub missing_weights: usize,  // weight_kg 或承重上限缺失的 SKU 数
    pub orphan_order_lines: usize, // sku_id 不在主数据中的订单行数
}

// ==========================================
// EnrichedSnapshot - 一次运行的完整输出
// ==========================================
// 生命周期: 每次运行从零重建, 跨运行无持久身份
// 所有权: 仅引擎层构建, 其余组件只读
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedSnapshot {
    pub snapshot_id: String,            // 快照标识 (uuid v4)
    pub computed_at: DateTime<Utc>,     // 计算时间 (审计用, 不参与相等性)
    pub input_signature: String,        // 输入修改签名 (缓存键)
    pub skus: Vec<EnrichedSku>,         // 富集结果, 固定排序 (priority 降序, sku_id 升序)
    pub gap_stats: JoinGapStats,        // 关联缺口统计
}

impl EnrichedSnapshot {
    /// 行数 (恒等于输入 SkuRecord 行数)
    pub fn len(&self) -> usize {
        self.skus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skus.is_empty()
    }
}
