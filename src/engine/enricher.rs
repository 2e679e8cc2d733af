// ==========================================
// 仓储监控分析系统 - 数据富集引擎
// ==========================================
// 职责: 三张规范化输入表 → 唯一的富集快照
// 输入: SkuRecord + Slot + OrderLine (规范化后)
// 输出: EnrichedSnapshot (不可变, 每 SKU 恰好一行)
// 红线: 关联缺口降级为哨兵值并计数, 本层永不报错;
//       仅导入层错误是致命的
// ==========================================

use crate::config::pipeline_config::defaults::SEVERITY_SCALE;
use crate::config::PipelineConfig;
use crate::domain::enriched::{EnrichedSku, EnrichedSnapshot, JoinGapStats};
use crate::domain::sku::{RawDatasets, Slot};
use crate::domain::types::ZONE_UNKNOWN;
use crate::engine::abc::AbcClassifier;
use crate::engine::compliance::{temp_compliant, weight_compliant};
use crate::engine::scoring::{priority_score, severity, spoilage_risk};
use chrono::Utc;
use std::collections::{BTreeMap, HashSet};
use uuid::Uuid;

// ==========================================
// EnrichmentEngine - 数据富集引擎
// ==========================================
pub struct EnrichmentEngine {
    config: PipelineConfig,
    abc: AbcClassifier,
}

impl EnrichmentEngine {
    /// 构造函数
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            abc: AbcClassifier::new(),
        }
    }

    /// 使用默认配置构造
    pub fn with_defaults() -> Self {
        Self::new(PipelineConfig::default())
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行富集
    ///
    /// 步骤:
    /// 1. 库位左关联 (保留侧为 SKU 主数据, 失配 → "unknown" 哨兵)
    /// 2. 拣选量聚合 (按 sku_id 计数, 无历史 → 0)
    /// 3. ABC 分级 (累计占比, 稳定决胜)
    /// 4. 合规标记 (温区 / 重量)
    /// 5. 严重度与优先级评分
    /// 6. 损耗风险估算
    /// 输出按 priority_score 降序 / sku_id 升序固定排序
    ///
    /// # 参数
    /// - `datasets`: 三表只读快照
    /// - `input_signature`: 输入修改签名 (缓存键, 仅透传记录)
    pub fn enrich(&self, datasets: &RawDatasets, input_signature: &str) -> EnrichedSnapshot {
        let mut gap_stats = JoinGapStats::default();

        // 1. 库位索引 (BTreeMap: 迭代顺序与哈希无关)
        let slot_index: BTreeMap<&str, &Slot> = datasets
            .slots
            .iter()
            .map(|s| (s.slot_id.as_str(), s))
            .collect();

        // 2. 拣选量聚合 + 孤儿订单行计数
        let sku_ids: HashSet<&str> = datasets.skus.iter().map(|s| s.sku_id.as_str()).collect();
        let mut pick_counts: BTreeMap<&str, u64> = BTreeMap::new();
        for line in &datasets.orders {
            if sku_ids.contains(line.sku_id.as_str()) {
                *pick_counts.entry(line.sku_id.as_str()).or_insert(0) += 1;
            } else {
                gap_stats.orphan_order_lines += 1;
            }
        }

        // 3. ABC 分级 (全体 SKU, 无历史按 0 参与)
        let picks_input: Vec<(String, u64)> = datasets
            .skus
            .iter()
            .map(|s| {
                (
                    s.sku_id.clone(),
                    pick_counts.get(s.sku_id.as_str()).copied().unwrap_or(0),
                )
            })
            .collect();
        let classes = self.abc.classify(&picks_input, &self.config);

        // 4-6. 逐 SKU 派生 (左关联语义: 每个 SkuRecord 恰好产出一行)
        let mut skus: Vec<EnrichedSku> = Vec::with_capacity(datasets.skus.len());
        for sku in &datasets.skus {
            let slot = sku
                .current_slot
                .as_deref()
                .and_then(|slot_id| slot_index.get(slot_id).copied());

            let current_zone = match slot {
                Some(s) => s.temp_zone.clone(),
                None => ZONE_UNKNOWN.to_string(),
            };

            let weekly_picks = pick_counts.get(sku.sku_id.as_str()).copied().unwrap_or(0);
            if weekly_picks == 0 {
                gap_stats.zero_pick_skus += 1;
            }

            if sku.weight_kg.is_none() || slot.and_then(|s| s.max_weight_kg).is_none() {
                gap_stats.missing_weights += 1;
            }

            let is_temp_compliant = temp_compliant(&sku.required_temp, &current_zone);
            let sev = severity(&sku.required_temp, &current_zone, &self.config);

            skus.push(EnrichedSku {
                sku_id: sku.sku_id.clone(),
                current_slot: sku.current_slot.clone(),
                required_temp: sku.required_temp.clone(),
                category: sku.category.clone(),
                weight_kg: sku.weight_kg,
                is_fragile: sku.is_fragile,
                current_zone,
                aisle_id: slot.map(|s| s.aisle_id.clone()),
                weekly_picks,
                temp_compliant: is_temp_compliant,
                weight_compliant: weight_compliant(sku.weight_kg, slot, &self.config),
                abc_class: classes[&sku.sku_id],
                severity: sev,
                priority_score: priority_score(sev, weekly_picks),
                spoilage_risk: spoilage_risk(&sku.required_temp, is_temp_compliant, &self.config),
            });
        }

        gap_stats.unmatched_slots = skus.iter().filter(|s| s.zone_unknown()).count();

        // 严重度主导的前提: weekly_picks 低于倍乘基数
        // 超出时同档排序仍成立, 跨档主导退化, 提示而不中断
        let hot = skus
            .iter()
            .filter(|s| s.weekly_picks >= SEVERITY_SCALE as u64)
            .max_by_key(|s| s.weekly_picks);
        if let Some(hot) = hot {
            tracing::warn!(
                sku_id = %hot.sku_id,
                weekly_picks = hot.weekly_picks,
                scale = SEVERITY_SCALE,
                "周拣选量达到倍乘基数, 优先级排序的严重度主导不再成立"
            );
        }

        // 固定输出排序: 风险优先, 同分按 sku_id 升序 (幂等性要求)
        skus.sort_by(|a, b| {
            b.priority_score
                .cmp(&a.priority_score)
                .then_with(|| a.sku_id.cmp(&b.sku_id))
        });

        tracing::info!(
            skus = skus.len(),
            unmatched_slots = gap_stats.unmatched_slots,
            zero_pick_skus = gap_stats.zero_pick_skus,
            orphan_order_lines = gap_stats.orphan_order_lines,
            "富集完成"
        );

        EnrichedSnapshot {
            snapshot_id: Uuid::new_v4().to_string(),
            computed_at: Utc::now(),
            input_signature: input_signature.to_string(),
            skus,
            gap_stats,
        }
    }
}
