// ==========================================
// 仓储监控分析系统 - ABC 分级引擎
// ==========================================
// 职责: 按周拣选量累计占比为全体 SKU 分级
// 红线: 排序必须稳定 (拣选量降序, 同量按 sku_id 升序),
//       否则同量 SKU 的分级随迭代顺序漂移, 破坏幂等性
// ==========================================

use crate::config::PipelineConfig;
use crate::domain::types::AbcClass;
use std::collections::BTreeMap;

// ==========================================
// AbcClassifier - ABC 分级引擎
// ==========================================
pub struct AbcClassifier {
    // 无状态引擎, 不需要注入依赖
}

impl AbcClassifier {
    pub fn new() -> Self {
        Self {}
    }

    /// 为全体 SKU 分级
    ///
    /// 规则:
    /// 1) 按 weekly_picks 降序排序, 同量按 sku_id 升序 (稳定决胜)
    /// 2) 计算累计占比
    /// 3) 累计占比 <= A 阈值 → A;
    ///    否则若该行起始占比 < B 阈值 → B; 其余 → C
    ///    (跨越阈值线的行落入低一级, 与历史口径一致)
    /// 4) 总拣选量为 0 时占比无定义, 全体判 C
    ///
    /// # 参数
    /// - `picks`: (sku_id, weekly_picks) 列表
    ///
    /// # 返回
    /// sku_id → AbcClass (BTreeMap, 迭代顺序确定)
    pub fn classify(
        &self,
        picks: &[(String, u64)],
        config: &PipelineConfig,
    ) -> BTreeMap<String, AbcClass> {
        let total: u64 = picks.iter().map(|(_, p)| p).sum();

        // 边界: 无任何拣选历史, 全体 C
        if total == 0 {
            return picks
                .iter()
                .map(|(id, _)| (id.clone(), AbcClass::C))
                .collect();
        }

        // 稳定排序: 拣选量降序, sku_id 升序
        let mut sorted: Vec<&(String, u64)> = picks.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let total_f = total as f64;
        let mut classes = BTreeMap::new();
        let mut cumulative: u64 = 0;

        for (sku_id, weekly_picks) in sorted {
            let share_before = cumulative as f64 / total_f;
            cumulative += weekly_picks;
            let share_after = cumulative as f64 / total_f;

            let class = if share_after <= config.abc_a_threshold {
                AbcClass::A
            } else if share_before < config.abc_b_threshold {
                AbcClass::B
            } else {
                AbcClass::C
            };

            classes.insert(sku_id.clone(), class);
        }

        classes
    }
}

impl Default for AbcClassifier {
    fn default() -> Self {
        Self::new()
    }
}
