// ==========================================
// 仓储监控分析系统 - 严重度与评分
// ==========================================
// 职责: 温控违规严重度判定 + 优先级评分 + 损耗风险估算
// 红线: severity() 是严重度的唯一事实来源, 任何行级分支禁止另算
// ==========================================

use crate::config::pipeline_config::defaults::SEVERITY_SCALE;
use crate::config::PipelineConfig;

/// 温控违规严重度 (0-3)
///
/// 合规 = 0; 违规按要求温区取权重:
/// frozen 失配最重 (默认 3), refrigerated 次之 (默认 2),
/// ambient 及取值域外最轻 (默认 1)
///
/// # 参数
/// - `required_temp`: 要求温区 (规范化值)
/// - `current_zone`: 所在温区 (规范化值或 "unknown" 哨兵)
pub fn severity(required_temp: &str, current_zone: &str, config: &PipelineConfig) -> u8 {
    if required_temp == current_zone {
        0
    } else {
        config.severity_weight(required_temp)
    }
}

/// 优先级评分
///
/// priority_score = severity * 1000 + weekly_picks
/// 倍乘基数保证严重度恒占主导: 任一 severity-3 行的分值
/// 恒高于任一 severity-2 行, 同档内按拣选量排序
///
/// 前提: weekly_picks < 1000 (倍乘基数)。达到基数时跨档主导
/// 退化 (severity 2 + 1500 次会压过 severity 3 + 0 次),
/// 引擎在富集时对此发告警日志, 公式本身保持不变
pub fn priority_score(severity: u8, weekly_picks: u64) -> i64 {
    i64::from(severity) * SEVERITY_SCALE + weekly_picks as i64
}

/// 损耗风险金额
///
/// 仅当要求温区属于易腐集合且温区违规时非零, 金额取配置常量
pub fn spoilage_risk(required_temp: &str, temp_compliant: bool, config: &PipelineConfig) -> f64 {
    if !temp_compliant && config.is_perishable(required_temp) {
        config.spoilage_unit_cost
    } else {
        0.0
    }
}
