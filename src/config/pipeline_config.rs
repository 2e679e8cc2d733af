// ==========================================
// 仓储监控分析系统 - 管线配置
// ==========================================
// 职责: 富集管线的业务参数, 集中配置替代散落的硬编码
// 存储: JSON 配置文件 (可选), 缺省用内置默认值
// ==========================================

use crate::domain::types::{UnmatchedSlotPolicy, ZONE_AMBIENT, ZONE_FROZEN, ZONE_REFRIGERATED};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// ==========================================
// 默认值常量
// ==========================================
pub mod defaults {
    /// 严重度权重: 要求 frozen 但温区失配
    pub const SEVERITY_FROZEN: u8 = 3;
    /// 严重度权重: 要求 refrigerated 但温区失配
    pub const SEVERITY_REFRIGERATED: u8 = 2;
    /// 严重度权重: 要求 ambient (及取值域外) 但温区失配
    pub const SEVERITY_AMBIENT: u8 = 1;

    /// priority_score 中严重度的倍乘基数
    /// 红线: 必须大于 weekly_picks 的业务上限, 保证严重度恒占主导
    pub const SEVERITY_SCALE: i64 = 1000;

    /// 单 SKU 损耗风险金额 (货币单位)
    pub const SPOILAGE_UNIT_COST: f64 = 75.0;

    /// ABC 分级阈值 (累计占比)
    pub const ABC_A_THRESHOLD: f64 = 0.80;
    pub const ABC_B_THRESHOLD: f64 = 0.95;

    /// 合规报表默认文件名
    pub const COMPLIANCE_REPORT_NAME: &str = "temperature_compliance_report.csv";
    /// 移位计划变体默认文件名
    pub const RELOCATION_PLAN_NAME: &str = "relocation_plan.csv";
}

// ==========================================
// 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("配置文件解析失败: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("配置值非法 (key: {key}): {message}")]
    InvalidValue { key: String, message: String },
}

// ==========================================
// PipelineConfig - 管线配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    // ===== 严重度权重 =====
    pub severity_frozen: u8,       // frozen 失配权重
    pub severity_refrigerated: u8, // refrigerated 失配权重
    pub severity_ambient: u8,      // ambient/其它失配权重

    // ===== 财务口径 =====
    pub spoilage_unit_cost: f64,       // 单 SKU 损耗风险金额
    pub perishable_zones: Vec<String>, // 易腐温区集合 (规范化值)

    // ===== ABC 分级 =====
    pub abc_a_threshold: f64, // A 类累计占比上限
    pub abc_b_threshold: f64, // B 类累计占比上限

    // ===== 重量合规策略 =====
    pub unmatched_slot_policy: UnmatchedSlotPolicy, // 库位失配时的重量合规口径

    // ===== 报表 =====
    pub compliance_report_name: String, // 合规报表文件名
    pub relocation_plan_name: String,   // 移位计划文件名
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            severity_frozen: defaults::SEVERITY_FROZEN,
            severity_refrigerated: defaults::SEVERITY_REFRIGERATED,
            severity_ambient: defaults::SEVERITY_AMBIENT,
            spoilage_unit_cost: defaults::SPOILAGE_UNIT_COST,
            perishable_zones: vec![ZONE_FROZEN.to_string(), ZONE_REFRIGERATED.to_string()],
            abc_a_threshold: defaults::ABC_A_THRESHOLD,
            abc_b_threshold: defaults::ABC_B_THRESHOLD,
            unmatched_slot_policy: UnmatchedSlotPolicy::default(),
            compliance_report_name: defaults::COMPLIANCE_REPORT_NAME.to_string(),
            relocation_plan_name: defaults::RELOCATION_PLAN_NAME.to_string(),
        }
    }
}

impl PipelineConfig {
    /// 从 JSON 文件加载配置 (缺失键回落默认值)
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: PipelineConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// 配置合法性校验
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.abc_a_threshold) {
            return Err(ConfigError::InvalidValue {
                key: "abc_a_threshold".to_string(),
                message: format!("须在 [0,1] 区间, 实际 {}", self.abc_a_threshold),
            });
        }
        if self.abc_b_threshold < self.abc_a_threshold || self.abc_b_threshold > 1.0 {
            return Err(ConfigError::InvalidValue {
                key: "abc_b_threshold".to_string(),
                message: format!(
                    "须在 [abc_a_threshold, 1] 区间, 实际 {}",
                    self.abc_b_threshold
                ),
            });
        }
        if self.spoilage_unit_cost < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "spoilage_unit_cost".to_string(),
                message: "不可为负".to_string(),
            });
        }
        Ok(())
    }

    /// 按要求温区取严重度权重 (违规时)
    ///
    /// 取值域外的要求温区按最低档处理: 无法断言更高风险, 但失配仍是违规
    pub fn severity_weight(&self, required_temp: &str) -> u8 {
        match required_temp {
            ZONE_FROZEN => self.severity_frozen,
            ZONE_REFRIGERATED => self.severity_refrigerated,
            ZONE_AMBIENT => self.severity_ambient,
            _ => self.severity_ambient,
        }
    }

    /// 要求温区是否属于易腐集合
    pub fn is_perishable(&self, required_temp: &str) -> bool {
        self.perishable_zones.iter().any(|z| z == required_temp)
    }
}
