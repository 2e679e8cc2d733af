// ==========================================
// 仓储监控分析系统 - 数据清洗器实现
// ==========================================
// 职责: TRIM / 比较键小写规范化 / NULL 标准化 / 类型解析
// 红线: 温区字段只在入库时规范化一次, 下游禁止再做大小写处理
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use chrono::NaiveDateTime;

pub struct DataCleaner;

impl DataCleaner {
    /// 规范化温区比较键 (TRIM + 小写)
    ///
    /// required_temp 与 temp_zone 都经过本函数, 保证相等性比较
    /// 不被大小写/空白差异击穿; 取值域外的值原样保留 (小写后),
    /// 参与比较但永不匹配, 自然表现为违规
    pub fn canonical_zone(&self, value: &str) -> String {
        value.trim().to_lowercase()
    }

    /// 清洗普通文本字段 (仅 TRIM)
    pub fn clean_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    /// NULL 标准化: 空白字符串折叠为 None
    pub fn normalize_null(&self, value: Option<&str>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// 解析布尔标记 (1/Y/YES/TRUE → true, 0/N/NO/FALSE/空 → false)
    pub fn parse_bool_flag(&self, value: &str) -> bool {
        matches!(
            value.trim().to_uppercase().as_str(),
            "1" | "Y" | "YES" | "TRUE"
        )
    }

    /// 解析浮点数 (空值为 None, 非法值报错)
    pub fn parse_f64(
        &self,
        value: Option<&str>,
        field: &str,
        row: usize,
    ) -> ImportResult<Option<f64>> {
        match self.normalize_null(value) {
            None => Ok(None),
            Some(v) => v
                .parse::<f64>()
                .map(Some)
                .map_err(|_| ImportError::TypeConversionError {
                    row,
                    field: field.to_string(),
                    message: format!("无法解析为浮点数: {}", v),
                }),
        }
    }

    /// 解析时间戳 (容忍多种常见格式)
    pub fn parse_timestamp(
        &self,
        value: &str,
        field: &str,
        row: usize,
    ) -> ImportResult<NaiveDateTime> {
        let v = value.trim();

        // 依次尝试: ISO 带 T / 空格分隔 / 纯日期 (按零点处理)
        NaiveDateTime::parse_from_str(v, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(v, "%Y-%m-%d %H:%M:%S"))
            .or_else(|_| NaiveDateTime::parse_from_str(v, "%Y/%m/%d %H:%M:%S"))
            .or_else(|_| {
                chrono::NaiveDate::parse_from_str(v, "%Y-%m-%d")
                    .map(|d| d.and_time(chrono::NaiveTime::MIN))
            })
            .map_err(|_| ImportError::TimestampFormatError {
                row,
                field: field.to_string(),
                value: v.to_string(),
            })
    }
}
