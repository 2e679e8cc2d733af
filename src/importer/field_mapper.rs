// ==========================================
// 仓储监控分析系统 - 字段映射器实现
// ==========================================
// 职责: 原始行记录 → 类型化领域记录
// 说明: 历史数据源曾用 temp_req 作为要求温区列名, 按别名兼容
// ==========================================

use crate::domain::sku::{OrderLine, SkuRecord, Slot};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawRecord;

pub struct FieldMapper {
    cleaner: DataCleaner,
}

impl FieldMapper {
    pub fn new() -> Self {
        Self {
            cleaner: DataCleaner,
        }
    }

    // ==========================================
    // SKU 主数据
    // ==========================================

    /// 映射单行 SKU 主数据
    ///
    /// # 参数
    /// - `row`: 原始行记录
    /// - `row_number`: 数据行号 (从 1 开始, 用于报错定位)
    pub fn map_sku(&self, row: &RawRecord, row_number: usize) -> ImportResult<SkuRecord> {
        let sku_id = self
            .get_string(row, &["sku_id"])
            .ok_or_else(|| ImportError::PrimaryKeyMissing {
                source_name: "sku_master".to_string(),
                row: row_number,
                field: "sku_id".to_string(),
            })?;

        // 要求温区: 比较键, 入库即规范化
        let required_temp = self
            .get_string(row, &["required_temp", "temp_req"])
            .map(|v| self.cleaner.canonical_zone(&v))
            .unwrap_or_default();

        Ok(SkuRecord {
            sku_id,
            current_slot: self.get_string(row, &["current_slot"]),
            required_temp,
            category: self
                .get_string(row, &["category"])
                .map(|v| self.cleaner.clean_text(&v))
                .unwrap_or_default(),
            weight_kg: self
                .cleaner
                .parse_f64(row.get("weight_kg").map(String::as_str), "weight_kg", row_number)?,
            is_fragile: self
                .get_string(row, &["is_fragile", "fragile"])
                .map(|v| self.cleaner.parse_bool_flag(&v))
                .unwrap_or(false),
        })
    }

    // ==========================================
    // 库位约束
    // ==========================================

    /// 映射单行库位记录
    pub fn map_slot(&self, row: &RawRecord, row_number: usize) -> ImportResult<Slot> {
        let slot_id = self
            .get_string(row, &["slot_id"])
            .ok_or_else(|| ImportError::PrimaryKeyMissing {
                source_name: "warehouse_constraints".to_string(),
                row: row_number,
                field: "slot_id".to_string(),
            })?;

        Ok(Slot {
            slot_id,
            // 库位温区: 与 required_temp 同口径规范化
            temp_zone: self
                .get_string(row, &["temp_zone"])
                .map(|v| self.cleaner.canonical_zone(&v))
                .unwrap_or_default(),
            max_weight_kg: self.cleaner.parse_f64(
                row.get("max_weight_kg").map(String::as_str),
                "max_weight_kg",
                row_number,
            )?,
            aisle_id: self
                .get_string(row, &["aisle_id", "aisle"])
                .unwrap_or_default(),
        })
    }

    // ==========================================
    // 订单流水
    // ==========================================

    /// 映射单行拣选事件
    pub fn map_order_line(&self, row: &RawRecord, row_number: usize) -> ImportResult<OrderLine> {
        let sku_id = self
            .get_string(row, &["sku_id"])
            .ok_or_else(|| ImportError::PrimaryKeyMissing {
                source_name: "order_transactions".to_string(),
                row: row_number,
                field: "sku_id".to_string(),
            })?;

        let ts_raw = self
            .get_string(row, &["order_timestamp", "timestamp"])
            .ok_or_else(|| ImportError::TimestampFormatError {
                row: row_number,
                field: "order_timestamp".to_string(),
                value: "<空>".to_string(),
            })?;

        Ok(OrderLine {
            sku_id,
            order_timestamp: self
                .cleaner
                .parse_timestamp(&ts_raw, "order_timestamp", row_number)?,
        })
    }

    /// 提取字符串字段 (TRIM 后非空才返回), 支持列名别名
    fn get_string(&self, row: &RawRecord, aliases: &[&str]) -> Option<String> {
        for alias in aliases {
            if let Some(v) = row.get(*alias) {
                let trimmed = v.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new()
    }
}
