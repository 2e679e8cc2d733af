// ==========================================
// 仓储监控分析系统 - 数据集加载器
// ==========================================
// 职责: 三张输入表的读取 + 模式校验 + 字段映射
// 失败语义: 任一数据源不可读或缺列即致命, 不产出部分结果
// 说明: 模式校验依据表头; 零数据行是合法输入
//       (空订单历史 → 全体 weekly_picks = 0)
// ==========================================

use crate::domain::sku::{OrderLine, RawDatasets, SkuRecord, Slot};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::{ParsedTable, UniversalFileParser};
use std::collections::HashSet;
use std::path::Path;

// ===== 必需列集 (模式契约) =====
// required_temp 接受历史别名 temp_req, 校验时任一命中即可
const SKU_REQUIRED_COLUMNS: &[&[&str]] = &[
    &["sku_id"],
    &["current_slot"],
    &["required_temp", "temp_req"],
];
const SLOT_REQUIRED_COLUMNS: &[&[&str]] = &[&["slot_id"], &["temp_zone"]];
const ORDER_REQUIRED_COLUMNS: &[&[&str]] = &[&["sku_id"], &["order_timestamp", "timestamp"]];

pub struct DatasetLoader {
    parser: UniversalFileParser,
    mapper: FieldMapper,
}

impl DatasetLoader {
    pub fn new() -> Self {
        Self {
            parser: UniversalFileParser,
            mapper: FieldMapper::new(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 加载三张输入表
    ///
    /// # 参数
    /// - `sku_path`: SKU 主数据文件
    /// - `order_path`: 订单流水文件
    /// - `slot_path`: 库位约束文件
    ///
    /// # 返回
    /// RawDatasets 三表只读快照; 任一失败整次运行终止
    pub fn load_all(
        &self,
        sku_path: &Path,
        order_path: &Path,
        slot_path: &Path,
    ) -> ImportResult<RawDatasets> {
        let skus = self.load_sku_master(sku_path)?;
        let orders = self.load_orders(order_path)?;
        let slots = self.load_slots(slot_path)?;

        tracing::info!(
            skus = skus.len(),
            orders = orders.len(),
            slots = slots.len(),
            "数据集加载完成"
        );

        Ok(RawDatasets {
            skus,
            slots,
            orders,
        })
    }

    /// 加载 SKU 主数据
    pub fn load_sku_master(&self, path: &Path) -> ImportResult<Vec<SkuRecord>> {
        let table = self.parser.parse(path)?;
        self.validate_schema(&table, "sku_master", SKU_REQUIRED_COLUMNS)?;

        let mut seen_ids = HashSet::new();
        let mut records = Vec::with_capacity(table.rows.len());
        for (idx, row) in table.rows.iter().enumerate() {
            let record = self.mapper.map_sku(row, idx + 1)?;

            // 主键唯一性 (主数据表内)
            if !seen_ids.insert(record.sku_id.clone()) {
                return Err(ImportError::DuplicateKey {
                    source_name: "sku_master".to_string(),
                    row: idx + 1,
                    value: record.sku_id,
                });
            }
            records.push(record);
        }

        tracing::debug!(rows = records.len(), source = "sku_master", "表加载完成");
        Ok(records)
    }

    /// 加载库位约束表
    pub fn load_slots(&self, path: &Path) -> ImportResult<Vec<Slot>> {
        let table = self.parser.parse(path)?;
        self.validate_schema(&table, "warehouse_constraints", SLOT_REQUIRED_COLUMNS)?;

        let mut seen_ids = HashSet::new();
        let mut records = Vec::with_capacity(table.rows.len());
        for (idx, row) in table.rows.iter().enumerate() {
            let record = self.mapper.map_slot(row, idx + 1)?;

            if !seen_ids.insert(record.slot_id.clone()) {
                return Err(ImportError::DuplicateKey {
                    source_name: "warehouse_constraints".to_string(),
                    row: idx + 1,
                    value: record.slot_id,
                });
            }
            records.push(record);
        }

        tracing::debug!(
            rows = records.len(),
            source = "warehouse_constraints",
            "表加载完成"
        );
        Ok(records)
    }

    /// 加载订单流水表 (多对一, 不做主键唯一性校验)
    ///
    /// 零数据行合法: 无订单历史时下游全体 weekly_picks = 0
    pub fn load_orders(&self, path: &Path) -> ImportResult<Vec<OrderLine>> {
        let table = self.parser.parse(path)?;
        self.validate_schema(&table, "order_transactions", ORDER_REQUIRED_COLUMNS)?;

        let mut records = Vec::with_capacity(table.rows.len());
        for (idx, row) in table.rows.iter().enumerate() {
            records.push(self.mapper.map_order_line(row, idx + 1)?);
        }

        tracing::debug!(
            rows = records.len(),
            source = "order_transactions",
            "表加载完成"
        );
        Ok(records)
    }

    // ==========================================
    // 模式校验
    // ==========================================

    /// 校验必需列齐备 (依据表头; 按别名组, 组内任一命中即可)
    fn validate_schema(
        &self,
        table: &ParsedTable,
        source_name: &str,
        required: &[&[&str]],
    ) -> ImportResult<()> {
        for alias_group in required {
            let hit = alias_group
                .iter()
                .any(|col| table.headers.iter().any(|h| h == col));
            if !hit {
                return Err(ImportError::MissingColumn {
                    source_name: source_name.to_string(),
                    column: alias_group[0].to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}
