// ==========================================
// 仓储监控分析系统 - 输入领域模型
// ==========================================
// 三张原始表: SKU 主数据 / 库位约束 / 订单流水
// 用途: 导入层写入, 引擎层只读
// 红线: 进入引擎前所有比较键字段已完成规范化
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// SkuRecord - SKU 主数据
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkuRecord {
    // ===== 主键 =====
    pub sku_id: String, // SKU 唯一标识

    // ===== 库位关联 =====
    pub current_slot: Option<String>, // 当前库位 (FK -> Slot.slot_id, 可缺失/可失配)

    // ===== 温控要求 =====
    pub required_temp: String, // 要求温区 (规范化: TRIM + 小写)

    // ===== 基础信息 =====
    pub category: String,        // 商品分组标签 (自由文本, 规范化)
    pub weight_kg: Option<f64>,  // 单件重量 (kg, 可空)
    pub is_fragile: bool,        // 易碎标记
}

// ==========================================
// Slot - 库位约束
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    // ===== 主键 =====
    pub slot_id: String, // 库位唯一标识

    // ===== 物理约束 =====
    pub temp_zone: String,          // 库位温区 (与 required_temp 同取值域, 同规范化)
    pub max_weight_kg: Option<f64>, // 承重上限 (kg, 可空)
    pub aisle_id: String,           // 巷道编号
}

// ==========================================
// OrderLine - 订单拣选流水
// ==========================================
// 一行 = 一次拣选事件, 多对一关联 SkuRecord
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub sku_id: String,                 // 关联 SkuRecord.sku_id (FK)
    pub order_timestamp: NaiveDateTime, // 拣选发生时间
}

// ==========================================
// 数据集快照 - 一次运行的三张输入表
// ==========================================
// 生命周期: 单次管线运行内只读
#[derive(Debug, Clone)]
pub struct RawDatasets {
    pub skus: Vec<SkuRecord>,
    pub slots: Vec<Slot>,
    pub orders: Vec<OrderLine>,
}
