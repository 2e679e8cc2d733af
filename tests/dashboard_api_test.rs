// ==========================================
// DashboardApi 集成测试
// ==========================================
// 测试目标: 快照记忆化 / 输入变化失效 / 视图投影聚合
// 覆盖范围: 缓存命中 (Arc 指针级复用) / 总览 / 合规汇总 /
//           温区拥堵 / 分组财务 / 管理摘要
// ==========================================

use std::io::Write;
use std::sync::Arc;
use tempfile::TempDir;
use warehouse_analytics::api::{views, DashboardApi};
use warehouse_analytics::config::PipelineConfig;
use warehouse_analytics::domain::types::AbcClass;

// ==========================================
// 测试辅助函数
// ==========================================

fn write_csv(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{}", content).unwrap();
    path
}

/// 三 SKU 固定数据集: 一条违规 (库位失配), 两条合规
fn build_api(dir: &TempDir) -> DashboardApi {
    let sku = write_csv(
        dir,
        "sku_master.csv",
        "sku_id,current_slot,required_temp,category,weight_kg,is_fragile\n\
         S1,A-01,frozen,dairy,4.0,0\n\
         S2,GONE,frozen,dairy,2.0,0\n\
         S3,B-02,ambient,snacks,1.0,0\n",
    );
    let orders = write_csv(
        dir,
        "orders.csv",
        "sku_id,order_timestamp\n\
         S1,2026-08-20 08:00:00\n\
         S1,2026-08-20 09:00:00\n\
         S3,2026-08-20 10:00:00\n",
    );
    let slots = write_csv(
        dir,
        "slots.csv",
        "slot_id,temp_zone,max_weight_kg,aisle_id\n\
         A-01,frozen,50,A\n\
         B-02,ambient,30,B\n",
    );
    DashboardApi::new(sku, orders, slots, PipelineConfig::default())
}

// ==========================================
// 快照记忆化
// ==========================================

#[test]
fn test_snapshot_reused_when_inputs_unchanged() {
    let dir = TempDir::new().unwrap();
    let api = build_api(&dir);

    let first = api.snapshot().unwrap();
    let second = api.snapshot().unwrap();

    // 输入未变: 同一 Arc, 不重算
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_snapshot_recomputed_when_input_changes() {
    let dir = TempDir::new().unwrap();
    let api = build_api(&dir);

    let first = api.snapshot().unwrap();
    assert_eq!(first.len(), 3);

    // 追加一个 SKU (文件长度变化 → 签名变化)
    let sku_path = dir.path().join("sku_master.csv");
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(&sku_path)
        .unwrap();
    writeln!(file, "S4,B-02,ambient,snacks,1.5,0").unwrap();
    drop(file);

    let second = api.snapshot().unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(second.len(), 4);
}

#[test]
fn test_invalidate_forces_recompute() {
    let dir = TempDir::new().unwrap();
    let api = build_api(&dir);

    let first = api.snapshot().unwrap();
    api.invalidate().unwrap();
    let second = api.snapshot().unwrap();

    // 重算产生新快照对象 (内容一致, 身份不同)
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.len(), second.len());
}

#[test]
fn test_missing_input_is_fatal_and_cache_unchanged() {
    let dir = TempDir::new().unwrap();
    let api = build_api(&dir);

    let first = api.snapshot().unwrap();

    // 删除一个输入源: 读取失败, 不产出部分快照
    std::fs::remove_file(dir.path().join("orders.csv")).unwrap();
    assert!(api.snapshot().is_err());

    // 原快照仍可用 (Arc 持有方不受影响)
    assert_eq!(first.len(), 3);
}

// ==========================================
// 视图投影
// ==========================================

#[test]
fn test_overview_metrics() {
    let dir = TempDir::new().unwrap();
    let api = build_api(&dir);
    let snapshot = api.snapshot().unwrap();

    let overview = views::overview(&snapshot);
    assert_eq!(overview.total_skus, 3);
    assert_eq!(overview.temp_mismatches, 1); // S2 库位失配

    // priority: S2=3000, S1=2, S3=1 → 中位数 2, 高于中位数仅 S2
    assert_eq!(overview.high_risk_skus, 1);
}

#[test]
fn test_compliance_summary_both_counts_present() {
    let dir = TempDir::new().unwrap();
    let api = build_api(&dir);
    let snapshot = api.snapshot().unwrap();

    let summary = views::compliance_summary(&snapshot);
    assert_eq!(summary.compliant, 2);
    assert_eq!(summary.violation, 1);

    // 全合规时违规侧计数为 0 而非缺失
    let violations = views::violations(&snapshot);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].sku_id, "S2");
}

#[test]
fn test_top_risk_takes_snapshot_prefix() {
    let dir = TempDir::new().unwrap();
    let api = build_api(&dir);
    let snapshot = api.snapshot().unwrap();

    let top = views::top_risk(&snapshot, 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].sku_id, "S2"); // 唯一违规, 分值最高

    // n 超过行数时取全量
    assert_eq!(views::top_risk(&snapshot, 100).len(), 3);
}

#[test]
fn test_zone_congestion_includes_unknown() {
    let dir = TempDir::new().unwrap();
    let api = build_api(&dir);
    let snapshot = api.snapshot().unwrap();

    let congestion = views::zone_congestion(&snapshot);
    let zones: Vec<&str> = congestion.iter().map(|z| z.zone.as_str()).collect();

    // 温区名升序, 哨兵 "unknown" 作为普通温区出现
    assert_eq!(zones, vec!["ambient", "frozen", "unknown"]);

    let frozen = congestion.iter().find(|z| z.zone == "frozen").unwrap();
    assert_eq!(frozen.sku_count, 1);
    assert_eq!(frozen.total_picks, 2);
}

#[test]
fn test_category_financials_aggregates_spoilage() {
    let dir = TempDir::new().unwrap();
    let api = build_api(&dir);
    let snapshot = api.snapshot().unwrap();
    let unit = api.config().spoilage_unit_cost;

    let financials = views::category_financials(&snapshot);
    let dairy = financials.iter().find(|c| c.category == "dairy").unwrap();
    let snacks = financials.iter().find(|c| c.category == "snacks").unwrap();

    // dairy: S2 违规且易腐 → 一份损耗
    assert_eq!(dairy.violation_count, 1);
    assert_eq!(dairy.spoilage_total, unit);
    // snacks: 全合规
    assert_eq!(snacks.violation_count, 0);
    assert_eq!(snacks.spoilage_total, 0.0);
}

#[test]
fn test_executive_summary_rollup() {
    let dir = TempDir::new().unwrap();
    let api = build_api(&dir);
    let snapshot = api.snapshot().unwrap();

    let summary = views::executive_summary(&snapshot);
    assert_eq!(summary.total_skus, 3);
    assert_eq!(summary.violation_count, 1);
    assert!((summary.violation_rate - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(summary.top_risk_sku_id.as_deref(), Some("S2"));

    // 拣选量 [2,1,0]: S1 累计 2/3 ≤ 80% → A 类恰好一个
    assert_eq!(summary.class_a_count, 1);

    let class_a: Vec<_> = snapshot
        .skus
        .iter()
        .filter(|s| s.abc_class == AbcClass::A)
        .collect();
    assert_eq!(class_a[0].sku_id, "S1");
}
