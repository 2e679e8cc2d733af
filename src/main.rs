// ==========================================
// 仓储监控分析系统 - 命令行主入口
// ==========================================
// 用法: warehouse-analytics <SKU主数据> <订单流水> <库位约束> [配置JSON]
// 流程: 加载三表 → 富集 → 打印总览指标 → 写出合规报表
// ==========================================

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use warehouse_analytics::api::{report, views, DashboardApi};
use warehouse_analytics::config::PipelineConfig;
use warehouse_analytics::logging;

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", warehouse_analytics::APP_NAME);
    tracing::info!("系统版本: {}", warehouse_analytics::VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        bail!("用法: warehouse-analytics <SKU主数据> <订单流水> <库位约束> [配置JSON]");
    }

    let sku_path = PathBuf::from(&args[0]);
    let order_path = PathBuf::from(&args[1]);
    let slot_path = PathBuf::from(&args[2]);

    // 配置: 有文件用文件, 否则内置默认值
    let config = match args.get(3) {
        Some(path) => PipelineConfig::from_file(Path::new(path))
            .with_context(|| format!("配置加载失败: {}", path))?,
        None => PipelineConfig::default(),
    };

    let api = DashboardApi::new(sku_path, order_path, slot_path, config);

    // 加载 + 富集 (导入失败即致命, 不产出部分报表)
    let snapshot = api.snapshot().context("管线运行失败")?;

    // 总览指标
    let overview = views::overview(&snapshot);
    tracing::info!("SKU 总数: {}", overview.total_skus);
    tracing::info!("温区失配: {}", overview.temp_mismatches);
    tracing::info!("高风险 SKU: {}", overview.high_risk_skus);

    let summary = views::executive_summary(&snapshot);
    tracing::info!("违规占比: {:.1}%", summary.violation_rate * 100.0);
    tracing::info!("损耗风险总额: {:.2}", summary.total_spoilage_risk);
    if let Some(top) = &summary.top_risk_sku_id {
        tracing::info!("最高风险 SKU: {}", top);
    }

    // 写出合规报表
    let report_path = PathBuf::from(&api.config().compliance_report_name);
    report::write_compliance_report_file(&snapshot, &report_path)
        .context("合规报表写出失败")?;

    tracing::info!("报表已写出: {}", report_path.display());
    Ok(())
}
