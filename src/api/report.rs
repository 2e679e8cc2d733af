// ==========================================
// 仓储监控分析系统 - 合规报表导出
// ==========================================
// 职责: 富集快照 → 可下载的分隔文本报表
// 报表: temperature_compliance_report.csv (全量 + Status 标签)
//       relocation_plan.csv (仅违规行的移位计划变体)
// 红线: 行序沿用快照固定排序, 同输入导出字节级一致
// ==========================================

use crate::api::error::PipelineResult;
use crate::domain::enriched::{EnrichedSku, EnrichedSnapshot};
use std::io::Write;
use std::path::Path;

// 报表列头 (全部富集字段 + Status)
const REPORT_HEADERS: &[&str] = &[
    "sku_id",
    "current_slot",
    "required_temp",
    "category",
    "weight_kg",
    "is_fragile",
    "current_zone",
    "aisle_id",
    "weekly_picks",
    "temp_compliant",
    "weight_compliant",
    "abc_class",
    "severity",
    "priority_score",
    "spoilage_risk",
    "Status",
];

/// 全量合规报表 → 任意写入目标
pub fn write_compliance_report<W: Write>(
    snapshot: &EnrichedSnapshot,
    writer: W,
) -> PipelineResult<()> {
    write_rows(snapshot.skus.iter(), writer)
}

/// 全量合规报表 → 内存字符串 (下载场景)
pub fn compliance_report_csv(snapshot: &EnrichedSnapshot) -> PipelineResult<String> {
    let mut buf = Vec::new();
    write_compliance_report(snapshot, &mut buf)?;
    String::from_utf8(buf)
        .map_err(|e| crate::api::error::PipelineError::ReportError(e.to_string()))
}

/// 全量合规报表 → 文件
pub fn write_compliance_report_file(
    snapshot: &EnrichedSnapshot,
    path: &Path,
) -> PipelineResult<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| crate::api::error::PipelineError::ReportError(e.to_string()))?;
    write_compliance_report(snapshot, file)?;
    tracing::info!(path = %path.display(), rows = snapshot.len(), "合规报表已写出");
    Ok(())
}

/// 移位计划变体: 仅温区违规行
pub fn write_relocation_plan<W: Write>(
    snapshot: &EnrichedSnapshot,
    writer: W,
) -> PipelineResult<()> {
    write_rows(snapshot.skus.iter().filter(|s| s.temp_violation()), writer)
}

/// 移位计划变体 → 内存字符串
pub fn relocation_plan_csv(snapshot: &EnrichedSnapshot) -> PipelineResult<String> {
    let mut buf = Vec::new();
    write_relocation_plan(snapshot, &mut buf)?;
    String::from_utf8(buf)
        .map_err(|e| crate::api::error::PipelineError::ReportError(e.to_string()))
}

// ==========================================
// 行写出
// ==========================================

fn write_rows<'a, W: Write>(
    rows: impl Iterator<Item = &'a EnrichedSku>,
    writer: W,
) -> PipelineResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(REPORT_HEADERS)?;

    for sku in rows {
        csv_writer.write_record(&[
            sku.sku_id.clone(),
            sku.current_slot.clone().unwrap_or_default(),
            sku.required_temp.clone(),
            sku.category.clone(),
            sku.weight_kg.map(|w| w.to_string()).unwrap_or_default(),
            sku.is_fragile.to_string(),
            sku.current_zone.clone(),
            sku.aisle_id.clone().unwrap_or_default(),
            sku.weekly_picks.to_string(),
            sku.temp_compliant.to_string(),
            sku.weight_compliant.to_string(),
            sku.abc_class.to_string(),
            sku.severity.to_string(),
            sku.priority_score.to_string(),
            sku.spoilage_risk.to_string(),
            sku.status().to_string(),
        ])?;
    }

    csv_writer.flush().map_err(|e| {
        crate::api::error::PipelineError::ReportError(e.to_string())
    })?;
    Ok(())
}
