// ==========================================
// 仓储监控分析系统 - 文件解析器实现
// ==========================================
// 职责: 原始表格文件 → 表头 + 行记录 (列名 → 原文值)
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 说明: 表头单独返回, 模式校验依据表头而非数据行;
//       仅有表头无数据行是合法输入 (空记录集)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// 原始行记录: 表头 → 单元格原文
pub type RawRecord = HashMap<String, String>;

/// 解析结果: 表头 + 数据行
#[derive(Debug, Clone)]
pub struct ParsedTable {
    pub headers: Vec<String>, // 表头 (已 TRIM, 保持文件内顺序)
    pub rows: Vec<RawRecord>, // 数据行 (全空白行已跳过, 可为空)
}

/// 文件解析器接口
pub trait FileParser {
    /// 解析文件为表头 + 行记录
    fn parse_table(&self, file_path: &Path) -> ImportResult<ParsedTable>;
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_table(&self, file_path: &Path) -> ImportResult<ParsedTable> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 打开 CSV 文件
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(ParsedTable { headers, rows })
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_table(&self, file_path: &Path) -> ImportResult<ParsedTable> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 打开 Excel 工作簿 (按扩展名自动选择读取器)
        let mut workbook = open_workbook_auto(path)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        // 读取第一个 sheet
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::ExcelParseError(
                "Excel 文件无工作表".to_string(),
            ));
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        // 提取表头（第一行; 缺表头属于解析失败）
        let mut range_rows = range.rows();
        let header_row = range_rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无表头行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        // 读取数据行
        let mut rows = Vec::new();
        for data_row in range_rows {
            let mut row_map = HashMap::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    let value = cell.to_string().trim().to_string();
                    row_map.insert(header.clone(), value);
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(ParsedTable { headers, rows })
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<ParsedTable> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => {
                let parser = CsvParser;
                parser.parse_table(path)
            }
            "xlsx" | "xls" => {
                let parser = ExcelParser;
                parser.parse_table(path)
            }
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_csv_parser_valid_file() {
        // 创建临时 CSV 文件
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "sku_id,weight_kg,category").unwrap();
        writeln!(temp_file, "SKU001,2.5,dairy").unwrap();
        writeln!(temp_file, "SKU002,3.0,produce").unwrap();

        let parser = CsvParser;
        let table = parser.parse_table(temp_file.path()).unwrap();

        assert_eq!(table.headers, vec!["sku_id", "weight_kg", "category"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].get("sku_id"), Some(&"SKU001".to_string()));
        assert_eq!(table.rows[0].get("weight_kg"), Some(&"2.5".to_string()));
    }

    #[test]
    fn test_csv_parser_header_only_file_yields_empty_rows() {
        // 仅表头无数据行: 合法输入, 返回空记录集而非报错
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "sku_id,order_timestamp").unwrap();

        let parser = CsvParser;
        let table = parser.parse_table(temp_file.path()).unwrap();

        assert_eq!(table.headers, vec!["sku_id", "order_timestamp"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let parser = CsvParser;
        let result = parser.parse_table(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_csv_parser_skip_empty_rows() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "sku_id,weight_kg").unwrap();
        writeln!(temp_file, "SKU001,2.5").unwrap();
        writeln!(temp_file, ",").unwrap(); // 空行
        writeln!(temp_file, "SKU002,3.0").unwrap();

        let parser = CsvParser;
        let table = parser.parse_table(temp_file.path()).unwrap();

        // 应跳过空行
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn test_universal_parser_rejects_unknown_extension() {
        let parser = UniversalFileParser;
        let result = parser.parse("data.parquet");
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }
}
