// ==========================================
// 仓储监控分析系统 - 仪表盘 API
// ==========================================
// 职责: 面向展示层的唯一读取入口
// 架构: API 层 → 导入层 (DatasetLoader) → 引擎层 (EnrichmentEngine)
// 缓存: 快照按输入修改签名记忆化, 输入不变不重算;
//       Arc 共享, 任意多会话并发只读, 无写竞争
// 红线: 不提供任何变更接口, 快照对外不可变
// ==========================================

use crate::api::error::{PipelineError, PipelineResult};
use crate::config::PipelineConfig;
use crate::domain::enriched::EnrichedSnapshot;
use crate::engine::EnrichmentEngine;
use crate::importer::DatasetLoader;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::UNIX_EPOCH;

// ==========================================
// DashboardApi - 仪表盘 API
// ==========================================
pub struct DashboardApi {
    loader: DatasetLoader,
    engine: EnrichmentEngine,

    // ===== 输入源 =====
    sku_path: PathBuf,
    order_path: PathBuf,
    slot_path: PathBuf,

    // ===== 快照缓存 (签名命中则复用) =====
    cache: Mutex<Option<Arc<EnrichedSnapshot>>>,
}

impl DashboardApi {
    /// 创建新的 DashboardApi 实例
    ///
    /// # 参数
    /// - `sku_path`: SKU 主数据文件
    /// - `order_path`: 订单流水文件
    /// - `slot_path`: 库位约束文件
    /// - `config`: 管线配置
    pub fn new(
        sku_path: impl Into<PathBuf>,
        order_path: impl Into<PathBuf>,
        slot_path: impl Into<PathBuf>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            loader: DatasetLoader::new(),
            engine: EnrichmentEngine::new(config),
            sku_path: sku_path.into(),
            order_path: order_path.into(),
            slot_path: slot_path.into(),
            cache: Mutex::new(None),
        }
    }

    // ==========================================
    // 唯一读取接口
    // ==========================================

    /// 取当前富集快照
    ///
    /// 输入签名未变化时返回缓存的同一 Arc (指针级复用);
    /// 变化时整体重算。导入失败致命上抛, 缓存保持不变,
    /// 不会用部分结果污染已有快照。
    pub fn snapshot(&self) -> PipelineResult<Arc<EnrichedSnapshot>> {
        let signature = self.input_signature()?;

        let mut cache = self
            .cache
            .lock()
            .map_err(|e| PipelineError::InternalError(format!("缓存锁获取失败: {}", e)))?;

        if let Some(cached) = cache.as_ref() {
            if cached.input_signature == signature {
                tracing::debug!(signature = %signature, "快照缓存命中");
                return Ok(Arc::clone(cached));
            }
            tracing::info!(signature = %signature, "输入已变化, 重算快照");
        }

        let datasets =
            self.loader
                .load_all(&self.sku_path, &self.order_path, &self.slot_path)?;
        let snapshot = Arc::new(self.engine.enrich(&datasets, &signature));

        *cache = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// 强制失效缓存 (下次读取必然重算)
    pub fn invalidate(&self) -> PipelineResult<()> {
        let mut cache = self
            .cache
            .lock()
            .map_err(|e| PipelineError::InternalError(format!("缓存锁获取失败: {}", e)))?;
        *cache = None;
        Ok(())
    }

    pub fn config(&self) -> &PipelineConfig {
        self.engine.config()
    }

    // ==========================================
    // 输入修改签名
    // ==========================================

    /// 三个输入源的修改签名 (路径 + 文件长度 + 修改时间)
    ///
    /// 每次读取都重新计算, 任一源变化即触发重算
    fn input_signature(&self) -> PipelineResult<String> {
        let parts = [&self.sku_path, &self.order_path, &self.slot_path]
            .iter()
            .map(|p| Self::file_signature(p))
            .collect::<PipelineResult<Vec<String>>>()?;
        Ok(parts.join("|"))
    }

    fn file_signature(path: &Path) -> PipelineResult<String> {
        let meta = std::fs::metadata(path).map_err(|e| PipelineError::SignatureError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mtime = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_nanos())
            .unwrap_or(0);

        Ok(format!("{}:{}:{}", path.display(), meta.len(), mtime))
    }
}
