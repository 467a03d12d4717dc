use crate::core::{MappingStats, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// 一次執行的結果摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub output_path: String,
    pub stats: MappingStats,
    pub unmapped_ivrs: Vec<String>,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor_enabled: bool,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
        }
    }

    pub async fn run(&self) -> Result<RunReport> {
        let mut monitor = SystemMonitor::new(self.monitor_enabled);
        tracing::info!("Starting IVR prompt-campaign mapping");

        // Extract
        let tables = self.pipeline.extract().await?;
        tracing::info!(
            "Extracted {} IVR detail rows and {} prompt rows",
            tables.campaigns.len(),
            tables.prompts.len()
        );
        if let Some(monitor) = monitor.as_mut() {
            monitor.log_phase("Extract");
        }

        // Transform
        let result = self.pipeline.transform(tables).await?;
        tracing::info!(
            "Mapped {} of {} prompts ({} unmapped)",
            result.stats.mapped,
            result.stats.total,
            result.stats.unmapped
        );
        if let Some(monitor) = monitor.as_mut() {
            monitor.log_phase("Transform");
        }

        let stats = result.stats;
        let unmapped_ivrs = result.unmapped_ivrs.clone();

        // Load
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);
        if let Some(monitor) = monitor.as_mut() {
            monitor.log_phase("Load");
        }

        Ok(RunReport {
            output_path,
            stats,
            unmapped_ivrs,
        })
    }
}
