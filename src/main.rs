use clap::Parser;
use ivr_mapper::core::ConfigProvider;
use ivr_mapper::utils::error::EtlError;
use ivr_mapper::utils::{logger, validation::Validate};
use ivr_mapper::{CliConfig, EtlEngine, LocalStorage, MappingPipeline, RunReport, TomlConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting ivr-mapper");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let outcome = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => exit_with(e),
            };
            config.apply_cli_overrides(&cli);
            let monitor_enabled = config.monitoring_enabled();
            run(config, monitor_enabled).await
        }
        None => {
            let monitor_enabled = cli.monitor;
            run(cli, monitor_enabled).await
        }
    };

    match outcome {
        Ok(report) => print_report(&report),
        Err(e) => exit_with(e),
    }

    Ok(())
}

async fn run<C: ConfigProvider + Validate>(
    config: C,
    monitor_enabled: bool,
) -> Result<RunReport, EtlError> {
    config.validate()?;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = MappingPipeline::new(LocalStorage::default(), config);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);
    engine.run().await
}

fn print_report(report: &RunReport) {
    println!("✅ Mapping completed");
    println!("Total Prompts:    {}", report.stats.total);
    println!("Mapped Prompts:   {}", report.stats.mapped);
    println!("Unmapped Prompts: {}", report.stats.unmapped);
    println!("📁 Output saved to: {}", report.output_path);

    if report.stats.unmapped > 0 {
        println!();
        println!("The following IVRs could not be matched to campaigns:");
        for ivr in &report.unmapped_ivrs {
            println!("- {}", ivr);
        }
    }
}

fn exit_with(e: EtlError) -> ! {
    tracing::error!(
        "❌ Mapping failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 依嚴重程度決定退出碼
    std::process::exit(e.severity().exit_code())
}
