use clap::Parser;
use tintoria::config::presets::PRESETS;
use tintoria::core::{ConfigProvider, PaletteResult};
use tintoria::utils::{logger, validation::Validate};
use tintoria::{CliConfig, LocalStorage, PaletteEngine, PalettePipeline, PaletteError, TomlConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting tintoria CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if config.list_presets {
        print_presets();
        return Ok(());
    }

    let dry_run = config.dry_run;
    let outcome = match config.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading palette file: {}", path);
            match TomlConfig::from_file(&path) {
                Ok(toml_config) => execute(toml_config, dry_run).await,
                Err(e) => Err(e),
            }
        }
        None => execute(config, dry_run).await,
    };

    if let Err(e) = outcome {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Palette generation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn execute<C>(config: C, dry_run: bool) -> Result<(), PaletteError>
where
    C: ConfigProvider + Validate + 'static,
{
    config.validate()?;
    tracing::info!("✅ Configuration validated");

    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = PaletteEngine::new(PalettePipeline::new(storage, config));

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - no files will be written");
        let result = engine.preview().await?;
        print_scales(&result);
        return Ok(());
    }

    let written = engine.run().await?;
    println!("✅ Palette generated successfully!");
    for path in written {
        println!("📁 {}", path);
    }
    Ok(())
}

fn print_presets() {
    for preset in PRESETS {
        println!("{} ({})", preset.name, preset.slug());
        for (_, name, color) in preset.colors {
            println!("  {:<16} {}", name, color);
        }
    }
}

fn print_scales(result: &PaletteResult) {
    let scales = result.active();
    for input in &result.inputs {
        let Some(scale) = scales.get(&input.id) else {
            continue;
        };
        println!("{} ({})", input.name, input.id);
        for (step, color) in scale.iter() {
            println!("  {:>3}  {}", step.value(), color);
        }
    }
}
