use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rsdevicedetector_codegen::{ConfigManager, DocumentAssembler, ReqwestSource, RuleFetcher};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// download: 填充本地缓存；generate: 由缓存生成Rust源文件
    #[arg(value_enum)]
    command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Download,
    Generate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ConfigManager::get_default();

    match cli.command {
        Command::Download => {
            let sources = config.remote_sources().context("Failed to build upstream URLs")?;
            let http = ReqwestSource::new(&config).context("Failed to build HTTP client")?;
            RuleFetcher::new(http, &config.cache_dir)
                .fetch_all(&sources)
                .await
                .context("Failed to populate rule cache")?;
        }
        Command::Generate => {
            DocumentAssembler::new()
                .generate(&config)
                .with_context(|| {
                    format!("Failed to generate {}", config.output_path.display())
                })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_positional_mode() {
        let cli = Cli::try_parse_from(["rsdevicedetector-codegen", "download"]).unwrap();
        assert_eq!(cli.command, Command::Download);
        let cli = Cli::try_parse_from(["rsdevicedetector-codegen", "generate"]).unwrap();
        assert_eq!(cli.command, Command::Generate);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["rsdevicedetector-codegen", "upload"]).is_err());
        assert!(Cli::try_parse_from(["rsdevicedetector-codegen"]).is_err());
    }
}
