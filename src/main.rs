mod cli;

use filterbox::images::ImageStore;
use filterbox::{config, filters::FilterKind, server};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use image::ImageFormat;
use std::path::Path;

async fn start_server(host: String, port: u16, config_path: Option<&Path>) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;

    // Override host/port from CLI if specified
    config.server.host = host;
    config.server.port = port;

    tracing::info!("Starting filterbox server");
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );
    tracing::info!("Image directory: {:?}", config.images.dir);

    server::start_server(config).await
}

fn main() -> Result<()> {
    // Pick up TENOR_API_KEY and friends from a local .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "filterbox=trace,tower_http=debug".to_string()
        } else {
            "filterbox=debug,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Start { host, port } => {
            // Create tokio runtime
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, cli.config.as_deref()))
        }
        Commands::Filter {
            input,
            filter,
            output,
        } => filter_file(&input, &filter, output.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("filterbox {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn filter_file(input: &Path, filter: &str, output: Option<&Path>) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {:?}", input);
    }

    let kind: FilterKind = filter.parse()?;

    let data = std::fs::read(input)?;
    let img = image::load_from_memory(&data)
        .map_err(|e| anyhow::anyhow!("Cannot decode {:?}: {e}", input))?;

    let out = filterbox::filters::apply(&img, kind);

    let out_path = match output {
        Some(path) => path.to_path_buf(),
        None => {
            let name = input
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| anyhow::anyhow!("Input has no usable file name: {:?}", input))?;
            input.with_file_name(ImageStore::derived_name(kind, name))
        }
    };

    let format = ImageFormat::from_path(&out_path).unwrap_or(ImageFormat::Png);
    out.save_with_format(&out_path, format)?;

    println!(
        "Wrote {:?} ({}x{}, {})",
        out_path,
        out.width(),
        out.height(),
        kind
    );
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  Image directory: {:?}", config.images.dir);
            println!(
                "  GIF search: {}",
                if config.tenor.api_key.is_some() {
                    "configured"
                } else {
                    "disabled (no API key)"
                }
            );
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::load_config_or_default(None)?;
            println!("Default config:");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  Image directory: {:?}", config.images.dir);
        }
    }

    Ok(())
}
