use std::path::PathBuf;

use clap::Parser;
use svcsheet::{convert, ConvertRequest};
use svcsheet_core::{ActionModel, Config, SalePriceFallback};

#[derive(Parser)]
#[command(
    name = "svcsheet",
    about = "Convert a services spreadsheet into normalized JSON"
)]
struct Cli {
    /// Spreadsheet to read (.xlsx, .xlsm, .xlsb, .xls, .ods or .csv). Defaults to Services.xlsx.
    input: Option<PathBuf>,

    /// JSON file to write. Defaults to data/services.json.
    output: Option<PathBuf>,

    /// Config file layered over the defaults (otherwise ./svcsheet.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Worksheet to read instead of the first one.
    #[arg(long)]
    sheet: Option<String>,

    /// Action model: boolean_flags or free_form.
    #[arg(long)]
    action_model: Option<ActionModel>,

    /// What salePrice becomes when the sale price cell is empty: absent or price.
    #[arg(long)]
    sale_price_fallback: Option<SalePriceFallback>,

    /// Log debug output to stderr.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "warn" })
            }),
        )
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let mut request = ConvertRequest::from_config(&config);
    if let Some(input) = cli.input {
        request.input = input;
    }
    if let Some(output) = cli.output {
        request.output = output;
    }
    if let Some(sheet) = cli.sheet {
        request.sheet = Some(sheet);
    }
    if let Some(model) = cli.action_model {
        request.options.action_model = model;
    }
    if let Some(fallback) = cli.sale_price_fallback {
        request.options.sale_price_fallback = fallback;
    }
    tracing::debug!(?request, "resolved conversion request");

    let summary = convert(&request)?;
    println!(
        "Wrote {} with {} services",
        summary.output.display(),
        summary.written
    );
    Ok(())
}
