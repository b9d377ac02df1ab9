use clap::{Parser, Subcommand};
use page_shots::types::PageCount;
use page_shots::{config, document, output, scan, survey};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "page-shots")]
#[command(about = "Survey screenshot folders against the pages of a reference document")]
#[command(long_about = "\
Survey screenshot folders against the pages of a reference document

Each page of the document gets a folder named after its number. Images
inside are measured (size, resolution, format), summarized per page, and
checked against the document's page count.

Screenshot structure:

  screenshots/
  ├── 01/                # Page 1 (\"1\" works too)
  │   ├── overview.png
  │   └── detail.jpg
  ├── 02/
  │   └── shot.png
  ├── 123/               # Up to three digits
  ├── notes/             # Not a page folder, ignored
  └── cover.png          # Loose image, grouped under \"otros\"

Corrupt or unreadable images are kept with unknown fields; they count
toward a page's image total but not toward its averages.

Run 'page-shots gen-config' to print a documented page-shots.toml.")]
#[command(version)]
struct Cli {
    /// Config file (missing file = stock defaults)
    #[arg(long, default_value = config::CONFIG_FILENAME, global = true)]
    config: PathBuf,

    /// Screenshot root directory (overrides config)
    #[arg(long, global = true)]
    screenshots: Option<PathBuf>,

    /// Reference PDF whose pages the folders follow (overrides config)
    #[arg(long, global = true)]
    document: Option<PathBuf>,

    /// Total page count, instead of reading the document (0 = unknown)
    #[arg(long, global = true)]
    pages: Option<u32>,

    /// Output directory for the report (overrides config)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every image found, grouped by page
    Scan,
    /// Per-page averages and corpus statistics
    Summary,
    /// Which document pages have screenshots
    Coverage,
    /// Run everything and write survey.json to the output directory
    Report,
    /// Print a stock page-shots.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Command::Scan => {
            let config = resolve_config(&cli)?;
            let records = scan::scan(&config)?;
            output::print_scan_output(&records);
        }
        Command::Summary => {
            let config = resolve_config(&cli)?;
            let survey = survey::run(&config, PageCount::Unknown)?;
            output::print_summary_output(&survey.summaries, &survey.corpus);
        }
        Command::Coverage => {
            let config = resolve_config(&cli)?;
            let survey = survey::run(&config, resolve_page_count(&cli, &config))?;
            output::print_coverage_output(&survey.coverage, survey.total_pages);
        }
        Command::Report => {
            let config = resolve_config(&cli)?;
            let total_pages = resolve_page_count(&cli, &config);
            println!("==> Scanning {}", config.screenshots_dir.display());
            let survey = survey::run(&config, total_pages)?;
            output::print_scan_output(&survey.records);

            println!("==> Summary");
            output::print_summary_output(&survey.summaries, &survey.corpus);

            println!("==> Coverage");
            output::print_coverage_output(&survey.coverage, survey.total_pages);

            std::fs::create_dir_all(&config.output_dir)?;
            let report_path = config.output_dir.join("survey.json");
            let json = serde_json::to_string_pretty(&survey)?;
            std::fs::write(&report_path, json)?;
            println!("==> Report written to {}", report_path.display());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the config file and apply command-line overrides on top.
fn resolve_config(cli: &Cli) -> Result<config::SurveyConfig, config::ConfigError> {
    let mut config = config::load_config(&cli.config)?;
    if let Some(dir) = &cli.screenshots {
        config.screenshots_dir = dir.clone();
    }
    if let Some(doc) = &cli.document {
        config.document = Some(doc.clone());
    }
    if let Some(dir) = &cli.output {
        config.output_dir = dir.clone();
    }
    Ok(config)
}

/// An explicit `--pages` wins over reading the document.
fn resolve_page_count(cli: &Cli, config: &config::SurveyConfig) -> PageCount {
    match cli.pages {
        Some(pages) => PageCount::from_raw(i64::from(pages)),
        None => document::page_count(config.document.as_deref()),
    }
}
