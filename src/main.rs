use casefolio::{config, generate, logging, output, scan};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "casefolio")]
#[command(about = "Static site generator for case-study portfolios")]
#[command(long_about = "\
Static site generator for case-study portfolios

Markdown files with YAML frontmatter become a landing page, a case-study
accordion, use-case articles with image lightboxes, and previous/next
navigation between them.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── case-studies/                # Listed on the home page
  │   ├── acme-checkout.md         # → /case-study/acme-checkout/
  │   └── beacon-analytics.md
  ├── use-cases/                   # Listed on /use-cases/
  │   └── invoice-automation.md    # → /use-cases/invoice-automation/
  └── public/                      # Copied to the output root
      └── images/use-cases/        # Relative image sources in use cases

Frontmatter keys: title, description, author, date.
Title fallback: frontmatter title → first '# heading' → filename.

Run 'casefolio gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".casefolio-temp", global = true)]
    temp_dir: PathBuf,

    /// Log debug diagnostics to stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content directory into a manifest
    Scan,
    /// Produce the final HTML site from the manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate content directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    logging::init(cli.verbose)?;

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let manifest = read_manifest(&manifest_path)?;
            init_thread_pool(&manifest.config.processing);
            let report = generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_output(&manifest, &report);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            let manifest_path = write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);

            println!();
            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            init_thread_pool(&manifest.config.processing);
            let report = generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_output(&manifest, &report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn write_manifest(
    manifest: &scan::Manifest,
    temp_dir: &Path,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let manifest_path = temp_dir.join("manifest.json");
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(&manifest_path, json)?;
    tracing::debug!(path = %manifest_path.display(), "wrote manifest");
    Ok(manifest_path)
}

fn read_manifest(path: &Path) -> Result<scan::Manifest, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {} (run 'casefolio scan' first): {e}", path.display()))?;
    Ok(serde_json::from_str(&content)?)
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores; the user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    if let Err(err) = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
    {
        tracing::debug!(%err, "rayon pool already initialized");
    }
}
