mod logger;

use anyhow::{Context, Result};
use cbox_layout::{BoxSpec, OutputFormat, TemplateOptions, TemplateStatistics};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use logger::CliLogger;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cbox",
    about = "Generate laser-cut templates for double-walled cardboard boxes",
    version
)]
struct Cli {
    /// Interior length in mm [default: 94]
    #[arg(short, long)]
    length: Option<f32>,

    /// Interior width in mm [default: 90]
    #[arg(short, long)]
    width: Option<f32>,

    /// Interior height in mm [default: 38]
    #[arg(short = 'H', long)]
    height: Option<f32>,

    /// Cardboard thickness in mm [default: 4]
    #[arg(short, long)]
    thickness: Option<f32>,

    /// Draw descriptive labels (default)
    #[arg(long, overrides_with = "no_labels")]
    labels: bool,

    /// Omit descriptive labels
    #[arg(long, overrides_with = "labels")]
    no_labels: bool,

    /// Draw fold guide lines (default)
    #[arg(long, overrides_with = "no_folds")]
    folds: bool,

    /// Omit fold guide lines
    #[arg(long, overrides_with = "folds")]
    no_folds: bool,

    /// Output file [default: cbox_<w>_<l>_<h>_<t>.<format>]
    #[arg(short, long)]
    fname: Option<PathBuf>,

    /// Output format [default: svg]
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Canvas padding in mm [default: 5]
    #[arg(long)]
    padding: Option<f32>,

    /// Load options from a JSON file; other flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective options to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Show statistics only, don't write a template
    #[arg(long)]
    stats_only: bool,

    /// Log debug details
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Svg,
    Pdf,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Svg => Self::Svg,
            FormatArg::Pdf => Self::Pdf,
        }
    }
}

/// Resolve a `--flag` / `--no-flag` pair; `None` when neither was given
fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (_, true) => Some(false),
        (true, false) => Some(true),
        (false, false) => None,
    }
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }

    /// Apply command-line overrides on top of `base`
    fn apply(&self, base: TemplateOptions) -> TemplateOptions {
        let BoxSpec {
            length,
            width,
            height,
            thickness,
        } = base.spec;

        TemplateOptions {
            spec: BoxSpec::new(
                self.length.unwrap_or(length),
                self.width.unwrap_or(width),
                self.height.unwrap_or(height),
                self.thickness.unwrap_or(thickness),
            ),
            labels: toggle(self.labels, self.no_labels).unwrap_or(base.labels),
            folds: toggle(self.folds, self.no_folds).unwrap_or(base.folds),
            padding_mm: self.padding.unwrap_or(base.padding_mm),
            format: self.format.map(Into::into).unwrap_or(base.format),
        }
    }
}

fn print_statistics(stats: &TemplateStatistics) {
    println!("Template Statistics:");
    println!(
        "  Strip (outside): {:.1} x {:.1} mm",
        stats.strip_outside_mm.0, stats.strip_outside_mm.1
    );
    println!(
        "  Side panels: {} x {:.1} x {:.1} mm",
        stats.side_panels, stats.side_outside_mm.0, stats.side_outside_mm.1
    );
    println!(
        "  Canvas: {:.1} x {:.1} mm",
        stats.canvas_mm.0, stats.canvas_mm.1
    );
    println!(
        "  Cut: {} primitives, {:.1} mm",
        stats.cut_primitives, stats.cut_length_mm
    );
    println!(
        "  Score: {} primitives, {:.1} mm",
        stats.score_primitives, stats.score_length_mm
    );
    println!(
        "  Fold: {} primitives, {:.1} mm",
        stats.fold_primitives, stats.fold_length_mm
    );
    println!("  Labels: {}", stats.labels);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    CliLogger::new(cli.log_level()).init()?;

    let base = match &cli.config {
        Some(path) => TemplateOptions::load(path)
            .await
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => TemplateOptions::default(),
    };
    let options = cli.apply(base);

    let template = cbox_layout::generate_template(&options)?;
    log::info!(
        "Strip height: {:.1} mm",
        template.dimensions.strip_height
    );

    let stats = cbox_layout::calculate_statistics(&template);
    print_statistics(&stats);

    if let Some(path) = &cli.save_config {
        options
            .save(path)
            .await
            .with_context(|| format!("Failed to save config {}", path.display()))?;
        log::info!("Options saved to {}", path.display());
    }

    if cli.stats_only {
        return Ok(());
    }

    let output = cli
        .fname
        .clone()
        .unwrap_or_else(|| PathBuf::from(options.default_file_name()));
    cbox_layout::save_template(&template, options.format, &output)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Template → {}", output.display());

    Ok(())
}
