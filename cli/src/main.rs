//! svgpdf CLI - SVG to PDF conversion tool

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use svgpdf::render::{to_json, ConversionReport, JsonFormat};
use svgpdf::{ConvertOptions, SvgConverter};

#[derive(Parser)]
#[command(name = "svgpdf")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert SVG drawings to minimal PDF files", long_about = None)]
struct Cli {
    /// Input SVG file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output PDF file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert SVG to PDF
    Convert {
        /// Input SVG file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output PDF file (input name with .pdf extension if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Treat malformed numeric attributes as zero instead of failing
        #[arg(long)]
        lenient: bool,

        /// Print a conversion report after writing
        #[arg(long)]
        report: bool,
    },

    /// Show conversion statistics without writing a PDF
    Info {
        /// Input SVG file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Treat malformed numeric attributes as zero instead of failing
        #[arg(long)]
        lenient: bool,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args)]
struct LayoutArgs {
    /// Grid column count
    #[arg(long, default_value_t = svgpdf::convert::DEFAULT_COLUMNS)]
    columns: usize,

    /// Grid row count
    #[arg(long, default_value_t = svgpdf::convert::DEFAULT_ROWS)]
    rows: usize,

    /// Font name (display only; text uses the built-in Helvetica)
    #[arg(long, default_value = svgpdf::convert::DEFAULT_FONT_NAME)]
    font: String,

    /// Font size in points
    #[arg(long, default_value_t = svgpdf::convert::DEFAULT_FONT_SIZE)]
    font_size: f64,
}

impl LayoutArgs {
    fn to_options(&self, lenient: bool) -> ConvertOptions {
        let options = ConvertOptions::new()
            .with_grid(self.columns, self.rows)
            .with_font_name(&self.font)
            .with_font_size(self.font_size);
        if lenient {
            options.lenient()
        } else {
            options
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            layout,
            lenient,
            report,
        }) => cmd_convert(
            &input,
            output.as_deref(),
            layout.to_options(lenient),
            report,
        ),
        Some(Commands::Info {
            input,
            lenient,
            json,
            compact,
        }) => cmd_info(&input, lenient, json, compact),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(
                    &input,
                    cli.output.as_deref(),
                    ConvertOptions::default(),
                    false,
                )
            } else {
                println!("{}", "Usage: svgpdf <FILE> [OUTPUT]".yellow());
                println!("       svgpdf --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("pdf")
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    options: ConvertOptions,
    show_report: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));

    let result = SvgConverter::new(options).convert_file(input)?;
    let report = result.report();
    result.save(&output)?;

    println!("{} {}", "Successfully generated".green(), output.display());
    if show_report {
        print_report(&report);
    }

    Ok(())
}

fn cmd_info(
    input: &Path,
    lenient: bool,
    json: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = ConvertOptions::new();
    if lenient {
        options = options.lenient();
    }
    let report = SvgConverter::new(options).convert_file(input)?.report();

    if json {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        println!("{}", to_json(&report, format)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    print_report(&report);

    Ok(())
}

fn print_report(report: &ConversionReport) {
    println!();
    println!("{}", "Conversion Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!(
        "{}: {} x {}",
        "SVG size".bold(),
        report.svg_width,
        report.svg_height
    );
    println!(
        "{}: {:.4} x {:.4}",
        "Scale".bold(),
        report.scale_x,
        report.scale_y
    );
    println!("{}: {}", "Pages".bold(), report.page_count);
    println!("{}: {}", "Rectangles".bold(), report.rect_count);
    println!("{}: {}", "Text".bold(), report.text_count);
    println!("{}: {}", "Gradients".bold(), report.gradient_count);
    println!(
        "{}: {} {}",
        "Paths".bold(),
        report.skipped_path_count,
        "(not rendered)".dimmed()
    );
    println!(
        "{}: {} {}pt",
        "Font".bold(),
        report.font_name,
        report.font_size
    );
    println!("{}: {}", "Objects".bold(), report.object_count);
    println!("{}: {}", "Xref entries".bold(), report.xref_entries);
}

fn cmd_version() {
    println!("{} {}", "svgpdf".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("SVG to PDF conversion tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/svgpdf".dimmed());
    println!("License: MIT");
}
