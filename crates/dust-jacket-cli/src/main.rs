use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dust_jacket::{DustJacket, JacketOptions, MeasurementSystem};
use std::io::Read;
use std::path::{Path, PathBuf};

mod logger;

#[derive(Parser)]
#[command(name = "djt", about = "Dust jacket layout tools", version)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalise a BookBuddy CSV export and write it to stdout
    Preprocess {
        /// Input CSV file, or - for stdin
        #[arg(default_value = "-")]
        infile: PathBuf,
    },

    /// Print region geometry for every book in a CSV
    Layout {
        #[command(flatten)]
        jacket: JacketArgs,
    },

    /// Generate jacket guide PDFs from a CSV
    Plot {
        #[command(flatten)]
        jacket: JacketArgs,

        /// Output PDF file, or a directory with --split
        #[arg(short, long)]
        output: PathBuf,

        /// Write one PDF per book, named after its title
        #[arg(long)]
        split: bool,

        /// Bleed around the jacket in mm
        #[arg(long)]
        bleed: Option<f32>,

        /// Leave out region outlines
        #[arg(long)]
        no_outlines: bool,

        /// Leave out fold marks
        #[arg(long)]
        no_fold_marks: bool,

        /// Leave out crop marks
        #[arg(long)]
        no_crop_marks: bool,
    },
}

#[derive(Args)]
struct JacketArgs {
    /// Input CSV file with one book per row
    #[arg(short, long)]
    input: PathBuf,

    /// JSON options file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Unit of the measurement columns
    #[arg(long, value_enum)]
    units: Option<UnitsArg>,

    /// Flap width in mm for rows without a flap width column
    #[arg(long)]
    flap_width: Option<f32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitsArg {
    Mm,
    Cm,
    In,
    Pt,
}

impl From<UnitsArg> for MeasurementSystem {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Mm => Self::Millimeters,
            UnitsArg::Cm => Self::Centimeters,
            UnitsArg::In => Self::Inches,
            UnitsArg::Pt => Self::Points,
        }
    }
}

impl JacketArgs {
    /// Options from the config file (or defaults) with command line overrides
    async fn options(&self) -> Result<JacketOptions> {
        let mut options = match &self.config {
            Some(path) => JacketOptions::load(path)
                .await
                .with_context(|| format!("loading options from {}", path.display()))?,
            None => JacketOptions::default(),
        };

        if let Some(units) = self.units {
            options.units = units.into();
        }
        if let Some(flap_width) = self.flap_width {
            options.default_flap_width_mm = Some(flap_width);
        }

        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::CliLogger::new(cli.verbose).init()?;

    match cli.command {
        Commands::Preprocess { infile } => {
            let input: Box<dyn Read> = if infile == Path::new("-") {
                Box::new(std::io::stdin().lock())
            } else {
                let file = std::fs::File::open(&infile)
                    .with_context(|| format!("opening {}", infile.display()))?;
                Box::new(file)
            };

            let columns = JacketOptions::default().columns;
            let rows = dust_jacket::preprocess(input, std::io::stdout().lock(), &columns)?;
            log::info!("Preprocessed {} rows", rows);
        }

        Commands::Layout { jacket } => {
            let options = jacket.options().await?;
            options.validate()?;
            let jackets = dust_jacket::load_jackets(&jacket.input, &options).await?;

            for (index, book) in jackets.iter().enumerate() {
                print!("{}", layout_report(index + 1, book, &options)?);
            }
        }

        Commands::Plot {
            jacket,
            output,
            split,
            bleed,
            no_outlines,
            no_fold_marks,
            no_crop_marks,
        } => {
            let mut options = jacket.options().await?;
            if let Some(bleed) = bleed {
                options.bleed_mm = bleed;
            }
            options.marks.region_outlines &= !no_outlines;
            options.marks.fold_marks &= !no_fold_marks;
            options.marks.crop_marks &= !no_crop_marks;
            options.validate()?;

            let jackets = dust_jacket::load_jackets(&jacket.input, &options).await?;

            if split {
                tokio::fs::create_dir_all(&output).await?;
                let stems = DustJacket::unique_file_stems(&jackets, &options.columns.title);
                for (index, (book, stem)) in jackets.iter().zip(&stems).enumerate() {
                    let path = output.join(format!("{}.pdf", stem));
                    let doc = dust_jacket::render_jackets(std::slice::from_ref(book), &options)
                        .await
                        .with_context(|| format!("jacket {} ({})", index + 1, stem))?;
                    dust_jacket::save_pdf(doc, &path).await?;
                    println!("{} -> {}", stem, path.display());
                }
            } else {
                let doc = dust_jacket::render_jackets(&jackets, &options).await?;
                dust_jacket::save_pdf(doc, &output).await?;
                println!("Plotted {} jackets -> {}", jackets.len(), output.display());
            }
        }
    }

    Ok(())
}

fn layout_report(number: usize, book: &DustJacket, options: &JacketOptions) -> Result<String> {
    let stem = book.file_stem(&options.columns.title, number);
    let stats = dust_jacket::calculate_statistics(book, options)
        .with_context(|| format!("jacket {} ({})", number, stem))?;
    let regions = book.regions()?;

    let mut report = format!("Jacket {}: {}\n", number, stem);
    for (region, canvas) in &regions {
        let (x0, y0) = canvas.origin().components();
        let (x1, y1) = canvas.termination().components();
        report.push_str(&format!(
            "  {:<10} ({:>7.2}, {:>7.2}) -> ({:>7.2}, {:>7.2})  width {:.2} mm\n",
            region.name(),
            x0,
            y0,
            x1,
            y1,
            canvas.width()
        ));
    }
    report.push_str(&format!(
        "  Jacket: {:.2} x {:.2} mm\n",
        stats.jacket_width_mm, stats.jacket_height_mm
    ));
    report.push_str(&format!(
        "  Sheet with {} mm bleed: {:.2} x {:.2} mm\n",
        options.bleed_mm, stats.sheet_width_mm, stats.sheet_height_mm
    ));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_layout_report() {
        let mut vars = BTreeMap::new();
        vars.insert("Title".to_string(), "Dune".to_string());
        let book = DustJacket::new(200.0, 150.0, 20.0, 80.0, vars);

        let report = layout_report(1, &book, &JacketOptions::default()).unwrap();

        assert!(report.is_ascii());
        assert!(report.starts_with("Jacket 1: Dune\n"));
        assert!(report.contains("(   0.00,    0.00) -> ( 150.00,  200.00)"));
        assert!(report.contains("  Jacket: 480.00 x 200.00 mm\n"));
        assert!(report.contains("  Sheet with 15 mm bleed: 510.00 x 230.00 mm\n"));
        assert_eq!(report.lines().count(), 8);
    }

    #[test]
    fn test_layout_report_invalid_jacket() {
        let book = DustJacket::new(200.0, 0.0, 20.0, 80.0, BTreeMap::new());
        let err = layout_report(2, &book, &JacketOptions::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("canvas precondition violated"));
    }
}
