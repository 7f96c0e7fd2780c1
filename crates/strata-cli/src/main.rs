//! Strata CLI
//!
//! Commands: export, export-all, defaults, shades, contrast, audit,
//! type-scale, spacing-scale, line-height.
//! Artifacts go to stdout or files; logs go to stderr.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use strata_core::color::{self, ContrastRating, DEFAULT_SHADE_STEPS};
use strata_core::spacing::{semantic_preset, SpacingScale};
use strata_core::typography::{calculate_line_height, ModularScale};
use strata_core::{
    Category, ExportError, FoundationBundle, ModelError, SpacingFoundation, StrataError,
};
use strata_export::{encode, encode_all, EncodeOptions, Format};

#[derive(Parser)]
#[command(name = "strata")]
#[command(about = "Strata - design foundations to design tokens", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug events to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a foundation bundle into one format
    Export {
        /// Bundle JSON file, or `-` for stdin
        input: String,

        /// css, scss, js, ts, tailwind, json or styleDictionary
        #[arg(short, long)]
        format: String,

        #[command(flatten)]
        encode: EncodeArgs,

        /// Write to this file instead of stdout
        #[arg(short, long, conflicts_with = "out_dir")]
        output: Option<PathBuf>,

        /// Write `<name>-tokens.<ext>` into this directory
        #[arg(long, requires = "name")]
        out_dir: Option<PathBuf>,

        /// Design system name used for file names
        #[arg(long)]
        name: Option<String>,
    },

    /// Encode a foundation bundle into every format
    ExportAll {
        /// Bundle JSON file, or `-` for stdin
        input: String,

        #[command(flatten)]
        encode: EncodeArgs,

        /// Output directory
        #[arg(long)]
        out_dir: PathBuf,

        /// Design system name used for file names
        #[arg(long, default_value = "design-system")]
        name: String,
    },

    /// Print the default foundation bundle as JSON
    Defaults,

    /// Generate a shade ramp from a base color
    Shades {
        /// Base color, `#rrggbb`
        base: String,

        #[arg(long, default_value_t = DEFAULT_SHADE_STEPS)]
        steps: u32,

        /// Print a color group with this id as JSON instead of a plain list
        #[arg(long)]
        group: Option<String>,
    },

    /// WCAG contrast ratio between two colors
    Contrast { a: String, b: String },

    /// Contrast of every palette color against white and black
    Audit {
        /// Bundle JSON file, or `-` for stdin
        input: String,
    },

    /// Generate a modular type scale as JSON
    TypeScale {
        #[arg(long, default_value_t = 16.0)]
        base: f64,

        #[arg(long, default_value_t = 1.25)]
        ratio: f64,

        #[arg(long, default_value_t = 8)]
        steps: u32,
    },

    /// Generate a linear spacing scale as JSON
    SpacingScale {
        #[arg(long, default_value_t = 4.0)]
        base: f64,

        #[arg(long, default_value_t = 20)]
        steps: u32,

        /// Include the semantic spacing preset
        #[arg(long)]
        semantic: bool,
    },

    /// Suggested line height for a font size such as `16px`
    LineHeight { size: String },
}

#[derive(Args)]
struct EncodeArgs {
    /// Comma-separated categories to keep, e.g. `colors,grid`
    #[arg(long, value_delimiter = ',')]
    only: Vec<String>,

    /// Emit section comments
    #[arg(long)]
    comments: bool,

    /// Compact output where the format allows it
    #[arg(long)]
    minify: bool,
}

impl EncodeArgs {
    fn options(&self) -> Result<EncodeOptions, ModelError> {
        let mut options = EncodeOptions {
            comments: self.comments,
            minify: self.minify,
            categories: None,
        };
        if !self.only.is_empty() {
            let categories = self
                .only
                .iter()
                .map(|name| name.parse::<Category>())
                .collect::<Result<Vec<_>, _>>()?;
            options = options.only(categories);
        }
        Ok(options)
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Strata(#[from] StrataError),

    #[error("not a #rrggbb color: {0}")]
    InvalidColor(String),

    #[error("not a CSS length: {0}")]
    InvalidLength(String),

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl From<ModelError> for CliError {
    fn from(e: ModelError) -> Self {
        CliError::Strata(e.into())
    }
}

impl From<ExportError> for CliError {
    fn from(e: ExportError) -> Self {
        CliError::Strata(e.into())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<ExitCode, CliError> {
    match command {
        Commands::Export {
            input,
            format,
            encode: args,
            output,
            out_dir,
            name,
        } => {
            let bundle = read_bundle(&input)?;
            let format: Format = format.parse()?;
            let text = encode(&bundle, format, &args.options()?)?;

            match (output, out_dir, name) {
                (Some(path), _, _) => write_file(&path, &text)?,
                (None, Some(dir), Some(name)) => {
                    create_dir(&dir)?;
                    write_file(&dir.join(format.file_name(&name)), &text)?
                }
                _ => print!("{}", text),
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::ExportAll {
            input,
            encode: args,
            out_dir,
            name,
        } => {
            let bundle = read_bundle(&input)?;
            let artifacts = encode_all(&bundle, &args.options()?)?;
            create_dir(&out_dir)?;
            for (format, text) in &artifacts {
                let path = out_dir.join(format.file_name(&name));
                write_file(&path, text)?;
                println!("{}", path.display());
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Defaults => {
            println!(
                "{}",
                serde_json::to_string_pretty(&FoundationBundle::defaults())?
            );
            Ok(ExitCode::SUCCESS)
        }

        Commands::Shades { base, steps, group } => {
            match group {
                Some(id) => {
                    let group = color::shade_group(&id, &id, &base, steps)
                        .ok_or_else(|| CliError::InvalidColor(base.clone()))?;
                    println!("{}", serde_json::to_string_pretty(&group)?);
                }
                None => {
                    let shades = color::generate_shades(&base, steps)
                        .ok_or_else(|| CliError::InvalidColor(base.clone()))?;
                    for shade in shades {
                        println!("{:>4}  {}", shade.name, shade.value);
                    }
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Contrast { a, b } => {
            let ratio = color::contrast_ratio(&a, &b).ok_or_else(|| {
                let bad = if color::hex_to_rgb(&a).is_none() { a.clone() } else { b.clone() };
                CliError::InvalidColor(bad)
            })?;
            let rating = ContrastRating::from_ratio(ratio);
            println!("{:.2}:1  {}", ratio, rating);
            // Exit 2 when body text fails AA.
            Ok(if rating.passes_body_text() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            })
        }

        Commands::Audit { input } => {
            let bundle = read_bundle(&input)?;
            let Some(colors) = &bundle.colors else {
                tracing::warn!("bundle has no color foundation");
                return Ok(ExitCode::SUCCESS);
            };
            for report in color::audit_contrast(colors) {
                println!(
                    "{:<16} {:<24} {:<8} white {:<16} black {}",
                    report.group,
                    report.name,
                    report.value,
                    describe(report.on_white),
                    describe(report.on_black),
                );
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::TypeScale { base, ratio, steps } => {
            let scale = ModularScale::new()
                .with_base(base)
                .with_ratio(ratio)
                .with_steps(steps)
                .generate();
            println!("{}", serde_json::to_string_pretty(&scale)?);
            Ok(ExitCode::SUCCESS)
        }

        Commands::SpacingScale {
            base,
            steps,
            semantic,
        } => {
            let spacing = SpacingFoundation {
                scale: SpacingScale::new(base, steps).generate(),
                semantic: if semantic { semantic_preset() } else { Vec::new() },
            };
            println!("{}", serde_json::to_string_pretty(&spacing)?);
            Ok(ExitCode::SUCCESS)
        }

        Commands::LineHeight { size } => {
            let px = calculate_line_height(&size).ok_or(CliError::InvalidLength(size))?;
            println!("{}px", px);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn describe(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.2} ({})", r, ContrastRating::from_ratio(r)),
        None => "invalid".to_string(),
    }
}

fn read_bundle(input: &str) -> Result<FoundationBundle, CliError> {
    let text = if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Read {
                path: "<stdin>".to_string(),
                source,
            })?;
        buf
    } else {
        fs::read_to_string(input).map_err(|source| CliError::Read {
            path: input.to_string(),
            source,
        })?
    };
    let bundle = FoundationBundle::from_json(&text)?;
    tracing::debug!(
        input,
        categories = ?bundle.categories(),
        tokens = bundle.token_count(),
        "loaded foundation bundle"
    );
    Ok(bundle)
}

fn create_dir(dir: &Path) -> Result<(), CliError> {
    fs::create_dir_all(dir).map_err(|source| CliError::Write {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, text: &str) -> Result<(), CliError> {
    fs::write(path, text).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote artifact");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_export() {
        let cli = Cli::parse_from([
            "strata", "export", "bundle.json", "--format", "tailwind", "--only", "colors,grid",
            "--minify",
        ]);
        match cli.command {
            Commands::Export {
                format, encode, ..
            } => {
                assert_eq!(format, "tailwind");
                let options = encode.options().unwrap();
                assert!(options.minify);
                assert_eq!(
                    options.categories,
                    Some(vec![Category::Colors, Category::Grid])
                );
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let args = EncodeArgs {
            only: vec!["shadows".to_string()],
            comments: false,
            minify: false,
        };
        assert!(matches!(
            args.options(),
            Err(ModelError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_output_conflicts_with_out_dir() {
        let result = Cli::try_parse_from([
            "strata", "export", "b.json", "-f", "css", "-o", "x.css", "--out-dir", "out",
            "--name", "acme",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(Some(21.0)), "21.00 (AAA)");
        assert_eq!(describe(None), "invalid");
    }

    #[test]
    fn test_export_all_writes_every_format() {
        let dir = std::env::temp_dir().join(format!("strata-cli-test-{}", std::process::id()));
        let bundle = dir.join("bundle.json");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            &bundle,
            serde_json::to_string(&FoundationBundle::defaults()).unwrap(),
        )
        .unwrap();

        run(Commands::ExportAll {
            input: bundle.display().to_string(),
            encode: EncodeArgs {
                only: vec![],
                comments: false,
                minify: false,
            },
            out_dir: dir.join("out"),
            name: "Acme UI".to_string(),
        })
        .unwrap();

        for format in Format::ALL {
            assert!(dir.join("out").join(format.file_name("Acme UI")).exists());
        }
        let css = fs::read_to_string(dir.join("out").join("acme-ui-tokens.css")).unwrap();
        assert!(css.contains("--color-primary-500: #3b82f6;"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_export_creates_missing_out_dir() {
        let dir = std::env::temp_dir().join(format!("strata-cli-export-{}", std::process::id()));
        let bundle = dir.join("bundle.json");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            &bundle,
            serde_json::to_string(&FoundationBundle::defaults()).unwrap(),
        )
        .unwrap();

        let out_dir = dir.join("nested").join("tokens");
        run(Commands::Export {
            input: bundle.display().to_string(),
            format: "scss".to_string(),
            encode: EncodeArgs {
                only: vec![],
                comments: false,
                minify: false,
            },
            output: None,
            out_dir: Some(out_dir.clone()),
            name: Some("Acme".to_string()),
        })
        .unwrap();

        let scss = fs::read_to_string(out_dir.join("acme-tokens.scss")).unwrap();
        assert!(scss.contains("$color-primary-500: #3b82f6;"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
