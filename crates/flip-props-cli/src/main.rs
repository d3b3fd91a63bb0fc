use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process;

use flip_props::schema::SCHEMA;
use flip_props::{
    normalize_with, validate, Diagnostic, DiagnosticsExt, NormalizerOptions, RawConfig, Severity,
};

/// flip-props — normalize flip animation configurations
///
/// Validate raw configurations and print their canonical form.
#[derive(Parser)]
#[command(name = "flip-props", version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a raw JSON configuration and print the canonical form
    Normalize {
        /// Path to .json configuration
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Skip the keyed stateless children check
        #[arg(long)]
        no_child_check: bool,
    },

    /// Check a raw JSON configuration against the schema
    Validate {
        /// Path to .json configuration
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the recognized field schema
    Schema,

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match cli.command {
        Commands::Normalize {
            file,
            json,
            no_child_check,
        } => cmd_normalize(&file, json, no_child_check),
        Commands::Validate { file, json } => cmd_validate(&file, json),
        Commands::Schema => cmd_schema(),
        Commands::Version => {
            println!(
                "flip-props {} (flip-props-core {})",
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_VERSION")
            );
            0
        }
    };

    process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Read and decode a raw configuration. Errors are reported and mapped to exit code 2.
fn load(file: &Path) -> Result<RawConfig, i32> {
    RawConfig::from_json_file(file).map_err(|e| {
        eprintln!("{} {}: {}", "error:".red().bold(), file.display(), e);
        2
    })
}

fn cmd_normalize(file: &Path, json: bool, no_child_check: bool) -> i32 {
    let raw = match load(file) {
        Ok(raw) => raw,
        Err(code) => return code,
    };
    let options = NormalizerOptions {
        check_children: !no_child_check,
        ..NormalizerOptions::default()
    };
    log::debug!("normalizing {} ({} raw fields)", file.display(), raw.len());

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let config = normalize_with(&raw, &options, &mut diagnostics);
    let errors = diagnostics.errors().len();
    let warnings = diagnostics.warnings().len();

    if json {
        let out = serde_json::json!({
            "config": config.to_json(),
            "diagnostics": diagnostics.iter().map(diagnostic_json).collect::<Vec<_>>(),
            "errors": errors,
            "warnings": warnings,
        });
        println!("{}", to_pretty(&out));
    } else {
        report(&diagnostics);
        println!("{}", to_pretty(&config.to_json()));
    }

    if errors > 0 {
        1
    } else {
        0
    }
}

fn cmd_validate(file: &Path, json: bool) -> i32 {
    let raw = match load(file) {
        Ok(raw) => raw,
        Err(code) => return code,
    };
    let result = validate(&raw);

    if json {
        let out = serde_json::json!({
            "valid": result.is_valid(),
            "errors": result.violations.len(),
            "violations": result
                .violations
                .iter()
                .map(|v| serde_json::json!({"field": v.field(), "message": v.to_string()}))
                .collect::<Vec<_>>(),
        });
        println!("{}", to_pretty(&out));
    } else if result.is_valid() {
        println!("{} {} is valid", "✓".green(), file.display());
    } else {
        for v in &result.violations {
            eprintln!("{} {}", "error:".red().bold(), v);
        }
        eprintln!(
            "{} {} violation(s) in {}",
            "✗".red(),
            result.violations.len(),
            file.display()
        );
    }

    if result.is_valid() {
        0
    } else {
        1
    }
}

fn cmd_schema() -> i32 {
    println!("{:<26} {:<40} {}", "FIELD".bold(), "ACCEPTS".bold(), "DEFAULT".bold());
    for spec in SCHEMA {
        let default = match spec.default.to_raw() {
            Some(v) => v.to_string(),
            None => format!("{:?}", spec.default),
        };
        let name = if spec.required {
            format!("{} (required)", spec.name)
        } else {
            spec.name.to_string()
        };
        println!("{:<26} {:<40} {}", name, spec.expected(), default);
    }
    0
}

fn report(diagnostics: &[Diagnostic]) {
    for d in diagnostics {
        let label = match d.severity {
            Severity::Error => format!("error[{}]:", d.kind()).red().bold(),
            Severity::Warning => format!("warning[{}]:", d.kind()).yellow().bold(),
        };
        eprintln!("{} {}", label, d.message);
    }
}

fn diagnostic_json(d: &Diagnostic) -> serde_json::Value {
    let severity = match d.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };
    serde_json::json!({
        "severity": severity,
        "kind": d.kind().to_string(),
        "field": d.field(),
        "message": d.message,
    })
}

fn to_pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
