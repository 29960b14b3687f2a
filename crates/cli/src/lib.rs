use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use mobkp_validator::{
    default_instances_dir, write_summary, ValidateOptions, ValidationStats, Validator,
    ValidatorError, DEFAULT_INSTANCE_PATTERN,
};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "mobkp-validate")]
#[command(about = "Validate MOBKP instance files for duplicates and format errors", long_about = None)]
#[command(version)]
#[command(after_help = "Examples:
  mobkp-validate                    # Dry run, report issues only
  mobkp-validate --modify           # Fix duplicate points in place
  mobkp-validate --verbose          # Show detailed progress
  mobkp-validate -d /path/to/inst   # Use custom instances folder")]
pub struct Cli {
    /// Path to instances directory (default: $MOBKP_INSTANCES_DIR or "instances")
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Rewrite files to remove duplicate nondominated points
    #[arg(short, long)]
    pub modify: bool,

    /// Print per-folder progress and enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Glob matched against instance file names
    #[arg(long, default_value = DEFAULT_INSTANCE_PATTERN)]
    pub pattern: String,

    /// Print the summary as JSON on stdout (diagnostics move to stderr)
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    fn root(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(default_instances_dir)
    }

    fn options(&self) -> ValidateOptions {
        let base = if self.modify {
            ValidateOptions::repair()
        } else {
            ValidateOptions::dry_run()
        };
        base.with_verbose(self.verbose)
            .with_pattern(self.pattern.clone())
    }
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    directory: String,
    mode: &'a str,
    #[serde(flatten)]
    stats: ValidationStats,
    clean: bool,
}

pub fn main_entry() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet || cli.json {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

/// Run a validation pass for parsed arguments and pick the exit status.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    let root = cli.root();
    if !root.exists() {
        eprintln!("Error: {}", ValidatorError::MissingDirectory(root));
        return Ok(ExitCode::FAILURE);
    }

    let options = cli.options();
    let validator = Validator::new(options);

    if cli.json {
        let stats = validate(&validator, &root, &mut io::stderr().lock())?;
        let summary = JsonSummary {
            directory: root.display().to_string(),
            mode: validator.options().mode_label(),
            stats,
            clean: stats.is_clean(),
        };
        let payload = serde_json::to_string_pretty(&summary)?;
        print_stdout(&payload)?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Validating instances in: {}", root.display())?;
    writeln!(stdout, "Mode: {}", validator.options().mode_label())?;
    writeln!(stdout)?;

    let stats = validate(&validator, &root, &mut stdout)?;
    write_summary(&mut stdout, &stats, cli.modify)?;
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn validate<W: Write>(validator: &Validator, root: &Path, out: &mut W) -> Result<ValidationStats> {
    validator
        .run(root, out)
        .with_context(|| format!("Failed to validate {}", root.display()))
}

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_short_flags() {
        let cli = Cli::try_parse_from(["mobkp-validate", "-d", "data/inst", "-m", "-v"]).unwrap();
        assert_eq!(cli.root(), PathBuf::from("data/inst"));
        let options = cli.options();
        assert!(options.modify);
        assert!(options.verbose);
        assert_eq!(options.pattern, "*.in");
    }

    #[test]
    fn defaults_to_dry_run_with_custom_pattern() {
        let cli = Cli::try_parse_from(["mobkp-validate", "--pattern", "*.dat"]).unwrap();
        assert_eq!(
            cli.options(),
            ValidateOptions::dry_run().with_pattern("*.dat")
        );
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["mobkp-validate", "-q", "-v"]).is_err());
    }
}
