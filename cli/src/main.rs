use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use schema_merge_sync::{
    ApplyOptions, ApplyOutcome, HostConfig, HttpSchemaService, apply_from_file, snapshot_to_file,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "schema-merge")]
#[command(about = "Export a CMS data schema to YAML and re-apply it to a running instance")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    host: HostArgs,
    /// Log filter used when RUST_LOG is not set (e.g. info, debug).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct HostArgs {
    /// YAML file with host connection settings (url, token, timeout_secs).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Base URL of the platform.
    #[arg(long, global = true, env = "SCHEMA_MERGE_URL")]
    url: Option<String>,
    /// Static admin access token.
    #[arg(long, global = true, env = "SCHEMA_MERGE_TOKEN", hide_env_values = true)]
    token: Option<String>,
    /// Request timeout in seconds.
    #[arg(long, global = true)]
    timeout: Option<u64>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Dump the schema into a file.
    Snapshot(SnapshotArgs),
    /// Apply the schema from a file.
    Apply(ApplyArgs),
}

#[derive(Debug, Args)]
struct SnapshotArgs {
    /// The target output file.
    #[arg(short = 'o', long)]
    output: PathBuf,
}

#[derive(Debug, Args)]
struct ApplyArgs {
    /// Snapshot file to apply.
    file: PathBuf,
    /// Print the diff instead of applying it.
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let result = match cli.command {
        Command::Snapshot(args) => run_snapshot(&cli.host, args),
        Command::Apply(args) => run_apply(&cli.host, args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// ---------------------------------------------------------------------------
// snapshot / apply
// ---------------------------------------------------------------------------

fn run_snapshot(host: &HostArgs, args: SnapshotArgs) -> Result<(), String> {
    let service = connect(host)?;
    let summary = snapshot_to_file(&service, &args.output).map_err(|e| {
        format!(
            "Failed to write snapshot '{}': {e}",
            args.output.display()
        )
    })?;
    println!(
        "Snapshot written to '{}': {} collections, {} fields, {} relations.",
        args.output.display(),
        summary.collections,
        summary.fields,
        summary.relations
    );
    Ok(())
}

fn run_apply(host: &HostArgs, args: ApplyArgs) -> Result<(), String> {
    let service = connect(host)?;
    let options = ApplyOptions {
        dry_run: args.dry_run,
    };
    let outcome = apply_from_file(&service, &args.file, options)
        .map_err(|e| format!("Failed to apply '{}': {e}", args.file.display()))?;

    match outcome {
        ApplyOutcome::NothingToDo => println!("Nothing to do"),
        ApplyOutcome::DryRun { diff } => {
            let yaml = serde_yaml::to_string(&diff)
                .map_err(|e| format!("Failed to render diff: {e}"))?;
            print!("{yaml}");
        }
        ApplyOutcome::Applied { hash } => println!("Schema applied (hash {hash})."),
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Merges the config file (if any) with flag and environment overrides.
fn resolve_config(host: &HostArgs) -> Result<HostConfig, String> {
    let base = match &host.config {
        Some(path) => HostConfig::load(path)
            .map_err(|e| format!("Failed to read config '{}': {e}", path.display()))?,
        None => HostConfig::default(),
    };
    Ok(base.with_overrides(host.url.clone(), host.token.clone(), host.timeout))
}

fn connect(host: &HostArgs) -> Result<HttpSchemaService, String> {
    let config = resolve_config(host)?;
    tracing::debug!(url = ?config.url, timeout_secs = config.timeout_secs, "resolved host settings");
    HttpSchemaService::new(&config).map_err(|e| {
        format!("{e} (use --url, SCHEMA_MERGE_URL, or a --config file)")
    })
}
