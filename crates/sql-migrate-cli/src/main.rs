//! sql-migrate CLI - environment bootstrap for SQL schema migrations.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use sql_migrate::{
    ConfigArgs, Environment, MigrateError, MigrationContext, MigrationSettings, TlsEnv,
    TlsRegistry,
};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "sql-migrate")]
#[command(about = "SQL schema migration environment bootstrap")]
#[command(version = sql_migrate::version())]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output JSON result to stdout
    #[arg(long)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Test the database connection of the selected environment
    HealthCheck,

    /// Show the resolved environment and its migration settings
    ShowEnv,
}

#[derive(Serialize)]
struct EnvironmentReport<'a> {
    environment: &'a str,
    dialect: &'a str,
    data_source: String,
    dir: &'a str,
    settings: MigrationSettings,
}

impl<'a> EnvironmentReport<'a> {
    fn new(name: &'a str, env: &'a Environment) -> Self {
        Self {
            environment: name,
            dialect: &env.dialect,
            data_source: env.redacted_data_source(),
            dir: &env.dir,
            settings: env.migration_settings(),
        }
    }

    fn print(&self) {
        println!("Environment: {}", self.environment);
        println!("  Dialect: {}", self.dialect);
        println!("  Data source: {}", self.data_source);
        println!("  Migrations dir: {}", self.dir);
        println!("  Table: {}", self.settings.table_name);
        if let Some(ref schema) = self.settings.schema_name {
            println!("  Schema: {}", schema);
        }
        println!("  Ignore unknown: {}", self.settings.ignore_unknown);
    }
}

#[derive(Serialize)]
struct HealthReport<'a> {
    environment: &'a str,
    dialect: &'static str,
    connected: bool,
    latency_ms: u128,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<(), MigrateError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format);

    let env = cli.config.environment()?;
    info!(
        "Using environment '{}' from {:?}",
        cli.config.env, cli.config.config
    );

    match cli.command {
        Commands::ShowEnv => {
            let report = EnvironmentReport::new(&cli.config.env, &env);
            if cli.output_json {
                println!("{}", to_json(&report)?);
            } else {
                report.print();
            }
        }

        Commands::HealthCheck => {
            let mut registry = TlsRegistry::new();
            let mut context =
                MigrationContext::open(&env, &TlsEnv::from_env(), &mut registry).await?;
            let latency = context
                .connection
                .latency()
                .await
                .map_err(MigrateError::Ping)?;
            let report = HealthReport {
                environment: &cli.config.env,
                dialect: context.driver.name(),
                connected: true,
                latency_ms: latency.as_millis(),
            };
            context.close().await?;

            if cli.output_json {
                println!("{}", to_json(&report)?);
            } else {
                println!("Health Check Results:");
                println!(
                    "  {} ({}): OK ({}ms)",
                    report.environment, report.dialect, report.latency_ms
                );
            }
        }
    }

    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, MigrateError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn setup_logging(verbosity: &str, format: &str) {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
