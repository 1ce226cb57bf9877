use analytics::{AnalyticsEngine, drawdowns, max_drawdown};
use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use configuration::load_config;
use core_types::{DownsideMethod, KurtosisEstimator, RiskFree, SkewnessEstimator, TimingModel};
use regression::{DesignMatrix, Ols};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod data;
mod render;

use data::Dataset;

/// The main entry point for the perfstat command-line tool.
fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Report(args) => handle_report(args),
        Commands::Regress(args) => handle_regress(args),
        Commands::Drawdowns(args) => handle_drawdowns(args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Performance and risk statistics for return series stored in CSV files.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a full performance report of an asset against a benchmark.
    Report(ReportArgs),
    /// Run an ordinary least squares regression between CSV columns.
    Regress(RegressArgs),
    /// Print the per-period drawdown series of an asset.
    Drawdowns(DrawdownArgs),
}

#[derive(Args)]
struct ReportArgs {
    /// CSV file with a header row, one column per series.
    #[arg(long, short)]
    data: PathBuf,

    /// Column holding the asset returns.
    #[arg(long)]
    asset: String,

    /// Column holding the benchmark returns.
    #[arg(long)]
    benchmark: String,

    /// Column holding a per-period risk-free rate.
    #[arg(long, conflicts_with = "risk_free_rate")]
    risk_free: Option<String>,

    /// A constant per-period risk-free rate. Overrides `risk_free.rate` from the config.
    #[arg(long)]
    risk_free_rate: Option<f64>,

    /// Path to a TOML config file. Defaults to `perfstat.toml` if present.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Periods per year, overriding the config.
    #[arg(long)]
    scale: Option<u32>,

    /// Minimum acceptable return for the downside statistics.
    #[arg(long)]
    mar: Option<f64>,

    #[arg(long, value_enum)]
    downside_method: Option<DownsideMethod>,

    #[arg(long, value_enum)]
    skewness: Option<SkewnessEstimator>,

    #[arg(long, value_enum)]
    kurtosis: Option<KurtosisEstimator>,

    #[arg(long, value_enum)]
    timing_model: Option<TimingModel>,

    /// Print the report as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct RegressArgs {
    #[arg(long, short)]
    data: PathBuf,

    /// Column holding the dependent variable.
    #[arg(long)]
    response: String,

    /// Column holding an explanatory variable. Repeat for several.
    #[arg(long = "regressor", required = true)]
    regressors: Vec<String>,

    /// Fit without an intercept column.
    #[arg(long)]
    no_intercept: bool,

    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct DrawdownArgs {
    #[arg(long, short)]
    data: PathBuf,

    #[arg(long)]
    asset: String,

    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Command Handlers
// ==============================================================================

fn handle_report(args: ReportArgs) -> Result<()> {
    let config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    let mut settings = config.analysis;
    if let Some(scale) = args.scale {
        if scale == 0 {
            bail!("--scale must be a positive number of periods per year");
        }
        settings.scale = scale;
    }
    if let Some(mar) = args.mar {
        settings.mar = mar;
    }
    if let Some(method) = args.downside_method {
        settings.downside_method = method;
    }
    if let Some(estimator) = args.skewness {
        settings.skewness_estimator = estimator;
    }
    if let Some(estimator) = args.kurtosis {
        settings.kurtosis_estimator = estimator;
    }
    if let Some(model) = args.timing_model {
        settings.timing_model = model;
    }

    let dataset = Dataset::from_path(&args.data)?;
    let ra = dataset.column(&args.asset)?;
    let rb = dataset.column(&args.benchmark)?;
    let risk_free = match (&args.risk_free, args.risk_free_rate) {
        (Some(column), _) => RiskFree::Series(dataset.column(column)?),
        (None, Some(rate)) => RiskFree::Scalar(rate),
        (None, None) => RiskFree::Scalar(config.risk_free.rate),
    };
    tracing::info!(
        asset = %args.asset,
        benchmark = %args.benchmark,
        observations = dataset.len(),
        "computing performance report"
    );

    let engine = AnalyticsEngine::new(settings);
    let report = engine
        .calculate(&ra, &rb, &risk_free)
        .context("Failed to compute performance report")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} vs {}", args.asset, args.benchmark);
        println!("{}", render::report_table(&report));
    }
    Ok(())
}

fn handle_regress(args: RegressArgs) -> Result<()> {
    let dataset = Dataset::from_path(&args.data)?;
    let y = dataset.column(&args.response)?;
    tracing::info!(
        response = %args.response,
        regressors = args.regressors.len(),
        observations = dataset.len(),
        "fitting regression"
    );

    let mut builder = DesignMatrix::builder().intercept(!args.no_intercept);
    for name in &args.regressors {
        builder = builder.column(name.as_str(), &dataset.column(name)?);
    }
    let design = builder.build().context("Failed to build the design matrix")?;
    let fit = Ols::from_design(&design, &y)
        .and_then(|ols| ols.fit())
        .with_context(|| format!("Failed to regress '{}'", args.response))?;

    if args.json {
        let out = serde_json::json!({
            "response": args.response,
            "terms": design.names(),
            "fit": fit,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        let (coefficients, summary) = render::fit_tables(design.names(), &fit);
        println!("Response: {}", args.response);
        println!("{coefficients}");
        println!("{summary}");
    }
    Ok(())
}

fn handle_drawdowns(args: DrawdownArgs) -> Result<()> {
    let dataset = Dataset::from_path(&args.data)?;
    let returns = dataset.column(&args.asset)?;
    let series = drawdowns(&returns);
    let deepest = max_drawdown(&returns);

    if args.json {
        let out = serde_json::json!({
            "asset": args.asset,
            "max_drawdown": deepest,
            "drawdowns": series,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", render::drawdown_table(&returns, &series));
        println!("Max drawdown: {deepest:.6}");
    }
    Ok(())
}
