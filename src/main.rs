use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use linkparser::{load_config, ParsedUrl, Registry, SiteContext};

/// Classify links and print the extracted embed fields.
#[derive(Debug, Parser)]
#[command(name = "linkparser", version, about)]
struct Cli {
    /// URLs to classify
    #[arg(required = true)]
    urls: Vec<String>,

    /// Site configuration file (TOML)
    #[arg(short, long, env = "LINKPARSER_CONFIG")]
    config: Option<PathBuf>,

    /// Hostname the links are being rendered on
    #[arg(long)]
    own_host: Option<String>,

    /// Canonical web origin of the site
    #[arg(long)]
    web_url: Option<String>,

    /// Also accept the development hostname alias (or set LINKPARSER_DEV=1)
    #[arg(long)]
    dev: bool,

    /// Print every matching tag instead of only the first
    #[arg(long)]
    all: bool,
}

fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,linkparser=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file when given, otherwise the `LINKPARSER_*` environment; flags
/// override either.
fn build_context(cli: &Cli) -> Result<SiteContext> {
    let mut ctx: SiteContext = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("reading site config {}", path.display()))?
            .into(),
        None => SiteContext::from_env(),
    };

    if let Some(host) = &cli.own_host {
        ctx = ctx.with_own_hostname(host);
    }
    if let Some(web_url) = &cli.web_url {
        ctx = ctx.with_web_url(web_url);
    }
    if cli.dev {
        ctx = ctx.with_dev(true);
    }
    Ok(ctx)
}

fn describe(registry: &Registry, ctx: &SiteContext, url: &ParsedUrl, all: bool) -> Result<String> {
    if all {
        let tags = registry.matching_tags(url, ctx);
        if tags.is_empty() {
            return Ok("none".to_string());
        }
        let names: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
        return Ok(names.join(","));
    }

    match registry.resolve(url, ctx) {
        Some(result) => {
            let fields = serde_json::to_string(&result.fields)?;
            Ok(format!("{}\t{}", result.tag, fields))
        }
        None => Ok("none".to_string()),
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let ctx = build_context(cli)?;
    let registry = Registry::new();
    let mut all_parsed = true;

    for input in &cli.urls {
        match ParsedUrl::parse(input) {
            Ok(url) => {
                let line = describe(&registry, &ctx, &url, cli.all)?;
                println!("{}\t{}", input, line);
            }
            Err(e) => {
                tracing::error!("{}: {}", input, e);
                all_parsed = false;
            }
        }
    }

    Ok(all_parsed)
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
