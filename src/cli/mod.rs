// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use crate::application::usecases::run_pipeline::{PipelineOptions, PipelineOrchestrator};
use crate::application::usecases::summarize_domains::SummarizeDomainsUseCase;
use crate::config::settings::{NamingStrategy, Settings};
use crate::engines::reader_engine::ReaderEngine;
use crate::infrastructure::metrics::describe_metrics;
use crate::infrastructure::storage::DomainStore;
use crate::utils::errors::PipelineError;

/// Fetch reader-rendered pages, store them per domain and build domain summaries
#[derive(Parser, Debug)]
#[command(name = "readerscrape", version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Extra configuration file layered over config/default and config/$APP_ENVIRONMENT
    #[arg(long, global = true, value_name = "FILE", env = "READERSCRAPE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every URL in the list, then regenerate touched domain summaries (default)
    Run(RunArgs),

    /// Regenerate domain summaries from files already on disk, without fetching
    Summarize(SummarizeArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// URL list file, one URL per line
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output root; one directory per domain is created below it
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Reader endpoint prefix, the target URL is appended verbatim
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Maximum number of requests in flight
    #[arg(short = 'j', long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub concurrency: Option<u32>,

    /// How the unique part of content filenames is generated
    #[arg(long, value_enum)]
    pub naming: Option<NamingStrategy>,

    /// Regenerate summaries for touched domains
    #[arg(long, overrides_with = "no_summarize")]
    pub summarize: bool,

    /// Skip summary regeneration
    #[arg(long, overrides_with = "summarize")]
    pub no_summarize: bool,
}

impl RunArgs {
    /// 命令行参数覆盖配置
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(input) = &self.input {
            settings.input.path = input.clone();
        }
        if let Some(output) = &self.output {
            settings.storage.base_path = output.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            settings.reader.endpoint = endpoint.clone();
        }
        if let Some(concurrency) = self.concurrency {
            settings.pipeline.concurrency = concurrency as usize;
        }
        if let Some(naming) = self.naming {
            settings.storage.naming = naming;
        }
        if let Some(summarize) = self.summarize_override() {
            settings.pipeline.summarize = summarize;
        }
    }

    fn summarize_override(&self) -> Option<bool> {
        match (self.summarize, self.no_summarize) {
            (_, true) => Some(false),
            (true, false) => Some(true),
            (false, false) => None,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct SummarizeArgs {
    /// Only regenerate this domain's summary
    pub domain: Option<String>,

    /// Output root containing the domain directories
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

/// Execute CLI command
pub async fn execute(cli: Cli, settings: Settings) -> Result<()> {
    match cli.command {
        Some(Commands::Run(args)) => run(args, settings).await,
        Some(Commands::Summarize(args)) => summarize(args, settings).await,
        None => run(cli.run, settings).await,
    }
}

async fn run(args: RunArgs, mut settings: Settings) -> Result<()> {
    args.apply(&mut settings);
    describe_metrics();

    let engine = ReaderEngine::from_settings(&settings.reader).map_err(PipelineError::from)?;
    let store = DomainStore::new(&settings.storage.base_path, settings.storage.naming);
    let mut options = PipelineOptions::from_settings(&settings.pipeline);
    options.show_progress = std::io::stderr().is_terminal();

    info!(
        endpoint = %settings.reader.endpoint,
        output = %settings.storage.base_path.display(),
        concurrency = options.concurrency,
        summarize = options.summarize,
        "Configuration resolved"
    );

    let mut pipeline = PipelineOrchestrator::new(Arc::new(engine), store, options);
    match pipeline.run(&settings.input.path).await {
        Ok(metrics) => {
            println!("\n{}", metrics);
            Ok(())
        }
        Err(e) if e.is_early_exit() => {
            warn!("{}", e);
            eprintln!("{}.", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

async fn summarize(args: SummarizeArgs, settings: Settings) -> Result<()> {
    let base = args.output.unwrap_or(settings.storage.base_path);
    let outcomes = SummarizeDomainsUseCase::new(&base)
        .execute(args.domain.as_deref())
        .await?;

    if outcomes.is_empty() {
        eprintln!("No domain directories found under '{}'.", base.display());
        return Ok(());
    }

    let mut failed = 0;
    for (domain, outcome) in &outcomes {
        match outcome {
            Ok(summary) => println!(
                "{}: {} content files -> {}",
                domain,
                summary.block_count(),
                summary.path.display()
            ),
            Err(e) => {
                failed += 1;
                eprintln!("{}: {}", domain, e);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} domain summaries failed", failed, outcomes.len());
    }
    Ok(())
}
