use std::{io::Write, path::PathBuf, sync::Arc, time::Duration};

use clap::Parser;
use env_logger::Env;
use log::{debug, info};

use web_harvester::{
    DEFAULT_OUTPUT_FILE, DEFAULT_USER_AGENT, DataHarvester, FetcherRetrier,
    GITHUB_SEARCH_ENDPOINT, GithubRepositoryExtractor, HarvestConfig, HtmlQuoteExtractor,
    JsonFilePersister, QUOTES_BASE_URL, ReqwestFetcher, SequentialHarvester, StdResult,
};

/// Command line arguments for the harvester
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Base URL of the quotes site
    #[arg(long, env = "QUOTES_BASE_URL", default_value = QUOTES_BASE_URL)]
    quotes_base_url: String,

    /// Repository search endpoint of the GitHub API
    #[arg(long, env = "GITHUB_SEARCH_ENDPOINT", default_value = GITHUB_SEARCH_ENDPOINT)]
    github_search_endpoint: String,

    /// Path of the JSON report
    #[arg(short, long, env = "HARVEST_OUTPUT_FILE", default_value = DEFAULT_OUTPUT_FILE)]
    output_file: PathBuf,

    /// User agent identifying the harvester
    #[arg(short, long, env = "HARVEST_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Maximum number of attempts per request
    #[arg(short, long, default_value_t = 3)]
    max_attempts: u32,

    /// Delay before the first retry, in milliseconds
    #[arg(long, default_value_t = 1000)]
    base_delay_millis: u64,

    /// Timeout of a single request, in seconds
    #[arg(long, default_value_t = 10)]
    request_timeout_secs: u64,

    /// Language of the harvested repositories
    #[arg(long, default_value = "python")]
    github_language: String,

    /// Number of harvested repositories
    #[arg(long, default_value_t = 30)]
    github_per_page: u16,
}

impl From<Args> for HarvestConfig {
    fn from(args: Args) -> Self {
        Self {
            quotes_base_url: args.quotes_base_url,
            github_search_endpoint: args.github_search_endpoint,
            output_file: args.output_file,
            user_agent: args.user_agent,
            max_attempts: args.max_attempts,
            base_delay: Duration::from_millis(args.base_delay_millis),
            request_timeout: Duration::from_secs(args.request_timeout_secs),
            github_language: args.github_language,
            github_per_page: args.github_per_page,
        }
    }
}

#[tokio::main]
async fn main() -> StdResult<()> {
    init_logger();
    info!("Starting harvest");
    let config = HarvestConfig::from(Args::parse());
    debug!("Configuration: {config:?}");

    let harvester = build_sequential_harvester(&config)?;
    harvester.harvest().await?;

    Ok(())
}

fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} | {} | {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn build_sequential_harvester(config: &HarvestConfig) -> StdResult<Arc<dyn DataHarvester>> {
    let fetcher = Arc::new(FetcherRetrier::new(
        Arc::new(ReqwestFetcher::try_new(config.request_timeout)?),
        config.max_attempts,
        config.base_delay,
    ));
    let quote_extractor = Arc::new(HtmlQuoteExtractor::try_new(fetcher.clone(), config)?);
    let repository_extractor = Arc::new(GithubRepositoryExtractor::new(fetcher, config));
    let persister = Arc::new(JsonFilePersister::new(&config.output_file));

    Ok(Arc::new(SequentialHarvester::new(
        quote_extractor,
        repository_extractor,
        persister,
    )))
}
