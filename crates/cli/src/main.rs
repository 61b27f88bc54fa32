use clap::Parser;
use ferrous_dig_domain::CliOverrides;
use output::{DigOutput, ResolutionResponse};
use tracing::{info, warn};

mod bootstrap;
mod di;
mod input;
mod output;

#[derive(Parser)]
#[command(name = "ferrous-dig")]
#[command(version)]
#[command(about = "Ferrous Dig - iterative DNS lookups from the root servers down")]
struct Cli {
    /// Hostname to resolve
    hostname: String,

    /// Query type (A, MX, NS or CNAME)
    record_type: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Per-attempt timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Upper bound on delegation levels followed
    #[arg(long)]
    max_hops: Option<usize>,

    /// Query exactly three levels: root, TLD, authoritative
    #[arg(long)]
    fixed_depth: bool,

    /// Query all servers of a level at once and keep the fastest reply
    #[arg(long)]
    race: bool,

    /// Use glue addresses from referrals instead of looking nameservers up
    #[arg(long)]
    glue: bool,

    /// Resolve a CNAME target with the original query type instead of A
    #[arg(long)]
    chase_original_type: bool,

    /// Refuse query types other than A, MX, NS, CNAME
    #[arg(long)]
    strict: bool,

    /// Print every delegation level before the answer
    #[arg(long)]
    trace: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        query_timeout_ms: cli.timeout_ms,
        max_hops: cli.max_hops,
        fixed_depth: cli.fixed_depth,
        race: cli.race,
        use_glue: cli.glue,
        chase_original_type: cli.chase_original_type,
        strict_input: cli.strict,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let query = input::parse_query(
        &cli.hostname,
        &cli.record_type,
        config.resolver.strict_input,
    )?;
    if let Some(warning) = &query.warning {
        eprintln!("{}", warning);
        warn!(record_type = %query.question.record_type, "Unsupported query type, continuing");
    }

    let services = di::ResolverServices::new(&config)?;

    info!(
        name = %query.question.name,
        record_type = %query.question.record_type,
        roots = services.root_servers.len(),
        "Starting iterative resolution"
    );

    let result = services
        .resolve_query
        .execute(&query.question, &services.root_servers)
        .await;

    if cli.json {
        let response = ResolutionResponse::from_result(&result, cli.trace);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", DigOutput::new(&result, cli.trace));
    }

    Ok(())
}
