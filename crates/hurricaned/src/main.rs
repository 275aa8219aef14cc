// # hurricaned - Hurricane Record Reconciler CLI
//
// Thin integration layer only: argument parsing, environment
// configuration, and wiring. All lifecycle logic lives in hurricane-core.
//
// ## Usage
//
// ```text
// hurricaned create <name> <ip>
// hurricaned read   <name>
// hurricaned update <name> <ip>
// hurricaned delete <name>
// ```
//
// `<name>` is the host label; the zone comes from the environment.
//
// ## Configuration
//
// All configuration is done via environment variables:
//
// - `HURRICANE_DNS_ENDPOINT`: update URL for POST requests
//   (default: https://dyn.dns.he.net/nic/update)
// - `HURRICANE_DNS_PASSWORD`: default password for update requests
// - `HURRICANE_DNS_ZONE`: default zone
// - `HURRICANE_LOG_LEVEL`: trace, debug, info, warn, error (default: info)
//
// ## Example
//
// ```bash
// export HURRICANE_DNS_PASSWORD=password
// export HURRICANE_DNS_ZONE=example.com
//
// hurricaned create dyn 203.0.113.9
// ```

use std::env;
use std::net::Ipv4Addr;
use std::process::ExitCode;

use anyhow::Result;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use hurricane_authority_hickory::HickoryAuthority;
use hurricane_core::{ProviderDefaults, RecordReconciler, RecordRequest, RecordView};
use hurricane_updater_he::HurricaneUpdater;

/// Exit codes for different termination scenarios
///
/// These codes follow systemd conventions:
/// - 0: Success
/// - 1: Configuration or usage error
/// - 2: Runtime error
#[derive(Debug, Clone, Copy)]
enum HurricaneExitCode {
    /// Operation completed
    Success = 0,
    /// Configuration or usage error
    ConfigError = 1,
    /// Runtime error (lookup or update failure)
    RuntimeError = 2,
}

impl From<HurricaneExitCode> for ExitCode {
    fn from(code: HurricaneExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// One lifecycle operation per invocation
#[derive(Debug, Clone, Copy)]
enum Operation {
    Create(Ipv4Addr),
    Read,
    Update(Ipv4Addr),
    Delete,
}

/// Parsed command line
#[derive(Debug)]
struct Invocation {
    operation: Operation,
    name: String,
}

const USAGE: &str = "usage: hurricaned <create|read|update|delete> <name> [ip]";

/// Parse the command line into an operation
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Invocation> {
    let verb = args.next().ok_or_else(|| anyhow::anyhow!(USAGE))?;
    let name = args.next().ok_or_else(|| anyhow::anyhow!(USAGE))?;

    let mut parse_ip = || -> Result<Ipv4Addr> {
        let raw = args
            .next()
            .ok_or_else(|| anyhow::anyhow!("{verb} requires an IPv4 address\n{USAGE}"))?;
        raw.parse()
            .map_err(|_| anyhow::anyhow!("invalid IPv4 address: {raw}"))
    };

    let operation = match verb.as_str() {
        "create" => Operation::Create(parse_ip()?),
        "read" => Operation::Read,
        "update" => Operation::Update(parse_ip()?),
        "delete" => Operation::Delete,
        other => anyhow::bail!("unknown operation '{other}'\n{USAGE}"),
    };

    Ok(Invocation { operation, name })
}

fn main() -> ExitCode {
    let invocation = match parse_args(env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("{e}");
            return HurricaneExitCode::ConfigError.into();
        }
    };

    let defaults = ProviderDefaults::from_env();
    if let Err(e) = defaults.validate() {
        eprintln!("Configuration error: {e}");
        return HurricaneExitCode::ConfigError.into();
    }

    // Initialize tracing
    let log_level = match env::var("HURRICANE_LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
        return HurricaneExitCode::ConfigError.into();
    }

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {e}");
            return HurricaneExitCode::RuntimeError.into();
        }
    };

    rt.block_on(async {
        match run(defaults, invocation).await {
            Ok(()) => HurricaneExitCode::Success,
            Err(e) => {
                error!("Operation failed: {e}");
                HurricaneExitCode::RuntimeError
            }
        }
    })
    .into()
}

/// Run one reconciler operation
async fn run(defaults: ProviderDefaults, invocation: Invocation) -> Result<()> {
    let desired_ip = match invocation.operation {
        Operation::Create(ip) | Operation::Update(ip) => ip,
        // Read and delete never consult the desired address
        Operation::Read | Operation::Delete => Ipv4Addr::UNSPECIFIED,
    };

    let spec = defaults.resolve(RecordRequest {
        zone: None,
        name: invocation.name,
        ip: desired_ip,
        password: None,
    })?;

    info!("{:?} for {}", invocation.operation, spec.fqdn());

    let reconciler = RecordReconciler::new(
        Box::new(HickoryAuthority::new()),
        Box::new(HurricaneUpdater::new(&defaults.endpoint)?),
    );

    match invocation.operation {
        Operation::Create(_) => report(reconciler.create(&spec).await?),
        Operation::Read => report(reconciler.read(&spec).await?),
        Operation::Update(_) => report(reconciler.update(&spec).await?),
        Operation::Delete => {
            reconciler.delete(&spec).await?;
            println!("{} deleted", spec.fqdn());
        }
    }

    Ok(())
}

/// Print an operation's resulting view
fn report(view: RecordView) {
    match view.ip {
        Some(ip) => println!("{} {ip}", view.id),
        None => println!("{} absent", view.id),
    }
}
