//! git-share entry point

use std::process::ExitCode;

use gitshare::cli::args::ShareCli;
use gitshare::cli::commands::share::run_share;
use gitshare::cli::exit;
use gitshare::cli::{Output, ShareContext};
use gitshare::core::ShareRequest;
use gitshare::telemetry::{init_telemetry, TelemetryConfig};

const USAGE: &str = "Usage: git share <branch> <revision>";

fn main() -> ExitCode {
    let cli: ShareCli = match exit::parse_args(std::env::args_os(), USAGE) {
        Ok(cli) => cli,
        Err(code) => return ExitCode::from(code),
    };

    let _telemetry = match init_telemetry(&TelemetryConfig::for_verbosity(cli.global.verbose)) {
        Ok(guard) => Some(guard),
        Err(err) => {
            Output::warning(&format!("Logging disabled: {:#}", err));
            None
        }
    };

    exit::finish(run(cli))
}

fn run(cli: ShareCli) -> anyhow::Result<()> {
    let ctx = ShareContext::from_args(&cli.global)?;
    let request = ShareRequest::new(cli.branch, cli.revision);
    run_share(&ctx, &request, cli.dry_run)
}
