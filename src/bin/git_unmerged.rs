//! git-unmerged entry point

use std::process::ExitCode;

use gitshare::cli::args::UnmergedCli;
use gitshare::cli::commands::unmerged::{run_unmerged, ReportFormat};
use gitshare::cli::exit;
use gitshare::cli::{Output, ShareContext};
use gitshare::telemetry::{init_telemetry, TelemetryConfig};

const USAGE: &str = "Usage: git unmerged [--json | --count]";

fn main() -> ExitCode {
    let cli: UnmergedCli = match exit::parse_args(std::env::args_os(), USAGE) {
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

fn run(cli: UnmergedCli) -> anyhow::Result<()> {
    let ctx = ShareContext::from_args(&cli.global)?;
    run_unmerged(&ctx, ReportFormat::from_flags(cli.json, cli.count))
}
