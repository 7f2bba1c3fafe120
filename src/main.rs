//! neofetch-mc binary entry point.

use std::process::ExitCode;

use neofetch_mc::cli::{self, Args};
use neofetch_mc::config::Config;
use neofetch_mc::{logging, NeofetchSource, Report, StaticSource};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("Run 'neofetch-mc --help' for usage.");
            return ExitCode::from(2);
        }
    };

    if args.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }

    if args.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    let config = match Config::load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    };

    logging::init(config.log_filter());

    match run(&args, &config).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "failed to render report");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args, config: &Config) -> neofetch_mc::Result<String> {
    if let Some((logo, info)) = args.captured_files() {
        info!(logo = %logo.display(), info = %info.display(), "using captured output");
        let source = StaticSource::from_files(logo, info)?;
        return Ok(Report::new(source).render().await);
    }

    info!(program = %config.provider.program, "running report binary");
    let source = NeofetchSource::from_config(&config.provider);
    Ok(Report::new(source).render().await)
}
