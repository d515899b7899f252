use course_description_migrate::cli;
use std::env;
use std::io;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = cli::parse_args(env::args_os()).unwrap_or_else(|err| err.exit());
    let stdout = io::stdout();
    match cli::run(&args, &mut stdout.lock()) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            error!(%err, "failed to write status to stdout");
            ExitCode::FAILURE
        }
    }
}
