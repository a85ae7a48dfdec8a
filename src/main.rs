use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use precinct_db::audit::AuditLog;
use precinct_db::cli::Args;
use precinct_db::config::Settings;
use precinct_db::db::Session;

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

fn run(args: Args) -> Result<String, Box<dyn std::error::Error>> {
    let settings = Settings::resolve(&args.overrides())?;
    tracing::debug!(db = %settings.database.describe(), audit = %settings.audit.log_path.display(), "settings resolved");

    let audit = AuditLog::from_config(&settings.audit).echo_to(args.echo_stream());
    let mut session = Session::new(settings.database, audit);
    let output = args.command.run(&mut session, args.format)?;
    session.close();
    Ok(output)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);

    match run(args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
