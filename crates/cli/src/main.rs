mod args;
mod input;
mod menu;
mod render;
mod seed;
mod session;

use std::io;

use anyhow::Context;
use args::CommandLine;
use libris_app::Library;
use libris_kernel::{OutputFormat, Settings};
use session::Session;

fn main() -> anyhow::Result<()> {
    let args = CommandLine::parse_args();

    let mut settings = Settings::load_with(args.config_dir.as_deref(), args.env.as_deref())
        .with_context(|| "failed to load libris settings")?;
    if args.json {
        settings.display.format = OutputFormat::Json;
    }
    if args.no_seed {
        settings.catalog.seed_sample_data = false;
    }

    libris_telemetry::init(&settings.telemetry).with_context(|| "failed to initialize logging")?;

    tracing::info!(
        env = settings.environment.as_str(),
        removal_policy = ?settings.catalog.removal_policy,
        format = ?settings.display.format,
        "libris bootstrap starting"
    );

    let mut library = Library::with_policy(settings.catalog.removal_policy);
    if settings.catalog.seed_sample_data {
        seed::seed(&mut library);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(library, stdin.lock(), stdout.lock(), settings.display.format);
    session.run().with_context(|| "menu session failed")?;

    let library = session.into_library();
    tracing::info!(
        books = library.book_count(),
        users = library.user_count(),
        "libris shut down"
    );
    Ok(())
}
