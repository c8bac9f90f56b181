//! gh-activity CLI
//!
//! Prints a GitHub user's recent public activity.

use clap::Parser;
use gh_activity::Error;

mod args;
mod run;

use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize logging (to stderr, so stdout is clean for output)
    run::init_logging(args.log_level)?;

    let Some(user) = args.username.as_deref() else {
        println!("Please enter a username");
        return Ok(());
    };

    if let Err(e) = run::execute(&args, user).await {
        eprintln!("{e}");
        // Source failures happen before dispatch, everything else is internal
        let fetch_failed = e
            .downcast_ref::<Error>()
            .is_some_and(Error::is_fetch_error);
        std::process::exit(if fetch_failed { 1 } else { 2 });
    }

    Ok(())
}
