use crate::{authgate, cli::globals::GlobalArgs};
use anyhow::Result;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub globals: GlobalArgs,
    pub bcrypt_cost: u32,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the database is unreachable or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    debug!("Global args: {:?}", args.globals);

    let dsn = args.globals.dsn()?;

    authgate::new(args.port, dsn, &args.globals, args.bcrypt_cost).await
}
