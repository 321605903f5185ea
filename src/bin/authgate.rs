use anyhow::Result;
use authgate::cli;

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let action = cli::start()?;

    // Handle the action
    let result = action.execute().await;

    cli::telemetry::shutdown_tracer();

    result
}
