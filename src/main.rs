use clap::Parser;

use mangopay::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let settings = match cli::load_and_merge_config(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{:#}", e);
            eprintln!("{}", Cli::get_validation_help());
            std::process::exit(2);
        }
    };

    cli::init_logger_from_settings(&settings)?;

    tracing::debug!(
        environment = settings.client.environment.as_str(),
        base_url = settings.client.base_url(),
        "Configuration loaded"
    );

    match cli::execute_command(&args, settings).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            if let Some(mangopay::SdkError::Api { details, .. }) = e.downcast_ref::<mangopay::SdkError>() {
                eprintln!("{}", serde_json::to_string_pretty(details)?);
            }
            Err(e)
        }
    }
}
