use crate::prelude::{println, *};
use libris_core::responses::ProcessUrlResponse;
use libris_core::url::{process_url, Operation};

#[derive(Debug, clap::Args)]
pub struct App {
    /// URL to process
    #[arg(value_name = "URL")]
    pub url: String,

    /// Operation: canonical, redirection, all
    #[arg(short, long, default_value = "all")]
    pub operation: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        log::debug!("Processing {} with operation {:?}", app.url, app.operation);
    }
    if Operation::from_name(&app.operation).is_none() {
        log::warn!(
            "Unrecognized operation {:?}, the result is empty",
            app.operation
        );
    }

    let processed_url =
        process_url(&app.url, &app.operation).map_err(|e| eyre!("Error processing URL: {e}"))?;

    println!("{}", format_output(processed_url, app.json)?);
    Ok(())
}

fn format_output(processed_url: String, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(&ProcessUrlResponse { processed_url })
            .map_err(|e| eyre!("JSON serialization failed: {}", e))
    } else {
        Ok(processed_url)
    }
}
