use std::{process::ExitCode, sync::Arc};

use crb_core::{
    config::Config,
    errors::Error,
    model::client::CompletionClient,
    supervisor::{self, RetryPolicy},
};
use crb_openai::OpenAiClient;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = crb_core::logging::init("crb") {
        eprintln!("failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    // The whole startup sequence runs under the supervisor: a missing secret
    // is fatal immediately, anything else gets the bounded retry loop.
    let outcome = supervisor::supervise(RetryPolicy::default(), |attempt| async move {
        if attempt > 1 {
            tracing::info!(attempt, "restarting startup sequence");
        }

        let cfg = Arc::new(Config::load()?);
        let client: Arc<dyn CompletionClient> =
            Arc::new(OpenAiClient::new(cfg.openai_api_key.clone()));

        crb_telegram::router::run_polling(cfg, client)
            .await
            .map_err(|e| Error::External(format!("telegram bot failed: {e}")))
    })
    .await;

    match outcome {
        Ok(()) => {
            tracing::info!("bot stopped");
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    }
}
