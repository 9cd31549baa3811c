use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use sudoku_lambda::handler::{generate_sudoku, GenerateRequest, HandlerConfig};
use sudoku_lambda::logging::init_logging;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    // Build the configuration at cold start (once per container lifecycle).
    let config = HandlerConfig::from_env();
    info!(label = config.label(), "generate sudoku function starting");

    let config_ref = &config;
    run(service_fn(
        move |event: LambdaEvent<GenerateRequest>| async move {
            generate_sudoku(config_ref, event.payload).await
        },
    ))
    .await
}
