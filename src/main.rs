#[tokio::main]
async fn main() {
    // Errors are logged inside run_with_config; reflect them in the exit code.
    if arena_server::run_with_config().await.is_err() {
        std::process::exit(1);
    }
}
