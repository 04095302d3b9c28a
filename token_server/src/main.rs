#[tokio::main]
async fn main() -> std::io::Result<()> {
    token_server::run_with_config().await
}
