use au3lsp::create_service;
use tower_lsp::Server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // stdout carries the protocol; logs go to stderr.
    let filter = EnvFilter::try_from_env("AU3LSP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = create_service();
    Server::new(stdin, stdout, socket).serve(service).await;
}
