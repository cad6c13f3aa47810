mod cli;
mod client;
mod config;
mod crypto;
mod error;
mod request;
mod types;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run_cli().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
