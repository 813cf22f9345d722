use clap::Parser;
use std::env;
use tracing::error;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: outlook serve [port] | outlook project [--preset NAME] [--policy fixed-z|derived-volatility] [flags...]";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let raw_args: Vec<String> = env::args().collect();
    match raw_args.get(1).map(|s| s.as_str()) {
        Some("serve") => {
            let port = raw_args
                .get(2)
                .and_then(|s| s.parse::<u16>().ok())
                .unwrap_or(8080);
            if let Err(e) = outlook::api::run_http_server(port).await {
                error!("server error: {e}");
                std::process::exit(1);
            }
        }
        Some("project") => {
            let cli = outlook::api::Cli::parse_from(raw_args.iter().skip(1));
            match outlook::api::run_cli(cli) {
                Ok(json) => println!("{json}"),
                Err(msg) => {
                    eprintln!("{msg}");
                    std::process::exit(2);
                }
            }
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    }
}
