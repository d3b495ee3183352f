//! `zypshot` 바이너리 진입점.

use std::io::{self, Write};

use zypshot::interface::cli::{Cli, CliAction};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    match Cli::parse_action() {
        CliAction::InspectConfig => match zypshot::inspect_config_pretty_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
        CliAction::Interactive(options) => {
            // raw 입력 밖에서 받은 SIGINT. 터미널을 복구하고 바로 끝낸다.
            tokio::spawn(async {
                if tokio::signal::ctrl_c().await.is_ok() {
                    let _ = crossterm::terminal::disable_raw_mode();
                    println!("\nExiting...");
                    let _ = io::stdout().flush();
                    std::process::exit(0);
                }
            });

            if let Err(err) = zypshot::run(&options).await {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}
