mod checks;
mod cli;
mod core;
mod reporting;
mod scoring;
mod session;

use crate::core::context::Context;
use clap::Parser;
use cli::args::Cli;
use reporting::text::{GREEN, RED, RESET};
use session::Session;
use std::io::Write;

const BANNER: &str = r#"
 ╔══════════════════════════════════════════════════════╗
 ║                                                      ║
 ║   ██████╗ ██╗  ██╗██╗███████╗██╗  ██╗                ║
 ║   ██╔══██╗██║  ██║██║██╔════╝██║  ██║                ║
 ║   ██████╔╝███████║██║███████╗███████║                ║
 ║   ██╔═══╝ ██╔══██║██║╚════██║██╔══██║                ║
 ║   ██║     ██║  ██║██║███████║██║  ██║                ║
 ║   ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝  ╚═╝  GUARD         ║
 ║                                                      ║
 ║   Phishing risk scoring for URLs                     ║
 ║                                                      ║
 ╚══════════════════════════════════════════════════════╝
"#;

fn print_banner() {
    println!("\x1b[36m{}\x1b[0m", BANNER); // Cyan color
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !cli.no_banner {
        print_banner();
    }

    tracing_subscriber::fmt::init();

    let context = Context::from_cli(&cli)?;
    let mut session = Session::new(context);

    if let Some(ref url) = cli.target {
        session.scan_one(url).await;
        return Ok(());
    }

    if let Some(ref list) = cli.batch {
        let urls = split_batch(list);
        session.scan_batch(&urls).await;
        return Ok(());
    }

    menu_loop(&mut session).await
}

async fn menu_loop(session: &mut Session) -> anyhow::Result<()> {
    loop {
        println!("\nOptions:");
        println!("1. Scan a single URL");
        println!("2. Scan multiple URLs (comma-separated)");
        println!("3. View scan history");
        println!("4. Exit");

        let pick = prompt(&format!("{GREEN}Choose (1-4): {RESET}"))?;
        match pick.as_str() {
            "1" => {
                let url = prompt("Enter a URL: ")?;
                session.scan_one(&url).await;
            }
            "2" => {
                let line = prompt("Enter URLs (e.g. url1, url2): ")?;
                let urls = split_batch(&line);
                session.scan_batch(&urls).await;
            }
            "3" => session.show_history(),
            "4" => {
                println!("{GREEN}Exiting - stay safe!{RESET}");
                return Ok(());
            }
            _ => println!("{RED}Please pick 1-4{RESET}"),
        }
    }
}

fn split_batch(list: &str) -> Vec<String> {
    list.split(',')
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .collect()
}

fn prompt(message: &str) -> anyhow::Result<String> {
    print!("{message}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
