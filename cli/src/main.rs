mod clipboard;
mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, shop};
use terminal::{logging, print};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let (command, cfg) = CommandLine::parse_args().into_parts();

    logging::init_logging(&cfg);
    print::banner(cfg.no_banner, cfg.quiet);

    match command {
        Commands::Shop => {
            print::header("opening the cart", cfg.quiet);
            shop::shop(&cfg).await
        }
        Commands::Check { domains } => {
            print::header("checking availability", cfg.quiet);
            check::check(domains, &cfg).await
        }
    }
}
