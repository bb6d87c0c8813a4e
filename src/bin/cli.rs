// src/bin/cli.rs
use color_eyre::eyre::eyre;
use currency_fmt::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run().map_err(|e| {
        currency_fmt::loge!("CLI: {}", e);
        eyre!("{e}")
    })
}
