use clap::Parser;
use moddoc::{logging, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let document = moddoc::run(&cli)?;
    println!("{document}");
    Ok(())
}
