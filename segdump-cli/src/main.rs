use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;

/// Dump the first PT_LOAD segment of an ELF64 binary
#[derive(Parser)]
#[command(
    name = "segdump",
    about = "Print the first loadable segment of an ELF64 binary as a hex dump",
    version,
    author
)]
struct Cli {
    /// Path to ELF file
    #[arg(required = true)]
    path: std::path::PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            println!("Usage: segdump <elf>");
            std::process::exit(1);
        }
    };

    let outcome = segdump_core::inspect(&cli.path)?;
    println!("{outcome}");

    Ok(())
}
