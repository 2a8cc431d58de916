use bootskin::cli::{build, clean, completions, help, Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    let mut cli = Cli::parse_normalized();
    let printer = cli.printer();

    match cli.command.take() {
        Some(Commands::Build(args)) => build::run(args, &cli.project()?, &printer)?,
        Some(Commands::Clean(args)) => clean::run(args, &cli.project()?, &printer)?,
        Some(Commands::Help(args)) => help::run(args),
        Some(Commands::Completions(args)) => completions::run(args)?,
        Some(Commands::Other(_)) | None => help::run(help::HelpArgs::default()),
    }

    Ok(())
}
