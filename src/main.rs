use clap::Parser;
use untag::application::{strip_files, StripOptions};
use untag::cli::{format_strip_report, Cli};
use untag::error::UntagError;
use untag::infrastructure::{FileSystemRepository, Settings};

fn main() {
    let cli = Cli::parse();
    untag::logging::init(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), UntagError> {
    let targets = if cli.paths.is_empty() {
        // No paths: fall back to text.html in the configured root
        vec![Settings::from_env()?.default_target()]
    } else {
        cli.paths
    };

    let repo = FileSystemRepository::new();
    let report = strip_files(
        &repo,
        StripOptions {
            targets,
            recursive: cli.recursive,
            dry_run: cli.dry_run,
        },
    )?;

    println!("{}", format_strip_report(&report));
    Ok(())
}
