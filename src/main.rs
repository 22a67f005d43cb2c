use bylines::application::{LoadCatalogService, ReportService};
use bylines::cli::{
    format_author_list, format_author_report, format_magazine_line, format_magazine_list,
    format_magazine_report, format_summary, Cli, Commands,
};
use bylines::error::BylinesError;
use bylines::infrastructure::{init_logging, FileSeedSource};
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), BylinesError> {
    let _logger = init_logging(cli.verbose)?;

    let source = FileSeedSource::discover(cli.seed)?;
    let catalog = LoadCatalogService::new(source).execute()?;
    let reports = ReportService::new(catalog);

    match cli.command {
        Commands::Check => {
            print!("{}", format_summary(&reports.summary()));
        }
        Commands::Authors => {
            println!("{}", format_author_list(&reports.authors()).trim_end());
        }
        Commands::Author { name } => {
            print!("{}", format_author_report(&reports.author(&name)?));
        }
        Commands::Magazines => {
            println!("{}", format_magazine_list(&reports.magazines()).trim_end());
        }
        Commands::Magazine { name } => {
            print!("{}", format_magazine_report(&reports.magazine(&name)?));
        }
        Commands::TopPublisher => match reports.top_publisher() {
            Some(top) => println!("{}", format_magazine_line(&top)),
            None => println!("No magazines found"),
        },
    }

    Ok(())
}
