//! bookgoal CLI - yearly reading goal tracker.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{ArgGroup, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use bookgoal_core::{Book, ReadingGoal, ShelfName};
use bookgoal_storage::{JsonStorage, Storage};
use bookgoal_progress::{
    present, CalculatorConfig, Clock, GoalPage, GoalTracker, TrackerConfig, WEEKS_IN_YEAR,
};

#[derive(Parser)]
#[command(name = "bookgoal")]
#[command(about = "Track a yearly reading goal", long_about = None)]
struct Cli {
    /// Directory holding goals and shelves
    #[arg(long, default_value = ".bookgoal")]
    data_dir: std::path::PathBuf,

    /// Weeks in the reading year
    #[arg(long, default_value_t = WEEKS_IN_YEAR, value_parser = clap::value_parser!(u32).range(1..=53))]
    weeks_in_year: u32,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the goal page
    Show {
        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a new goal, replacing the current one
    #[command(group(ArgGroup::new("target").required(true).args(["books", "pages"])))]
    SetGoal {
        /// Number of books to read this year
        #[arg(long)]
        books: Option<i64>,
        /// Number of pages to read this year
        #[arg(long)]
        pages: Option<i64>,
    },
    /// Remove the current goal
    ClearGoal,
    /// Put a book on a shelf
    AddBook {
        /// Book title
        title: String,
        /// Page count
        #[arg(long)]
        pages: u32,
        /// Date finished (YYYY-MM-DD)
        #[arg(long)]
        finished: Option<NaiveDate>,
        /// Shelf: to-read, reading, read, dnf
        #[arg(long, default_value = "read")]
        shelf: ShelfName,
    },
    /// List shelves
    Shelves,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!("Using data directory {}", cli.data_dir.display());
    let storage = JsonStorage::new(&cli.data_dir).await?;
    let clock = cli.today.map(Clock::fixed_on).unwrap_or_default();
    let mut tracker = GoalTracker::new(storage).with_config(TrackerConfig {
        calculator: CalculatorConfig {
            weeks_in_year: cli.weeks_in_year,
        },
        clock,
    });

    match cli.command {
        Commands::Show { json } => {
            let page = tracker.refresh().await?;
            print_page(&page, json)?;
        }
        Commands::SetGoal { books, pages } => {
            let goal = match (books, pages) {
                (Some(n), _) => ReadingGoal::books(n)?,
                (None, Some(n)) => ReadingGoal::pages(n)?,
                (None, None) => anyhow::bail!("either --books or --pages is required"),
            };
            let page = tracker.save_goal(goal).await?;
            print_page(&page, false)?;
        }
        Commands::ClearGoal => {
            if tracker.clear_goal().await? {
                println!("Reading goal cleared");
            } else {
                println!("No reading goal to clear");
            }
        }
        Commands::AddBook { title, pages, finished, shelf } => {
            let mut book = Book::new(title, pages);
            if let Some(date) = finished {
                book = book.finished_on(date);
            }
            let title = book.title.clone();
            tracker.add_book(shelf, book).await?;
            println!("Added '{}' to {}", title, shelf);
        }
        Commands::Shelves => {
            let shelves = tracker.storage().list_shelves().await?;
            println!("Shelves ({})", shelves.len());
            for shelf in shelves {
                println!("  {} | {} books", shelf.name, shelf.books.len());
                for book in &shelf.books {
                    let finished = book
                        .date_finished
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!("    {} | {} pages | finished {}", book.title, book.pages, finished);
                }
            }
        }
    }

    Ok(())
}

fn print_page(page: &GoalPage, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(page)?);
    } else {
        println!("{}", present(page));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weeks_in_year_defaults_to_52() {
        let cli = Cli::try_parse_from(["bookgoal", "show"]).unwrap();
        assert_eq!(cli.weeks_in_year, 52);
    }

    #[test]
    fn test_weeks_in_year_is_bounded() {
        assert!(Cli::try_parse_from(["bookgoal", "--weeks-in-year", "53", "show"]).is_ok());
        assert!(Cli::try_parse_from(["bookgoal", "--weeks-in-year", "0", "show"]).is_err());
        assert!(Cli::try_parse_from(["bookgoal", "--weeks-in-year", "4294967295", "show"]).is_err());
    }

    #[test]
    fn test_set_goal_needs_a_target() {
        assert!(Cli::try_parse_from(["bookgoal", "set-goal"]).is_err());
        assert!(Cli::try_parse_from(["bookgoal", "set-goal", "--books", "12"]).is_ok());
    }
}
