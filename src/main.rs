//! Scrum board demo: walks a couple of tasks through the board's columns

use anyhow::{Context, Result};
use clap::Parser;
use scrum_board::{AdvanceOutcome, Board, BoardConfig, Task, TaskPriority};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "scrum-board", version, about = "Walk tasks through a scrum board")]
struct Cli {
    /// JSON board configuration (title and column titles)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print board snapshots as JSON
    #[arg(long)]
    json: bool,

    /// Priority of the first task (high, medium, low, none)
    #[arg(short, long, default_value = "medium")]
    priority: TaskPriority,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scrum_board=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BoardConfig::load(path)
            .with_context(|| format!("Failed to load board config from {}", path.display()))?,
        None => BoardConfig::default(),
    };
    let mut board = Board::from_config(&config)?;

    walkthrough(&mut board, &cli)
}

fn walkthrough(board: &mut Board, cli: &Cli) -> Result<()> {
    print_board(board, "Initial board", cli.json)?;

    let first = board
        .find_all_columns()
        .first()
        .map(|column| column.title().to_string())
        .context("Board has no columns")?;

    let rifleman = Task::new("Rifleman", "Ground ranged unit", cli.priority);
    board.add_task_to_column(rifleman, None)?;
    print_board(board, "One task added", cli.json)?;

    let mut rifleman_column = advance(board, &first, "Rifleman")?;
    print_board(board, "Task advanced", cli.json)?;

    let long_rifles = Task::new(
        "Long Rifles",
        "Increases the range of the Rifleman's attack",
        TaskPriority::High,
    );
    board.add_task_to_column(long_rifles, Some(&first))?;
    print_board(board, &format!("Task added in \"{}\"", first), cli.json)?;

    let mut unit = "Rifleman";
    if let Some(column) = &rifleman_column {
        board.change_task_title(column, "Rifleman", "Peon")?;
        board.change_task_description(column, "Peon", "The lowest station amongst the Orcish Horde")?;
        board.change_task_priority(column, "Peon", TaskPriority::High)?;
        unit = "Peon";
        print_board(board, "Updated rifleman task", cli.json)?;
    }

    let long_rifles_column = advance(board, &first, "Long Rifles")?;
    print_board(board, "Long Rifles advanced", cli.json)?;

    while let Some(column) = rifleman_column.take() {
        rifleman_column = advance(board, &column, unit)?;
        let heading = match &rifleman_column {
            Some(next) => format!("{} advanced to \"{}\"", unit, next),
            None => format!("{} advanced past the last column", unit),
        };
        print_board(board, &heading, cli.json)?;
    }

    if let Some(column) = long_rifles_column {
        board.remove_task(&column, "Long Rifles")?;
        print_board(board, "Removed all tasks", cli.json)?;
    }

    Ok(())
}

/// Advances a task and returns the column it landed in, if it is still on the board
fn advance(board: &mut Board, column: &str, task: &str) -> Result<Option<String>> {
    match board.advance_task(column, task)? {
        AdvanceOutcome::Moved { to, .. } => Ok(Some(to)),
        AdvanceOutcome::LeftBoard(_) => Ok(None),
    }
}

fn print_board(board: &Board, heading: &str, json: bool) -> Result<()> {
    if json {
        println!("{}", board.to_json_pretty()?);
        return Ok(());
    }

    println!("\n  {}  \n", heading);
    for column in board.find_all_columns() {
        println!("   {}  ", column.title());
        for task in column.find_all_tasks() {
            println!("  [{}] {}: {}", task.priority, task.title, task.description);
        }
    }
    Ok(())
}
