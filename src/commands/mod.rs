use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::console::Console;
use crate::food::api::{FoodApiError, FoodSource};
use crate::food::FoodComparison;

pub mod food_cmd;
pub mod system;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read input: {0}")]
    Input(#[from] ReadlineError),
    #[error("API error: {0}")]
    Api(#[from] FoodApiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the saved foods for the session and dispatches one command at a time.
pub struct CommandHandler<S: FoodSource> {
    source: S,
    store: FoodComparison,
}

impl<S: FoodSource> CommandHandler<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            store: FoodComparison::new(),
        }
    }

    pub fn store(&self) -> &FoodComparison {
        &self.store
    }

    /// Read and handle commands until the user quits or closes the input.
    pub async fn run(&mut self, console: &mut dyn Console) -> Result<(), AppError> {
        console.print(&system::banner());
        console.print(&system::help());

        loop {
            let Some(line) = console.read_line("Enter command or food name: ")? else {
                console.println(system::farewell());
                return Ok(());
            };

            if self.handle_command(&line, console).await? == Flow::Quit {
                return Ok(());
            }
        }
    }

    pub async fn handle_command(
        &mut self,
        input: &str,
        console: &mut dyn Console,
    ) -> Result<Flow, AppError> {
        let command = input.trim().to_lowercase();

        match command.as_str() {
            "quit" | "exit" | "q" => {
                console.println(system::farewell());
                return Ok(Flow::Quit);
            }
            "" => {
                console.println("Please enter a valid command or food name.\n");
                return Ok(Flow::Continue);
            }
            "compare" => console.print(&self.store.compare()),
            "saved" => console.print(&self.store.list()),
            "clear" => {
                self.store.clear();
                console.success("\n✓ Cleared all saved foods.");
            }
            query => {
                food_cmd::handle_search(query, &self.source, &mut self.store, console).await?
            }
        }

        console.print("\n");
        Ok(Flow::Continue)
    }
}
