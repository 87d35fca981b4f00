pub mod commands;
pub mod console;
pub mod food;

// Re-export commonly used items
pub use commands::{AppError, CommandHandler};
pub use console::{Console, TerminalConsole};
pub use food::{FoodComparison, FoodConfig, UsdaClient};
