use crate::console::Console;
use crate::food::api::{FoodRecord, FoodSource, SearchResponse};
use crate::food::format::{render_choices, render_results, MAX_DISPLAYED};
use crate::food::{FoodComparison, SavedFood};

use super::AppError;

/// Search for `query`, show the results and offer to save one of them.
pub async fn handle_search(
    query: &str,
    source: &dyn FoodSource,
    store: &mut FoodComparison,
    console: &mut dyn Console,
) -> Result<(), AppError> {
    console.println(&format!("\nSearching for '{}'...", query));

    let foods = match source.search_food(query).await {
        Ok(SearchResponse { foods: Some(foods) }) => foods,
        Ok(SearchResponse { foods: None }) => {
            log::debug!("Response for '{}' had no foods array", query);
            console.warn("Unable to retrieve data. Please try again.\n");
            return Ok(());
        }
        Err(e) => {
            log::debug!("Search for '{}' failed: {}", query, e);
            console.warn(&format!("Error fetching data: {}", e));
            console.warn("Unable to retrieve data. Please try again.\n");
            return Ok(());
        }
    };

    console.print(&render_results(query, &foods));

    console.print("\n");
    let answer = console
        .read_line("Save this food for comparison? (y/n): ")?
        .unwrap_or_default();
    if answer.trim().eq_ignore_ascii_case("y") {
        save_selection(query, &foods, store, console)?;
    }

    Ok(())
}

/// Ask which of the displayed results to keep. Anything but a valid number
/// leaves the store untouched.
pub fn save_selection(
    query: &str,
    foods: &[FoodRecord],
    store: &mut FoodComparison,
    console: &mut dyn Console,
) -> Result<bool, AppError> {
    if foods.is_empty() {
        console.println(&format!("\nCannot save '{}' - no data found.", query));
        return Ok(false);
    }

    console.println("\nSelect which item to save for comparison:");
    console.print(&render_choices(foods));
    console.print("\n");

    let choice = console
        .read_line("Enter number (or press Enter to skip): ")?
        .unwrap_or_default();
    let choice = choice.trim();
    if choice.is_empty() {
        return Ok(false);
    }

    let selectable = foods.len().min(MAX_DISPLAYED) as i64;
    match choice.parse::<i64>() {
        Ok(n) if (1..=selectable).contains(&n) => {
            let food = SavedFood::from_record(&foods[(n - 1) as usize]);
            console.success(&format!("✓ Saved '{}' for comparison!", food.name));
            store.save(food);
            Ok(true)
        }
        Ok(_) => {
            console.warn("Invalid selection.");
            Ok(false)
        }
        // Too large for i64 but still a number: out of range, not garbage.
        Err(_) if is_integer(choice) => {
            console.warn("Invalid selection.");
            Ok(false)
        }
        Err(_) => {
            console.warn("Invalid input.");
            Ok(false)
        }
    }
}

fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(&['+', '-'][..]).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
