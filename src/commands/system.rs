pub fn banner() -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "=".repeat(60)));
    out.push_str(&format!("{}NUTRITION ANALYZER\n", " ".repeat(15)));
    out.push_str(&format!("{}\n", "=".repeat(60)));
    out.push_str("\nWelcome! This app provides nutritional information for foods.\n");
    out.push_str("Data is per 100g serving from the USDA FoodData Central.\n");
    out
}

pub fn help() -> String {
    [
        "\nCommands:",
        "  - Type a food name to search",
        "  - 'compare' - Compare saved foods",
        "  - 'saved' - View saved foods",
        "  - 'clear' - Clear saved foods",
        "  - 'quit' - Exit the app\n",
    ]
    .join("\n")
        + "\n"
}

pub fn farewell() -> &'static str {
    "\nThank you for using Nutrition Analyzer!"
}
