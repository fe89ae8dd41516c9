use clap::Parser;
use satei::prelude::*;
use std::io::{self, Write};

/// Bazaar recipe appraisal and affordability calculator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the recipe snapshot file
    #[arg(long, default_value = "recipes.bin")]
    recipes: String,

    /// Path to the session config file
    #[arg(long, default_value = "config.json")]
    config: String,

    /// Appraise a saved recipe by name and exit instead of entering the menu
    #[arg(short, long)]
    price: Option<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = SessionConfig::load_or_default(&cli.config);
    let mut book = RecipeBook::load_or_default(&cli.recipes);

    if config.api_key.is_empty() && cli.price.is_none() {
        println!("--- Initial Setup ---");
        config.api_key = prompt_for_input("Enter Hypixel API key");
        save_config(&config, &cli.config);
    }

    if let Some(name) = &cli.price {
        run_price_once(&mut book, name);
        save_book(&book, &cli.recipes);
        return;
    }

    run_menu(&mut book, &mut config, &cli);

    save_book(&book, &cli.recipes);
    save_config(&config, &cli.config);
}

/// Appraises one saved recipe in non-interactive mode.
fn run_price_once(book: &mut RecipeBook, name: &str) {
    let Some(id) = book.find(name) else {
        exit_with_error(&format!("No saved recipe named '{}'", name));
    };
    let market = fetch_market_or_empty();
    match appraise_and_record(book, id, &market) {
        Ok(appraisal) => {
            if let Some(summary) = appraisal.warning_summary() {
                println!("Warnings: {}", summary);
            }
            println!("{}: {:.1}", name, appraisal.total);
        }
        Err(e) => exit_with_error(&format!("Appraisal failed: {}", e)),
    }
}

fn run_menu(book: &mut RecipeBook, config: &mut SessionConfig, cli: &Cli) {
    loop {
        println!();
        println!("--- Bazaar Recipe Calculator ---");
        println!("1. Add new recipe");
        println!("2. Calculate from saved recipe");
        println!("3. Settings (API key / profile)");
        println!("4. Exit");

        let choice = prompt_for_input("Select option");
        match choice.as_str() {
            "1" => add_recipe_flow(book, &cli.recipes),
            "2" => calculate_flow(book, config, &cli.config),
            "3" => settings_menu(config, &cli.config),
            "4" => break,
            _ => println!("Invalid option."),
        }
    }
}

// --- Recipe Entry ---

fn add_recipe_flow(book: &mut RecipeBook, recipes_path: &str) {
    let name = prompt_for_input("Enter recipe name");
    if name.is_empty() {
        println!("Recipe name cannot be empty.");
        return;
    }
    let mut recipe = Recipe::new(&name);

    println!("Enter bazaar ingredients (type 'end' as the item id to finish):");
    loop {
        let item_id = prompt_for_input("Item id (e.g. ENCHANTED_DIAMOND)");
        if item_id.eq_ignore_ascii_case("end") {
            break;
        }
        if item_id.is_empty() {
            continue;
        }
        let Some(amount) = prompt_for_amount() else {
            continue;
        };
        recipe.add_item(item_id, amount);
    }

    println!("Enter sub-recipes by saved name (type 'end' to finish):");
    loop {
        let sub_name = prompt_for_input("Recipe name");
        if sub_name.eq_ignore_ascii_case("end") {
            break;
        }
        if sub_name.is_empty() {
            continue;
        }
        let Some(sub_id) = book.find(&sub_name) else {
            println!("No saved recipe named '{}'.", sub_name);
            continue;
        };
        let Some(amount) = prompt_for_amount() else {
            continue;
        };
        recipe.add_sub_recipe(sub_id, amount);
    }

    book.insert(recipe);
    save_book(book, recipes_path);
    println!("Recipe '{}' saved.", name);
}

// --- Appraisal & Affordability ---

fn calculate_flow(book: &mut RecipeBook, config: &mut SessionConfig, config_path: &str) {
    if book.is_empty() {
        println!("No recipes saved.");
        return;
    }

    println!();
    println!("Select a recipe:");
    for (position, (_, recipe)) in book.iter().enumerate() {
        println!("{}. {}", position + 1, recipe);
    }
    let Some(position) = prompt_for_index("Enter number", book.len()) else {
        println!("Invalid selection.");
        return;
    };
    let Some((id, _)) = book.iter().nth(position) else {
        println!("Invalid selection.");
        return;
    };

    if !config.has_member_selected() {
        println!("No profile selected. Let's select one now.");
        select_profile_flow(config, config_path);
        if !config.has_member_selected() {
            return;
        }
    }

    let client = ProfileClient::new(&config.api_key);
    let purse = match client.fetch_purse(&config.profile_id, &config.member_uuid) {
        Ok(purse) => purse,
        Err(e) => {
            println!("Failed to fetch purse: {}", e);
            return;
        }
    };
    println!("Current purse: {}", purse);

    let market = fetch_market_or_empty();
    let appraisal = match appraise_and_record(book, id, &market) {
        Ok(appraisal) => appraisal,
        Err(e) => {
            println!("Appraisal failed: {}", e);
            return;
        }
    };
    if let Some(summary) = appraisal.warning_summary() {
        println!("Warnings: {}", summary);
    }
    println!("Recipe cost: {:.1}", appraisal.total);

    let Some(recipe) = book.get(id) else {
        return;
    };
    println!("--- Can craft: {} ---", craft_count(purse, appraisal.total));
    for (item_id, plan) in plan_purchases(purse, appraisal.total, recipe) {
        println!("{}: {}", item_id, plan);
    }
}

fn fetch_market_or_empty() -> MarketSnapshot {
    match BazaarClient::new().fetch_products() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::warn!("Failed to fetch bazaar prices: {}", e);
            println!("Failed to fetch bazaar prices: {}", e);
            MarketSnapshot::empty()
        }
    }
}

// --- Settings & Profile Selection ---

fn settings_menu(config: &mut SessionConfig, config_path: &str) {
    println!();
    println!("--- Settings ---");
    println!("1. Change API key");
    println!("2. Select new profile/member");

    let choice = prompt_for_input("Select");
    match choice.as_str() {
        "1" => {
            config.api_key = prompt_for_input("Enter new API key");
            save_config(config, config_path);
        }
        "2" => select_profile_flow(config, config_path),
        _ => println!("Invalid option."),
    }
}

fn select_profile_flow(config: &mut SessionConfig, config_path: &str) {
    let username = prompt_for_input("Enter Minecraft username to look up");
    if username.is_empty() {
        return;
    }

    let client = ProfileClient::new(&config.api_key);
    let uuid = match client.resolve_uuid(&username) {
        Ok(uuid) => uuid,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };
    println!("Found UUID: {}", uuid);

    let profiles = match client.fetch_profiles(&uuid) {
        Ok(profiles) => profiles,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };

    println!();
    println!("--- Select Profile ---");
    for (position, profile) in profiles.iter().enumerate() {
        let marker = if profile.selected { " (Active)" } else { "" };
        println!(
            "{}. {}{} [ID: {}]",
            position + 1,
            profile.cute_name,
            marker,
            profile.profile_id
        );
    }
    let Some(position) = prompt_for_index("Enter profile number", profiles.len()) else {
        println!("Invalid selection.");
        return;
    };
    let profile = &profiles[position];

    println!();
    println!("--- Select Member ---");
    let undashed = uuid.replace('-', "");
    for (position, member) in profile.member_uuids.iter().enumerate() {
        let marker = if *member == uuid || *member == undashed {
            " (You)"
        } else {
            ""
        };
        println!("{}. {}{}", position + 1, member, marker);
    }
    let Some(position) = prompt_for_index("Enter member number", profile.member_uuids.len()) else {
        println!("Invalid selection.");
        return;
    };

    config.profile_id = profile.profile_id.clone();
    config.member_uuid = profile.member_uuids[position].clone();
    println!("Selected member: {}", config.member_uuid);
    save_config(config, config_path);
}

// --- Persistence Helpers ---

fn save_book(book: &RecipeBook, path: &str) {
    if let Err(e) = book.save(path) {
        log::warn!("Failed to save recipes: {}", e);
        println!("Failed to save recipes: {}", e);
    }
}

fn save_config(config: &SessionConfig, path: &str) {
    if let Err(e) = config.save(path) {
        log::warn!("Failed to save config: {}", e);
        println!("Failed to save config: {}", e);
    }
}

// --- Input Helpers ---

/// Prompts the user and reads a trimmed line of input.
fn prompt_for_input(prompt_text: &str) -> String {
    let mut line = String::new();
    print!("> {}: ", prompt_text);
    io::stdout().flush().expect("Failed to flush stdout");

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    line.trim().to_string()
}

/// Prompts for a positive quantity; `None` reprompts the surrounding flow.
fn prompt_for_amount() -> Option<u32> {
    match prompt_for_input("Amount").parse::<u32>() {
        Ok(amount) => Some(amount),
        Err(_) => {
            println!("Invalid number. Try again.");
            None
        }
    }
}

/// Prompts for a 1-based menu number and converts it to a 0-based index.
fn prompt_for_index(prompt_text: &str, len: usize) -> Option<usize> {
    match prompt_for_input(prompt_text).parse::<usize>() {
        Ok(number) if (1..=len).contains(&number) => Some(number - 1),
        _ => None,
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
