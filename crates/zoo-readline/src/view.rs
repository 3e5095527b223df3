//! Terminal rendering of each screen.

use colored::Colorize;
use zoo_application::{GuideState, PoiDetail, ProfileSelector, Screen, SelectorMode, ZooApp};
use zoo_core::chat::{ChatMessage, MessageRole};
use zoo_core::poi::{Catalog, PoiFilter, TextMap};
use zoo_core::user::UserState;

const MAP_WIDTH: usize = 48;
const MAP_HEIGHT: usize = 16;

/// Prints the entry view of whatever screen the app is on.
pub fn screen(app: &ZooApp) {
    println!();
    match app.screen() {
        Screen::Login => login(),
        Screen::ProfileSelection => selector(app.user(), app.selector()),
        Screen::Guide => {
            header(app.user());
            if let Some(guide) = app.guide() {
                poi_list(guide);
            }
            if let Some(assistant) = app.assistant() {
                println!(
                    "{}",
                    format!("ZooBuddy for {}", app.user().profiles.assistant_label()).bright_black()
                );
                for message in assistant.transcript() {
                    chat_message(&message);
                }
            }
        }
    }
}

pub fn login() {
    println!("{}", "=== Zoo Access+ ===".bright_magenta().bold());
    println!("{}", "Sign in to personalize your visit.".bright_black());
    println!("{}", "  login <username> <password>".cyan());
}

pub fn selector(user: &UserState, selector: &ProfileSelector) {
    println!(
        "{}",
        format!("Welcome, {}! How can we help you today?", user.username)
            .bright_magenta()
            .bold()
    );
    match selector.mode() {
        SelectorMode::Quick => {
            println!("{}", "Pick one profile to start:".bright_black());
            for (index, profile) in ProfileSelector::quick_options().iter().enumerate() {
                println!(
                    "  {} {} {}",
                    format!("{}.", index + 1).cyan(),
                    profile.label().bold(),
                    format!("- {}", profile.description()).bright_black()
                );
            }
            println!(
                "{}",
                "Or type 'custom' to combine several profiles.".bright_black()
            );
        }
        SelectorMode::Custom => {
            println!("{}", "Toggle every profile that applies:".bright_black());
            for (index, profile) in ProfileSelector::custom_options().iter().enumerate() {
                let mark = if selector.pending().contains(*profile) {
                    "[x]".green()
                } else {
                    "[ ]".normal()
                };
                println!(
                    "  {} {} {} {}",
                    format!("{}.", index + 1).cyan(),
                    mark,
                    profile.label().bold(),
                    format!("- {}", profile.description()).bright_black()
                );
            }
            if selector.can_confirm() {
                println!(
                    "{}",
                    format!("'confirm' to continue with {}", selector.pending().summary())
                        .bright_black()
                );
            } else {
                println!(
                    "{}",
                    "Select at least one profile to continue.".bright_black()
                );
            }
        }
    }
}

pub fn header(user: &UserState) {
    println!(
        "{} {}",
        "Zoo Access+".bright_magenta().bold(),
        format!("[{}]", user.profiles.header_label()).yellow()
    );
}

pub fn poi_list(guide: &GuideState) {
    let captions: Vec<String> = [PoiFilter::All, PoiFilter::Animal, PoiFilter::Amenity]
        .iter()
        .map(|filter| {
            if *filter == guide.filter() {
                format!("[{}]", filter.caption()).bold().to_string()
            } else {
                filter.caption().bright_black().to_string()
            }
        })
        .collect();
    println!("{}", captions.join("  "));

    for (index, poi) in guide.visible().iter().enumerate() {
        println!(
            "  {} {} {} {}",
            format!("{:>2}.", index + 1).cyan(),
            poi.emoji,
            poi.name.bold(),
            format!("({})", poi.id).bright_black()
        );
    }
}

pub fn detail(detail: &PoiDetail) {
    println!();
    println!("{} {}", detail.emoji, detail.name.bold());
    println!("{}", detail.category_label.yellow());
    println!("{}", detail.description);
    println!();
    println!("{}", "Access+ Insights".bright_magenta().bold());
    for line in detail.guidance.lines() {
        println!("  {}", line);
    }
    println!();
    println!("{}", detail.hint.bright_black());
    println!("{}", "'route' to ask, 'close' to go back.".bright_black());
}

pub fn map(catalog: &Catalog) {
    let map = TextMap::render(catalog, MAP_WIDTH, MAP_HEIGHT);
    let border = format!("+{}+", "-".repeat(map.width()));
    println!("{}", border.bright_black());
    for row in map.rows() {
        println!("{}{}{}", "|".bright_black(), row, "|".bright_black());
    }
    println!("{}", border.bright_black());
    for entry in map.legend() {
        let marker = entry.marker.to_string();
        let marker = if entry.is_exit {
            marker.red().bold()
        } else {
            marker.cyan()
        };
        let exit = if entry.is_exit { " EXIT".red().to_string() } else { String::new() };
        println!("  {} {}{}", marker, entry.label, exit);
    }
}

pub fn chat_message(message: &ChatMessage) {
    match message.role {
        MessageRole::User => println!("{}", format!("> {}", message.text).green()),
        MessageRole::Assistant => {
            println!("{}", "[ZooBuddy]".bright_magenta());
            for line in message.text.lines() {
                println!("{}", line.bright_blue());
            }
            println!();
        }
    }
}

pub fn help(screen: Screen) {
    println!("{}", format!("Commands ({screen}):").bright_yellow());
    let usage: &[(&str, &str)] = match screen {
        Screen::Login => &[("login <user> <pass>", "sign in")],
        Screen::ProfileSelection => &[
            ("<number>", "quick select one profile"),
            ("custom", "combine several profiles"),
            ("toggle <number>", "add or remove a profile (custom)"),
            ("confirm", "continue with the custom selection"),
            ("cancel", "back to quick select"),
            ("logout", "sign out"),
        ],
        Screen::Guide => &[
            ("filter all|animal|amenity", "filter the list"),
            ("list", "show the list again"),
            ("show <number|id>", "open a place"),
            ("close", "close the open place"),
            ("route", "ask ZooBuddy for a route to the open place"),
            ("map", "show the zoo map"),
            ("ask <question>", "ask ZooBuddy (or just type)"),
            ("settings", "change your profiles"),
            ("logout", "sign out"),
        ],
    };
    for (syntax, text) in usage.iter().chain(&[("help", "this list"), ("quit", "leave the guide")]) {
        println!("  {} {}", format!("{syntax:<28}").cyan(), text.bright_black());
    }
}

pub fn error(message: impl std::fmt::Display) {
    eprintln!("{}", message.to_string().red());
}
