use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use quickcart::api::{CartApi, CmdMessage, MessageLevel};
use quickcart::commands::helpers::find_category;
use quickcart::config::CartConfig;
use quickcart::error::Result;
use quickcart::model::{Category, Document, Item};
use quickcart::store::fs::FileStore;
use std::io::{self, BufRead, Write};

mod args;
use args::Cli;

const MENU_OPTIONS: [&str; 5] = [
    "Add item to cart",
    "Update item in cart",
    "Remove item in cart",
    "View cart",
    "Exit program",
];

const MENU_ERROR: &str = "Option must be a number between 1 and 5";
const CATEGORY_ERROR: &str = "Must be a valid number between 1 and 5";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CartApi<FileStore>,
}

enum MenuChoice {
    Add,
    Update,
    Remove,
    View,
    Exit,
}

/// Whether the menu loop keeps going after an interaction. Hitting end of
/// input anywhere a line is read counts as choosing Exit.
enum Flow {
    Continue,
    Exit,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    println!("Welcome to Quick Cart!");
    println!("What would you like to do?");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let Some(line) = prompt_line(&mut input)? else {
            break;
        };
        let flow = match parse_menu_choice(&line) {
            Some(MenuChoice::Add) => dispatch(handle_add(&mut ctx, &mut input)),
            Some(MenuChoice::Update) => dispatch(handle_update(&mut ctx, &mut input)),
            Some(MenuChoice::Remove) => dispatch(handle_remove(&mut ctx, &mut input)),
            Some(MenuChoice::View) => dispatch(handle_view(&ctx)),
            Some(MenuChoice::Exit) => Flow::Exit,
            None => {
                println!("{}", MENU_ERROR);
                Flow::Continue
            }
        };
        if matches!(flow, Flow::Exit) {
            break;
        }
    }

    println!("Exiting program...");
    Ok(())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let proj_dirs =
        ProjectDirs::from("com", "quickcart", "quickcart").expect("Could not determine config dir");
    let config = CartConfig::load(proj_dirs.config_dir()).unwrap_or_default();

    let db_path = cli.db_path.clone().unwrap_or(config.db_path);
    let api = CartApi::new(FileStore::new(db_path));
    Ok(AppContext { api })
}

/// A failed operation is reported and the menu comes back; only I/O trouble
/// on stdin/stdout ends the session.
fn dispatch(outcome: Result<Flow>) -> Flow {
    match outcome {
        Ok(flow) => flow,
        Err(e) => {
            println!("{}", e.to_string().red());
            Flow::Continue
        }
    }
}

fn handle_add(ctx: &mut AppContext, input: &mut impl BufRead) -> Result<Flow> {
    println!("Item name:");
    let Some(name) = prompt_line(input)? else {
        return Ok(Flow::Exit);
    };
    println!("Add a note (optional):");
    let Some(note) = prompt_line(input)? else {
        return Ok(Flow::Exit);
    };
    let Some(category) = prompt_category(input)? else {
        return Ok(Flow::Exit);
    };

    let item = Item::new(name.trim(), note);
    let result = ctx.api.add_item(&item, category)?;
    print_messages(&result.messages);
    Ok(Flow::Continue)
}

fn handle_update(ctx: &mut AppContext, input: &mut impl BufRead) -> Result<Flow> {
    println!();
    println!("Choose an item you would like to update:");
    let document = ctx.api.view_cart()?.document.unwrap_or_default();
    print_document(&document);

    let Some(raw) = prompt_line(input)? else {
        return Ok(Flow::Exit);
    };
    let name = raw.trim();

    if find_category(&document, name).is_none() {
        println!("{}", format!("{} not in your cart", name).yellow());
        return Ok(Flow::Continue);
    }

    println!("Add a note (optional):");
    let Some(note) = prompt_line(input)? else {
        return Ok(Flow::Exit);
    };

    let result = ctx.api.update_item(name, &note)?;
    print_messages(&result.messages);
    Ok(Flow::Continue)
}

fn handle_remove(ctx: &mut AppContext, input: &mut impl BufRead) -> Result<Flow> {
    println!();
    println!("Choose which item you would like to remove from your cart:");
    let Some(raw) = prompt_line(input)? else {
        return Ok(Flow::Exit);
    };

    let result = ctx.api.remove_item(raw.trim())?;
    print_messages(&result.messages);
    Ok(Flow::Continue)
}

fn handle_view(ctx: &AppContext) -> Result<Flow> {
    let result = ctx.api.view_cart()?;
    if let Some(document) = &result.document {
        print_document(document);
    }
    print_messages(&result.messages);
    Ok(Flow::Continue)
}

fn print_menu() {
    println!();
    for (idx, option) in MENU_OPTIONS.iter().enumerate() {
        println!("[{}] {}", idx + 1, option);
    }
}

fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
    match line.trim().parse::<usize>().ok()? {
        1 => Some(MenuChoice::Add),
        2 => Some(MenuChoice::Update),
        3 => Some(MenuChoice::Remove),
        4 => Some(MenuChoice::View),
        5 => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// Show the fixed category picker and read choices until one is valid.
/// Returns None when stdin runs out.
fn prompt_category(input: &mut impl BufRead) -> Result<Option<Category>> {
    println!("Choose which category this item belongs to");
    println!();
    for (idx, category) in Category::ALL.iter().enumerate() {
        println!("[{}] {}", idx + 1, category);
    }

    loop {
        let Some(line) = prompt_line(input)? else {
            return Ok(None);
        };
        let choice = line
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(Category::from_menu_choice);
        match choice {
            Some(category) => return Ok(Some(category)),
            None => println!("{}", CATEGORY_ERROR),
        }
    }
}

/// Print the `>>> ` prompt and read one line. None means end of input.
fn prompt_line(input: &mut impl BufRead) -> Result<Option<String>> {
    print!(">>> ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_document(document: &Document) {
    if document.is_empty() {
        println!("Your cart is empty.");
        return;
    }
    for (category, items) in document {
        println!("{}", category.bold());
        for (name, note) in items {
            if note.is_empty() {
                println!("    {}", name);
            } else {
                println!("    {} {}", name, note.dimmed());
            }
        }
    }
}
