use clap::Parser;
use encoding_catalog::{
    EncodingCatalog, EncodingMenuItem, EncodingOrder, MemoryPreferences, canonical_name,
    is_yen_unsafe, resolve_name,
};
use std::process;
use std::sync::Arc;

/// Print the encoding menu for an encoding order, or resolve a single name
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Encoding names in menu order (factory list if omitted)
    #[arg(value_name = "ENCODING")]
    encodings: Vec<String>,

    /// Resolve this name instead of printing a menu
    #[arg(short, long)]
    resolve: Option<String>,

    /// Show raw identifiers
    #[arg(short = 'x', long)]
    raw: bool,
}

fn main() {
    let args = Args::parse();

    if let Some(name) = &args.resolve {
        match resolve_name(name) {
            Some(id) => {
                println!("{name} -> {id} (0x{:08X})", id.to_raw());
                if is_yen_unsafe(id) {
                    println!("Warning: 0x5C is the Yen sign in this encoding");
                }
            }
            None => {
                eprintln!("Unknown encoding: {name}");
                process::exit(1);
            }
        }
        return;
    }

    let order = if args.encodings.is_empty() {
        EncodingOrder::default()
    } else {
        match EncodingOrder::from_names(&args.encodings) {
            Ok(order) => order,
            Err(err) => {
                eprintln!("Error: {err}");
                process::exit(1);
            }
        }
    };

    let catalog = EncodingCatalog::new(Arc::new(MemoryPreferences::new(order)));
    for item in catalog.menu_items() {
        match item {
            EncodingMenuItem::Separator => println!("{}", "-".repeat(40)),
            EncodingMenuItem::Encoding { label, id } => {
                let yen = if is_yen_unsafe(id) { " ¥" } else { "" };
                if args.raw {
                    let name = canonical_name(id).unwrap_or("?");
                    println!("{label}{yen}  [{name}, 0x{:08X}]", id.to_raw());
                } else {
                    println!("{label}{yen}");
                }
            }
        }
    }
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Args::command().debug_assert();
}
