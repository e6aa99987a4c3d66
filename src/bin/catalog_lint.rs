//! Validates a games.json before it ships: parse errors, missing ids or
//! titles, duplicate ids. Prints a per-game summary on success.

use log::debug;
use snowman_site::catalog::GameCatalog;
use std::env;
use std::fs::File;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("catalog-lint - validate a Snowman Studio games.json");
        println!();
        println!("Usage: {} <games.json>", args[0]);
        println!();
        println!("Exits 0 when the catalog is well-formed, 1 otherwise.");
        return;
    }

    let path = &args[1];
    debug!("Linting catalog: {}", path);

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            match e.kind() {
                std::io::ErrorKind::NotFound => {
                    eprintln!("Error: catalog file not found: {}", path);
                    eprintln!();
                    eprintln!("Check the path; the site serves it from public/data/games.json.");
                }
                std::io::ErrorKind::PermissionDenied => {
                    eprintln!("Error: permission denied reading {}", path);
                }
                _ => {
                    eprintln!("Error: cannot open {}: {}", path, e);
                }
            }
            process::exit(1);
        }
    };

    let catalog = match GameCatalog::from_reader(file) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    println!("{} game(s):", catalog.len());
    for game in catalog.iter() {
        let mut flags = Vec::new();
        if game.show_in_featured_grid {
            flags.push("grid");
        }
        if game.is_featured {
            flags.push("featured");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        println!(
            "  {:<20} {:<30} {} media{}",
            game.id,
            game.title,
            game.media.len(),
            flags
        );
    }
}
