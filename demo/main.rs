//! Prints the shortest path through a small hardcoded grid.
//!
//! Run: cargo run --bin gridpath-demo
//! Set `RUST_LOG=debug` to see parser and search logs.

use gridpath::find_path;

const GRID: [&str; 3] = ["S..", ".#.", "..T"];

fn main() {
    env_logger::init();

    for row in GRID {
        println!("{row}");
    }

    match find_path(&GRID) {
        Ok(path) => {
            let cells: Vec<String> = path.iter().map(|p| format!("({p})")).collect();
            println!("{} steps: {}", path.len() - 1, cells.join(" -> "));
        }
        Err(e) => {
            log::warn!("search failed: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
