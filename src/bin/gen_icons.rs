use std::env;
use std::path::PathBuf;
use std::process;

use webstore_assets::icons;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let dir = env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("icons"), PathBuf::from);

    for path in icons::write_icons(&dir)? {
        println!("✓ {}", path.file_name().unwrap_or_default().to_string_lossy());
    }
    Ok(())
}
