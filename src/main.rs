use std::env;
use std::path::PathBuf;
use std::process;

use webstore_assets::fit;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let input = PathBuf::from(args.next().ok_or_else(usage)?);
    let output = PathBuf::from(args.next().ok_or_else(usage)?);
    if args.next().is_some() {
        return Err(usage().into());
    }

    let report = fit::fit_file(&input, &output)?;
    println!(
        "Created store screenshot at: {} ({}x{} scaled to {}x{})",
        output.display(),
        report.source_width,
        report.source_height,
        report.scaled_width,
        report.scaled_height,
    );
    Ok(())
}

fn usage() -> String {
    "Usage: webstore-assets <input-image> <output-png>".to_string()
}
