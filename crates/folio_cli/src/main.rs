use std::env;
use std::path::PathBuf;

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: folio <snapshot.json>");
        std::process::exit(1);
    }

    let file_path = PathBuf::from(&args[1]);
    if !file_path.exists() {
        eprintln!("Error: file not found: {}", file_path.display());
        std::process::exit(1);
    }

    folio_ui::run(&file_path);
}
