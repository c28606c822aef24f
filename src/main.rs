fn main() {
    if let Err(e) = base64_inspector::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
