fn main() {
    if let Err(err) = apigen::cli::run() {
        eprintln!("❌ {err:#}");
        std::process::exit(1);
    }
}
