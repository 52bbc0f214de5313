fn main() {
    if let Err(err) = chatshell::cli::main() {
        eprintln!("❌ Error: {err}");
        std::process::exit(1);
    }
}
