fn main() {
    dayledger::init();
    if let Err(err) = dayledger::cli::run_cli() {
        dayledger::cli::output::error(format!("fatal: {}", err));
        std::process::exit(1);
    }
}
