fn main() {
    if let Err(e) = rollcall_app::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
