fn main() {
    if let Err(err) = quadrant2drawio::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
