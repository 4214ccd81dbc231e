fn main() {
    if let Err(err) = combo_count::run() {
        println!("error: {err:#}");
        std::process::exit(1);
    }
}
