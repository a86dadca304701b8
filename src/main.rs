use env_logger;
use stmtree::lexing::LexMode;

const DEFAULT_INPUT: &str = "input.c";

fn main() {
    env_logger::init();

    let mut mode = LexMode::default();
    let mut file = String::from(DEFAULT_INPUT);
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--halt-on-unrecognized" => mode = LexMode::HaltOnUnrecognized,
            _ => file = arg,
        }
    }

    let source = match stmtree::load(&file) {
        Ok(source) => source,
        Err(error) => {
            log::debug!("Could not read {}: {}", file, error);
            eprintln!("Failed to open input file.");
            std::process::exit(1);
        }
    };

    stmtree::run(source, mode)
}
