use std::env;

mod cli;
mod entropy;
mod exits;
mod logging;
mod pass;
mod settings;
mod terminal;
mod tui;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();
    logging::init();

    let args: Vec<String> = env::args().collect();

    let code = match args.len() {
        1 => tui::run(),
        _ => cli::run(args),
    };
    std::process::exit(code);
}
