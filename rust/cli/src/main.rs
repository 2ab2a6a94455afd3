use std::io;

fn main() {
    decksync_cli::logging::init_logging();
    let code = decksync_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
