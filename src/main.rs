use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use starfield::Starfield;

fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .ok();

    if let Err(e) = Starfield::new().run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
