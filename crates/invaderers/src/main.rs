use std::path::PathBuf;

use invaderers::RuleSet;

const DEFAULT_ASSET_DIR: &str = "assets";

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let asset_dir = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_ASSET_DIR.to_string()));
    let rule_set = match args.next() {
        None => RuleSet::default(),
        Some(name) => match RuleSet::parse(&name) {
            Some(rule_set) => rule_set,
            None => {
                eprintln!("Unknown rules '{}'. Supported: classic, modern", name);
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = invaderers::run(&asset_dir, rule_set) {
        log::error!("{e:#}");
        eprintln!("invaderers: {e:#}");
        std::process::exit(1);
    }
}
