use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod settings;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("seed: {:?}, grid: {:?}", args.game.seed, args.game.grid);

    let root = document()
        .get_element_by_id("memory")
        .expect("Could not find id=\"memory\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_from_location_hash() {
        let args = Args::try_parse_from("#-v&--seed=7&--grid=4x5".split(['#', '&'])).unwrap();
        assert_eq!(args.game.seed, Some(7));
        assert_eq!(args.game.grid.as_deref(), Some("4x5"));
        assert_eq!(args.verbose.log_level(), Some(log::Level::Warn));
    }

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::try_parse_from("".split(['#', '&'])).unwrap();
        assert_eq!(args.game.seed, None);
        assert_eq!(args.game.grid, None);
    }
}
