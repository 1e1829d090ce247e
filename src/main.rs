// A concave hull viewer and editor made with the Bevy game engine.

use clap::Parser;

use hullview::core::{create_app, CliArgs};
use hullview::logger::init_custom_logger;

fn main() {
    let args = CliArgs::parse();
    init_custom_logger();
    create_app(args).run();
}
