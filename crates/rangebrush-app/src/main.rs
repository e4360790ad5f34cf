//! Demo entry point: replay a scripted drag and print the resulting SVG.
//!
//! Usage: `rangebrush-demo [config.json] [script.json]`

mod demo;

fn main() {
    env_logger::init();
    log::info!("Starting RangeBrush demo");

    let mut args = std::env::args().skip(1);
    let config_path = args.next();
    let script_path = args.next();

    match demo::run(config_path.as_deref(), script_path.as_deref()) {
        Ok(svg) => print!("{svg}"),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
