//! Payload command handler

use graph_site::config::Config;
use graph_site::core::site::VisualizationDataBuilder;

/// Print the visualization payload for the configured graph
pub fn run(config: &Config, pretty: bool) {
    let input = super::load_input(config);
    let payload = VisualizationDataBuilder::build(&input.graph);

    let json = if pretty {
        payload.to_json_pretty()
    } else {
        payload.to_json()
    };

    match json {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}
