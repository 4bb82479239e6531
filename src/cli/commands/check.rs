//! Check command handler

use graph_site::config::Config;
use graph_site::core::site::SiteAssembler;

/// Print the graph and its diagnostics, then render the site without writing it
pub fn run(config: &Config) {
    let input = super::load_input(config);
    let graph = &input.graph;

    print!("{graph}");

    println!();
    println!("Starting nodes: {}", input.starting_nodes.join(", "));
    println!("Self-loops: {}", join_ids(&graph.self_loops()));
    println!("Dangling references: {}", join_ids(&graph.dangling_references()));
    println!(
        "Missing starting nodes: {}",
        join_ids(&input.missing_starting_nodes())
    );

    let rendered = config
        .site_options()
        .and_then(|options| SiteAssembler::new(options).render(graph, &input.starting_nodes));

    match rendered {
        Ok(files) => println!("✓ {} files would be generated", files.len()),
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

fn join_ids(ids: &[&String]) -> String {
    if ids.is_empty() {
        "none".to_string()
    } else {
        ids.iter().map(|id| id.as_str()).collect::<Vec<_>>().join(", ")
    }
}
