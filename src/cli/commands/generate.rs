//! Generate command handler

use graph_site::config::Config;
use graph_site::core::site::{DirectoryOutput, SiteAssembler, INDEX_FILE, VISUALIZATION_FILE};
use graph_site::verbose;

/// Generate the site into the configured output directory
pub fn run(config: &Config) {
    let input = super::load_input(config);

    let options = match config.site_options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    let output_dir = config.output_dir();
    let mut output = DirectoryOutput::new(&output_dir);
    let assembler = SiteAssembler::new(options);

    match assembler.generate(&input.graph, &input.starting_nodes, &mut output) {
        Ok(report) => {
            for file in &report.files {
                verbose!("  wrote {file}");
            }
            println!("Website generated in folder: {}", output_dir.display());
            println!(
                "Open {} to start browsing, or {} for the graph visualization.",
                output_dir.join(INDEX_FILE).display(),
                output_dir.join(VISUALIZATION_FILE).display()
            );
            if !report.dangling_references.is_empty() {
                println!(
                    "⚠ {} neighbor(s) without a page: {}",
                    report.dangling_references.len(),
                    report.dangling_references.join(", ")
                );
            }
        }
        Err(e) => {
            eprintln!("✗ Site generation failed: {e}");
            std::process::exit(1);
        }
    }
}
