//! End-to-end site generation into real directories

use graph_site::core::models::GraphModel;
use graph_site::core::site::{
    DirectoryOutput, SiteAssembler, SiteOptions, Theme, VisualizationDataBuilder,
};
use graph_site::core::SiteInput;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn read_site(dir: &Path) -> BTreeMap<String, String> {
    fs::read_dir(dir)
        .expect("site directory should exist")
        .map(|entry| {
            let entry = entry.expect("readable entry");
            let name = entry.file_name().to_string_lossy().to_string();
            let contents = fs::read_to_string(entry.path()).expect("readable file");
            (name, contents)
        })
        .collect()
}

fn node_links(html: &str) -> usize {
    html.matches("href=\"node_").count()
}

fn generate(graph: &GraphModel<u32>, starting: &[u32], dir: &Path) {
    let mut output = DirectoryOutput::new(dir);
    SiteAssembler::default()
        .generate(graph, starting, &mut output)
        .expect("generation should succeed");
}

#[test]
fn test_self_loop_graph() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let site = temp.path().join("graph_site");
    let graph: GraphModel<u32> = [(3, vec![7, 34]), (34, vec![34])].into_iter().collect();

    generate(&graph, &[3], &site);
    let files = read_site(&site);

    assert_eq!(
        files.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["index.html", "node_3.html", "node_34.html", "styles.css", "viz.html"]
    );
    assert_eq!(node_links(&files["node_3.html"]), 2);
    assert!(files["node_3.html"].contains("href=\"node_7.html\""));
    assert_eq!(node_links(&files["node_34.html"]), 1);
    assert!(files["node_34.html"].contains("href=\"node_34.html\""));
    assert_eq!(node_links(&files["index.html"]), 1);

    let payload = VisualizationDataBuilder::build(&graph);
    assert_eq!(payload.nodes.len(), 2);
    assert_eq!(payload.links.len(), 3);
    assert_eq!(payload.links.iter().filter(|l| l.is_self_loop()).count(), 1);
    assert!(files["viz.html"].contains(&payload.to_script_json().unwrap()));
}

#[test]
fn test_node_without_neighbors() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let site = temp.path().join("out");
    let graph: GraphModel<u32> = [(5, vec![])].into_iter().collect();

    generate(&graph, &[5], &site);
    let files = read_site(&site);

    assert_eq!(node_links(&files["node_5.html"]), 0);
    let payload = VisualizationDataBuilder::build(&graph);
    assert_eq!(payload.nodes.len(), 1);
    assert!(payload.links.is_empty());
}

#[test]
fn test_unknown_starting_node_is_linked() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let site = temp.path().join("out");
    let graph: GraphModel<u32> = [(5, vec![])].into_iter().collect();

    generate(&graph, &[99], &site);
    let files = read_site(&site);

    assert!(files["index.html"].contains("href=\"node_99.html\">99</a>"));
    assert!(!files.contains_key("node_99.html"));
}

#[test]
fn test_regeneration_is_byte_identical() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let site = temp.path().join("graph_site");
    let input = SiteInput::sample();
    let assembler = SiteAssembler::default();

    assembler
        .generate(&input.graph, &input.starting_nodes, &mut DirectoryOutput::new(&site))
        .expect("first run");
    let first = read_site(&site);

    assembler
        .generate(&input.graph, &input.starting_nodes, &mut DirectoryOutput::new(&site))
        .expect("second run");
    let second = read_site(&site);

    assert_eq!(first.len(), 13);
    assert_eq!(first, second);
}

#[test]
fn test_regeneration_removes_stale_files() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let site = temp.path().join("graph_site");
    fs::create_dir_all(&site).unwrap();
    fs::write(site.join("node_old.html"), "stale").unwrap();
    fs::write(site.join("notes.txt"), "unrelated").unwrap();

    let graph: GraphModel<u32> = [(1, vec![2]), (2, vec![1])].into_iter().collect();
    generate(&graph, &[1], &site);

    let files = read_site(&site);
    assert!(!files.contains_key("node_old.html"));
    assert!(!files.contains_key("notes.txt"));
    assert_eq!(files.len(), 5);
    assert!(!temp.path().join(".graph_site.staging").exists());
}

#[test]
fn test_sample_site_with_plain_theme() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let site = temp.path().join("graph_site");
    let input = SiteInput::sample();
    let assembler = SiteAssembler::new(SiteOptions::with_theme(Theme::Plain));

    let report = assembler
        .generate(&input.graph, &input.starting_nodes, &mut DirectoryOutput::new(&site))
        .expect("generation should succeed");

    assert_eq!(report.node_pages, 10);
    assert_eq!(report.link_records, 18);
    assert!(report.dangling_references.is_empty());

    let files = read_site(&site);
    assert_eq!(files["styles.css"], Theme::Plain.stylesheet());
    assert!(files["node_3.html"].contains("neighbor-list"));
    assert_eq!(node_links(&files["index.html"]), 3);
}
