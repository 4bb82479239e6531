//! Property tests for page and payload construction

use graph_site::core::models::GraphModel;
use graph_site::core::site::output::MemoryOutput;
use graph_site::core::site::{
    node_page_file, IndexPageBuilder, NodePageBuilder, SiteAssembler, VisualizationDataBuilder,
};
use proptest::prelude::*;

/// Adjacency lists over a small id range so that self-loops, duplicates and
/// dangling references all show up
fn arb_graph() -> impl Strategy<Value = GraphModel<u16>> {
    prop::collection::vec(
        (0_u16..40, prop::collection::vec(0_u16..50, 0..6)),
        0..20,
    )
    .prop_map(|entries| entries.into_iter().collect::<GraphModel<u16>>())
}

proptest! {
    #[test]
    fn prop_one_link_per_neighbor(graph in arb_graph()) {
        for (node, neighbors) in graph.iter() {
            let page = NodePageBuilder::build(node, neighbors);
            let expected: Vec<String> = neighbors.iter().map(ToString::to_string).collect();
            prop_assert_eq!(page.targets(), expected);
        }
    }

    #[test]
    fn prop_payload_matches_graph(graph in arb_graph()) {
        let payload = VisualizationDataBuilder::build(&graph);

        prop_assert_eq!(payload.nodes.len(), graph.node_count());
        prop_assert_eq!(payload.links.len(), graph.edge_count());

        let node_ids: Vec<String> = graph.nodes().map(ToString::to_string).collect();
        let payload_ids: Vec<String> = payload.nodes.iter().map(|n| n.id.clone()).collect();
        prop_assert_eq!(payload_ids, node_ids);

        let expected: Vec<(String, String)> = graph
            .iter()
            .flat_map(|(node, neighbors)| {
                neighbors.iter().map(move |n| (node.to_string(), n.to_string()))
            })
            .collect();
        let links: Vec<(String, String)> = payload
            .links
            .iter()
            .map(|l| (l.source.clone(), l.target.clone()))
            .collect();
        prop_assert_eq!(links, expected);
    }

    #[test]
    fn prop_index_preserves_starting_order(starting in prop::collection::vec(0_u16..100, 0..12)) {
        let page = IndexPageBuilder::default().build(&starting);
        let expected: Vec<String> = starting.iter().map(ToString::to_string).collect();
        prop_assert_eq!(page.targets(), expected);
    }

    #[test]
    fn prop_one_page_per_key(graph in arb_graph(), starting in prop::collection::vec(0_u16..50, 0..5)) {
        let mut output = MemoryOutput::new();
        let report = SiteAssembler::default()
            .generate(&graph, &starting, &mut output)
            .unwrap();

        prop_assert_eq!(report.files.len(), graph.node_count() + 3);
        prop_assert_eq!(output.files().len(), graph.node_count() + 3);
        for node in graph.nodes() {
            prop_assert!(output.get(&node_page_file(&node.to_string())).is_some());
        }
    }
}
