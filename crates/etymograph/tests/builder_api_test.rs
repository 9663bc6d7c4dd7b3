use std::task::Poll;

use etymograph::{
    Etymograph, EtymographError,
    config::{AppConfig, StyleConfig},
    deferred::Deferred,
    export::OutputFormat,
    identifier::{ContentHasher, Sha256Hasher},
    structure::GraphIndex,
};
use float_cmp::approx_eq;

const PROBLEM: &str = "\
Of multiple origins. Partly a borrowing from French. Partly a borrowing from Latin.
%Partly from
@ Middle French
    └── problème {c1380 with reference to Aristotle}
        └── <borrow> @ French
            └── problème
                └── <borrow-into> @ English
                    └── problem
%Partly from
@ Classical Latin
    └── problēma [question proposed for academic discussion]
        └── <borrow-into> @ English
            └── problem";

fn id(content: &str) -> etymograph::identifier::NodeId {
    Sha256Hasher.hash(content).unwrap()
}

#[test]
fn test_assemble_is_deterministic() {
    let etymograph = Etymograph::default();
    let first = etymograph.assemble(PROBLEM).unwrap();
    let second = etymograph.assemble(PROBLEM).unwrap();
    assert_eq!(first, second);

    let fresh = Etymograph::default().assemble(PROBLEM).unwrap();
    assert_eq!(first, fresh);
}

#[test]
fn test_cross_block_convergence() {
    let graph = Etymograph::default().assemble(PROBLEM).unwrap();
    let index = GraphIndex::new(&graph);

    let english = id("English problem");
    let occurrences = index
        .unique_nodes()
        .filter(|node| node.label() == "English problem")
        .count();
    assert_eq!(occurrences, 1);
    assert_eq!(index.in_degree(english), 2);

    let sources: Vec<_> = index
        .unique_edges()
        .filter(|edge| edge.target() == english)
        .map(|edge| edge.source())
        .collect();
    assert_eq!(sources, vec![id("French problème"), id("Classical Latin problēma [question proposed for academic discussion]")]);
}

#[test]
fn test_roots_are_block_starts() {
    let graph = Etymograph::default().assemble(PROBLEM).unwrap();
    let index = GraphIndex::new(&graph);

    let roots: Vec<_> = index.roots().map(|node| node.label()).collect();
    assert_eq!(
        roots,
        vec![
            "Middle French problème {c1380 with reference to Aristotle}",
            "Classical Latin problēma [question proposed for academic discussion]",
        ]
    );
    assert!(index.is_acyclic());
}

#[test]
fn test_merge_fan_out_from_notation() {
    let source = "\
%Partly from
parent
    ├── a
    ├── b
    └── <all> X";
    let graph = Etymograph::default().assemble(source).unwrap();
    let index = GraphIndex::new(&graph);

    assert_eq!(index.in_degree(id("X")), 2);
    assert_eq!(index.in_degree(id("a")), 1);
    assert!(
        index
            .unique_edges()
            .all(|edge| edge.source() != id("parent") || edge.target() != id("X"))
    );
}

#[test]
fn test_layout_in_second_block() {
    let source = "\
%Partly from
first
%Partly from
root
    a
    b
    c";
    let graph = Etymograph::default().assemble(source).unwrap();

    let root = graph.nodes().iter().find(|n| n.label() == "root").unwrap();
    let children: Vec<_> = graph
        .nodes()
        .iter()
        .filter(|n| ["a", "b", "c"].contains(&n.label()))
        .collect();

    let xs: Vec<f32> = children.iter().map(|n| n.position().x()).collect();
    assert_eq!(xs, vec![500.0, 800.0, 1100.0]);
    for child in children {
        assert!(approx_eq!(
            f32,
            child.position().y(),
            root.position().y() + 300.0
        ));
    }
}

#[test]
fn test_render_both_formats() {
    let etymograph = Etymograph::default();
    let graph = etymograph.assemble(PROBLEM).unwrap();

    let svg = etymograph.render(&graph, OutputFormat::Svg).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("English problem"));

    let json = etymograph.render_json(&graph).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value["nodes"].as_array().unwrap().len(),
        graph.nodes().len()
    );
    assert_eq!(
        value["edges"][0]["id"],
        format!("edge-{}-{}", graph.edges()[0].source(), graph.edges()[0].target())
    );
}

#[test]
fn test_invalid_style_is_config_error() {
    let style: StyleConfig = toml::from_str(r#"node_fill_color = "no-such-color""#).unwrap();
    let etymograph = Etymograph::new(AppConfig::new(style));
    let graph = etymograph.assemble(PROBLEM).unwrap();

    let err = etymograph.render_svg(&graph).unwrap_err();
    assert!(matches!(err, EtymographError::Config(_)));

    // JSON does not depend on style.
    assert!(etymograph.render_json(&graph).is_ok());
}

#[test]
fn test_deferred_transform() {
    let cell = Deferred::spawn(|| Etymograph::default().assemble(PROBLEM));

    let graph = cell.wait().unwrap();
    assert_eq!(graph.nodes().len(), 5);
    assert!(matches!(cell.read(), Poll::Ready(Ok(_))));
}
