//! Example: Building a derivation graph from notation
//!
//! This example demonstrates the basic workflow of:
//! 1. Creating an Etymograph with default configuration
//! 2. Assembling the derivation graph of a two-route document
//! 3. Rendering the graph to SVG and JSON

use etymograph::{Etymograph, structure::GraphIndex};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = "\
Of multiple origins. Partly a borrowing from French. Partly a borrowing from Latin.
%Partly from
@ Middle French
    └── problème
        └── <borrow> @ French
            └── problème
                └── <borrow-into> @ English
                    └── problem
%Partly from
@ Ancient Greek
    └── προβάλλειν [to throw to, to put forward]
        └── πρόβλημα
            └── <borrow> @ Classical Latin
                └── problēma
                    └── <borrow-into> @ English
                        └── problem";

    let etymograph = Etymograph::default();

    println!("Assembling graph from source...");
    let graph = etymograph.assemble(source)?;

    let index = GraphIndex::new(&graph);
    println!("Node occurrences: {}", graph.nodes().len());
    println!("Distinct forms: {}", index.node_count());
    for node in index.roots() {
        println!("Earliest form: {}", node.label());
    }

    println!("\nRendering to SVG...");
    let svg = etymograph.render_svg(&graph)?;
    println!("SVG length: {} bytes", svg.len());

    let output_path = "from_source_output.svg";
    std::fs::write(output_path, &svg)?;
    println!("SVG written to: {output_path}");

    let json = etymograph.render_json(&graph)?;
    println!("JSON length: {} bytes", json.len());

    Ok(())
}
