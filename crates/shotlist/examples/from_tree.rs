//! Example: Laying out a hand-built markup tree
//!
//! This example demonstrates how to build a node tree programmatically,
//! lay it out with a custom tag classifier, and print the result without
//! parsing any markup.

use shotlist::{
    OutputFormat, ShotListBuilder,
    classify::{Role, TagClassifier},
    layout,
    markup::{Element, Node},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building tree by hand...\n");

    // A screenplay-like structure: sections are scenes, list items are shots
    let tree: Node = Element::new("article")
        .with_child(
            Element::new("section")
                .with_child(Element::new("h2").with_child(Node::text("Cold open")))
                .with_child(
                    Element::new("ul")
                        .with_child(Element::new("li").with_child(Node::text("Rain on glass.")))
                        .with_child(
                            Element::new("li")
                                .with_child(Node::text("Cut to "))
                                .with_child(
                                    Element::new("a")
                                        .with_attribute("href", "https://example.com/station")
                                        .with_child(Node::text("the station")),
                                ),
                        ),
                ),
        )
        .with_child(
            Element::new("section")
                .with_child(Element::new("h2").with_child(Node::text("Credits")))
                .with_child(Element::new("aside").with_child(Node::text("(not shown)"))),
        )
        .into();

    // Classify tags for this structure instead of the default HTML grammar
    let classifier = TagClassifier::empty()
        .with_role("section", Role::SceneBoundary)
        .with_role("h2", Role::ShotBoundary)
        .with_role("li", Role::ShotBoundary)
        .with_role("a", Role::Link)
        .with_role("aside", Role::Skip);

    let document = layout::layout(&tree, &classifier)?;

    println!("Laid out document:");
    println!("  Scenes: {}", document.scenes().len());
    println!("  Shots: {}", document.shot_count());
    println!();

    // Print the outline using ShotListBuilder's exporters
    let builder = ShotListBuilder::default();
    builder.export(&document, OutputFormat::Outline, std::io::stdout().lock())?;

    Ok(())
}
