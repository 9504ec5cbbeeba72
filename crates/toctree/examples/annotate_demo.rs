//! Builds a small outline, numbers its headings, and prints the
//! annotated tree.
//!
//! Run with `RUST_LOG=debug` to see acquisition logging from the library.

use toctree::{annotate, autonumber, AnnotateContext, Heading, Item, List};

fn main() {
    env_logger::init();

    let mut details = List::new();
    details.push_item(Item::leaf("Install", "#install"));
    details.push_item(Item::leaf("Configure", "#configure"));

    let mut toc = List::new();
    toc.push_item(Item::leaf("Overview", "#overview"));
    toc.push_item(Item::section("Getting started", "#getting-started", details));

    let mut headings = vec![
        Heading::with_id(2, "overview", "Overview"),
        Heading::with_id(2, "getting-started", "Getting started"),
        Heading::with_id(3, "install", "Install"),
        Heading::with_id(3, "configure", "Configure"),
    ];
    autonumber(&mut headings, Some(&mut toc));

    match annotate(&mut toc, &AnnotateContext::default()) {
        Ok(_) => print!("{toc}"),
        Err(err) => eprintln!("annotation failed: {err}"),
    }
}
