use pretty_assertions::assert_eq;
use toctree::*;

fn toc_link_label<'a>(list: &'a List, href: &str) -> Option<&'a str> {
    for item in list.items() {
        if let Some(link) = &item.link {
            if link.href == href {
                return Some(link.content.label());
            }
        }
        if let Some(sublist) = &item.sublist {
            if let Some(found) = toc_link_label(sublist, href) {
                return Some(found);
            }
        }
    }
    None
}

#[test]
fn test_headings_numbered_in_document_order() {
    let mut headings = vec![
        Heading::new(2, "Intro"),
        Heading::new(3, "Background"),
        Heading::new(3, "Goals"),
        Heading::new(2, "Design"),
        Heading::new(3, "Layout"),
    ];
    autonumber(&mut headings, None);

    let texts: Vec<&str> = headings.iter().map(|h| h.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["1 Intro", "1.1 Background", "1.2 Goals", "2 Design", "2.1 Layout"]
    );
}

#[test]
fn test_out_of_range_headings_are_left_alone() {
    let mut headings = vec![Heading::new(1, "Title"), Heading::new(2, "Intro")];
    autonumber(&mut headings, None);

    assert_eq!(headings[0].text, "Title");
    assert_eq!(headings[1].text, "1 Intro");
}

#[test]
fn test_numbers_mirrored_into_nested_toc_links() {
    let mut sub = List::new();
    sub.push_item(Item::leaf("Layout", "#layout"));

    let mut toc = List::new();
    toc.push_item(Item::leaf("Intro", "#intro"));
    toc.push_item(Item::section("Design", "#design", sub));

    let mut headings = vec![
        Heading::with_id(2, "intro", "Intro"),
        Heading::with_id(2, "design", "Design"),
        Heading::with_id(3, "layout", "Layout"),
    ];
    autonumber(&mut headings, Some(&mut toc));

    assert_eq!(toc_link_label(&toc, "#intro"), Some("1 Intro"));
    assert_eq!(toc_link_label(&toc, "#design"), Some("2 Design"));
    assert_eq!(toc_link_label(&toc, "#layout"), Some("2.1 Layout"));
}

#[test]
fn test_heading_without_id_skips_toc_update() {
    let mut toc = List::new();
    toc.push_item(Item::leaf("Intro", "#intro"));

    let mut headings = vec![Heading::new(2, "Intro")];
    autonumber(&mut headings, Some(&mut toc));

    assert_eq!(headings[0].text, "1 Intro");
    assert_eq!(toc_link_label(&toc, "#intro"), Some("Intro"));
}

#[test]
fn test_heading_without_matching_entry_is_still_numbered() {
    let mut toc = List::new();
    toc.push_item(Item::leaf("Intro", "#intro"));

    let mut headings = vec![Heading::with_id(2, "orphan", "Orphan")];
    autonumber(&mut headings, Some(&mut toc));

    assert_eq!(headings[0].text, "1 Orphan");
    assert_eq!(toc_link_label(&toc, "#intro"), Some("Intro"));
}

#[test]
fn test_numbering_then_annotation_composes() {
    // Boot order of the host page: numbers first, connectors second.
    let mut toc = List::new();
    toc.push_item(Item::leaf("Intro", "#intro"));
    toc.push_item(Item::leaf("Design", "#design"));

    let mut headings = vec![
        Heading::with_id(2, "intro", "Intro"),
        Heading::with_id(2, "design", "Design"),
    ];
    autonumber(&mut headings, Some(&mut toc));
    annotate(&mut toc, &AnnotateContext::default()).unwrap();

    assert_eq!(toc.to_string(), "├── 1 Intro\n└── 2 Design\n");
}
