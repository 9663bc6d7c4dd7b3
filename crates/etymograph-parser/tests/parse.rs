use etymograph_parser::{BlockKind, parse};

#[test]
fn test_no_blocks_without_markers() {
    let document = parse("Of multiple origins. Partly a borrowing from French.");
    assert!(document.is_empty());
}

#[test]
fn test_block_metadata() {
    let source = "\
Summary
%Partly from
@ Middle French
    └── problème
%External
?
    └── @ Ancient Greek
        └── βάλλειν [to throw]";

    let document = parse(source);
    let blocks = document.blocks();
    assert_eq!(blocks.len(), 2);

    assert_eq!(blocks[0].index(), 0);
    assert_eq!(blocks[0].kind(), BlockKind::PartlyFrom);
    assert!(blocks[0].text().starts_with("@ Middle French"));

    assert_eq!(blocks[1].index(), 1);
    assert_eq!(blocks[1].kind(), BlockKind::External);
    assert_eq!(blocks[1].text().lines().next(), Some("?"));
}

#[test]
fn test_empty_block_has_no_root() {
    let document = parse("%Partly from\n%Partly from\n@ Latin\n    problema");
    let blocks = document.blocks();

    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].roots().is_empty());
    assert!(blocks[0].root().is_none());
    assert_eq!(blocks[1].root().unwrap().content(), "Latin problema");
}

#[test]
fn test_marker_text_on_same_line() {
    let document = parse("%Partly from A\n%Partly from B");
    let blocks = document.blocks();

    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].root().unwrap().content(), "A");
    assert_eq!(blocks[1].root().unwrap().content(), "B");
}

#[test]
fn test_every_root_is_kept() {
    let document = parse("%Partly from\nfirst\nsecond");
    let block = &document.blocks()[0];

    assert_eq!(block.roots().len(), 2);
    assert_eq!(block.root().unwrap().content(), "first");
}
