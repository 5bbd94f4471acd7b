use super::*;

#[test]
fn closed_item_has_zero_height() {
    assert_eq!(AccordionItem::new(false).max_height(240), "0px");
}

#[test]
fn open_item_uses_scroll_height() {
    assert_eq!(AccordionItem::new(true).max_height(240), "240px");
}

#[test]
fn toggle_returns_new_state() {
    let mut item = AccordionItem::new(false);
    assert!(item.toggle());
    assert!(item.is_open());
    assert!(!item.toggle());
}

#[test]
fn double_toggle_restores_height() {
    for initial in [false, true] {
        let mut item = AccordionItem::new(initial);
        let before = item.max_height(180);
        item.toggle();
        assert_ne!(item.max_height(180), before);
        item.toggle();
        assert_eq!(item.max_height(180), before);
    }
}

#[test]
fn items_are_independent() {
    let mut items = [AccordionItem::new(false), AccordionItem::new(false)];
    items[0].toggle();
    items[1].toggle();
    assert!(items.iter().all(AccordionItem::is_open));
}

#[test]
fn negative_scroll_height_clamps_to_zero() {
    assert_eq!(AccordionItem::new(true).max_height(-5), "0px");
}
