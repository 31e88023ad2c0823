use super::*;

#[test]
fn item_index_maps_row_major() {
    assert_eq!(ItemIndex(0).row(2), 0);
    assert_eq!(ItemIndex(0).col(2), 0);
    assert_eq!(ItemIndex(5).row(2), 2);
    assert_eq!(ItemIndex(5).col(2), 1);
    assert_eq!(ItemIndex(5).row(1), 5);
    assert_eq!(ItemIndex(5).col(1), 0);
}

#[test]
fn exact_size_range_clamps_to_single_size() {
    let r = SizeRange::exact(Size::new(10.0, 10.0));
    assert!(r.is_exact());
    assert_eq!(r.clamp(Size::new(3.0, 40.0)), Size::new(10.0, 10.0));
}

#[test]
fn placed_item_serializes_index_and_frame() {
    let item = PlacedItem {
        index: ItemIndex(3),
        frame: Rect::new(0.0, 0.0, 1.0, 2.0),
    };
    let json = serde_json::to_value(item).unwrap();
    assert_eq!(json["index"], 3);
    assert!(json.get("frame").is_some());
}
