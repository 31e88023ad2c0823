use super::*;
use std::thread;

fn shared() -> SharedGridLayout {
    SharedGridLayout::new(GridLayout::new(GridConfig::configure(2, 8.0, 8.0, 375.0)))
}

#[test]
fn clones_share_cache() {
    let a = shared();
    let b = a.clone();
    let viewport = Rect::new(0.0, 0.0, 375.0, 667.0);
    let first = a.items_in_viewport(viewport, 50);
    let second = b.items_in_viewport(viewport, 50);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(b.with(|g| g.cache_len()), 1);
}

#[test]
fn concurrent_queries_agree_with_fresh_engine() {
    let layout = shared();
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let layout = layout.clone();
            thread::spawn(move || {
                let mut out = Vec::new();
                for step in 0..25 {
                    let y = f64::from(worker * 25 + step) * 50.0;
                    let items = layout.items_in_viewport(Rect::new(0.0, y, 375.0, y + 667.0), 200);
                    out.push((y, items));
                }
                out
            })
        })
        .collect();

    let mut fresh = GridLayout::new(layout.config());
    for handle in handles {
        for (y, items) in handle.join().unwrap() {
            fresh.clear_cache();
            let expected = fresh.items_in_viewport(Rect::new(0.0, y, 375.0, y + 667.0), 200);
            assert_eq!(&*items, &*expected);
        }
    }
}

#[test]
fn configure_through_handle_updates_geometry() {
    let layout = shared();
    layout.configure(1, 8.0, 8.0, 375.0);
    assert_eq!(layout.config().column_count(), 1);
    assert_eq!(layout.frame_for_index(ItemIndex(1)).y0, 367.0);
    assert_eq!(layout.content_extent(1).height, 359.0 + 8.0);
}
