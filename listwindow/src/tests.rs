use crate::*;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_height(&mut self) -> f64 {
        // Quarter-pixel steps keep the sums exact.
        self.gen_range_u64(0, 400) as f64 / 4.0
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Row {
    id: &'static str,
    height: f64,
}

fn row(id: &'static str, height: f64) -> Row {
    Row { id, height }
}

fn abc() -> Vec<Row> {
    vec![row("a", 10.0), row("b", 20.0), row("c", 30.0)]
}

fn row_options(rows: Vec<Row>) -> ListWindowOptions<Row, &'static str> {
    ListWindowOptions::new_with_id(|r: &Row, _| r.height, |r: &Row, _| r.id).with_items(rows)
}

#[test]
fn offsets_accumulate_heights() {
    let rows = abc();
    let g = GeometryIndex::build(&rows, |r, _| r.id, |r, _| r.height).unwrap();
    assert_eq!(g.len(), 3);
    assert_eq!(g.get(&"a").unwrap().offset_top, 0.0);
    assert_eq!(g.get(&"b").unwrap().offset_top, 10.0);
    assert_eq!(g.get(&"c").unwrap().offset_top, 30.0);
    assert_eq!(g.get(&"c").unwrap().index, 2);
    assert_eq!(g.total_height(), 60.0);
    assert!(g.get(&"z").is_none());
}

#[test]
fn empty_index_has_no_height() {
    let rows: Vec<Row> = Vec::new();
    let g = GeometryIndex::build(&rows, |r, _| r.id, |r, _| r.height).unwrap();
    assert!(g.is_empty());
    assert_eq!(g.total_height(), 0.0);
    assert_eq!(g.index_at_offset(0.0), None);
    assert_eq!(max_offset(100.0, &g), 0.0);
}

#[test]
fn random_offsets_form_a_prefix_sum() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..50 {
        let n = rng.gen_range_u64(1, 200) as usize;
        let heights: Vec<f64> = (0..n).map(|_| rng.gen_height()).collect();
        let g = GeometryIndex::build(&heights, |_, i| i, |h, _| *h).unwrap();

        let entries = g.entries();
        assert_eq!(entries[0].offset_top, 0.0);
        for pair in entries.windows(2) {
            assert!(pair[1].offset_top >= pair[0].offset_top);
            assert_eq!(pair[0].offset_top + pair[0].height, pair[1].offset_top);
        }
        let sum: f64 = heights.iter().sum();
        assert_eq!(g.total_height(), sum);
    }
}

#[test]
fn zero_height_is_allowed() {
    let heights = [5.0, 0.0, 7.0];
    let g = GeometryIndex::build(&heights, |_, i| i, |h, _| *h).unwrap();
    assert_eq!(g.at(1).unwrap().offset_top, 5.0);
    assert_eq!(g.at(2).unwrap().offset_top, 5.0);
    // The zero-height row never covers an offset.
    assert_eq!(g.index_at_offset(5.0), Some(2));
}

#[test]
fn negative_height_fails_the_build() {
    let heights = [5.0, -1.0, 7.0];
    let err = GeometryIndex::build(&heights, |_, i| i, |h, _| *h).unwrap_err();
    assert_eq!(
        err,
        GeometryError::NegativeHeight {
            index: 1,
            height: -1.0
        }
    );
    assert_eq!(err.index(), 1);
}

#[test]
fn non_finite_height_fails_the_build() {
    let heights = [5.0, f64::NAN];
    let err = GeometryIndex::build(&heights, |_, i| i, |h, _| *h).unwrap_err();
    assert_eq!(err, GeometryError::NonFiniteHeight { index: 1 });

    let heights = [f64::INFINITY];
    assert!(GeometryIndex::build(&heights, |_, i| i, |h, _| *h).is_err());
}

#[test]
fn geometry_error_display_names_the_item() {
    let err = GeometryError::NegativeHeight {
        index: 4,
        height: -2.5,
    };
    let msg = alloc::format!("{err}");
    assert_eq!(msg, "item 4 has negative height -2.5");
}

#[test]
fn duplicate_ids_resolve_to_the_last_item() {
    let rows = vec![row("a", 10.0), row("dup", 20.0), row("dup", 30.0)];
    let g = GeometryIndex::build(&rows, |r, _| r.id, |r, _| r.height).unwrap();
    let dup = g.get(&"dup").unwrap();
    assert_eq!(dup.index, 2);
    assert_eq!(dup.offset_top, 30.0);
    // Every row still contributes to the offsets.
    assert_eq!(g.len(), 3);
    assert_eq!(g.id_count(), 2);
    assert_eq!(g.total_height(), 60.0);
}

#[test]
#[should_panic(expected = "height function failed")]
fn height_function_panics_propagate() {
    let heights = [1.0, 2.0];
    let _ = GeometryIndex::build(
        &heights,
        |_, i| i,
        |_, i| {
            if i == 1 {
                panic!("height function failed");
            }
            1.0
        },
    );
}

#[test]
fn index_at_offset_maps_into_covering_item() {
    let rows = abc();
    let g = GeometryIndex::build(&rows, |r, _| r.id, |r, _| r.height).unwrap();
    assert_eq!(g.index_at_offset(-5.0), Some(0));
    assert_eq!(g.index_at_offset(0.0), Some(0));
    assert_eq!(g.index_at_offset(9.5), Some(0));
    assert_eq!(g.index_at_offset(10.0), Some(1));
    assert_eq!(g.index_at_offset(29.0), Some(1));
    assert_eq!(g.index_at_offset(30.0), Some(2));
    assert_eq!(g.index_at_offset(1000.0), Some(2));
}

#[test]
fn max_offset_is_never_negative() {
    let rows = abc();
    let g = GeometryIndex::build(&rows, |r, _| r.id, |r, _| r.height).unwrap();
    assert_eq!(max_offset(15.0, &g), 45.0);
    assert_eq!(max_offset(60.0, &g), 0.0);
    assert_eq!(max_offset(500.0, &g), 0.0);

    let mut rng = Lcg::new(7);
    for _ in 0..100 {
        let viewport = rng.gen_height() * 4.0;
        let m = max_offset(viewport, &g);
        assert!(m >= 0.0);
        if g.total_height() <= viewport {
            assert_eq!(m, 0.0);
        }
    }
}

#[test]
fn clamp_offset_stays_inside_content() {
    let rows = abc();
    let g = GeometryIndex::build(&rows, |r, _| r.id, |r, _| r.height).unwrap();
    assert_eq!(clamp_offset(-3.0, 15.0, &g), 0.0);
    assert_eq!(clamp_offset(20.0, 15.0, &g), 20.0);
    assert_eq!(clamp_offset(90.0, 15.0, &g), 45.0);
}

#[test]
fn list_window_resolves_ids_to_items() {
    let list = ListWindow::new(row_options(abc())).unwrap();
    let b = list.normalized(&"b").unwrap();
    assert_eq!(b.item, &row("b", 20.0));
    assert_eq!(b.index, 1);
    assert_eq!(b.offset_top, 10.0);
    assert_eq!(b.end(), 30.0);
    assert_eq!(list.offset_of(&"c"), Some(30.0));
    assert_eq!(list.key_for(2), Some("c"));
    assert_eq!(list.key_for(3), None);
}

#[test]
fn list_window_max_offset_follows_viewport() {
    let mut list = ListWindow::new(row_options(abc())).unwrap();
    assert_eq!(list.viewport(), ViewportState::default());
    assert_eq!(list.max_scroll_offset(), 60.0);

    assert!(list.set_viewport(ViewportState::new(100.0, 15.0)));
    assert!(!list.set_viewport(ViewportState::new(100.0, 15.0)));
    assert_eq!(list.max_scroll_offset(), 45.0);
    assert_eq!(list.clamp_scroll_offset(50.0), 45.0);
}

#[test]
fn set_options_rebuilds_only_on_identity_change() {
    let calls = Arc::new(AtomicUsize::new(0));
    let opts = {
        let calls = Arc::clone(&calls);
        ListWindowOptions::new(move |h: &f64, _| {
            calls.fetch_add(1, Ordering::Relaxed);
            *h
        })
        .with_items(vec![1.0, 2.0, 3.0])
    };
    let mut list = ListWindow::new(opts).unwrap();
    assert_eq!(calls.load(Ordering::Relaxed), 3);

    // Same Arcs, new overscan: no rebuild.
    let rebuilt = list.update_options(|o| o.overscan_count = 4).unwrap();
    assert!(!rebuilt);
    assert_eq!(list.overscan_count(), 4);
    assert_eq!(calls.load(Ordering::Relaxed), 3);

    // A new collection with equal contents is still a new identity.
    list.set_items(vec![1.0, 2.0, 3.0]).unwrap();
    assert_eq!(calls.load(Ordering::Relaxed), 6);

    list.set_item_height(|h: &f64, _| *h * 2.0).unwrap();
    assert_eq!(list.total_height(), 12.0);
    assert_eq!(calls.load(Ordering::Relaxed), 6);
}

#[test]
fn set_item_id_rebuilds_the_id_map() {
    let mut list = ListWindow::new(row_options(abc())).unwrap();
    list.set_item_id(|_, i| if i == 0 { "first" } else { "rest" })
        .unwrap();
    assert_eq!(list.offset_of(&"first"), Some(0.0));
    assert_eq!(list.offset_of(&"rest"), Some(30.0));
    assert_eq!(list.offset_of(&"a"), None);
}

#[test]
fn failed_rebuild_keeps_previous_state() {
    let mut list = ListWindow::new(row_options(abc())).unwrap();
    let err = list.set_items(vec![row("x", -4.0)]).unwrap_err();
    assert_eq!(err.index(), 0);
    assert_eq!(list.len(), 3);
    assert_eq!(list.items()[0].id, "a");
    assert_eq!(list.offset_of(&"c"), Some(30.0));
}

#[test]
fn scroll_offset_tracks_direction() {
    let mut list = ListWindow::new(row_options(abc())).unwrap();
    assert_eq!(list.scroll_direction(), None);
    assert_eq!(list.set_scroll_offset(12.0), Some(ScrollDirection::Forward));
    assert_eq!(list.set_scroll_offset(12.0), None);
    assert_eq!(list.scroll_direction(), Some(ScrollDirection::Forward));
    assert_eq!(list.set_scroll_offset(4.0), Some(ScrollDirection::Backward));
    assert_eq!(list.scroll_offset(), 4.0);
}

#[test]
fn items_rendered_enriches_the_visible_range() {
    let mut list = ListWindow::new(row_options(abc())).unwrap();
    list.set_viewport(ViewportState::new(100.0, 15.0));
    list.set_scroll_offset(5.0);

    let ev = list.items_rendered(VisibleRange::new(0, 1), false);
    assert_eq!(ev.items.len(), 2);
    assert_eq!(ev.first().unwrap().item.id, "a");
    assert_eq!(ev.last().unwrap().offset_top, 10.0);
    assert_eq!(ev.scroll_offset, 5.0);
    assert_eq!(ev.viewport_height, 15.0);
    // "a" starts above the viewport and "b" ends below it.
    assert!(!ev.first_fully_visible);
    assert!(!ev.last_fully_visible);

    list.set_scroll_offset(10.0);
    list.set_viewport(ViewportState::new(100.0, 20.0));
    let ev = list.items_rendered(VisibleRange::new(1, 1), true);
    assert!(ev.was_programmatic);
    assert!(ev.first_fully_visible);
    assert!(ev.last_fully_visible);
    assert!(ev.is_fully_visible(&ev.items[0]));
}

#[test]
fn items_rendered_tolerates_out_of_range_indices() {
    let list = ListWindow::new(row_options(abc())).unwrap();
    let ev = list.items_rendered(VisibleRange::new(1, 10), false);
    let ids: Vec<&str> = ev.items.iter().map(|it| it.item.id).collect();
    assert_eq!(ids, ["b", "c"]);

    let ev = list.items_rendered(VisibleRange::new(5, 9), false);
    assert!(ev.is_empty());

    let ev = list.items_rendered(VisibleRange::new(2, 1), false);
    assert!(ev.is_empty());
    assert!(!ev.first_fully_visible);

    let empty = ListWindow::new(row_options(Vec::new())).unwrap();
    let ev = empty.items_rendered(VisibleRange::new(0, 0), false);
    assert!(ev.is_empty());
}

#[test]
fn index_keyed_options_use_positions_as_ids() {
    let list = ListWindow::new(ListWindowOptions::new(|s: &String, _| s.len() as f64).with_items(
        vec![String::from("ab"), String::from("cdef")],
    ))
    .unwrap();
    assert_eq!(list.offset_of(&1), Some(2.0));
    assert_eq!(list.total_height(), 6.0);
    assert_eq!(list.overscan_count(), 1);
}
