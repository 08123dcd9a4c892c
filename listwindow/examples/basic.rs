// Example: build the geometry for rows of different heights and enrich a visible range.
use listwindow::{ListWindow, ListWindowOptions, ViewportState, VisibleRange};

#[derive(Debug)]
struct Message {
    id: u64,
    lines: u32,
}

fn main() {
    let messages: Vec<Message> = (0..1_000)
        .map(|i| Message {
            id: 10_000 + i,
            lines: 1 + (i % 4) as u32,
        })
        .collect();

    let options = ListWindowOptions::new_with_id(
        |m: &Message, _| f64::from(m.lines) * 18.0,
        |m: &Message, _| m.id,
    )
    .with_items(messages)
    .with_overscan_count(2);

    let mut list = match ListWindow::new(options) {
        Ok(list) => list,
        Err(err) => {
            eprintln!("invalid geometry: {err}");
            return;
        }
    };
    list.set_viewport(ViewportState::new(320.0, 240.0));
    list.set_scroll_offset(1_000.0);

    println!(
        "total={} max_offset={} item_10500={:?}",
        list.total_height(),
        list.max_scroll_offset(),
        list.offset_of(&10_500)
    );

    // A list engine would compute this range from the scroll offset.
    let first = list.index_at_offset(list.scroll_offset()).unwrap_or(0);
    let last = list
        .index_at_offset(list.scroll_offset() + list.viewport().height - 1.0)
        .unwrap_or(first);
    let event = list.items_rendered(VisibleRange::new(first, last), false);
    for item in &event.items {
        println!(
            "#{} id={} top={} height={}",
            item.index, item.item.id, item.offset_top, item.height
        );
    }
    println!(
        "first_fully_visible={} last_fully_visible={}",
        event.first_fully_visible, event.last_fully_visible
    );
}
