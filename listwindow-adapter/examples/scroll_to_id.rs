// Example: a host loop driving the controller with a simulated list engine.
use listwindow::{ItemsRendered, ListWindowOptions};
use listwindow_adapter::{Controller, ControllerOptions, ListEngine, ScrollRequest};

#[derive(Default)]
struct SimEngine {
    offset: f64,
}

impl ListEngine for SimEngine {
    fn scroll_to(&mut self, offset: f64) {
        self.offset = offset;
    }

    fn reset_cached_sizes(&mut self, from_index: usize) {
        println!("engine: reset cached sizes from {from_index}");
    }
}

fn main() {
    let heights: Vec<f64> = (0..500u32).map(|i| 20.0 + f64::from(i % 5) * 8.0).collect();
    let list_options = ListWindowOptions::new(|h: &f64, _| *h).with_items(heights);

    let options = ControllerOptions::default()
        .with_items_rendered_throttle_ms(100)
        .with_on_items_rendered(Some(|ev: &ItemsRendered<'_, f64>| {
            println!(
                "rendered {}..={} at offset {:.1} ({} items)",
                ev.range.start_index,
                ev.range.stop_index,
                ev.scroll_offset,
                ev.items.len()
            );
        }))
        .with_on_size_update(Some(|w: f64, h: f64| println!("size: {w}x{h}")))
        .with_on_scroll_to_finished(Some(|| println!("scroll finished")));

    let mut c = match Controller::new(list_options, options, SimEngine::default()) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("invalid geometry: {err}");
            return;
        }
    };

    let mut now_ms = 0u64;
    c.on_measure(480.0, 600.0);
    c.on_measure(480.0, 640.0);
    c.tick(now_ms);

    if c.set_scroll_to_id(Some(250), now_ms) == ScrollRequest::Started {
        println!("animating to row 250");
    }

    while !c.is_idle() {
        now_ms += 16;
        if c.tick(now_ms).is_some() {
            // Report what the engine would now show.
            let offset = c.engine().offset;
            let list = c.list_window();
            let start = list.index_at_offset(offset).unwrap_or(0);
            let stop = list
                .index_at_offset(offset + list.viewport().height - 1.0)
                .unwrap_or(start);
            c.on_list_scroll(offset, true);
            c.on_visible_range_change(start, stop, offset, true, now_ms);
        }
    }

    println!("done at t={now_ms}ms offset={}", c.scroll_offset());
}
