//! Drives a gradient hover container through a scripted pointer path and
//! prints the style the host would apply after every frame.
//!
//! Run with `RUST_LOG=debug` to see the animator's phase changes.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use gradient_hover::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let scheduler = Rc::new(RefCell::new(ManualScheduler::new()));
    let source = || Some(ElementRect::new(Rect::new(40.0, 40.0, 320.0, 180.0)));

    let mut hover = GradientHover::new("card", scheduler.clone(), source)
        .colors(["#667eea", "#764ba2", "#f093fb"])
        .animation_speed(8.0)
        .border_radius("20px")
        .on_click(|| log::info!("clicked"));

    let mut now = Instant::now();
    hover.mount(now);

    let path = [
        PointerEvent::Enter { x: 60.0, y: 60.0 },
        PointerEvent::Move { x: 120.0, y: 90.0 },
        PointerEvent::Move { x: 220.0, y: 140.0 },
        PointerEvent::Move { x: 330.0, y: 200.0 },
        PointerEvent::Click { x: 330.0, y: 200.0 },
        PointerEvent::Leave,
    ];

    let mut frame = 0;
    for event in path {
        hover.handle_event(event);
        for _ in 0..8 {
            advance(&mut hover, &scheduler, &mut now, &mut frame);
        }
    }

    while scheduler.borrow().has_pending() {
        advance(&mut hover, &scheduler, &mut now, &mut frame);
    }

    let rendered = hover.render();
    println!("settled after {} frames", frame);
    println!("class=\"{}\"", rendered.class_name);
    println!("style=\"{}\"", rendered.style.to_inline_css());
}

fn advance<B: BoundsSource>(
    hover: &mut GradientHover<&'static str, Rc<RefCell<ManualScheduler>>, B>,
    scheduler: &Rc<RefCell<ManualScheduler>>,
    now: &mut Instant,
    frame: &mut usize,
) {
    *now += FRAME;
    let due = scheduler.borrow_mut().take_pending();
    for id in due {
        if let FrameOutcome::Advanced(position) = hover.on_frame(id, *now) {
            *frame += 1;
            let style = hover.render().style;
            println!(
                "frame {:>3} ({:>6.1}, {:>6.1}) x={} y={}",
                frame,
                position.x,
                position.y,
                style.get("--gradient-x").unwrap_or("-"),
                style.get("--gradient-y").unwrap_or("-"),
            );
        }
    }
}
