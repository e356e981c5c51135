use std::time::Duration;

use anyhow::Result;

use pagescroll_core::platform::{Target, Viewport};
use pagescroll_core::preferences::MemoryPreferences;
use pagescroll_core::scroll::{FrameOutcome, TriggerOutcome};
use pagescroll_core::{Widget, WidgetConfig};

use crate::sim::{SimulatedButton, SimulatedOverlay, SimulatedPage};

/// ~60fps
const FRAME: Duration = Duration::from_micros(16_667);
const PAUSE_BETWEEN_PRESSES: Duration = Duration::from_millis(250);
const USER_SCROLL_PX: f64 = 200.0;

type SimWidget = Widget<SimulatedPage, SimulatedButton, SimulatedOverlay, MemoryPreferences>;

pub struct Page {
    pub height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

pub fn run(config: WidgetConfig, page: Page, presses: u32, interrupt_at: Option<u64>) -> Result<()> {
    let document = SimulatedPage::new(
        Viewport {
            width: page.viewport_width,
            height: page.viewport_height,
        },
        page.height,
    );
    let mut widget = Widget::new(
        config,
        document,
        SimulatedButton::default(),
        SimulatedOverlay::default(),
        MemoryPreferences::new(),
    )?;

    println!(
        "Page {}px tall, viewport {}x{}, duration {}ms",
        page.height,
        page.viewport_width,
        page.viewport_height,
        widget.config().duration
    );

    let mut now = Duration::ZERO;
    for press in 1..=presses {
        let before = widget.document().offset();

        match widget.on_tap(Target::Button, now) {
            TriggerOutcome::Jumped { to } => println!("press {}: jump to {:.0}", press, to),
            TriggerOutcome::Started { from, to } | TriggerOutcome::Retargeted { from, to } => {
                println!("press {}: animate {:.0} -> {:.0}", press, from, to)
            }
            TriggerOutcome::Ignored => println!("press {}: ignored", press),
        }
        deliver_scroll(&mut widget);

        let frames = run_frames(&mut widget, &mut now, interrupt_at.map(Duration::from_millis));

        println!(
            "press {}: {:.0} -> {:.0} in {} frames, overlay {}",
            press,
            before,
            widget.document().offset(),
            frames,
            overlay_height(&widget)
        );
        now += PAUSE_BETWEEN_PRESSES;
    }

    Ok(())
}

/// Deliver requested animation frames until the widget stops asking
fn run_frames(widget: &mut SimWidget, now: &mut Duration, interrupt_after: Option<Duration>) -> u32 {
    let started = *now;
    let mut interrupted = false;
    let mut frames = 0;

    while widget.document_mut().take_frame_request() {
        *now += FRAME;
        frames += 1;

        if let Some(after) = interrupt_after {
            if !interrupted && *now - started >= after {
                interrupted = true;
                widget.document_mut().user_scroll_by(USER_SCROLL_PX);
                deliver_scroll(widget);
            }
        }

        match widget.on_animation_frame(*now) {
            FrameOutcome::Stepped { offset } => tracing::debug!(frame = frames, offset, "step"),
            FrameOutcome::Finished { offset } => println!("  finished at {:.0}", offset),
            FrameOutcome::Interrupted { expected, actual } => {
                println!("  interrupted: expected {:.0}, page at {:.0}", expected, actual)
            }
            FrameOutcome::Idle => {}
        }
        deliver_scroll(widget);
    }

    frames
}

fn deliver_scroll(widget: &mut SimWidget) {
    if widget.document_mut().take_scrolled() {
        widget.on_scroll();
    }
}

fn overlay_height(widget: &SimWidget) -> &str {
    let height = widget.overlay().element().height.as_str();
    if height.is_empty() {
        "0px"
    } else {
        height
    }
}
