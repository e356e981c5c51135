use std::time::{Duration, Instant};

use anyhow::{bail, Result};

use pagescroll_core::config::Side;
use pagescroll_core::platform::{Target, TransitionEndSignal, Viewport, TRANSITION_END_EVENTS};
use pagescroll_core::preferences::FilePreferences;
use pagescroll_core::{Widget, WidgetConfig};

use crate::sim::{SimulatedButton, SimulatedOverlay, SimulatedPage};

/// Length of the CSS snap transition being simulated
const SNAP_TRANSITION: Duration = Duration::from_millis(300);
const DRAG_STEPS: u32 = 10;

pub async fn run(config: WidgetConfig, to: f64, viewport_width: f64, deliver_transition_end: bool) -> Result<()> {
    let preferences = FilePreferences::open_default();
    let preferences_path = preferences.path().to_path_buf();

    let document = SimulatedPage::new(
        Viewport {
            width: viewport_width,
            height: 800.0,
        },
        5000.0,
    );
    let mut widget = Widget::new(
        config,
        document,
        SimulatedButton::default(),
        SimulatedOverlay::default(),
        preferences,
    )?;

    println!("Button starts on the {} side", widget.side());

    if !widget.on_drag_start(Target::Button) {
        bail!("Button is busy, drag did not start");
    }

    let half_width = widget.button().width / 2.0;
    let from = match widget.side() {
        Side::Left => half_width,
        Side::Right => viewport_width - half_width,
    };
    for step in 1..=DRAG_STEPS {
        let x = from + (to - from) * step as f64 / DRAG_STEPS as f64;
        widget.on_drag(x);
    }

    let Some(ticket) = widget.on_drag_end() else {
        bail!("Drag ended without a snap");
    };
    println!("Released at x={}, snapping {}", to, ticket.side);

    let (mut signal, end) = TransitionEndSignal::channel();
    let transition_end = async move {
        if deliver_transition_end {
            tokio::time::sleep(SNAP_TRANSITION).await;
            signal.fire(TRANSITION_END_EVENTS[0]);
        } else {
            drop(signal);
        }
        end.wait().await;
    };

    let started = Instant::now();
    match widget.run_snap(ticket, transition_end).await {
        Some(side) => println!(
            "Snapped {} after {}ms, saved to {}",
            side,
            started.elapsed().as_millis(),
            preferences_path.display()
        ),
        None => println!("Snap was already settled"),
    }

    Ok(())
}
