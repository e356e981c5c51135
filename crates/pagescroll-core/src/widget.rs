//! One widget instance: button, overlay, animator, drag controller and menu
//!
//! The host creates the elements from [`WidgetConfig::ui`] and
//! [`WidgetConfig::overlay`], hands them to [`Widget::new`], and forwards
//! taps, gestures, animation frames and scroll notifications.

use std::future::Future;
use std::time::Duration;

use crate::config::{Side, WidgetConfig};
use crate::drag::{wait_for_snap, DragController, DragState, SnapSignal, SnapTicket, SNAP_FALLBACK};
use crate::menu::{MenuAction, MenuEntry, SideMenu};
use crate::overlay::Overlay;
use crate::platform::{ButtonElement, Document, OverlayElement, Target};
use crate::preferences::{PreferenceStore, POSITION_KEY};
use crate::probe;
use crate::scroll::{Easing, FrameOutcome, ScrollAnimator, TriggerOutcome, INTERRUPT_TOLERANCE_PX};
use crate::shortcuts::ShortcutTree;
use crate::Result;

pub struct Widget<D, B, O, P> {
    config: WidgetConfig,
    document: D,
    button: B,
    overlay: Overlay<O>,
    preferences: P,
    animator: ScrollAnimator,
    drag: DragController,
    side: Side,
    menu: Option<SideMenu>,
    /// Offset the widget last placed the page at, until its scroll echo arrives
    landing: Option<f64>,
}

impl<D, B, O, P> Widget<D, B, O, P>
where
    D: Document,
    B: ButtonElement,
    O: OverlayElement,
    P: PreferenceStore,
{
    /// Validate `config`, pin the button to its corner and set up the menu.
    ///
    /// A stored side preference wins over the configured one.
    pub fn new(config: WidgetConfig, document: D, mut button: B, overlay: O, preferences: P) -> Result<Self> {
        config.validate()?;

        let side = preferences
            .get(POSITION_KEY)
            .and_then(|value| Side::from_preference(&value))
            .unwrap_or(config.side);
        button.add_class(side.class());

        let menu = config.menu.then(|| SideMenu::new(side));

        tracing::debug!(%side, menu = config.menu, duration_ms = config.duration, "Widget initialized");

        Ok(Self {
            animator: ScrollAnimator::new(config.scroll_settings()),
            overlay: Overlay::new(overlay, config.common),
            config,
            document,
            button,
            preferences,
            drag: DragController::new(),
            side,
            menu,
            landing: None,
        })
    }

    /// Replace the configured easing, e.g. with a custom function
    pub fn with_easing(mut self, easing: Easing) -> Self {
        let mut settings = *self.animator.settings();
        settings.easing = easing;
        self.animator.set_settings(settings);
        self
    }

    /// A tap or click. On the button it scrolls; elsewhere it closes the menu.
    pub fn on_tap(&mut self, target: Target, now: Duration) -> TriggerOutcome {
        match target {
            Target::Button => {
                self.close_menu();
                self.scroll_page(now)
            }
            Target::Menu => TriggerOutcome::Ignored,
            Target::Overlay | Target::Page => {
                self.close_menu();
                TriggerOutcome::Ignored
            }
        }
    }

    /// Scroll down by one screen, unless the button is being dragged
    pub fn scroll_page(&mut self, now: Duration) -> TriggerOutcome {
        let before = probe::y(&self.document);
        let button_height = self.button.height();
        let outcome = self.animator.trigger(
            self.drag.state(),
            now,
            &mut self.document,
            &mut self.overlay,
            button_height,
        );

        match outcome {
            TriggerOutcome::Jumped { .. } => self.expect_echo(before),
            TriggerOutcome::Started { .. } | TriggerOutcome::Retargeted { .. } => self.landing = None,
            TriggerOutcome::Ignored => {}
        }
        outcome
    }

    /// A requested animation frame arrived
    pub fn on_animation_frame(&mut self, now: Duration) -> FrameOutcome {
        let before = probe::y(&self.document);
        let outcome = self.animator.on_frame(now, &mut self.document, &mut self.overlay);
        if let FrameOutcome::Finished { .. } = outcome {
            self.expect_echo(before);
        }
        outcome
    }

    /// Remember where the page settled, if the placement moved it at all.
    /// A placement clamped to the current offset produces no scroll event.
    fn expect_echo(&mut self, before: f64) {
        let after = probe::y(&self.document);
        self.landing = (after != before).then_some(after);
    }

    /// The page reported a scroll.
    ///
    /// Outside an animation this hides the overlay right away, except for the
    /// one notification caused by the widget's own final placement.
    pub fn on_scroll(&mut self) {
        if self.animator.is_animating() {
            return;
        }

        if let Some(landing) = self.landing.take() {
            if (probe::y(&self.document) - landing).abs() <= INTERRUPT_TOLERANCE_PX {
                return;
            }
        }

        if self.overlay.is_visible() {
            self.overlay.hide();
        }
    }

    pub fn on_drag_start(&mut self, target: Target) -> bool {
        let started = self.drag.drag_start(target, self.side, &mut self.button);
        if started {
            self.close_menu();
        }
        started
    }

    pub fn on_drag(&mut self, pointer_x: f64) -> bool {
        self.drag.drag_move(pointer_x, &mut self.button)
    }

    /// Release the button; the ticket completes via [`Widget::settle_snap`]
    /// or [`Widget::run_snap`]
    pub fn on_drag_end(&mut self) -> Option<SnapTicket> {
        let width = self.document.viewport().width;
        self.drag.drag_end(width, &mut self.button)
    }

    /// Finish the snap for `ticket`; a repeated or stale completion is a no-op
    pub fn settle_snap(&mut self, ticket: SnapTicket, signal: SnapSignal) -> Option<Side> {
        let side = self
            .drag
            .complete_snap(ticket, &mut self.button, &mut self.preferences)?;

        tracing::debug!(?signal, %side, "Snap settled");
        self.side = side;
        if let Some(menu) = self.menu.as_mut() {
            menu.set_side(side);
        }
        Some(side)
    }

    /// Wait for the transition to end (or the fallback timer), then settle
    pub async fn run_snap<F>(&mut self, ticket: SnapTicket, transition_end: F) -> Option<Side>
    where
        F: Future<Output = ()>,
    {
        let signal = wait_for_snap(transition_end, SNAP_FALLBACK).await;
        if signal == SnapSignal::Fallback {
            tracing::debug!("Transition end never arrived, using fallback");
        }
        self.settle_snap(ticket, signal)
    }

    /// A long press. On the button, with the menu enabled, it toggles the menu.
    pub fn on_hold(&mut self, target: Target) -> bool {
        if target != Target::Button || self.drag.state() != DragState::Idle {
            return false;
        }
        match self.menu.as_mut() {
            Some(menu) => {
                menu.toggle();
                menu.is_open()
            }
            None => false,
        }
    }

    /// Activate a menu entry by its index in [`Widget::menu_entries`]
    pub fn choose_menu_entry(&mut self, index: usize) -> Option<MenuAction> {
        let action = self.menu.as_mut()?.activate(index)?;
        if let MenuAction::Reposition(side) = action {
            self.reposition(side);
        }
        Some(action)
    }

    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        self.menu.as_ref().map(SideMenu::entries).unwrap_or_default()
    }

    /// Pin the button to `side` at once and remember it
    pub fn reposition(&mut self, side: Side) -> bool {
        if self.drag.state() != DragState::Idle {
            return false;
        }

        self.button.remove_class(self.side.class());
        self.button.add_class(side.class());
        self.side = side;
        if let Some(menu) = self.menu.as_mut() {
            menu.set_side(side);
        }
        if let Err(e) = self.preferences.set(POSITION_KEY, side.as_str()) {
            tracing::warn!(error = %e, "Failed to persist button side");
        }
        tracing::info!(%side, "Button repositioned");
        true
    }

    /// Hand over a loaded shortcuts document
    pub fn load_shortcuts(&mut self, shortcuts: ShortcutTree) {
        match self.menu.as_mut() {
            Some(menu) => menu.set_shortcuts(shortcuts),
            None => tracing::debug!("Menu disabled, ignoring shortcuts"),
        }
    }

    /// Where the host should fetch the shortcuts document from
    pub fn shortcuts_url(&self) -> Option<&str> {
        self.config.shortcuts.as_deref()
    }

    fn close_menu(&mut self) {
        if let Some(menu) = self.menu.as_mut() {
            menu.close();
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn menu(&self) -> Option<&SideMenu> {
        self.menu.as_ref()
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn button(&self) -> &B {
        &self.button
    }

    pub fn overlay(&self) -> &Overlay<O> {
        &self.overlay
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CommonArea;
    use crate::drag::ANIMATED_CLASS;
    use crate::platform::TransitionEndSignal;
    use crate::preferences::MemoryPreferences;
    use crate::shortcuts::parse_shortcuts;
    use crate::test_support::{FakeButton, FakeDocument, FakeOverlay};

    type TestWidget = Widget<FakeDocument, FakeButton, FakeOverlay, MemoryPreferences>;

    fn widget(config: WidgetConfig) -> TestWidget {
        widget_with_prefs(config, MemoryPreferences::new())
    }

    fn widget_with_prefs(config: WidgetConfig, prefs: MemoryPreferences) -> TestWidget {
        Widget::new(
            config,
            FakeDocument::new(1000.0, 800.0),
            FakeButton::default(),
            FakeOverlay::default(),
            prefs,
        )
        .unwrap()
    }

    fn jump_config() -> WidgetConfig {
        WidgetConfig {
            duration: 0,
            common: CommonArea::Pixels(100.0),
            ..Default::default()
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_jump_scenario() {
        let mut widget = widget(jump_config());

        let outcome = widget.on_tap(Target::Button, ms(0));

        assert_eq!(outcome, TriggerOutcome::Jumped { to: 700.0 });
        assert_eq!(widget.document().scroll_y, 700.0);
        assert_eq!(widget.document().scroll_calls.len(), 1);
        assert_eq!(widget.document().frame_requests, 0);
        assert_eq!(widget.overlay().element().history, vec!["800px".to_string()]);
    }

    #[test]
    fn test_initial_side_prefers_stored_value() {
        let mut prefs = MemoryPreferences::new();
        prefs.set(POSITION_KEY, "right").unwrap();

        let widget = widget_with_prefs(WidgetConfig::default(), prefs);
        assert_eq!(widget.side(), Side::Right);
        assert!(widget.button().has_class("right"));
    }

    #[test]
    fn test_initial_side_ignores_unknown_stored_value() {
        let mut prefs = MemoryPreferences::new();
        prefs.set(POSITION_KEY, "top").unwrap();

        let config = WidgetConfig {
            side: Side::Right,
            ..Default::default()
        };
        let widget = widget_with_prefs(config, prefs);
        assert_eq!(widget.side(), Side::Right);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = WidgetConfig {
            common: CommonArea::Pixels(-1.0),
            ..Default::default()
        };
        let result = Widget::new(
            config,
            FakeDocument::new(1000.0, 800.0),
            FakeButton::default(),
            FakeOverlay::default(),
            MemoryPreferences::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_tap_while_dragging_does_nothing() {
        let mut widget = widget(WidgetConfig::default());
        widget.on_drag_start(Target::Button);

        assert_eq!(widget.on_tap(Target::Button, ms(0)), TriggerOutcome::Ignored);
        assert!(widget.document().scroll_calls.is_empty());
        assert!(widget.overlay().element().history.is_empty());
        assert_eq!(widget.document().frame_requests, 0);
    }

    #[test]
    fn test_animated_scroll_then_manual_scroll_hides_overlay() {
        let mut widget = widget(WidgetConfig {
            duration: 100,
            ..Default::default()
        });

        widget.on_tap(Target::Button, ms(0));
        let mut now = 0;
        loop {
            now += 16;
            if let FrameOutcome::Finished { .. } = widget.on_animation_frame(ms(now)) {
                break;
            }
            // The page echoes every programmatic step
            widget.on_scroll();
            assert_eq!(widget.overlay().element().height, "800px");
        }
        assert_eq!(widget.document().scroll_y, 700.0);

        // Echo of the final placement arrives after the run ended
        widget.on_scroll();
        assert!(widget.overlay().is_visible());

        widget.document_mut().scroll_y = 900.0;
        widget.on_scroll();
        assert!(!widget.overlay().is_visible());
        assert_eq!(widget.overlay().element().height, "0px");
    }

    #[test]
    fn test_jump_echo_keeps_overlay() {
        let mut widget = widget(jump_config());
        widget.on_tap(Target::Button, ms(0));

        widget.on_scroll();
        assert_eq!(widget.overlay().element().height, "800px");

        widget.document_mut().scroll_y = 650.0;
        widget.on_scroll();
        assert_eq!(widget.overlay().element().height, "0px");
    }

    #[test]
    fn test_clamped_jump_echo_keeps_overlay() {
        let mut widget = widget(jump_config());
        widget.document_mut().scroll_y = 250.0;
        widget.document_mut().max_scroll_y = 300.0;

        assert_eq!(widget.on_tap(Target::Button, ms(0)), TriggerOutcome::Jumped { to: 950.0 });
        assert_eq!(widget.document().scroll_y, 300.0);

        // The page echoes the clamped offset, not the requested one
        widget.on_scroll();
        assert!(widget.overlay().is_visible());
    }

    #[test]
    fn test_jump_at_bottom_expects_no_echo() {
        let mut widget = widget(jump_config());
        widget.document_mut().scroll_y = 300.0;
        widget.document_mut().max_scroll_y = 300.0;

        widget.on_tap(Target::Button, ms(0));
        assert_eq!(widget.document().scroll_y, 300.0);
        assert!(widget.overlay().is_visible());

        // Nothing moved, so the first scroll seen is the user's own
        widget.document_mut().scroll_y = 298.0;
        widget.on_scroll();
        assert!(!widget.overlay().is_visible());
    }

    #[test]
    fn test_animation_ending_at_bottom_expects_no_echo() {
        let mut widget = widget(WidgetConfig {
            duration: 100,
            ..jump_config()
        });
        // Clips the last step (672px) by less than the interruption tolerance
        widget.document_mut().max_scroll_y = 670.0;

        widget.on_tap(Target::Button, ms(0));
        let finished = (0..=7).any(|frame| {
            matches!(
                widget.on_animation_frame(ms(frame * 16)),
                FrameOutcome::Finished { .. }
            )
        });
        assert!(finished);
        assert_eq!(widget.document().scroll_y, 670.0);
        assert!(widget.overlay().is_visible());

        // The final placement did not move the page; this scroll is the user's
        widget.document_mut().scroll_y = 673.0;
        widget.on_scroll();
        assert!(!widget.overlay().is_visible());
    }

    #[test]
    fn test_non_button_drag_start_keeps_idle() {
        let mut widget = widget(WidgetConfig::default());
        assert!(!widget.on_drag_start(Target::Page));
        assert_eq!(widget.drag_state(), DragState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_snap_fallback_settles_once() {
        let mut widget = widget(WidgetConfig::default());

        assert!(widget.on_drag_start(Target::Button));
        assert!(widget.on_drag(50.0));
        let ticket = widget.on_drag_end().unwrap();
        assert_eq!(ticket.side, Side::Left);
        assert_eq!(widget.drag_state(), DragState::Snapping);

        let started = tokio::time::Instant::now();
        let side = widget.run_snap(ticket, std::future::pending()).await;

        assert!(started.elapsed() >= SNAP_FALLBACK);
        assert_eq!(side, Some(Side::Left));
        assert_eq!(widget.drag_state(), DragState::Idle);
        assert_eq!(widget.preferences().writes(), 1);

        // A late transition end changes nothing
        assert_eq!(widget.settle_snap(ticket, SnapSignal::TransitionEnd), None);
        assert_eq!(widget.preferences().writes(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_snap_transition_end_settles_right() {
        let mut widget = widget(WidgetConfig {
            menu: true,
            ..Default::default()
        });

        widget.on_drag_start(Target::Button);
        widget.on_drag(800.0);
        let ticket = widget.on_drag_end().unwrap();
        assert_eq!(widget.button().left, Some(920.0));

        let (mut signal, end) = TransitionEndSignal::channel();
        signal.fire("oTransitionEnd");
        let side = widget.run_snap(ticket, end.wait()).await;

        assert_eq!(side, Some(Side::Right));
        assert_eq!(widget.side(), Side::Right);
        assert!(widget.button().has_class("right"));
        assert!(!widget.button().has_class(ANIMATED_CLASS));
        assert_eq!(widget.button().left, None);
        assert_eq!(widget.menu().unwrap().side(), Side::Right);
        assert_eq!(widget.preferences().get(POSITION_KEY).as_deref(), Some("right"));
    }

    #[test]
    fn test_scroll_blocked_until_snap_settles() {
        let mut widget = widget(jump_config());
        widget.on_drag_start(Target::Button);
        widget.on_drag(100.0);
        let ticket = widget.on_drag_end().unwrap();

        assert_eq!(widget.on_tap(Target::Button, ms(0)), TriggerOutcome::Ignored);

        widget.settle_snap(ticket, SnapSignal::TransitionEnd);
        assert_eq!(widget.on_tap(Target::Button, ms(0)), TriggerOutcome::Jumped { to: 700.0 });
    }

    #[test]
    fn test_hold_requires_menu() {
        let mut widget = widget(WidgetConfig::default());
        assert!(!widget.on_hold(Target::Button));
        assert!(widget.menu_entries().is_empty());
    }

    #[test]
    fn test_menu_reposition_persists() {
        let mut widget = widget(WidgetConfig {
            menu: true,
            ..Default::default()
        });

        assert!(widget.on_hold(Target::Button));
        assert_eq!(widget.menu_entries(), vec![MenuEntry::MoveTo(Side::Right)]);

        assert_eq!(widget.choose_menu_entry(0), Some(MenuAction::Reposition(Side::Right)));
        assert_eq!(widget.side(), Side::Right);
        assert!(widget.button().has_class("right"));
        assert!(!widget.button().has_class("left"));
        assert_eq!(widget.preferences().get(POSITION_KEY).as_deref(), Some("right"));
        assert!(!widget.menu().unwrap().is_open());
    }

    #[test]
    fn test_menu_shortcut_navigation() {
        let mut widget = widget(WidgetConfig {
            menu: true,
            ..Default::default()
        });
        widget.load_shortcuts(parse_shortcuts(r#"{"Docs": {"Guide": "https://example.com/guide"}}"#).unwrap());

        widget.on_hold(Target::Button);
        assert_eq!(widget.choose_menu_entry(1), Some(MenuAction::Entered { depth: 1 }));
        assert_eq!(
            widget.choose_menu_entry(1),
            Some(MenuAction::Navigate("https://example.com/guide".to_string()))
        );
    }

    #[test]
    fn test_tap_elsewhere_closes_menu() {
        let mut widget = widget(WidgetConfig {
            menu: true,
            ..Default::default()
        });
        widget.on_hold(Target::Button);

        assert_eq!(widget.on_tap(Target::Menu, ms(0)), TriggerOutcome::Ignored);
        assert!(widget.menu().unwrap().is_open());

        widget.on_tap(Target::Page, ms(0));
        assert!(!widget.menu().unwrap().is_open());
    }

    #[test]
    fn test_custom_easing() {
        fn ease_in(t: f64) -> f64 {
            t * t
        }

        let mut widget = widget(WidgetConfig {
            duration: 200,
            ..Default::default()
        })
        .with_easing(Easing::Custom(ease_in));

        widget.on_tap(Target::Button, ms(0));
        assert_eq!(
            widget.on_animation_frame(ms(100)),
            FrameOutcome::Stepped { offset: 175.0 }
        );
    }
}
