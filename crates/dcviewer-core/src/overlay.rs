use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MIN_SPAN;
use crate::render::{Axes, Point};

/// Pointer buttons, numbered 1..=3 like most plotting toolkits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

impl PointerButton {
    pub fn number(&self) -> u8 {
        match self {
            Self::Primary => 1,
            Self::Middle => 2,
            Self::Secondary => 3,
        }
    }

    /// Middle is reserved for panning.
    pub fn starts_selection(&self) -> bool {
        matches!(self, Self::Primary | Self::Secondary)
    }
}

/// A press or release over the figure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Screen position in pixels, used for the minimum span check.
    pub screen: Point,
    /// Same position in image data coordinates.
    pub data: Point,
    pub button: PointerButton,
}

/// A completed rectangle drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    pub start: Point,
    pub end: Point,
    pub press_button: PointerButton,
    pub release_button: PointerButton,
}

impl Selection {
    /// `(x_min, x_max, y_min, y_max)` in data coordinates.
    pub fn extents(&self) -> (f32, f32, f32, f32) {
        (
            self.start.x.min(self.end.x),
            self.start.x.max(self.end.x),
            self.start.y.min(self.end.y),
            self.start.y.max(self.end.y),
        )
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}) --> ({:.2}, {:.2}) buttons {} {}",
            self.start.x,
            self.start.y,
            self.end.x,
            self.end.y,
            self.press_button.number(),
            self.release_button.number()
        )
    }
}

/// Drag thresholds for the selector, in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub min_span_x: f32,
    pub min_span_y: f32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            min_span_x: DEFAULT_MIN_SPAN,
            min_span_y: DEFAULT_MIN_SPAN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayState {
    Disabled,
    Idle,
    /// Button held since `press`.
    Armed { press: PointerEvent },
}

/// Rectangle selector bound to one rendered figure.
///
/// A fresh overlay starts enabled; nothing carries over from the overlay
/// of a previous figure.
#[derive(Clone, Debug)]
pub struct SelectionOverlay {
    axes: Axes,
    config: SelectorConfig,
    state: OverlayState,
    last_selection: Option<Selection>,
}

impl SelectionOverlay {
    pub fn new(axes: Axes, config: SelectorConfig) -> Self {
        Self {
            axes,
            config,
            state: OverlayState::Idle,
            last_selection: None,
        }
    }

    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, OverlayState::Disabled)
    }

    /// The press of the drag in progress, if any.
    pub fn pending_press(&self) -> Option<&PointerEvent> {
        match &self.state {
            OverlayState::Armed { press } => Some(press),
            _ => None,
        }
    }

    /// Most recent accepted selection, kept for drawing.
    pub fn last_selection(&self) -> Option<&Selection> {
        self.last_selection.as_ref()
    }

    pub fn press(&mut self, event: PointerEvent) {
        if self.state == OverlayState::Idle && event.button.starts_selection() {
            self.state = OverlayState::Armed { press: event };
        }
    }

    /// Finish a drag. Returns the selection if it spans at least the
    /// configured minimum in both directions. Releases of the middle button
    /// are ignored and leave the drag armed.
    pub fn release(&mut self, event: PointerEvent) -> Option<Selection> {
        let OverlayState::Armed { press } = self.state else {
            return None;
        };
        if !event.button.starts_selection() {
            return None;
        }
        self.state = OverlayState::Idle;

        let span_x = (event.screen.x - press.screen.x).abs();
        let span_y = (event.screen.y - press.screen.y).abs();
        if span_x < self.config.min_span_x || span_y < self.config.min_span_y {
            tracing::debug!(span_x, span_y, "selection below minimum span, discarded");
            return None;
        }

        let selection = Selection {
            start: press.data,
            end: event.data,
            press_button: press.button,
            release_button: event.button,
        };
        self.last_selection = Some(selection);
        Some(selection)
    }

    /// `q`/`Q` disables the selector, `a`/`A` enables it. Returns whether
    /// the state changed.
    pub fn key(&mut self, key: char) -> bool {
        match (key, self.state) {
            ('q' | 'Q', OverlayState::Idle | OverlayState::Armed { .. }) => {
                self.state = OverlayState::Disabled;
                tracing::info!("rectangle selector deactivated");
                true
            }
            ('a' | 'A', OverlayState::Disabled) => {
                self.state = OverlayState::Idle;
                tracing::info!("rectangle selector activated");
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay() -> SelectionOverlay {
        SelectionOverlay::new(Axes { width: 100, height: 100 }, SelectorConfig::default())
    }

    fn at(x: f32, y: f32, button: PointerButton) -> PointerEvent {
        PointerEvent {
            screen: Point::new(x, y),
            data: Point::new(x / 2.0, y / 2.0),
            button,
        }
    }

    #[test]
    fn starts_idle() {
        assert_eq!(overlay().state(), OverlayState::Idle);
    }

    #[test]
    fn middle_button_never_arms() {
        let mut o = overlay();
        o.press(at(0.0, 0.0, PointerButton::Middle));
        assert_eq!(o.state(), OverlayState::Idle);
    }

    #[test]
    fn secondary_button_arms() {
        let mut o = overlay();
        o.press(at(0.0, 0.0, PointerButton::Secondary));
        assert!(o.pending_press().is_some());
    }

    #[test]
    fn second_press_keeps_first_anchor() {
        let mut o = overlay();
        o.press(at(0.0, 0.0, PointerButton::Primary));
        o.press(at(50.0, 50.0, PointerButton::Secondary));
        assert_eq!(o.pending_press().map(|p| p.button), Some(PointerButton::Primary));
    }

    #[test]
    fn q_during_drag_abandons_it() {
        let mut o = overlay();
        o.press(at(0.0, 0.0, PointerButton::Primary));
        assert!(o.key('q'));
        assert_eq!(o.release(at(40.0, 40.0, PointerButton::Primary)), None);
        assert_eq!(o.state(), OverlayState::Disabled);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut o = overlay();
        assert_eq!(o.release(at(40.0, 40.0, PointerButton::Primary)), None);
        assert!(o.last_selection().is_none());
    }

    #[test]
    fn extents_are_ordered() {
        let sel = Selection {
            start: Point::new(5.0, 1.0),
            end: Point::new(2.0, 7.0),
            press_button: PointerButton::Primary,
            release_button: PointerButton::Primary,
        };
        assert_eq!(sel.extents(), (2.0, 5.0, 1.0, 7.0));
    }
}
