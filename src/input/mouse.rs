//! Mouse status, subscription mask and event classification.
//!
//! A backend reports a mouse event as a [`MouseStatus`] snapshot with a
//! change bitmask. Before the event reaches the application it is
//! filtered against the session's [`MouseMask`], and clicks on the
//! soft-label row are turned into function keys.

use bitflags::bitflags;

use crate::input::keyboard::KeyModifiers;

/// Number of buttons a status tracks.
pub const MOUSE_BUTTONS: usize = 3;

/// Mask bits used by each button's block in [`MouseMask`].
const BUTTON_SHIFT: usize = 6;

/// Mouse button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Button 1.
    Left,
    /// Button 2 (wheel click).
    Middle,
    /// Button 3.
    Right,
}

impl MouseButton {
    pub const ALL: [Self; MOUSE_BUTTONS] = [Self::Left, Self::Middle, Self::Right];

    /// Zero-based slot in [`MouseStatus::buttons`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }

    fn changed_flag(self) -> MouseChanges {
        match self {
            Self::Left => MouseChanges::BUTTON1,
            Self::Middle => MouseChanges::BUTTON2,
            Self::Right => MouseChanges::BUTTON3,
        }
    }
}

/// What a button last did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    #[default]
    Released,
    Pressed,
    Clicked,
    DoubleClicked,
    TripleClicked,
    /// Moved while held.
    Moved,
}

impl ButtonAction {
    fn bit(self) -> usize {
        match self {
            Self::Released => 0,
            Self::Pressed => 1,
            Self::Clicked => 2,
            Self::DoubleClicked => 3,
            Self::TripleClicked => 4,
            Self::Moved => 5,
        }
    }

    /// Press or click, the only actions that activate a soft label.
    #[must_use]
    pub fn is_activation(self) -> bool {
        matches!(self, Self::Pressed | Self::Clicked)
    }
}

/// State of one button in a mouse report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub action: ButtonAction,
    /// Modifiers held when the action happened.
    pub modifiers: KeyModifiers,
}

impl ButtonState {
    #[must_use]
    pub fn new(action: ButtonAction) -> Self {
        Self {
            action,
            modifiers: KeyModifiers::empty(),
        }
    }
}

bitflags! {
    /// Which parts of a [`MouseStatus`] changed in this report.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MouseChanges: u8 {
        const BUTTON1 = 0b0000_0001;
        const BUTTON2 = 0b0000_0010;
        const BUTTON3 = 0b0000_0100;
        const MOVED = 0b0000_1000;
        const WHEEL_UP = 0b0010_0000;
        const WHEEL_DOWN = 0b0100_0000;
    }
}

bitflags! {
    /// Mouse events an application subscribes to.
    ///
    /// Each button owns a block of six bits, one per [`ButtonAction`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MouseMask: u32 {
        const BUTTON1_RELEASED = 1 << 0;
        const BUTTON1_PRESSED = 1 << 1;
        const BUTTON1_CLICKED = 1 << 2;
        const BUTTON1_DOUBLE_CLICKED = 1 << 3;
        const BUTTON1_TRIPLE_CLICKED = 1 << 4;
        const BUTTON1_MOVED = 1 << 5;

        const BUTTON2_RELEASED = 1 << 6;
        const BUTTON2_PRESSED = 1 << 7;
        const BUTTON2_CLICKED = 1 << 8;
        const BUTTON2_DOUBLE_CLICKED = 1 << 9;
        const BUTTON2_TRIPLE_CLICKED = 1 << 10;
        const BUTTON2_MOVED = 1 << 11;

        const BUTTON3_RELEASED = 1 << 12;
        const BUTTON3_PRESSED = 1 << 13;
        const BUTTON3_CLICKED = 1 << 14;
        const BUTTON3_DOUBLE_CLICKED = 1 << 15;
        const BUTTON3_TRIPLE_CLICKED = 1 << 16;
        const BUTTON3_MOVED = 1 << 17;

        const MOUSE_WHEEL_SCROLL = 1 << 18;
        /// Report pointer motion with no button held.
        const REPORT_MOUSE_POSITION = 1 << 19;

        const ANY_BUTTON_MOVED =
            Self::BUTTON1_MOVED.bits() | Self::BUTTON2_MOVED.bits() | Self::BUTTON3_MOVED.bits();
        const ALL_MOUSE_EVENTS = (1 << 20) - 1;
    }
}

impl MouseMask {
    /// Subscription bit for `action` on `button`.
    #[must_use]
    pub fn for_button(button: MouseButton, action: ButtonAction) -> Self {
        Self::from_bits_retain(1 << (button.index() * BUTTON_SHIFT + action.bit()))
    }

    /// Check if `action` on `button` is subscribed.
    #[must_use]
    pub fn subscribes(self, button: MouseButton, action: ButtonAction) -> bool {
        self.contains(Self::for_button(button, action))
    }
}

/// Snapshot of the mouse as reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MouseStatus {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    pub buttons: [ButtonState; MOUSE_BUTTONS],
    pub changes: MouseChanges,
}

impl MouseStatus {
    /// A report where `button` changed to `action` at `(y, x)`.
    #[must_use]
    pub fn button(y: i32, x: i32, button: MouseButton, action: ButtonAction) -> Self {
        let mut status = Self {
            x,
            y,
            ..Self::default()
        };
        status.buttons[button.index()] = ButtonState::new(action);
        status.changes = button.changed_flag();
        status
    }

    /// A pointer motion report.
    #[must_use]
    pub fn moved(y: i32, x: i32) -> Self {
        Self {
            x,
            y,
            changes: MouseChanges::MOVED,
            ..Self::default()
        }
    }

    /// A wheel report, `up` selecting the direction.
    #[must_use]
    pub fn wheel(y: i32, x: i32, up: bool) -> Self {
        Self {
            x,
            y,
            changes: if up {
                MouseChanges::WHEEL_UP
            } else {
                MouseChanges::WHEEL_DOWN
            },
            ..Self::default()
        }
    }

    /// Check if `button` is flagged as changed.
    #[must_use]
    pub fn button_changed(&self, button: MouseButton) -> bool {
        self.changes.contains(button.changed_flag())
    }

    /// Action of the lowest-numbered button flagged as changed.
    #[must_use]
    pub fn triggering_action(&self) -> Option<ButtonAction> {
        MouseButton::ALL
            .into_iter()
            .find(|b| self.button_changed(*b))
            .map(|b| self.buttons[b.index()].action)
    }
}

/// Result of classifying a mouse report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseOutcome {
    /// Nothing the application subscribed to.
    Ignored,
    /// Deliver the generic mouse token.
    Event,
    /// Activation of soft label `n` (1-based).
    SoftLabel(u8),
}

/// Filter `status` against `mask` and map soft-label activations.
///
/// Unsubscribed change flags are cleared from `status` in place, so the
/// caller can keep the filtered report. `soft_label_at(y, x)` is only
/// consulted once something survived filtering.
pub fn classify_mouse<F>(mask: MouseMask, status: &mut MouseStatus, soft_label_at: F) -> MouseOutcome
where
    F: FnOnce(i32, i32) -> Option<u8>,
{
    for button in MouseButton::ALL {
        if status.button_changed(button) {
            let action = status.buttons[button.index()].action;
            if !mask.subscribes(button, action) {
                status.changes.remove(button.changed_flag());
            }
        }
    }

    if status.changes.contains(MouseChanges::MOVED)
        && !mask.intersects(MouseMask::ANY_BUTTON_MOVED | MouseMask::REPORT_MOUSE_POSITION)
    {
        status.changes.remove(MouseChanges::MOVED);
    }

    if !mask.contains(MouseMask::MOUSE_WHEEL_SCROLL) {
        status
            .changes
            .remove(MouseChanges::WHEEL_UP | MouseChanges::WHEEL_DOWN);
    }

    if status.changes.is_empty() {
        return MouseOutcome::Ignored;
    }

    match soft_label_at(status.y, status.x) {
        Some(label) if label > 0 => match status.triggering_action() {
            Some(action) if action.is_activation() => MouseOutcome::SoftLabel(label),
            _ => MouseOutcome::Ignored,
        },
        _ => MouseOutcome::Event,
    }
}
