//! Input commands and the hotkey table.

use rhizome_petri_pattern::Pattern;

/// Modifier keys held during a pointer or wheel event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Erase instead of paint; adjust base opacity instead of zooming.
    pub shift: bool,
    /// Drag the view instead of painting.
    pub ctrl: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
    };

    /// Only shift held.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
    };

    /// Only ctrl held.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
    };
}

/// A user command, already decoded from a raw input event.
///
/// Pointer and wheel positions are in viewport pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Start or stop the simulation.
    ToggleRun,
    /// Replace the board with random cells.
    Reseed,
    /// Kill every cell and pause.
    ClearAndPause,
    /// Primary button pressed.
    PointerDown {
        /// Pointer x.
        x: f32,
        /// Pointer y.
        y: f32,
        /// Held modifiers.
        modifiers: Modifiers,
    },
    /// Pointer moved, with or without a button held.
    PointerMove {
        /// Pointer x.
        x: f32,
        /// Pointer y.
        y: f32,
        /// Held modifiers.
        modifiers: Modifiers,
    },
    /// Primary button released.
    PointerUp,
    /// Wheel notch. Negative `delta_y` is a forward notch.
    Wheel {
        /// Pointer x.
        x: f32,
        /// Pointer y.
        y: f32,
        /// Scroll direction and amount.
        delta_y: f32,
        /// Held modifiers.
        modifiers: Modifiers,
    },
    /// Pattern dropped onto the board, centered on `(x, y)`.
    DropPattern {
        /// The dropped pattern.
        pattern: Pattern,
        /// Drop x.
        x: f32,
        /// Drop y.
        y: f32,
    },
    /// Viewport changed size.
    Resize {
        /// New width in pixels.
        width: f32,
        /// New height in pixels.
        height: f32,
    },
}

/// A cheatsheet entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotkey {
    /// Key or gesture.
    pub keys: &'static str,
    /// What it does.
    pub description: &'static str,
}

/// Every binding the session understands, in cheatsheet order.
pub const HOTKEYS: &[Hotkey] = &[
    Hotkey {
        keys: "r",
        description: "Generate random state",
    },
    Hotkey {
        keys: "c",
        description: "Clear screen",
    },
    Hotkey {
        keys: "LMB",
        description: "Draw cells",
    },
    Hotkey {
        keys: "Shift + LMB",
        description: "Erase cells",
    },
    Hotkey {
        keys: "Ctrl + LMB",
        description: "Pan view",
    },
    Hotkey {
        keys: "Mouse wheel",
        description: "Zoom in/out",
    },
    Hotkey {
        keys: "Shift + mouse wheel",
        description: "Show/hide grid",
    },
    Hotkey {
        keys: "s",
        description: "Start/stop simulation",
    },
];

/// Maps a key press to its command.
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "s" | "S" => Some(Command::ToggleRun),
        "r" | "R" => Some(Command::Reseed),
        "c" | "C" => Some(Command::ClearAndPause),
        _ => None,
    }
}
