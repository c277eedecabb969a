//! Interactive Life session.
//!
//! [`Session`] is the context object an event loop owns. It holds the grid,
//! the viewport, the cell layout and the UI state (pause flag, zoom level,
//! base opacity, drag memo), and turns [`Command`]s into calls on the
//! engine. Rendering stays outside: once per frame the driver calls
//! [`Session::tick`] and draws [`Session::frame`].
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use rhizome_petri_session::{Command, Session, SessionConfig};
//!
//! let config = SessionConfig {
//!     rows: Some(60),
//!     seed: Some(7),
//!     ..Default::default()
//! };
//! let mut session = Session::new(config, 800.0, 600.0).unwrap();
//!
//! session.tick(Duration::from_millis(100));
//! assert_eq!(session.grid().generation(), 1);
//!
//! session.handle(Command::ClearAndPause).unwrap();
//! assert!(session.is_paused());
//!
//! let frame = session.frame();
//! assert_eq!(frame.buffer.len(), session.grid().len() * 3);
//! ```

mod command;
mod config;
mod error;
mod layout;
mod session;

pub use command::{Command, HOTKEYS, Hotkey, Modifiers, command_for_key};
pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use layout::CellLayout;
pub use session::{Frame, Session};

pub use rhizome_petri_grid as grid;
pub use rhizome_petri_pattern as pattern;
pub use rhizome_petri_viewport as viewport;
