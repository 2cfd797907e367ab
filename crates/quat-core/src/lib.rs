//! Quaternions puzzle engine.
//!
//! Derives a single integer answer from bomb edgework using exact integer
//! quaternion arithmetic and a four-rule swap table, then validates entered
//! digits against it.
//!
//! Zero I/O. The host supplies edgework through [`BombInfo`] and drives the
//! session with button presses or text commands.

pub mod color;
pub mod command;
pub mod constants;
pub mod edgework;
pub mod error;
pub mod layout;
pub mod module;
pub mod pipeline;
pub mod quaternion;
pub mod rules;
pub mod session;

pub use color::{Color, Role, Selection};
pub use command::{HELP, parse_command};
pub use constants::{MAX_INPUT_LEN, SLOT_COUNT};
pub use edgework::{BombInfo, Edgework, Port};
pub use error::{LayoutError, Result};
pub use layout::{ButtonAssignment, Layout, RoleAssignment, digit_value};
pub use module::{Module, ModuleId};
pub use pipeline::{Derivation, PipelineSignals, ProductOrder, derive};
pub use quaternion::Quaternion;
pub use rules::TableA;
pub use session::{Button, Phase, PressOutcome, Session, SubmitOutcome};
