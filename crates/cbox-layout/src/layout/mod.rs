//! Layout calculation modules for box templates
//!
//! This module handles all the geometric calculations for the box net:
//! - Derived dimensions (wall thickness, peel strips, panel extents)
//! - Canvas sizing and panel placement
//! - Strip and side panel primitive emission

mod canvas;
mod chamfer;
mod cursor;
mod dimensions;
mod side;
mod strip;
mod types;

pub use canvas::*;
pub use chamfer::{ChamferedStep, MirrorAxis, PanelHalf};
pub use cursor::Cursor;
pub use dimensions::*;
pub use side::*;
pub use strip::*;
pub use types::*;
