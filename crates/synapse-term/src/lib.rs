// SPDX-License-Identifier: MIT
//
// synapse-term — terminal output layer for SynapseScanner.
//
// Everything the scanner puts on screen ends up as bytes produced here:
// 24-bit foreground colors, SGR attributes, OSC-8 hyperlinks, line and
// screen clears. Lines are composed in memory and committed with a single
// write so a half-drawn progress bar is never visible.
//
// The terminal module owns the only piece of process state the scanner
// touches: cursor visibility. It guarantees the cursor comes back on every
// exit path — normal return, propagated error, panic, and Ctrl-C.

pub mod ansi;
pub mod color;
pub mod output;
pub mod style;
pub mod terminal;

pub use color::{Rgb, interpolate};
pub use output::OutputBuffer;
pub use style::Attr;
pub use terminal::{CursorGuard, CursorState, FixedViewport, Interrupt, LiveViewport, Viewport};
