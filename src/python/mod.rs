//! Python bindings for the Othello engine.
//!
//! Lets a Python GUI act as the presentation shell: it draws `board()` and
//! forwards clicks and timer ticks to the session.
//!
//! # Quick Start
//!
//! ```python
//! import rust_othello as othello
//!
//! session = othello.OthelloSession(difficulty="hard", seed=42)
//! session.start()
//! session.click(2, 3)          # human move; returns None if inert
//! session.reply_due_in_ms()    # arm a UI timer with this
//! session.poll()               # computer reply once due
//! print(session.score())       # (black, white)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// rust_othello: Othello rules engine with an easy/hard computer opponent.
#[pymodule]
fn rust_othello(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMoveRecord>()?;
    m.add_class::<PyOthelloSession>()?;

    Ok(())
}
