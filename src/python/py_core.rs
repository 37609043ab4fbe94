//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameError, Player, Position};
use crate::rules::MoveRecord;

pub(crate) fn player_name(player: Player) -> &'static str {
    match player {
        Player::Black => "black",
        Player::White => "white",
    }
}

pub(crate) fn to_py_err(err: GameError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn coords(pos: Position) -> (usize, usize) {
    (pos.row as usize, pos.col as usize)
}

/// Python wrapper for an applied move.
#[pyclass(name = "MoveRecord")]
#[derive(Clone, Debug)]
pub struct PyMoveRecord(pub MoveRecord);

#[pymethods]
impl PyMoveRecord {
    /// "black" or "white".
    #[getter]
    fn player(&self) -> &'static str {
        player_name(self.0.player)
    }

    /// (row, col) of the placed disc.
    #[getter]
    fn position(&self) -> (usize, usize) {
        coords(self.0.position)
    }

    /// (row, col) of every flipped disc, in direction order.
    #[getter]
    fn flipped(&self) -> Vec<(usize, usize)> {
        self.0.flipped.iter().copied().map(coords).collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "MoveRecord(player={}, position={}, flipped={})",
            player_name(self.0.player),
            self.0.position,
            self.0.flipped.len()
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
