//! Move bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::moves::{Move, MoveCodec};

/// Python wrapper for a move, addressed by its id.
#[pyclass(name = "Move")]
#[derive(Clone, Debug)]
pub struct PyMove(pub Move);

#[pymethods]
impl PyMove {
    /// Decode a move id in `0..MOVE_COUNT`.
    #[staticmethod]
    fn from_id(id: u16) -> PyResult<Self> {
        MoveCodec::decode(id)
            .map(Self)
            .map_err(|err| PyValueError::new_err(err.to_string()))
    }

    #[getter]
    fn id(&self) -> u16 {
        MoveCodec::encode(&self.0)
    }

    /// Combination name, e.g. `full_house` or `straight5`.
    #[getter]
    fn combination(&self) -> String {
        self.0.combination().name()
    }

    /// Cards the move puts on the table.
    #[getter]
    fn card_count(&self) -> u32 {
        self.0.card_count()
    }

    fn is_pass(&self) -> bool {
        self.0.is_pass()
    }

    fn is_bomb(&self) -> bool {
        self.0.is_bomb()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Move({}, id={})", self.0, MoveCodec::encode(&self.0))
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        u64::from(MoveCodec::encode(&self.0))
    }
}
