use crate::{Algorithm, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    GenerateSequence {
        size: usize,
    },
    StartRun {
        algorithm: Algorithm,
        sequence: Vec<Value>,
        speed: u32,
    },
    RequestStop,
}
