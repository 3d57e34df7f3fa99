use crate::domain::RandomSource;

// Cycles through a fixed list of samples for deterministic tests.
pub(crate) struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "scripted random needs at least one value");
        Self { values, cursor: 0 }
    }

    pub(crate) fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    pub(crate) fn drawn(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
