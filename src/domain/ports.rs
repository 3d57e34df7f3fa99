// Port for the randomness the simulation consumes.
//
// The world never reaches for a global generator; every sample comes through
// this trait so runs can be seeded or scripted.
pub trait RandomSource: Send {
    /// Returns a uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}
