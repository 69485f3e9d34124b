use typed_builder::TypedBuilder;

use crate::machine::{Model, PpuTiming};

/// Construction-time settings for a [`GameBoy`](crate::GameBoy) session.
///
/// ```
/// use dmgcore::{Model, SessionConfig};
///
/// let config = SessionConfig::builder()
///     .model(Model::Sgb)
///     .trace_instructions(true)
///     .build();
/// assert_eq!(config.model, Model::Sgb);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, TypedBuilder)]
pub struct SessionConfig {
    #[builder(default)]
    pub model: Model,
    /// Log every executed instruction at `trace` level.
    #[builder(default = false)]
    pub trace_instructions: bool,
    #[builder(default)]
    pub ppu_timing: PpuTiming,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
