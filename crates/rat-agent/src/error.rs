use thiserror::Error;

use rat_core::AgentId;

/// Conditions a rat can run into during its update.  None of them are fatal
/// to the simulation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// Every neighbouring box is blocked; the rat stays put this tick.
    #[error("{0} could not find any direction")]
    NoLegalDirection(AgentId),
}
