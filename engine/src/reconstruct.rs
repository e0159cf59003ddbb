//! The reconstruction service boundary.
//!
//! The orchestrator only ever talks to a [`Reconstructor`]. [`LocalReconstructor`]
//! answers requests in-process by interleaving the two residuals.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use cofactor_types::{BooleanFunction, ReconstructionRequest};

/// Reconstruction future type alias.
pub type ReconstructFut = Pin<Box<dyn Future<Output = Result<String, ReconstructError>> + Send>>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconstructError {
    /// The service refused the inputs. The message is shown verbatim.
    #[error("{0}")]
    Rejected(String),
    /// The call never produced an answer (panicked or was dropped).
    #[error("reconstruction failed: {0}")]
    Failed(String),
}

pub trait Reconstructor: Send + Sync {
    fn reconstruct(&self, request: ReconstructionRequest) -> ReconstructFut;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalReconstructor;

impl Reconstructor for LocalReconstructor {
    fn reconstruct(&self, request: ReconstructionRequest) -> ReconstructFut {
        Box::pin(async move { reconstruct_locally(&request) })
    }
}

/// Rebuilds the truth vector from a request, or explains why it cannot.
pub fn reconstruct_locally(request: &ReconstructionRequest) -> Result<String, ReconstructError> {
    let arg: u32 = request.index.trim().parse().map_err(|_| {
        ReconstructError::Rejected(format!(
            "argument number '{}' is not a number",
            request.index
        ))
    })?;

    BooleanFunction::from_residuals(&request.left, &request.right, arg)
        .map(|function| function.vector().to_string())
        .map_err(|err| ReconstructError::Rejected(err.to_string()))
}
