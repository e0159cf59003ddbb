//! Invocation orchestration for the form.
//!
//! The orchestrator is the only caller of the [`Reconstructor`] and the only
//! writer of [`InvocationState`]. It is driven by three transitions:
//!
//! - `field_changed` - inputs changed; advance the generation and decide
//! - `request_issued` - spawn a reconstruction tagged with that generation
//! - `response_received` - apply a completion only if its generation is current
//!
//! Completions travel back over an mpsc channel and are applied on the UI loop
//! (`poll_completions` per frame, or `next_completion` in async callers).
//! Responses are never cancelled in flight; stale ones are dropped on arrival.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use cofactor_types::{
    Form, Generation, HoldReason, InvocationState, Readiness, ReconstructionRequest,
};

use crate::reconstruct::{ReconstructError, Reconstructor};

/// A finished reconstruction call, tagged with the generation it was issued under.
#[derive(Debug)]
pub struct Completion {
    pub generation: Generation,
    pub request: ReconstructionRequest,
    pub result: Result<String, ReconstructError>,
}

/// What `field_changed` decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Some field is empty; the result area was reset.
    Reset,
    /// Inputs are filled but not callable; the result area is untouched.
    Held(HoldReason),
    /// A request was issued under this generation.
    Issued(Generation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    Applied,
    /// The inputs changed after the request was issued.
    Superseded,
}

/// The single in-flight slot. Only the awaited generation can be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Awaiting(Generation),
}

pub struct Orchestrator {
    reconstructor: Arc<dyn Reconstructor>,
    generation: Generation,
    phase: Phase,
    state: InvocationState,
    completion_tx: mpsc::UnboundedSender<Completion>,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
    /// Spawned calls whose completion has not been received yet, stale ones included.
    in_flight: usize,
    requests_issued: u64,
}

impl Orchestrator {
    pub fn new(reconstructor: Arc<dyn Reconstructor>) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            reconstructor,
            generation: Generation::default(),
            phase: Phase::Idle,
            state: InvocationState::default(),
            completion_tx,
            completion_rx,
            in_flight: 0,
            requests_issued: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &InvocationState {
        &self.state
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Generation of the request whose answer is still wanted, if any.
    #[must_use]
    pub fn awaiting(&self) -> Option<Generation> {
        match self.phase {
            Phase::Awaiting(generation) => Some(generation),
            Phase::Idle => None,
        }
    }

    /// Calls still running, including ones whose answer will be discarded.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    #[must_use]
    pub fn requests_issued(&self) -> u64 {
        self.requests_issued
    }

    /// Re-evaluates the form after an edit changed at least one input.
    ///
    /// Must be called from within a tokio runtime: a ready form spawns the request.
    pub fn field_changed(&mut self, form: &Form) -> Evaluation {
        self.generation = self.generation.next();
        self.phase = Phase::Idle;

        match form.readiness() {
            Readiness::Incomplete => {
                debug!(generation = %self.generation, "Inputs incomplete; result reset");
                self.state.reset();
                Evaluation::Reset
            }
            Readiness::Hold(reason) => {
                debug!(generation = %self.generation, ?reason, "Inputs held");
                Evaluation::Held(reason)
            }
            Readiness::Ready(request) => {
                self.request_issued(request);
                Evaluation::Issued(self.generation)
            }
        }
    }

    fn request_issued(&mut self, request: ReconstructionRequest) {
        let generation = self.generation;
        info!(
            %generation,
            left = %request.left,
            right = %request.right,
            index = %request.index,
            "Reconstruction requested"
        );

        let call = self.reconstructor.reconstruct(request.clone());
        let tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let result = match tokio::spawn(call).await {
                Ok(result) => result,
                Err(err) => Err(ReconstructError::Failed(err.to_string())),
            };
            // Receiver lives as long as the orchestrator; a closed channel means shutdown.
            let _ = tx.send(Completion {
                generation,
                request,
                result,
            });
        });

        self.phase = Phase::Awaiting(generation);
        self.in_flight += 1;
        self.requests_issued += 1;
    }

    /// Applies `completion` if it answers the current inputs; otherwise drops it.
    pub fn response_received(&mut self, completion: Completion) -> ResponseOutcome {
        let Completion {
            generation, result, ..
        } = completion;

        if self.phase != Phase::Awaiting(generation) {
            debug!(
                %generation,
                current = %self.generation,
                "Discarding superseded reconstruction response"
            );
            return ResponseOutcome::Superseded;
        }

        self.phase = Phase::Idle;
        match result {
            Ok(output) => {
                info!(%generation, output = %output, "Reconstruction applied");
                self.state.succeed(output);
            }
            Err(err) => {
                warn!(%generation, error = %err, "Reconstruction failed");
                let mut message = err.to_string();
                if message.trim().is_empty() {
                    message = ReconstructError::Failed("no error message".to_string()).to_string();
                }
                self.state.fail(message);
            }
        }
        ResponseOutcome::Applied
    }

    /// Drains completions that already arrived. Returns how many were applied.
    pub fn poll_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completion_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            if self.response_received(completion) == ResponseOutcome::Applied {
                applied += 1;
            }
        }
        applied
    }

    /// Waits for the next completion and feeds it through `response_received`.
    ///
    /// Returns `None` right away when no call is in flight, so awaiting an idle
    /// orchestrator never blocks. Superseded calls still count as in flight
    /// until their answer arrives and is discarded.
    pub async fn next_completion(&mut self) -> Option<ResponseOutcome> {
        if self.in_flight == 0 {
            return None;
        }
        let completion = self.completion_rx.recv().await?;
        self.in_flight -= 1;
        Some(self.response_received(completion))
    }
}
