//! Shared test utilities and fixtures
//!
//! Reconstruction services with scripted behavior for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use cofactor_engine::{
    App, FormSettings, ReconstructError, ReconstructFut, ReconstructionRequest, Reconstructor,
    UiOptions,
};

type Reply = oneshot::Sender<Result<String, ReconstructError>>;

/// Holds every call open until the test resolves it, in any order.
#[derive(Default)]
pub struct ScriptedService {
    calls: Mutex<Vec<(ReconstructionRequest, Option<Reply>)>>,
}

impl ScriptedService {
    pub fn requests(&self) -> Vec<ReconstructionRequest> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(request, _)| request.clone())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn succeed(&self, call: usize, output: &str) {
        self.reply(call, Ok(output.to_string()));
    }

    pub fn reject(&self, call: usize, message: &str) {
        self.reply(call, Err(ReconstructError::Rejected(message.to_string())));
    }

    fn reply(&self, call: usize, result: Result<String, ReconstructError>) {
        let reply = self.calls.lock().unwrap()[call]
            .1
            .take()
            .expect("call already resolved");
        reply.send(result).expect("request task dropped");
    }
}

impl Reconstructor for ScriptedService {
    fn reconstruct(&self, request: ReconstructionRequest) -> ReconstructFut {
        let (tx, rx) = oneshot::channel();
        self.calls.lock().unwrap().push((request, Some(tx)));
        Box::pin(async move {
            rx.await
                .unwrap_or_else(|_| Err(ReconstructError::Failed("reply dropped".to_string())))
        })
    }
}

pub fn app_with_service(settings: FormSettings) -> (Arc<ScriptedService>, App) {
    let service = Arc::new(ScriptedService::default());
    let app = App::from_parts(settings, UiOptions::default(), 3, service.clone());
    (service, app)
}

pub fn scripted_app() -> (Arc<ScriptedService>, App) {
    app_with_service(FormSettings::default())
}
