//! Application state for the Cofactor form.
//!
//! [`App`] owns the [`Form`], the focused field, and the [`Orchestrator`]. Every
//! editing method forwards to the form and, when the text actually changed,
//! runs the orchestrator's `field_changed` transition. Completed reconstruction
//! calls are applied in [`App::tick`].

mod config;
mod orchestrator;
mod reconstruct;
mod sample;


use std::sync::Arc;

use tracing::debug;

pub use cofactor_types::{
    ConsistencyPolicy, Form, FormSettings, HoldReason, InvocationState, ReconstructionRequest,
    ResultView,
    ui::{CursorMove, FieldId, UiOptions},
};
pub use config::{
    AppConfig, CONSISTENCY_ENV_VAR, CofactorConfig, ConfigError, FormConfig, SampleConfig,
    config_path, consistency_from_env,
};
pub use orchestrator::{Completion, Evaluation, Orchestrator, ResponseOutcome};
pub use reconstruct::{
    LocalReconstructor, ReconstructError, ReconstructFut, Reconstructor, reconstruct_locally,
};
pub use sample::{MAX_SAMPLE_ARGUMENTS, Sample, arguments_for_len, random_function, sample_inputs};

pub struct App {
    form: Form,
    focus: FieldId,
    orchestrator: Orchestrator,
    ui_options: UiOptions,
    sample_arguments: u32,
    status_message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Builds the app around the in-process reconstruction service.
    #[must_use]
    pub fn new(config: Option<&CofactorConfig>) -> Self {
        Self::with_reconstructor(config, Arc::new(LocalReconstructor))
    }

    #[must_use]
    pub fn with_reconstructor(
        config: Option<&CofactorConfig>,
        reconstructor: Arc<dyn Reconstructor>,
    ) -> Self {
        let mut settings = config.map(CofactorConfig::form_settings).unwrap_or_default();
        if let Some(policy) = consistency_from_env() {
            settings.consistency = policy;
        }
        let ui_options = config.map(CofactorConfig::ui_options).unwrap_or_default();
        let sample_arguments = config.map_or(
            config::DEFAULT_SAMPLE_ARGUMENTS,
            CofactorConfig::sample_arguments,
        );

        Self::from_parts(settings, ui_options, sample_arguments, reconstructor)
    }

    #[must_use]
    pub fn from_parts(
        settings: FormSettings,
        ui_options: UiOptions,
        sample_arguments: u32,
        reconstructor: Arc<dyn Reconstructor>,
    ) -> Self {
        Self {
            form: Form::new(settings),
            focus: FieldId::default(),
            orchestrator: Orchestrator::new(reconstructor),
            ui_options,
            sample_arguments,
            status_message: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn form(&self) -> &Form {
        &self.form
    }

    #[must_use]
    pub fn focus(&self) -> FieldId {
        self.focus
    }

    #[must_use]
    pub fn invocation(&self) -> &InvocationState {
        self.orchestrator.state()
    }

    #[must_use]
    pub fn result_view(&self) -> ResultView<'_> {
        self.orchestrator.state().view()
    }

    #[must_use]
    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// Whether a reconstruction for the current inputs has not answered yet.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.orchestrator.awaiting().is_some()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn set_focus(&mut self, focus: FieldId) {
        self.focus = focus;
    }

    pub fn enter_char(&mut self, c: char) -> Option<Evaluation> {
        let changed = self.form.enter_char(self.focus, c);
        self.after_edit(changed)
    }

    pub fn enter_text(&mut self, text: &str) -> Option<Evaluation> {
        let changed = self.form.enter_text(self.focus, text);
        self.after_edit(changed)
    }

    pub fn delete_char(&mut self) -> Option<Evaluation> {
        let changed = self.form.delete_char(self.focus);
        self.after_edit(changed)
    }

    pub fn delete_char_forward(&mut self) -> Option<Evaluation> {
        let changed = self.form.delete_char_forward(self.focus);
        self.after_edit(changed)
    }

    pub fn clear_field(&mut self) -> Option<Evaluation> {
        let changed = self.form.clear(self.focus);
        self.after_edit(changed)
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        self.form.move_cursor(self.focus, movement);
    }

    /// Replaces all three inputs in one edit.
    pub fn set_inputs(&mut self, left: &str, right: &str, index: &str) -> Option<Evaluation> {
        let changed = self.form.set_all(left, right, index);
        self.after_edit(changed)
    }

    /// Fills the form with the residuals of a random function.
    pub fn fill_sample(&mut self) -> Option<Evaluation> {
        let arguments = self
            .sample_arguments
            .min(arguments_for_len(self.form.settings().max_residue_len));
        match sample_inputs(arguments) {
            Ok(sample) => {
                self.status_message = Some(format!(
                    "Sample: f = {}, argument {}",
                    sample.function, sample.argument
                ));
                self.set_inputs(&sample.zero, &sample.one, &sample.index_text())
            }
            Err(err) => {
                self.status_message = Some(format!("Cannot build sample: {err}"));
                None
            }
        }
    }

    fn after_edit(&mut self, changed: bool) -> Option<Evaluation> {
        if !changed {
            return None;
        }
        let evaluation = self.orchestrator.field_changed(&self.form);
        debug!(focus = ?self.focus, ?evaluation, "Field changed");
        Some(evaluation)
    }

    /// Advances one frame: applies any reconstruction answers that arrived.
    pub fn tick(&mut self) {
        self.orchestrator.poll_completions();
    }

    /// Waits for the next reconstruction answer and applies it if still current.
    ///
    /// `None` when no call is in flight.
    pub async fn wait_for_completion(&mut self) -> Option<ResponseOutcome> {
        self.orchestrator.next_completion().await
    }
}
