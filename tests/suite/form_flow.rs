//! Keyboard-driven form scenarios, from key events to the result area.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use cofactor_engine::{
    App, ConsistencyPolicy, Evaluation, FieldId, FormSettings, HoldReason, ReconstructionRequest,
    ResponseOutcome, ResultView,
};
use cofactor_tui::apply_event;

use crate::common::{app_with_service, scripted_app};

fn key(app: &mut App, code: KeyCode) {
    apply_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        key(app, KeyCode::Char(c));
    }
}

#[tokio::test]
async fn typing_all_three_fields_issues_one_request() {
    let (service, mut app) = scripted_app();
    type_str(&mut app, "0001");
    key(&mut app, KeyCode::Tab);
    type_str(&mut app, "0111");
    key(&mut app, KeyCode::Tab);
    assert_eq!(service.call_count(), 0);

    type_str(&mut app, "2");
    assert_eq!(
        service.requests(),
        vec![ReconstructionRequest::new("0001", "0111", "2")]
    );

    service.succeed(0, "00010111");
    assert_eq!(
        app.wait_for_completion().await,
        Some(ResponseOutcome::Applied)
    );
    assert_eq!(app.result_view(), ResultView::Output("00010111"));
}

#[tokio::test]
async fn residue_fields_stop_at_sixteen_characters() {
    let (service, mut app) = scripted_app();
    type_str(&mut app, &"01".repeat(10));
    assert_eq!(app.form().left().len(), 16);
    assert_eq!(app.form().text(FieldId::Left), "0101010101010101");
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn index_field_takes_a_single_digit() {
    let (_service, mut app) = scripted_app();
    app.set_focus(FieldId::Index);
    type_str(&mut app, "a-7");
    assert_eq!(app.form().text(FieldId::Index), "7");
    type_str(&mut app, "3");
    assert_eq!(app.form().text(FieldId::Index), "7");
}

#[tokio::test]
async fn non_digit_residue_holds_the_request() {
    let (service, mut app) = scripted_app();
    app.set_inputs("0x", "11", "0");
    assert_eq!(service.call_count(), 0);
    assert!(!app.form().indicator_ok(FieldId::Left));
    assert!(!app.form().consistent());
}

#[tokio::test]
async fn argument_beyond_hint_is_held() {
    let (service, mut app) = scripted_app();
    assert_eq!(
        app.set_inputs("01", "11", "3"),
        Some(Evaluation::Held(HoldReason::IndexOutOfBounds {
            index: 3,
            max: 2
        }))
    );
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn unbounded_index_lets_the_service_decide() {
    let settings = FormSettings {
        enforce_index_bound: false,
        ..FormSettings::default()
    };
    let (service, mut app) = app_with_service(settings);
    app.set_inputs("01", "11", "9");
    assert_eq!(service.call_count(), 1);

    service.reject(0, "Argument number greater than maximum.");
    app.wait_for_completion().await;
    assert!(app.result_view().is_error());
}

#[tokio::test]
async fn left_only_policy_accepts_non_digit_right_for_consistency() {
    let settings = FormSettings {
        consistency: ConsistencyPolicy::LeftOnly,
        ..FormSettings::default()
    };
    let (service, mut app) = app_with_service(settings);
    app.set_inputs("01", "1x", "0");
    assert!(app.form().consistent());
    // The request itself still needs two valid residues.
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn backspace_on_complete_form_resets_result() {
    let (service, mut app) = scripted_app();
    app.set_inputs("01", "11", "0");
    service.succeed(0, "0111");
    app.wait_for_completion().await;

    app.set_focus(FieldId::Right);
    key(&mut app, KeyCode::End);
    key(&mut app, KeyCode::Backspace);
    assert!(!app.form().consistent());
    // A held form keeps the old output until a field is emptied.
    assert_eq!(app.result_view(), ResultView::Output("0111"));

    key(&mut app, KeyCode::Backspace);
    assert_eq!(app.result_view(), ResultView::Output("-"));
}

#[tokio::test]
async fn bracketed_paste_fills_focused_field() {
    let (service, mut app) = scripted_app();
    apply_event(&mut app, Event::Paste("0110\n".to_string()));
    key(&mut app, KeyCode::Tab);
    apply_event(&mut app, Event::Paste("1001".to_string()));
    key(&mut app, KeyCode::Tab);
    apply_event(&mut app, Event::Paste("1".to_string()));

    assert_eq!(
        service.requests(),
        vec![ReconstructionRequest::new("0110", "1001", "1")]
    );
}
