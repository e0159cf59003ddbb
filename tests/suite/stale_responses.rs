//! Out-of-order reconstruction answers must never overwrite newer inputs.

use cofactor_engine::{Evaluation, FieldId, ReconstructionRequest, ResponseOutcome, ResultView};

use crate::common::scripted_app;

#[tokio::test]
async fn slow_first_answer_is_dropped_after_edit() {
    let (service, mut app) = scripted_app();
    app.set_inputs("01", "11", "0");
    app.set_focus(FieldId::Index);
    app.delete_char();
    app.enter_char('1');

    assert_eq!(
        service.requests(),
        vec![
            ReconstructionRequest::new("01", "11", "0"),
            ReconstructionRequest::new("01", "11", "1"),
        ]
    );

    service.succeed(1, "0111");
    assert_eq!(
        app.wait_for_completion().await,
        Some(ResponseOutcome::Applied)
    );
    service.succeed(0, "1011");
    assert_eq!(
        app.wait_for_completion().await,
        Some(ResponseOutcome::Superseded)
    );
    assert_eq!(app.result_view(), ResultView::Output("0111"));
}

#[tokio::test]
async fn answer_for_cleared_inputs_is_dropped() {
    let (service, mut app) = scripted_app();
    app.set_inputs("01", "11", "0");
    app.set_focus(FieldId::Left);
    assert_eq!(app.clear_field(), Some(Evaluation::Reset));

    service.succeed(0, "0111");
    assert_eq!(
        app.wait_for_completion().await,
        Some(ResponseOutcome::Superseded)
    );
    assert_eq!(app.result_view(), ResultView::Output("-"));
}

#[tokio::test]
async fn retyping_same_inputs_still_needs_fresh_answer() {
    let (service, mut app) = scripted_app();
    app.set_inputs("01", "11", "0");
    app.set_focus(FieldId::Index);
    app.delete_char();
    app.enter_char('0');
    assert_eq!(service.call_count(), 2);

    // Same text, older generation.
    service.succeed(0, "stale");
    assert_eq!(
        app.wait_for_completion().await,
        Some(ResponseOutcome::Superseded)
    );
    service.succeed(1, "0111");
    assert_eq!(
        app.wait_for_completion().await,
        Some(ResponseOutcome::Applied)
    );
    assert_eq!(app.result_view(), ResultView::Output("0111"));
}

#[tokio::test]
async fn stale_error_does_not_replace_current_output() {
    let (service, mut app) = scripted_app();
    app.set_inputs("01", "11", "0");
    app.set_inputs("01", "11", "1");

    service.succeed(1, "0111");
    app.wait_for_completion().await;
    service.reject(0, "Argument number greater than maximum.");
    app.wait_for_completion().await;

    assert_eq!(app.result_view(), ResultView::Output("0111"));
    assert!(app.invocation().error().is_empty());
}

#[tokio::test]
async fn current_error_takes_precedence_then_clears_on_success() {
    let (service, mut app) = scripted_app();
    app.set_inputs("01", "11", "0");
    service.succeed(0, "0111");
    app.wait_for_completion().await;

    app.set_inputs("01", "11", "1");
    service.reject(1, "Argument number greater than maximum.");
    app.wait_for_completion().await;
    assert_eq!(
        app.result_view(),
        ResultView::Error("Argument number greater than maximum.")
    );
    assert_eq!(app.form().text(FieldId::Left), "01");
    assert_eq!(app.form().text(FieldId::Right), "11");
    assert_eq!(app.form().text(FieldId::Index), "1");
    assert_eq!(app.invocation().output(), "0111");

    app.set_inputs("01", "11", "0");
    service.succeed(2, "0111");
    app.wait_for_completion().await;
    assert_eq!(app.result_view(), ResultView::Output("0111"));
}

#[tokio::test]
async fn many_rapid_edits_apply_only_the_last() {
    let (service, mut app) = scripted_app();
    app.set_inputs("0000", "1111", "0");
    app.set_focus(FieldId::Index);
    for digit in ['1', '2', '3', '4'] {
        app.delete_char();
        app.enter_char(digit);
    }
    // Each replacement is a delete (reset) then an insert (issue).
    assert_eq!(service.call_count(), 5);

    for call in (0..5).rev() {
        service.succeed(call, &format!("answer-{call}"));
    }
    let mut applied = 0;
    for _ in 0..5 {
        if app.wait_for_completion().await == Some(ResponseOutcome::Applied) {
            applied += 1;
        }
    }
    assert_eq!(applied, 1);
    assert_eq!(app.result_view(), ResultView::Output("answer-4"));
}
