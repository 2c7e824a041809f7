use gradebook::store::mvi::Reducer;
use gradebook::ui::confirm::{ConfirmIntent, ConfirmReducer, ConfirmState, DeleteTarget};

fn ask(target: DeleteTarget) -> ConfirmIntent {
    ConfirmIntent::Ask {
        prompt: "Delete?".into(),
        target,
    }
}

#[test]
fn ask_shows_dialog_with_target() {
    let state = ConfirmReducer::reduce(ConfirmState::Hidden, ask(DeleteTarget::Student(7)));
    assert!(state.is_visible());
    assert_eq!(state.target(), Some(DeleteTarget::Student(7)));
    assert_eq!(state.prompt(), Some("Delete?"));
}

#[test]
fn accept_and_dismiss_hide_dialog() {
    for intent in [ConfirmIntent::Accept, ConfirmIntent::Dismiss] {
        let visible = ConfirmReducer::reduce(ConfirmState::Hidden, ask(DeleteTarget::Grade(1)));
        let state = ConfirmReducer::reduce(visible, intent);
        assert_eq!(state, ConfirmState::Hidden);
        assert_eq!(state.target(), None);
    }
}

#[test]
fn pending_question_is_not_replaced() {
    let first = ConfirmReducer::reduce(ConfirmState::Hidden, ask(DeleteTarget::Student(1)));
    let state = ConfirmReducer::reduce(first, ask(DeleteTarget::Grade(2)));
    assert_eq!(state.target(), Some(DeleteTarget::Student(1)));
}

#[test]
fn dismiss_when_hidden_is_noop() {
    let state = ConfirmReducer::reduce(ConfirmState::Hidden, ConfirmIntent::Dismiss);
    assert_eq!(state, ConfirmState::Hidden);
}
