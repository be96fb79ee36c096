use super::*;

#[test]
fn input_changes_clear_errors() {
    for action in every_action() {
        let clears = action.clears_errors();
        let label = action.label();
        let next = reduce(&with_errors(state()), action.clone());

        if clears {
            assert_eq!(next.errors, None, "{label} should clear errors");
        } else if let CloneAction::SetErrors(errors) = action {
            assert_eq!(next.errors, errors, "{label} stores what it is given");
        } else {
            assert!(next.errors.is_some(), "{label} should keep errors");
        }
    }
}

#[test]
fn set_errors_replaces_and_clears() {
    let errors = vec![ApiError::new("first"), ApiError::for_field("disk_size", "second")];
    let state = reduce(&state(), CloneAction::SetErrors(Some(errors.clone())));
    assert_eq!(state.errors.as_deref(), Some(errors.as_slice()));

    let state = reduce(&state, CloneAction::SetErrors(None));
    assert_eq!(state.errors, None);
}

#[test]
fn set_submitting_keeps_errors() {
    let state = reduce(&with_errors(state()), CloneAction::SetSubmitting(false));
    assert!(state.errors.is_some());
}
