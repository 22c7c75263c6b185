use caption_composer::caption::{CaptionSections, ContentType};
use caption_composer::ui::composer::{ComposerIntent, ComposerReducer, ComposerState};
use caption_composer::ui::mvi::Reducer;

fn caption(tag: &str) -> CaptionSections {
    CaptionSections {
        hook: format!("{tag}-hook"),
        story: format!("{tag}-story"),
        emojis: format!("{tag}-emojis"),
        cta: format!("{tag}-cta"),
    }
}

fn with_description(text: &str) -> ComposerState {
    ComposerReducer::reduce(
        ComposerState::default(),
        ComposerIntent::SetDescription(text.into()),
    )
}

fn finish(state: ComposerState, caption: CaptionSections) -> ComposerState {
    let request_id = state.in_flight().expect("generation in flight");
    ComposerReducer::reduce(
        state,
        ComposerIntent::GenerationSucceeded {
            request_id,
            caption,
        },
    )
}

#[test]
fn generate_then_complete_for_every_content_type() {
    for content_type in ContentType::ALL {
        let state = with_description("morning hike");
        let state = ComposerReducer::reduce(state, ComposerIntent::SelectContentType(content_type));
        assert!(!state.is_generating());

        let state = ComposerReducer::reduce(state, ComposerIntent::GenerateRequested);
        assert!(state.is_generating());
        assert!(state.caption.is_none());

        let state = finish(state, caption("a"));
        assert!(!state.is_generating());
        assert!(state.caption.is_some());
        assert_eq!(state.content_type, content_type);
    }
}

#[test]
fn generate_with_empty_description_is_noop() {
    let before = ComposerState::default();
    let after = ComposerReducer::reduce(before.clone(), ComposerIntent::GenerateRequested);
    assert_eq!(before, after);
    assert!(!after.is_generating());
    assert!(after.caption.is_none());
}

#[test]
fn generate_while_generating_is_noop() {
    let state = ComposerReducer::reduce(with_description("x"), ComposerIntent::GenerateRequested);
    let again = ComposerReducer::reduce(state.clone(), ComposerIntent::GenerateRequested);
    assert_eq!(state, again);
}

#[test]
fn selecting_content_type_keeps_description_and_caption() {
    let state = ComposerReducer::reduce(with_description("x"), ComposerIntent::GenerateRequested);
    let state = finish(state, caption("kept"));

    let state = ComposerReducer::reduce(state, ComposerIntent::SelectContentType(ContentType::Carousel));
    assert_eq!(state.content_type, ContentType::Carousel);
    assert_eq!(state.description, "x");
    assert_eq!(state.caption, Some(caption("kept")));
}

#[test]
fn second_generation_replaces_caption_wholesale() {
    let state = ComposerReducer::reduce(with_description("x"), ComposerIntent::GenerateRequested);
    let state = finish(state, caption("first"));
    let state = ComposerReducer::reduce(state, ComposerIntent::GenerateRequested);
    // Old caption stays visible while the new one is generated
    assert_eq!(state.caption, Some(caption("first")));
    let state = finish(state, caption("second"));
    assert_eq!(state.caption, Some(caption("second")));
}

#[test]
fn editing_during_generation_is_allowed() {
    let state = ComposerReducer::reduce(with_description("x"), ComposerIntent::GenerateRequested);
    let state = ComposerReducer::reduce(state, ComposerIntent::InsertChar('y'));
    let state = ComposerReducer::reduce(state, ComposerIntent::SelectContentType(ContentType::Video));
    assert!(state.is_generating());
    assert_eq!(state.description, "xy");
    assert_eq!(state.content_type, ContentType::Video);
}

#[test]
fn clearing_description_disables_generate() {
    let state = with_description("a");
    assert!(state.can_generate());
    let state = ComposerReducer::reduce(state, ComposerIntent::Backspace);
    assert!(!state.can_generate());
}

#[test]
fn failure_is_recoverable() {
    let state = ComposerReducer::reduce(with_description("x"), ComposerIntent::GenerateRequested);
    let request_id = state.in_flight().unwrap();
    let state = ComposerReducer::reduce(
        state,
        ComposerIntent::GenerationFailed {
            request_id,
            message: "backend down".into(),
        },
    );
    assert!(!state.is_generating());
    assert!(state.can_generate());
    assert_eq!(state.error.as_deref(), Some("backend down"));

    let state = ComposerReducer::reduce(state, ComposerIntent::GenerateRequested);
    assert!(state.is_generating());
    assert!(state.error.is_none());
}
