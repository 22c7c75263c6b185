//! Reducer for the caption composer.

use crate::ui::mvi::Reducer;

use super::intent::ComposerIntent;
use super::state::{ComposerState, Field, GenerationStatus, Notice, NoticeKind};

/// Reducer for composer state transitions.
pub struct ComposerReducer;

impl Reducer for ComposerReducer {
    type State = ComposerState;
    type Intent = ComposerIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ComposerIntent::SelectContentType(content_type) => {
                state.content_type = content_type;
            }

            ComposerIntent::SetDescription(text) => {
                state.description = text;
            }

            ComposerIntent::InsertChar(ch) => {
                state.description.push(ch);
            }

            ComposerIntent::InsertNewline => {
                state.description.push('\n');
            }

            ComposerIntent::Backspace => {
                state.description.pop();
            }

            ComposerIntent::GenerateRequested => {
                if !state.can_generate() {
                    return state;
                }
                let request_id = state.next_request_id;
                state.next_request_id = request_id.wrapping_add(1);
                state.generation = GenerationStatus::Generating { request_id };
                state.error = None;
                state.animation_tick = 0;
            }

            ComposerIntent::GenerationSucceeded {
                request_id,
                caption,
            } => {
                if state.in_flight() != Some(request_id) {
                    return state;
                }
                state.caption = Some(caption);
                state.output_scroll = 0;
                state.generation = GenerationStatus::Idle;
            }

            ComposerIntent::GenerationFailed {
                request_id,
                message,
            } => {
                if state.in_flight() != Some(request_id) {
                    return state;
                }
                state.error = Some(message);
                state.generation = GenerationStatus::Idle;
            }

            ComposerIntent::DismissError => {
                state.error = None;
            }

            ComposerIntent::CaptionCopied { ticks } => {
                state.notice = Some(Notice {
                    kind: NoticeKind::Success,
                    message: "Caption copied to clipboard".to_string(),
                    remaining_ticks: ticks,
                });
            }

            ComposerIntent::CopyFailed { message, ticks } => {
                state.notice = Some(Notice {
                    kind: NoticeKind::Error,
                    message,
                    remaining_ticks: ticks,
                });
            }

            ComposerIntent::ScrollOutput { delta, max } => {
                if state.caption.is_some() {
                    let target = i64::from(state.output_scroll) + i64::from(delta);
                    state.output_scroll = target.clamp(0, i64::from(max)) as u16;
                }
            }

            ComposerIntent::Tick => {
                if state.is_generating() {
                    state.animation_tick = state.animation_tick.wrapping_add(1);
                }
                state.notice = state.notice.take().and_then(|mut notice| {
                    notice.remaining_ticks = notice.remaining_ticks.saturating_sub(1);
                    (notice.remaining_ticks > 0).then_some(notice)
                });
            }

            ComposerIntent::FocusNext => {
                state.focus = step_focus(&state, Field::next);
            }

            ComposerIntent::FocusPrev => {
                state.focus = step_focus(&state, Field::prev);
            }

            ComposerIntent::Teardown => {
                state.closed = true;
                state.generation = GenerationStatus::Idle;
            }
        }
        state
    }
}

/// Move focus, skipping the copy control while there is nothing to copy.
fn step_focus(state: &ComposerState, step: fn(Field) -> Field) -> Field {
    let next = step(state.focus);
    if next == Field::Copy && !state.can_copy() {
        step(next)
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caption::CaptionSections;

    fn caption(tag: &str) -> CaptionSections {
        CaptionSections {
            hook: format!("{tag} hook"),
            story: format!("{tag} story"),
            emojis: format!("{tag} emojis"),
            cta: format!("{tag} cta"),
        }
    }

    fn generating(request_id: u64) -> ComposerState {
        ComposerState {
            description: "latte art".into(),
            generation: GenerationStatus::Generating { request_id },
            next_request_id: request_id + 1,
            ..ComposerState::default()
        }
    }

    #[test]
    fn typing_builds_description() {
        let mut state = ComposerState::default();
        for ch in "hi".chars() {
            state = ComposerReducer::reduce(state, ComposerIntent::InsertChar(ch));
        }
        state = ComposerReducer::reduce(state, ComposerIntent::InsertNewline);
        state = ComposerReducer::reduce(state, ComposerIntent::InsertChar('x'));
        state = ComposerReducer::reduce(state, ComposerIntent::Backspace);
        assert_eq!(state.description, "hi\n");
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let state = ComposerReducer::reduce(ComposerState::default(), ComposerIntent::Backspace);
        assert!(state.description.is_empty());
    }

    #[test]
    fn generate_assigns_request_ids_in_order() {
        let mut state = ComposerState {
            description: "latte art".into(),
            ..ComposerState::default()
        };
        state = ComposerReducer::reduce(state, ComposerIntent::GenerateRequested);
        assert_eq!(state.in_flight(), Some(0));
        state = ComposerReducer::reduce(
            state,
            ComposerIntent::GenerationSucceeded {
                request_id: 0,
                caption: caption("a"),
            },
        );
        state = ComposerReducer::reduce(state, ComposerIntent::GenerateRequested);
        assert_eq!(state.in_flight(), Some(1));
    }

    #[test]
    fn generate_clears_previous_error() {
        let state = ComposerState {
            description: "latte art".into(),
            error: Some("boom".into()),
            ..ComposerState::default()
        };
        let state = ComposerReducer::reduce(state, ComposerIntent::GenerateRequested);
        assert!(state.error.is_none());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let state = ComposerReducer::reduce(
            generating(3),
            ComposerIntent::GenerationSucceeded {
                request_id: 2,
                caption: caption("stale"),
            },
        );
        assert!(state.is_generating());
        assert!(state.caption.is_none());
    }

    #[test]
    fn failure_resets_generating_and_keeps_caption() {
        let mut state = generating(0);
        state.caption = Some(caption("old"));
        let state = ComposerReducer::reduce(
            state,
            ComposerIntent::GenerationFailed {
                request_id: 0,
                message: "timed out".into(),
            },
        );
        assert!(!state.is_generating());
        assert_eq!(state.error.as_deref(), Some("timed out"));
        assert_eq!(state.caption, Some(caption("old")));
    }

    #[test]
    fn dismiss_error_clears_it() {
        let state = ComposerState {
            error: Some("boom".into()),
            ..ComposerState::default()
        };
        let state = ComposerReducer::reduce(state, ComposerIntent::DismissError);
        assert!(state.error.is_none());
    }

    #[test]
    fn tick_animates_only_while_generating() {
        let idle = ComposerReducer::reduce(ComposerState::default(), ComposerIntent::Tick);
        assert_eq!(idle.animation_tick, 0);
        let busy = ComposerReducer::reduce(generating(0), ComposerIntent::Tick);
        assert_eq!(busy.animation_tick, 1);
    }

    #[test]
    fn notice_expires_after_its_ticks() {
        let mut state = ComposerReducer::reduce(
            ComposerState::default(),
            ComposerIntent::CaptionCopied { ticks: 2 },
        );
        assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Success));
        state = ComposerReducer::reduce(state, ComposerIntent::Tick);
        assert!(state.notice.is_some());
        state = ComposerReducer::reduce(state, ComposerIntent::Tick);
        assert!(state.notice.is_none());
    }

    #[test]
    fn copy_failure_leaves_caption_alone() {
        let state = ComposerState {
            caption: Some(caption("kept")),
            ..ComposerState::default()
        };
        let state = ComposerReducer::reduce(
            state,
            ComposerIntent::CopyFailed {
                message: "no clipboard".into(),
                ticks: 5,
            },
        );
        assert_eq!(state.caption, Some(caption("kept")));
        let notice = state.notice.expect("notice");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "no clipboard");
    }

    #[test]
    fn focus_skips_copy_without_caption() {
        let state = ComposerState {
            focus: Field::Generate,
            ..ComposerState::default()
        };
        let state = ComposerReducer::reduce(state, ComposerIntent::FocusNext);
        assert_eq!(state.focus, Field::ContentType);
        let state = ComposerReducer::reduce(state, ComposerIntent::FocusPrev);
        assert_eq!(state.focus, Field::Generate);
    }

    #[test]
    fn focus_reaches_copy_with_caption() {
        let state = ComposerState {
            focus: Field::Generate,
            caption: Some(caption("a")),
            ..ComposerState::default()
        };
        let state = ComposerReducer::reduce(state, ComposerIntent::FocusNext);
        assert_eq!(state.focus, Field::Copy);
    }

    #[test]
    fn scroll_output_clamps_to_range() {
        let state = ComposerState {
            caption: Some(caption("a")),
            ..ComposerState::default()
        };
        let state = ComposerReducer::reduce(state, ComposerIntent::ScrollOutput { delta: 5, max: 3 });
        assert_eq!(state.output_scroll, 3);
        let state = ComposerReducer::reduce(state, ComposerIntent::ScrollOutput { delta: -10, max: 3 });
        assert_eq!(state.output_scroll, 0);
    }

    #[test]
    fn scroll_without_caption_is_noop() {
        let state = ComposerReducer::reduce(
            ComposerState::default(),
            ComposerIntent::ScrollOutput { delta: 2, max: 10 },
        );
        assert_eq!(state.output_scroll, 0);
    }

    #[test]
    fn new_caption_resets_scroll() {
        let mut state = generating(1);
        state.caption = Some(caption("old"));
        state.output_scroll = 4;
        let state = ComposerReducer::reduce(
            state,
            ComposerIntent::GenerationSucceeded {
                request_id: 1,
                caption: caption("new"),
            },
        );
        assert_eq!(state.output_scroll, 0);
    }

    #[test]
    fn teardown_drops_in_flight_request() {
        let state = ComposerReducer::reduce(generating(0), ComposerIntent::Teardown);
        assert!(state.closed);
        assert!(!state.is_generating());
        let state = ComposerReducer::reduce(
            state,
            ComposerIntent::GenerationSucceeded {
                request_id: 0,
                caption: caption("late"),
            },
        );
        assert!(state.caption.is_none());
    }
}
