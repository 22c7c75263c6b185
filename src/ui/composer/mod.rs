//! Caption composer feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Composer state and derived predicates
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions
//! - `view.rs` - Rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ComposerIntent;
pub use reducer::ComposerReducer;
pub use state::{ComposerState, Field, GenerationStatus, Notice, NoticeKind};
pub use view::{
    output_max_scroll, render_composer, submit_label, COPY_LABEL, DESCRIPTION_PLACEHOLDER, GENERATE_LABEL,
    GENERATING_LABEL, SECTION_TITLES,
};
