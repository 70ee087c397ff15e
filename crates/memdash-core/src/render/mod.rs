//! Dashboard rendering

mod dashboard;

pub use dashboard::{
    render_document, scalar_display, SectionView, EMPTY_NOTES_PLACEHOLDER,
    EMPTY_SECTION_PLACEHOLDER,
};
