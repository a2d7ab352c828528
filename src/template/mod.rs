//! Payment template composition and editing.
//!
//! [`compose_template_components`] computes every component of a template in
//! one pass. [`reduce`] applies editor actions to a [`TemplateDraft`] and
//! recomputes its components, so all derived values are refreshed together
//! whenever any input changes.

mod compose;
mod reducer;

pub use compose::{ComponentSet, TemplateInputs, compose_template_components};
pub use reducer::{StatutoryKind, StatutoryRule, TemplateAction, TemplateDraft, reduce};
