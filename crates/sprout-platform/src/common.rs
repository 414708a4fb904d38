use sprout_core::{Frame, Target};

/// Input a host can replay against a frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// Click the node with this test tag.
    Click(String),
    /// Click the first node whose semantics label matches.
    ClickLabel(String),
    /// Scroll the node with this test tag by `dy` px.
    Scroll(String, f32),
    /// Save state, tear the composition down and restore it.
    Recreate,
}

pub(crate) fn target_by_tag<'a>(frame: &'a Frame, tag: &str) -> Option<&'a Target> {
    frame.target(tag)
}

pub(crate) fn target_by_label<'a>(frame: &'a Frame, label: &str) -> Option<&'a Target> {
    frame
        .targets
        .iter()
        .find(|t| t.on_click.is_some() && t.label.as_deref() == Some(label))
}
