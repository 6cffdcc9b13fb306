use crate::utils::error::ErrorKind;

/// Where the widget sits in its fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    #[default]
    Idle,
    Loading,
    Rendered { matches: usize },
    Empty,
    ErrorShown(ErrorKind),
}

impl WidgetState {
    pub fn is_error(&self) -> bool {
        matches!(self, WidgetState::ErrorShown(_))
    }
}
