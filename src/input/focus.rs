/// Kind of UI element currently holding keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedElement {
    /// Single-line text input.
    TextInput,
    /// Multi-line text area.
    TextArea,
    /// Any element marked editable.
    Editable,
    /// Anything else: buttons, sliders, the page body.
    Other,
}

/// Focus guard: whether keystrokes are expected to produce text.
///
/// Letter, digit, and shift-combo bindings are suppressed in a typing
/// context; arrow seek and volume stay active (see
/// [`PlayerAction::bypasses_typing_guard`](crate::input::PlayerAction::bypasses_typing_guard)).
pub fn is_typing_context(focus: Option<FocusedElement>) -> bool {
    matches!(
        focus,
        Some(FocusedElement::TextInput) | Some(FocusedElement::TextArea) | Some(FocusedElement::Editable)
    )
}
