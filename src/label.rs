use std::borrow::Cow;

/// Human-readable name of a value, used in log fields.
///
/// Derive it with `#[derive(Label)]`: enums get their variant name,
/// structs their type name.
pub trait Label {
    fn label(&self) -> Cow<'static, str>;
}
