mod host;
mod lifecycle;
mod widget;

pub use host::HostElement;
pub use widget::{ProgressWidget, WidgetSnapshot};
