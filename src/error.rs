use thiserror::Error;

pub type WidgetResult<T> = Result<T, WidgetError>;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("template is missing required node role: {role}")]
    MissingTemplateNode { role: &'static str },

    #[error("template declares node role more than once: {role}")]
    DuplicateTemplateNode { role: &'static str },

    #[error("no widget registered for tag: {tag}")]
    UnknownTag { tag: String },

    #[error("unknown widget instance id: {id}")]
    UnknownInstance { id: u64 },
}
