use crate::error::TasklaneError;

pub type TasklaneResult<T> = Result<T, TasklaneError>;
