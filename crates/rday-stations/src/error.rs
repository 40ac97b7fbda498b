use thiserror::Error;

#[derive(Debug, Error)]
pub enum StationError {
    #[error("station table is empty")]
    Empty,

    #[error("duplicate station name {0:?}")]
    DuplicateName(String),

    #[error("station {station:?}: {reason}")]
    Invalid { station: String, reason: String },

    #[error("station {station:?} has no route for {class} entities")]
    MissingRoute { station: String, class: String },

    #[error("station {station:?} routes to out-of-range index {target}")]
    RouteOutOfRange { station: String, target: usize },

    #[error("service-time distribution error: {0}")]
    Distribution(String),

    #[error("station table parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StationResult<T> = Result<T, StationError>;
