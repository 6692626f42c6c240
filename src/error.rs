use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbassyError {
    #[error("Both home and host country are required.")]
    MissingCountry,

    #[error("Home and host country cannot be the same.")]
    SameCountry,

    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("Invalid input string format: {0:?}")]
    InvalidFormat(String),

    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Error connecting to MongoDB: {0}")]
    StoreUnavailable(String),

    #[error("Error inserting embassy: {0}")]
    Insert(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl EmbassyError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingCountry | Self::SameCountry => 1,
            Self::StoreUnavailable(_) => 2,
            Self::MissingEnv(_) => 3,
            Self::InvalidFormat(_) | Self::Fetch { .. } | Self::Insert(_) | Self::Http(_) => 10,
        }
    }
}

pub type Result<T> = std::result::Result<T, EmbassyError>;
