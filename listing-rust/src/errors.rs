use content_client::ContentScope;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Content API error: {0}")]
    ContentApi(#[from] content_client::ContentApiError),
    #[error("The current session may not access {0} content")]
    SessionRequired(ContentScope),
    #[error("The listing controller has stopped")]
    ControllerStopped,
}
