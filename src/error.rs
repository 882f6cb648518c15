use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing the pull request payload argument")]
    MissingArgumentError,
    #[error("Failed to parse the pull request payload")]
    ParseError {
        #[source]
        cause: serde_json::Error,
    },
}
