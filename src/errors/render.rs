#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("No pagination view was given")]
    MissingView,
    #[error("Failed to render pagination view `{view}`")]
    ViewFailed {
        view: String,
        #[source]
        source: anyhow::Error,
    },
}
