#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Postman API error: {0}")]
    Api(#[from] postman_core::ApiError),

    #[error("workspace {workspace} has no environments")]
    NoEnvironments { workspace: String },

    #[error("environment {environment} is not part of workspace {workspace}")]
    EnvironmentNotInWorkspace {
        workspace: String,
        environment: String,
    },
}
