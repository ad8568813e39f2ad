use thiserror::Error;

#[derive(Error, Debug)]
pub enum TopoError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("{0}")]
    Client(#[from] reqwest::Error),
}
