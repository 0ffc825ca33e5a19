use thiserror::Error;

#[derive(Error, Debug)]
pub enum InjectorError {
    #[error("configuration error: {0}")] Config(String),
    #[error("provider error: {0}")] Provider(String),
    #[error("unsafe path: {0}")] UnsafePath(String),
}
