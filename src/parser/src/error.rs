use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("input and output paths must differ: '{0}'")]
    InputEqualsOutput(String),

    #[error("failed to serialize command line arguments: [{0}]")]
    Serialize(String),
}
