use haul_controller::ControllerError;
use haul_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("world error: {0}")]
    World(#[from] WorldError),

    #[error("controller error: {0}")]
    Controller(#[from] ControllerError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
