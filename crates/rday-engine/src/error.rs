use rday_core::{CoreError, EntityId, StationId};
use rday_stations::StationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Station(#[from] StationError),

    #[error("no route for entity {entity} out of station {station:?}")]
    MissingRoute { entity: EntityId, station: String },

    #[error("batch gate targets unknown station {0}")]
    GateTargetUnknown(StationId),

    #[error("batch gate for {gate} names unknown feeder station {station}")]
    GateFeederUnknown { gate: StationId, station: StationId },

    #[error("batch gate for {0} has no feeder arcs to infer completion from")]
    GateWithoutFeeders(StationId),

    #[error("two batch gates target the same station {0}")]
    DuplicateGate(StationId),

    #[error("grooming station {0} is not in the table")]
    GroomingStationUnknown(StationId),
}

pub type SimResult<T> = Result<T, SimError>;
