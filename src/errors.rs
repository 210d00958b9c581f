use std::fmt;

/// Main error type for the creature combat engine
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Error related to species line data lookup or processing
    SpeciesData(SpeciesDataError),
    /// Error related to attack efficiency resolution
    Efficiency(EfficiencyError),
    /// Error related to invalid battle state
    BattleState(BattleStateError),
    /// Error reported by the injected creature store
    Storage(String),
}

/// Errors related to the static species line table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeciesDataError {
    /// The base-form name has no entry in the species line table
    LineNotFound(String),
    /// A line's stage table has no name for the requested stage
    StageOutOfRange { line: String, stage: u32 },
    /// Species data file is malformed or incomplete
    MalformedData(String),
}

/// Errors related to attack efficiency resolution
#[derive(Debug, Clone, PartialEq)]
pub enum EfficiencyError {
    /// A type multiplier outside the chart's value domain reached the
    /// efficiency mapping. The chart guarantees this cannot happen; if it
    /// does, the chart data itself is corrupt.
    UnknownMultiplier(f64),
}

/// Errors related to battle state validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleStateError {
    /// An action was requested after the battle already resolved
    BattleAlreadyResolved,
    /// An attack was requested by the side whose turn it is not
    OutOfTurn,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::SpeciesData(err) => write!(f, "Species data error: {}", err),
            EngineError::Efficiency(err) => write!(f, "Efficiency error: {}", err),
            EngineError::BattleState(err) => write!(f, "Battle state error: {}", err),
            EngineError::Storage(details) => write!(f, "Storage error: {}", details),
        }
    }
}

impl fmt::Display for SpeciesDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeciesDataError::LineNotFound(name) => {
                write!(f, "Species line not found: {}", name)
            }
            SpeciesDataError::StageOutOfRange { line, stage } => {
                write!(f, "Line {} has no form for stage {}", line, stage)
            }
            SpeciesDataError::MalformedData(details) => {
                write!(f, "Malformed species data: {}", details)
            }
        }
    }
}

impl fmt::Display for EfficiencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EfficiencyError::UnknownMultiplier(value) => {
                write!(f, "No efficiency tag for multiplier {}", value)
            }
        }
    }
}

impl fmt::Display for BattleStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleStateError::BattleAlreadyResolved => {
                write!(f, "Battle has already resolved")
            }
            BattleStateError::OutOfTurn => {
                write!(f, "It is not that side's turn to attack")
            }
        }
    }
}

impl std::error::Error for EngineError {}
impl std::error::Error for SpeciesDataError {}
impl std::error::Error for EfficiencyError {}
impl std::error::Error for BattleStateError {}

impl From<SpeciesDataError> for EngineError {
    fn from(err: SpeciesDataError) -> Self {
        EngineError::SpeciesData(err)
    }
}

impl From<EfficiencyError> for EngineError {
    fn from(err: EfficiencyError) -> Self {
        EngineError::Efficiency(err)
    }
}

impl From<BattleStateError> for EngineError {
    fn from(err: BattleStateError) -> Self {
        EngineError::BattleState(err)
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Storage(err.to_string())
    }
}

/// Type alias for Results using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

/// Type alias for Results using SpeciesDataError
pub type SpeciesDataResult<T> = Result<T, SpeciesDataError>;
