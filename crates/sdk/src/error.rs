use thiserror::Error;

/// Error converting between fixed-point and display amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Raw amount is not a non-negative integer digit string.
    #[error("invalid fixed-point amount: {0:?}")]
    InvalidAmountFormat(String),

    /// Display value is negative, NaN or infinite.
    #[error("invalid display amount: {0}")]
    InvalidAmountValue(String),

    /// Amount has more significant digits than the display decimal can hold.
    #[error("amount does not fit decimal precision: {0}")]
    AmountOutOfRange(String),
}

/// Error mapping a raw contract record into its read model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// Required field is absent, named by its path within the record.
    #[error("missing field `{0}`")]
    MissingField(String),

    /// Amount field is present but could not be converted.
    #[error("field `{field}`: {source}")]
    InvalidAmount {
        field: String,
        #[source]
        source: AmountError,
    },

    /// Element of a batch failed to map, no partial batch is produced.
    #[error("record #{index}: {source}")]
    BatchElementFailure {
        index: usize,
        #[source]
        source: Box<MapError>,
    },
}

impl MapError {
    /// Prefixes the field path with the path of the enclosing record.
    pub(crate) fn nested(self, parent: &str) -> Self {
        match self {
            MapError::MissingField(field) => MapError::MissingField(format!("{parent}.{field}")),
            MapError::InvalidAmount { field, source } => {
                MapError::InvalidAmount { field: format!("{parent}.{field}"), source }
            },
            other => other,
        }
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Amount(#[from] AmountError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("rpc error: {0}")]
    Rpc(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
