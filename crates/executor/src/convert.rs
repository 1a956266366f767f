//! Error conversion from engine error types.
//!
//! This module provides conversions from [`PilaError`] and [`DecodeError`]
//! to the executor's [`Error`] type, plus the element payload decoder used
//! at the request boundary.

use piladb_core::{DecodeError, Element, PilaError, Value};

use crate::{Error, Result};

/// Convert a PilaError to an executor Error.
impl From<PilaError> for Error {
    fn from(err: PilaError) -> Self {
        match err {
            PilaError::StackEmpty => Error::StackEmpty,
            PilaError::StackBlocked => Error::StackBlocked,
            PilaError::CapacityExceeded { max } => Error::CapacityExceeded { max },
            PilaError::NotFound { entity: "database", id } => Error::DatabaseNotFound { database: id },
            PilaError::NotFound { id, .. } => Error::StackNotFound { stack: id },
            PilaError::IdentityCollision { entity, name } => Error::AlreadyExists {
                entity: entity.to_string(),
                name,
            },
            PilaError::AlreadyOwned {
                entity,
                name,
                owner,
            } => Error::AlreadyOwned {
                entity: entity.to_string(),
                name,
                owner,
            },
            PilaError::Decode(e) => e.into(),
            PilaError::Config(reason) => Error::InvalidInput { reason },
        }
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::InvalidElement {
            reason: err.to_string(),
        }
    }
}

/// Convert an engine result into an executor result.
pub(crate) fn convert_result<T>(r: piladb_core::PilaResult<T>) -> Result<T> {
    r.map_err(Error::from)
}

/// Decode an `{"element": ...}` request body into its value.
///
/// `None` stands for an absent body and is reported distinctly from an
/// empty or malformed one.
pub fn decode_element(payload: Option<&[u8]>) -> Result<Value> {
    Ok(Element::decode(payload)?.into_value())
}
