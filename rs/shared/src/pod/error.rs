use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum QuantityError {
    #[error("Invalid quantity {quantity:?}: {reason}")]
    Invalid { quantity: String, reason: String },
    #[error("Quantity out of range: {0}")]
    OutOfRange(String),
}
