use busconecta_booking::flow::FlowError;
use busconecta_booking::repository::LedgerError;
use busconecta_core::account::DirectoryError;
use busconecta_core::kv::KvError;
use busconecta_core::payment::PaymentError;
use busconecta_core::CoreError;

/// Everything a screen can surface. Each variant maps to one blocking
/// modal message; nothing is retried, logged upward or escalated past the
/// screen that triggered it.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("a user with this e-mail already exists")]
    DuplicateEmail,

    #[error("e-mail or password incorrect")]
    InvalidCredentials,

    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The charge went through but the reservation never reached storage.
    #[error("payment confirmed, but the reservation could not be stored: {0}")]
    PersistAfterPayment(#[source] LedgerError),

    #[error("storage is unavailable: {0}")]
    Storage(#[from] KvError),

    #[error("payment failed: {0}")]
    Payment(#[from] PaymentError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The text shown in the blocking alert.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(message) => message.clone(),
            AppError::DuplicateEmail => "A user with this e-mail already exists.".to_string(),
            AppError::InvalidCredentials => "E-mail or password incorrect.".to_string(),
            AppError::Flow(FlowError::SeatLimitReached { limit }) => {
                format!("Only {} seat(s) can be selected.", limit)
            }
            AppError::Flow(FlowError::IncompleteSeatSelection) => {
                "Select a seat for every passenger.".to_string()
            }
            AppError::Flow(_) => "This booking can no longer be changed.".to_string(),
            AppError::Ledger(LedgerError::MissingFields) => {
                "Enter a new date and a new time to reschedule.".to_string()
            }
            AppError::PersistAfterPayment(_) => {
                "Payment confirmed, but the reservation could not be stored locally.".to_string()
            }
            AppError::Payment(_) => "The payment could not be completed. Try again.".to_string(),
            AppError::Ledger(_) | AppError::Storage(_) | AppError::Internal(_) => {
                "Something went wrong. Try again.".to_string()
            }
        }
    }
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::DuplicateEmail => AppError::DuplicateEmail,
            DirectoryError::InvalidCredentials => AppError::InvalidCredentials,
            DirectoryError::Storage(e) => AppError::Storage(e),
        }
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ValidationError(message) => AppError::Validation(message),
            CoreError::InternalError(message) => AppError::Internal(message),
        }
    }
}
