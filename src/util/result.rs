use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("InvalidArgument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub fn invalid_argument(msg: &str) -> Self {
        Self::InvalidArgument(msg.to_owned())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::{Error, Result};

    #[test]
    fn test_result_move() {
        let ok: Result<()> = Ok(());
        let ok2 = ok;
        assert!(ok2.is_ok());

        let status: Result<()> = Err(Error::invalid_argument("custom InvalidArgument message"));
        let status2 = status;
        let error = status2.unwrap_err();
        assert!(error.is_invalid_argument());
        assert_eq!(
            "InvalidArgument: custom InvalidArgument message",
            error.to_string()
        );
    }
}
