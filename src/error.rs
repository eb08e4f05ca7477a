use fuzzy_logic::FuzzyError;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CustomError {
    #[error(transparent)]
    Fuzzy(#[from] FuzzyError),

    #[error("Setting {key} has an invalid value \"{value}\"")]
    InvalidSetting { key: String, value: String },

    #[error("Rule {0} does not exist")]
    RuleNotFound(usize),

    #[error("The engine has no rules")]
    NoRules,

    #[error("{0}")]
    InternalError(String),
}

pub fn map_internal_err<T: std::fmt::Display>(e: T) -> CustomError {
    use CustomError::*;
    InternalError(e.to_string())
}
