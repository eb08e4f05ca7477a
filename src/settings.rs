use std::env::VarError;

use fuzzy_logic::ImplicationType;
use serde::{Deserialize, Serialize};

use crate::error::{map_internal_err, CustomError};

pub const IMPLICATION_VAR: &str = "FUZZY_IMPLICATION";

fn default_implication() -> ImplicationType {
    ImplicationType::ZadehMaxMin
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Formula used to build the implication relation of every rule.
    #[serde(default = "default_implication")]
    pub implication: ImplicationType,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            implication: default_implication(),
        }
    }
}

impl Settings {
    /// Read the settings from the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self, CustomError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| match dotenvy::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
            Err(e) => Err(map_internal_err(e)),
        })
    }

    /// Build the settings from an arbitrary key lookup; absent keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CustomError>
    where
        F: Fn(&str) -> Result<Option<String>, CustomError>,
    {
        let mut settings = Settings::default();

        if let Some(value) = lookup(IMPLICATION_VAR)? {
            settings.implication = value
                .parse()
                .map_err(|_| CustomError::InvalidSetting {
                    key: IMPLICATION_VAR.to_string(),
                    value: value.clone(),
                })?;
        }

        log::debug!("Using implication {}", settings.implication);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(
        vars: HashMap<&'static str, &'static str>,
    ) -> impl Fn(&str) -> Result<Option<String>, CustomError> {
        move |key: &str| Ok(vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_default() {
        let settings = Settings::from_lookup(lookup(HashMap::new())).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.implication, ImplicationType::ZadehMaxMin);
    }

    #[test]
    fn test_lookup() {
        let settings =
            Settings::from_lookup(lookup(HashMap::from([(IMPLICATION_VAR, "algebraic_product")])))
                .unwrap();
        assert_eq!(settings.implication, ImplicationType::AlgebraicProduct);
    }

    #[test]
    fn test_lookup_invalid() {
        let err = Settings::from_lookup(lookup(HashMap::from([(IMPLICATION_VAR, "goguen")])));
        assert_eq!(
            err,
            Err(CustomError::InvalidSetting {
                key: IMPLICATION_VAR.into(),
                value: "goguen".into(),
            })
        );
    }

    #[test]
    fn test_lookup_failure() {
        let err = Settings::from_lookup(|_| Err(map_internal_err("unreadable")));
        assert_eq!(err, Err(CustomError::InternalError("unreadable".into())));
    }

    #[test]
    fn test_from_env() {
        std::env::set_var(IMPLICATION_VAR, "minimum");
        let settings = Settings::from_env();
        std::env::remove_var(IMPLICATION_VAR);

        assert_eq!(settings.unwrap().implication, ImplicationType::Minimum);
    }

    #[test]
    fn test_deserialize() {
        let settings: Settings =
            serde_json::from_str(r#"{ "implication": "zadeh_arithmetic" }"#).unwrap();
        assert_eq!(settings.implication, ImplicationType::ZadehArithmetic);

        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());

        assert!(serde_json::from_str::<Settings>(r#"{ "implication": "goguen" }"#).is_err());
        assert_eq!(
            serde_json::to_string(&Settings::default()).unwrap(),
            r#"{"implication":"zadeh_max_min"}"#
        );
    }
}
