use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse species configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Per-species user configuration consumed by the torsion name resolver.
///
/// `tors_names` is the user-declared rotor-group list; `ts_tors_names` is the
/// auto-generated transition-state rotor name list, kept separate so callers
/// can tell which path produced the selection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SpeciesConfig {
    #[serde(default)]
    pub tors_names: Option<Vec<Vec<String>>>,
    #[serde(default)]
    pub ts_tors_names: Option<Vec<String>>,
}

impl SpeciesConfig {
    pub fn from_toml_str(doc: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(doc)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_user_declared_groups() {
        let cfg = SpeciesConfig::from_toml_str(
            r#"
            tors_names = [["D3"], ["D5", "D8"]]
            "#,
        )
        .unwrap();
        assert_eq!(
            cfg.tors_names,
            Some(vec![
                vec!["D3".to_owned()],
                vec!["D5".to_owned(), "D8".to_owned()]
            ])
        );
        assert!(cfg.ts_tors_names.is_none());
    }

    #[test]
    fn empty_document_is_an_empty_config() {
        let cfg = SpeciesConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, SpeciesConfig::default());
    }
}
