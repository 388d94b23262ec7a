use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_CATEGORY_LENGTH, DEFAULT_MAX_TITLE_LENGTH,
    MAX_MAX_CATEGORY_LENGTH, MAX_MAX_TITLE_LENGTH, MIN_MAX_CATEGORY_LENGTH, MIN_MAX_TITLE_LENGTH,
};

use serde::Deserialize;

/// Length limits applied to article fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_title_length: usize,
    pub max_category_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_category_length: DEFAULT_MAX_CATEGORY_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_MAX_TITLE_LENGTH..=MAX_MAX_TITLE_LENGTH).contains(&self.max_title_length) {
            return Err(ConfigError::validation(format!(
                "validation.max_title_length must be {}-{}, got {}",
                MIN_MAX_TITLE_LENGTH, MAX_MAX_TITLE_LENGTH, self.max_title_length
            )));
        }

        if !(MIN_MAX_CATEGORY_LENGTH..=MAX_MAX_CATEGORY_LENGTH).contains(&self.max_category_length)
        {
            return Err(ConfigError::validation(format!(
                "validation.max_category_length must be {}-{}, got {}",
                MIN_MAX_CATEGORY_LENGTH, MAX_MAX_CATEGORY_LENGTH, self.max_category_length
            )));
        }

        Ok(())
    }
}
