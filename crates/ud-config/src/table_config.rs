use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_CHOICES, MAX_PAGE_SIZE,
    MIN_PAGE_SIZE,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page when no explicit size is given
    pub page_size: usize,
    /// Sizes offered by the rows-per-page selector
    pub page_size_choices: Vec<usize>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_choices: DEFAULT_PAGE_SIZE_CHOICES.to_vec(),
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.page_size < MIN_PAGE_SIZE || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::table(format!(
                "table.page_size must be {}-{}, got {}",
                MIN_PAGE_SIZE, MAX_PAGE_SIZE, self.page_size
            )));
        }

        if self.page_size_choices.is_empty() {
            return Err(ConfigError::table("table.page_size_choices must not be empty"));
        }

        if let Some(bad) = self
            .page_size_choices
            .iter()
            .find(|&&size| !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&size))
        {
            return Err(ConfigError::table(format!(
                "table.page_size_choices entries must be {}-{}, got {}",
                MIN_PAGE_SIZE, MAX_PAGE_SIZE, bad
            )));
        }

        Ok(())
    }
}
