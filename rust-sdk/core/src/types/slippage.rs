use crate::{percent_to_bps, CoreError, DEFAULT_SLIPPAGE_PERCENT, MAX_SLIPPAGE_PERCENT};

/// The slippage tolerance selected by the user.
///
/// `selected_percent` is always in `(0, 100]` and is the value every minimum amount is
/// derived from. `custom_input` keeps the raw text of the custom field, which may hold a
/// value that was never applied (out of range or not a number).
#[derive(Clone, Debug, PartialEq)]
pub struct SlippageConfig {
    selected_percent: f64,
    is_custom: bool,
    custom_input: String,
}

impl Default for SlippageConfig {
    fn default() -> Self {
        Self {
            selected_percent: DEFAULT_SLIPPAGE_PERCENT,
            is_custom: false,
            custom_input: String::new(),
        }
    }
}

impl SlippageConfig {
    pub fn new(selected_percent: f64) -> Result<Self, CoreError> {
        let mut config = Self::default();
        config.set_preset(selected_percent)?;
        Ok(config)
    }

    pub fn selected_percent(&self) -> f64 {
        self.selected_percent
    }

    pub fn selected_bps(&self) -> u16 {
        percent_to_bps(self.selected_percent)
    }

    pub fn is_custom(&self) -> bool {
        self.is_custom
    }

    pub fn custom_input(&self) -> &str {
        &self.custom_input
    }

    /// Select one of the preset tolerances and leave custom mode.
    pub fn set_preset(&mut self, percent: f64) -> Result<(), CoreError> {
        if !is_valid_slippage(percent) {
            return Err(CoreError::SlippageOutOfRange(percent.to_string()));
        }
        self.selected_percent = percent;
        self.is_custom = false;
        Ok(())
    }

    /// Apply the text of the custom slippage field.
    ///
    /// Only unsigned decimals (`^\d*\.?\d*$` after trimming) are kept as the field's text;
    /// anything else is dropped. A kept value becomes the active tolerance when it parses
    /// to a number in `(0, 100]`, otherwise the active tolerance stays as it was.
    ///
    /// # Returns
    /// - `Ok(percent)` when the input became the active tolerance
    /// - `Err(CoreError)` when the active tolerance is unchanged
    pub fn set_custom_input(&mut self, raw: &str) -> Result<f64, CoreError> {
        let value = raw.trim();
        if !is_unsigned_decimal(value) {
            return Err(CoreError::InvalidSlippageInput(value.to_string()));
        }
        self.custom_input = value.to_string();
        self.is_custom = true;

        let percent: f64 = value
            .parse()
            .map_err(|_| CoreError::InvalidSlippageInput(value.to_string()))?;
        if !is_valid_slippage(percent) {
            return Err(CoreError::SlippageOutOfRange(value.to_string()));
        }
        self.selected_percent = percent;
        Ok(percent)
    }
}

pub fn is_valid_slippage(percent: f64) -> bool {
    percent > 0.0 && percent <= MAX_SLIPPAGE_PERCENT
}

fn is_unsigned_decimal(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit() || c == '.')
        && value.chars().filter(|c| *c == '.').count() <= 1
}
