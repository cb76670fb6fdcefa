use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::types::{DeadKeyTable, KeyBinding, KeyOutput, KeyboardLayout};
use super::error::{LayoutError, Result};

/// Asset shape of a key output, before validation
#[derive(Debug, Deserialize)]
struct RawKeyOutput {
    value: String,
    #[serde(default)]
    is_deadkey: bool,
}

/// Asset shape of a binding; every slot is optional until validated
#[derive(Debug, Deserialize)]
struct RawKeyBinding {
    #[serde(default)]
    caps_is_shift: bool,
    output_default: Option<RawKeyOutput>,
    output_shift: Option<RawKeyOutput>,
    output_ctrl: Option<RawKeyOutput>,
    output_shiftctrl: Option<RawKeyOutput>,
    output_ctrlalt: Option<RawKeyOutput>,
    output_shiftctrlalt: Option<RawKeyOutput>,
    output_shiftcaps: Option<RawKeyOutput>,
}

#[derive(Debug, Deserialize)]
struct RawLayout {
    bindings: HashMap<String, RawKeyBinding>,
    #[serde(default)]
    deadkeys: HashMap<String, DeadKeyTable>,
    locale_name: String,
    language_name: String,
    #[serde(default)]
    flag_region_code: Option<String>,
}

pub struct LayoutLoader;

impl LayoutLoader {
    /// Parse and validate a layout from its JSON asset text
    pub fn from_json(json: &str) -> Result<KeyboardLayout> {
        let raw: RawLayout = serde_json::from_str(json)?;
        Self::validate(raw)
    }

    /// Read, parse and validate a layout asset file
    pub fn from_file(path: &Path) -> Result<KeyboardLayout> {
        let json = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(&json).map_err(|e| {
            log::warn!("Rejected layout asset {}: {}", path.display(), e);
            e
        })
    }

    fn validate(raw: RawLayout) -> Result<KeyboardLayout> {
        if raw.locale_name.trim().is_empty() {
            return Err(LayoutError::EmptyLocaleName);
        }
        if raw.language_name.trim().is_empty() {
            return Err(LayoutError::EmptyLanguageName(raw.locale_name));
        }
        if raw.deadkeys.contains_key("") {
            return Err(LayoutError::EmptyDeadKey(raw.locale_name));
        }

        let mut bindings = HashMap::with_capacity(raw.bindings.len());
        for (key, raw_binding) in raw.bindings {
            if key.is_empty() {
                return Err(LayoutError::EmptyKeyId);
            }
            let binding = Self::validate_binding(&key, raw_binding)?;
            bindings.insert(key, binding);
        }

        log::debug!(
            "Loaded layout {} with {} bindings and {} dead keys",
            raw.locale_name,
            bindings.len(),
            raw.deadkeys.len()
        );

        Ok(KeyboardLayout {
            bindings,
            dead_keys: raw.deadkeys,
            locale_name: raw.locale_name,
            language_name: raw.language_name,
            flag_region_code: raw.flag_region_code.filter(|code| !code.is_empty()),
        })
    }

    fn validate_binding(key: &str, raw: RawKeyBinding) -> Result<KeyBinding> {
        let output_default = raw
            .output_default
            .ok_or_else(|| LayoutError::MissingDefaultOutput { key: key.to_string() })?;

        let binding = KeyBinding {
            caps_is_shift: raw.caps_is_shift,
            output_default: Self::convert_output(output_default),
            output_shift: raw.output_shift.map(Self::convert_output),
            output_ctrl: raw.output_ctrl.map(Self::convert_output),
            output_shift_ctrl: raw.output_shiftctrl.map(Self::convert_output),
            output_ctrl_alt: raw.output_ctrlalt.map(Self::convert_output),
            output_shift_ctrl_alt: raw.output_shiftctrlalt.map(Self::convert_output),
            output_shift_caps: raw.output_shiftcaps.map(Self::convert_output),
        };

        // An empty value would insert nothing and, as a dead key, could never resolve
        if let Some((slot, _)) = binding.outputs().find(|(_, output)| output.value.is_empty()) {
            return Err(LayoutError::EmptyOutputValue {
                key: key.to_string(),
                slot,
            });
        }

        Ok(binding)
    }

    fn convert_output(raw: RawKeyOutput) -> KeyOutput {
        KeyOutput {
            value: raw.value,
            is_dead_key: raw.is_deadkey,
        }
    }
}
