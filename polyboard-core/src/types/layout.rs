use std::collections::HashMap;

/// One possible result of pressing a key.
///
/// When `is_dead_key` is set, `value` is a diacritic marker that combines
/// with the next produced value instead of being inserted directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOutput {
    pub value: String,
    pub is_dead_key: bool,
}

impl KeyOutput {
    /// Creates a literal output
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_dead_key: false,
        }
    }

    /// Creates a dead key output
    pub fn dead(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_dead_key: true,
        }
    }
}

/// The modifier-dependent output table of one physical key.
///
/// Every binding has a default output; each override covers a distinct
/// modifier bucket and an absent override falls through during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    /// Caps Lock acts as Shift for this key (letter keys)
    pub caps_is_shift: bool,
    pub output_default: KeyOutput,
    pub output_shift: Option<KeyOutput>,
    pub output_ctrl: Option<KeyOutput>,
    pub output_shift_ctrl: Option<KeyOutput>,
    pub output_ctrl_alt: Option<KeyOutput>,
    pub output_shift_ctrl_alt: Option<KeyOutput>,
    pub output_shift_caps: Option<KeyOutput>,
}

impl KeyBinding {
    /// Creates a binding with only a default output
    pub fn new(output_default: KeyOutput) -> Self {
        Self {
            caps_is_shift: false,
            output_default,
            output_shift: None,
            output_ctrl: None,
            output_shift_ctrl: None,
            output_ctrl_alt: None,
            output_shift_ctrl_alt: None,
            output_shift_caps: None,
        }
    }

    /// Creates a letter binding where Caps Lock selects the shifted output
    pub fn letter(lower: &str, upper: &str) -> Self {
        Self {
            caps_is_shift: true,
            output_shift: Some(KeyOutput::literal(upper)),
            ..Self::new(KeyOutput::literal(lower))
        }
    }

    /// Every output this binding can produce, paired with its slot name
    pub fn outputs(&self) -> impl Iterator<Item = (&'static str, &KeyOutput)> {
        let overrides = [
            ("output_shift", self.output_shift.as_ref()),
            ("output_ctrl", self.output_ctrl.as_ref()),
            ("output_shiftctrl", self.output_shift_ctrl.as_ref()),
            ("output_ctrlalt", self.output_ctrl_alt.as_ref()),
            ("output_shiftctrlalt", self.output_shift_ctrl_alt.as_ref()),
            ("output_shiftcaps", self.output_shift_caps.as_ref()),
        ];

        std::iter::once(("output_default", &self.output_default)).chain(
            overrides
                .into_iter()
                .filter_map(|(slot, output)| output.map(|o| (slot, o))),
        )
    }
}

/// Combination table of one dead key: following value -> composed result
pub type DeadKeyTable = HashMap<String, String>;

/// A validated, immutable keyboard layout for one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardLayout {
    /// Physical key code -> binding
    pub bindings: HashMap<String, KeyBinding>,
    /// Dead key value -> combination table
    pub dead_keys: HashMap<String, DeadKeyTable>,
    pub locale_name: String,
    pub language_name: String,
    pub flag_region_code: Option<String>,
}

impl KeyboardLayout {
    /// Gets the binding for a physical key code
    pub fn binding(&self, key_id: &str) -> Option<&KeyBinding> {
        self.bindings.get(key_id)
    }

    /// Checks whether a value starts a dead-key composition in this layout
    pub fn is_dead_key(&self, value: &str) -> bool {
        self.dead_keys.contains_key(value)
    }

    /// Looks up the composed result of `dead_key` followed by `value`
    pub fn combine(&self, dead_key: &str, value: &str) -> Option<&str> {
        self.dead_keys
            .get(dead_key)
            .and_then(|table| table.get(value))
            .map(String::as_str)
    }

    /// Display name used by layout pickers, e.g. "Deutsch (de_DE)"
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.language_name, self.locale_name)
    }
}
