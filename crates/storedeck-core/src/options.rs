use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{new_id, CoreError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    #[default]
    Text,
    /// Values are rendered as swatches, e.g. `"#1f2937"`.
    Color,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Text => write!(f, "text"),
            OptionKind::Color => write!(f, "color"),
        }
    }
}

impl FromStr for OptionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "text" => Ok(OptionKind::Text),
            "color" => Ok(OptionKind::Color),
            other => Err(CoreError::InvalidOptionKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionValue {
    pub id: String,
    pub value: String,
    /// Presentation hint such as a color hex code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
}

/// A named axis of variation, e.g. "Color" with values Red and Blue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: OptionKind,
    #[serde(default)]
    pub values: Vec<OptionValue>,
}

impl ProductOption {
    /// Option with the given name and values, each value receiving a fresh id.
    ///
    /// Values are trimmed and blank ones skipped, matching
    /// [`OptionRegistry::add_value`].
    #[must_use]
    pub fn with_values<I, S>(name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = values
            .into_iter()
            .filter_map(|raw| {
                let value = raw.as_ref().trim();
                (!value.is_empty()).then(|| OptionValue {
                    id: new_id(),
                    value: value.to_string(),
                    meta: None,
                })
            })
            .collect();

        Self {
            id: new_id(),
            name: name.to_string(),
            kind: OptionKind::Text,
            values,
        }
    }

    /// Parse a `Name=value1,value2` spec as typed on the command line.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidOptionSpec` if the `=` separator or the
    /// option name is missing.
    pub fn parse_spec(spec: &str) -> Result<Self, CoreError> {
        let (name, values) = spec
            .split_once('=')
            .ok_or_else(|| CoreError::InvalidOptionSpec(spec.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::InvalidOptionSpec(spec.to_string()));
        }
        Ok(Self::with_values(name, values.split(',')))
    }

    #[must_use]
    pub fn value_strings(&self) -> Vec<&str> {
        self.values.iter().map(|v| v.value.as_str()).collect()
    }
}

/// Ordered option definitions for the product being edited.
///
/// Every mutator returns whether the registry changed. Ids that are not
/// present are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRegistry {
    options: Vec<ProductOption>,
}

impl OptionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn options(&self) -> &[ProductOption] {
        &self.options
    }

    #[must_use]
    pub fn get(&self, option_id: &str) -> Option<&ProductOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Appends an unnamed text option with no values and returns its id.
    pub fn add_option(&mut self) -> String {
        let id = new_id();
        self.options.push(ProductOption {
            id: id.clone(),
            name: String::new(),
            kind: OptionKind::Text,
            values: Vec::new(),
        });
        id
    }

    /// Appends a fully built option, e.g. one parsed by
    /// [`ProductOption::parse_spec`].
    pub fn push_option(&mut self, option: ProductOption) -> String {
        let id = option.id.clone();
        self.options.push(option);
        id
    }

    pub fn rename_option(&mut self, option_id: &str, name: &str) -> bool {
        match self.get_mut(option_id) {
            Some(option) => {
                option.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Switches the option kind. Existing values are kept as entered.
    pub fn set_option_kind(&mut self, option_id: &str, kind: OptionKind) -> bool {
        match self.get_mut(option_id) {
            Some(option) => {
                option.kind = kind;
                true
            }
            None => false,
        }
    }

    /// Appends `raw_value` (trimmed) to the option. Blank input is ignored.
    ///
    /// Duplicates are not rejected.
    pub fn add_value(&mut self, option_id: &str, raw_value: &str) -> Option<String> {
        let value = raw_value.trim();
        if value.is_empty() {
            return None;
        }
        let option = self.get_mut(option_id)?;
        let id = new_id();
        option.values.push(OptionValue {
            id: id.clone(),
            value: value.to_string(),
            meta: None,
        });
        Some(id)
    }

    pub fn remove_value(&mut self, option_id: &str, value_id: &str) -> bool {
        let Some(option) = self.get_mut(option_id) else {
            return false;
        };
        let before = option.values.len();
        option.values.retain(|v| v.id != value_id);
        option.values.len() != before
    }

    pub fn remove_option(&mut self, option_id: &str) -> bool {
        let before = self.options.len();
        self.options.retain(|o| o.id != option_id);
        self.options.len() != before
    }

    fn get_mut(&mut self, option_id: &str) -> Option<&mut ProductOption> {
        self.options.iter_mut().find(|o| o.id == option_id)
    }
}
