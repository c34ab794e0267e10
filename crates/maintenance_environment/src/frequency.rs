use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// A recurrence interval exactly as stored on a master record.
///
/// Legacy exports carry both plain numbers and free text such as `"6 months"`
/// or `"6"`. The raw representation is kept so round-trips do not rewrite
/// records; arithmetic only ever happens on a parsed [`Frequency`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrequencyField
{
    Number(f64),
    Text(String),
}

impl fmt::Display for FrequencyField
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            FrequencyField::Number(number) => write!(f, "{number}"),
            FrequencyField::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<u32> for FrequencyField
{
    fn from(months: u32) -> Self
    {
        FrequencyField::Number(months as f64)
    }
}

impl From<&str> for FrequencyField
{
    fn from(text: &str) -> Self
    {
        FrequencyField::Text(text.to_string())
    }
}

/// A recurrence interval in whole months, validated.
///
/// [`Frequency::parse`] is the only way to obtain one, so every call site
/// that does month arithmetic has gone through the same extraction rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frequency
{
    Valid(u32),
    Invalid,
}

impl Frequency
{
    /// Extracts the first contiguous run of digits from the field and reads
    /// it as whole months. No digits, zero, or overflow is `Invalid`.
    pub fn parse(field: &FrequencyField) -> Self
    {
        let text = field.to_string();
        let digits = text
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(char::is_ascii_digit)
            .collect::<String>();

        match digits.parse::<u32>() {
            Ok(months) if months > 0 => Frequency::Valid(months),
            _ => Frequency::Invalid,
        }
    }

    pub fn months(&self) -> Option<u32>
    {
        match self {
            Frequency::Valid(months) => Some(*months),
            Frequency::Invalid => None,
        }
    }
}
