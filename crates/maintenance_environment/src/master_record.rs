use serde::Deserialize;
use serde::Serialize;

use crate::frequency::FrequencyField;

pub type MasterRecordId = u64;

/// The reusable definition of a recurring maintenance task: one piece of
/// equipment, one action, one recurrence interval, and the anchor dates the
/// projection starts from.
///
/// The date fields stay raw strings. Legacy exports contain hand-edited
/// values, and a field that does not parse counts as absent instead of
/// failing the record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MasterRecord
{
    id: MasterRecordId,
    equipment_code: String,
    action: String,
    frequency: FrequencyField,

    /// Explicit anchor: this date IS the next due date, no offset applied.
    #[serde(default)]
    next_due_date: Option<String>,

    /// Legacy anchor: the task was last done on this date, the next due date
    /// is this plus one frequency interval.
    #[serde(default)]
    last_done_date: Option<String>,
}

impl MasterRecord
{
    pub fn new(id: MasterRecordId, equipment_code: impl Into<String>, action: impl Into<String>, frequency: FrequencyField) -> Self
    {
        Self {
            id,
            equipment_code: equipment_code.into(),
            action: action.into(),
            frequency,
            next_due_date: None,
            last_done_date: None,
        }
    }

    pub fn with_next_due_date(mut self, next_due_date: impl Into<String>) -> Self
    {
        self.next_due_date = Some(next_due_date.into());
        self
    }

    pub fn with_last_done_date(mut self, last_done_date: impl Into<String>) -> Self
    {
        self.last_done_date = Some(last_done_date.into());
        self
    }

    pub fn id(&self) -> MasterRecordId
    {
        self.id
    }

    pub fn equipment_code(&self) -> &str
    {
        &self.equipment_code
    }

    pub fn action(&self) -> &str
    {
        &self.action
    }

    pub fn frequency(&self) -> &FrequencyField
    {
        &self.frequency
    }

    pub fn next_due_date(&self) -> Option<&str>
    {
        self.next_due_date.as_deref()
    }

    pub fn last_done_date(&self) -> Option<&str>
    {
        self.last_done_date.as_deref()
    }
}
