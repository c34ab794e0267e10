use serde::Deserialize;
use serde::Serialize;

use crate::master_record::MasterRecord;
use crate::master_record::MasterRecordId;

/// One past completed occurrence of a maintenance task.
///
/// Older exports predate the `master_id` link, so an entry can also be tied
/// to a master record through the `equipment_code` + `action` pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry
{
    #[serde(default)]
    master_id: Option<MasterRecordId>,
    equipment_code: String,
    action: String,
    #[serde(default)]
    completed_date: Option<String>,
}

impl HistoryEntry
{
    pub fn new(equipment_code: impl Into<String>, action: impl Into<String>) -> Self
    {
        Self {
            master_id: None,
            equipment_code: equipment_code.into(),
            action: action.into(),
            completed_date: None,
        }
    }

    pub fn with_master_id(mut self, master_id: MasterRecordId) -> Self
    {
        self.master_id = Some(master_id);
        self
    }

    pub fn with_completed_date(mut self, completed_date: impl Into<String>) -> Self
    {
        self.completed_date = Some(completed_date.into());
        self
    }

    /// Whether this entry records an occurrence of the given master record.
    /// The `master_id` link wins; entries without one fall back to the
    /// `equipment_code` + `action` pair.
    pub fn matches(&self, master: &MasterRecord) -> bool
    {
        if self.master_id == Some(master.id()) {
            return true;
        }
        self.equipment_code == master.equipment_code() && self.action == master.action()
    }

    pub fn master_id(&self) -> Option<MasterRecordId>
    {
        self.master_id
    }

    pub fn equipment_code(&self) -> &str
    {
        &self.equipment_code
    }

    pub fn action(&self) -> &str
    {
        &self.action
    }

    pub fn completed_date(&self) -> Option<&str>
    {
        self.completed_date.as_deref()
    }
}
