use chrono::Datelike;
use chrono::NaiveDate;
use due_projection::projection::due_dates_in_year;
use maintenance_environment::history::HistoryEntry;
use maintenance_environment::master_record::MasterRecord;
use maintenance_environment::master_record::MasterRecordId;

/// One occurrence already placed on the annual plan.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedTask
{
    pub master_id: MasterRecordId,
    pub due_date: NaiveDate,
}

impl PlannedTask
{
    pub fn new(master_id: MasterRecordId, due_date: NaiveDate) -> Self
    {
        Self { master_id, due_date }
    }
}

/// Coverage of one master record against a target year: how many occurrences
/// the recurrence demands, how many are already planned, and which date to
/// place next.
#[derive(Clone, Debug, PartialEq)]
pub struct YearPlanStatus
{
    /// Every date the task is expected to be due in the target year.
    pub required: Vec<NaiveDate>,

    /// Occurrences already placed on the plan for that year.
    pub planned_count: usize,

    /// The first expected date not yet covered by a planned occurrence.
    /// `None` once the year is fully planned.
    pub suggested_next: Option<NaiveDate>,
}

impl YearPlanStatus
{
    pub fn is_fully_planned(&self) -> bool
    {
        self.planned_count >= self.required.len()
    }

    pub fn remaining(&self) -> usize
    {
        self.required.len().saturating_sub(self.planned_count)
    }
}

/// Derives the plan coverage for one master record. Planned occurrences are
/// counted strictly, not matched to dates, so a plan moved within the year
/// still counts toward the same cycle.
pub fn year_plan_status(master: &MasterRecord, history: &[HistoryEntry], planned: &[PlannedTask], target_year: i32) -> YearPlanStatus
{
    let required = due_dates_in_year(master, history, target_year);

    let planned_count = planned
        .iter()
        .filter(|task| task.master_id == master.id() && task.due_date.year() == target_year)
        .count();

    let suggested_next = required.get(planned_count).copied();

    YearPlanStatus {
        required,
        planned_count,
        suggested_next,
    }
}

/// Master records with at least one expected occurrence in the target year.
pub fn masters_due_in_year<'a>(masters: &'a [MasterRecord], history: &[HistoryEntry], target_year: i32) -> Vec<&'a MasterRecord>
{
    masters
        .iter()
        .filter(|master| !due_dates_in_year(master, history, target_year).is_empty())
        .collect()
}
