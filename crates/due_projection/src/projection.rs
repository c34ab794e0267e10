use chrono::Datelike;
use chrono::Months;
use chrono::NaiveDate;
use maintenance_environment::frequency::Frequency;
use maintenance_environment::history::HistoryEntry;
use maintenance_environment::master_record::MasterRecord;
use maintenance_environment::parse_maintenance_date;
use tracing::debug;

/// Hard ceiling on forward steps when projecting into a target year. A
/// validated frequency never gets near this, it only guards termination.
const MAX_PROJECTION_STEPS: usize = 200;

/// Stop once a candidate runs this many years past the target year.
const MAX_LOOKAHEAD_YEARS: i32 = 10;

/// The reference date a projection starts from, with the offset decision
/// encoded in the variant instead of a flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor
{
    /// The date IS the next due date, no offset applied.
    Explicit(NaiveDate),

    /// The task was last completed on this date, the next due date is this
    /// plus one frequency interval.
    LastCompleted(NaiveDate),
}

impl Anchor
{
    /// The first due date implied by this anchor.
    ///
    /// Month arithmetic clamps the day-of-month to the end of shorter months
    /// (Jan 31 + 1 month = Feb 28/29); later steps proceed from the clamped
    /// day.
    pub fn first_due(&self, frequency_months: u32) -> Option<NaiveDate>
    {
        match self {
            Anchor::Explicit(date) => Some(*date),
            Anchor::LastCompleted(date) => date.checked_add_months(Months::new(frequency_months)),
        }
    }
}

/// Resolves the anchor for a master record.
///
/// Priority, first match wins:
/// 1. latest parseable `completed_date` among matching history entries
/// 2. the record's explicit `next_due_date`, taken verbatim
/// 3. the record's legacy `last_done_date`, offset by the frequency
pub fn resolve_anchor(master: &MasterRecord, history: &[HistoryEntry]) -> Option<Anchor>
{
    if let Some(completed) = latest_completed_date(master, history) {
        debug!(target: "planning", master_id = master.id(), %completed, "anchor taken from history");
        return Some(Anchor::LastCompleted(completed));
    }

    if let Some(next_due) = master.next_due_date().and_then(parse_maintenance_date) {
        return Some(Anchor::Explicit(next_due));
    }

    master.last_done_date().and_then(parse_maintenance_date).map(Anchor::LastCompleted)
}

/// The single next due date for a master record, or `None` when the record
/// cannot be scheduled (invalid frequency or no resolvable anchor). The
/// result is not filtered by past/future.
pub fn calculate_next_due_date(master: &MasterRecord, history: &[HistoryEntry]) -> Option<NaiveDate>
{
    let frequency_months = Frequency::parse(master.frequency()).months()?;
    let anchor = resolve_anchor(master, history)?;

    anchor.first_due(frequency_months)
}

/// Every due date of the recurring task falling within the target year, in
/// ascending order. Invalid frequency or no resolvable anchor degrades to an
/// empty list, the planner is best-effort and never faults on record data.
pub fn due_dates_in_year(master: &MasterRecord, history: &[HistoryEntry], target_year: i32) -> Vec<NaiveDate>
{
    let Some(frequency_months) = Frequency::parse(master.frequency()).months() else {
        debug!(target: "planning", master_id = master.id(), "invalid frequency, nothing scheduled");
        return vec![];
    };

    let Some(anchor) = resolve_anchor(master, history) else {
        return vec![];
    };

    let Some(base) = anchor.first_due(frequency_months) else {
        return vec![];
    };

    let Some(first_candidate) = backtrack_before_year(base, frequency_months, target_year) else {
        return vec![];
    };

    let mut due_dates = vec![];
    let mut current = first_candidate;

    for _ in 0..MAX_PROJECTION_STEPS {
        if current.year() > target_year {
            break;
        }
        if current.year() == target_year {
            due_dates.push(current);
        }

        match current.checked_add_months(Months::new(frequency_months)) {
            Some(next) => current = next,
            None => break,
        }

        if current.year() > target_year + MAX_LOOKAHEAD_YEARS {
            break;
        }
    }

    due_dates
}

/// Rolls a master record's anchor forward after a task is marked done: the
/// new next-due date is the completion date plus one frequency interval.
/// `None` when the frequency is invalid; the caller persists the result.
pub fn roll_forward_on_completion(master: &MasterRecord, completed: NaiveDate) -> Option<NaiveDate>
{
    let frequency_months = Frequency::parse(master.frequency()).months()?;
    completed.checked_add_months(Months::new(frequency_months))
}

/// Steps the base date backwards until it lands strictly before January 1 of
/// the target year, then advances once to the first candidate occurrence.
/// An anchor inside or past the target year would otherwise skip the cycles
/// belonging to the year.
fn backtrack_before_year(base: NaiveDate, frequency_months: u32, target_year: i32) -> Option<NaiveDate>
{
    let start_of_year = NaiveDate::from_ymd_opt(target_year, 1, 1)?;

    let mut date = base;
    while date >= start_of_year {
        date = date.checked_sub_months(Months::new(frequency_months))?;
    }

    date.checked_add_months(Months::new(frequency_months))
}

/// Latest parseable completion date among history entries tied to this
/// master record. Strictly-later wins, so ties keep the earliest entry in
/// input order; the history slice is never reordered.
fn latest_completed_date(master: &MasterRecord, history: &[HistoryEntry]) -> Option<NaiveDate>
{
    let mut latest: Option<NaiveDate> = None;

    for entry in history.iter().filter(|entry| entry.matches(master)) {
        let Some(completed) = entry.completed_date().and_then(parse_maintenance_date) else {
            continue;
        };

        if latest.is_none_or(|current| completed > current) {
            latest = Some(completed);
        }
    }

    latest
}
