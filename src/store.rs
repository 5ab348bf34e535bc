use crate::models::{DayTasks, Task};
use chrono::NaiveDate;

/// In-memory briefing tasks, one ordered bucket per calendar day.
///
/// Seeded once at startup. Nothing here is written back anywhere; a restart
/// brings the seed state back.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    days: DayTasks,
}

impl TaskStore {
    pub fn new(seed: DayTasks) -> Self {
        Self { days: seed }
    }

    /// Tasks for `date` in display order. Unknown dates give an empty slice.
    pub fn get_tasks(&self, date: NaiveDate) -> &[Task] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn task(&self, date: NaiveDate, task_id: u64) -> Option<&Task> {
        self.get_tasks(date).iter().find(|task| task.id == task_id)
    }

    /// Flips the read flag of `task_id` on `date` and returns that day's bucket.
    ///
    /// An id that is not in the bucket leaves everything untouched; absent
    /// dates are not materialized.
    pub fn toggle_read(&mut self, date: NaiveDate, task_id: u64) -> Vec<Task> {
        let Some(tasks) = self.days.get_mut(&date) else {
            return Vec::new();
        };
        if let Some(task) = tasks.iter_mut().find(|task| task.id == task_id) {
            task.read = !task.read;
        }
        tasks.clone()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }
}
