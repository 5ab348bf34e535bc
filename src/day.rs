use chrono::{Days, Local, NaiveDate};

/// The date the view is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySelector {
    selected: NaiveDate,
}

impl DaySelector {
    pub fn new(selected: NaiveDate) -> Self {
        Self { selected }
    }

    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn select(&mut self, date: NaiveDate) -> NaiveDate {
        self.selected = date;
        self.selected
    }

    // chrono's representable range is the only bound; past it the date holds.
    pub fn previous_day(&mut self) -> NaiveDate {
        if let Some(date) = self.selected.checked_sub_days(Days::new(1)) {
            self.selected = date;
        }
        self.selected
    }

    pub fn next_day(&mut self) -> NaiveDate {
        if let Some(date) = self.selected.checked_add_days(Days::new(1)) {
            self.selected = date;
        }
        self.selected
    }
}
