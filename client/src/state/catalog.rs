//! Memory catalog state: the loaded collection, filter controls, and the
//! record shown in the detail modal.
//!
//! DESIGN
//! ======
//! `memories` is the authoritative collection and is only ever replaced as a
//! whole by a load. Everything the list shows is a derived copy in `visible`,
//! recomputed from the current control values each time filtering runs, so
//! resetting always restores the original order.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use archive::MemoryRecord;

pub const NO_RESULTS: &str = "По выбранным фильтрам воспоминаний не найдено.";
pub const LOAD_FAILED: &str = "Не удалось загрузить воспоминания. Обновите страницу, чтобы попробовать снова.";

/// Progress of the one-shot collection fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Pending,
    Ready,
    Failed(String),
}

/// Raw values of the three filter selects. Empty string means "any".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterControls {
    pub year: String,
    pub region: String,
    pub tag: String,
}

/// Which filter select changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Year,
    Region,
    Tag,
}

/// Filter criteria derived from [`FilterControls`]; `None` imposes no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryFilter {
    pub year: Option<String>,
    pub region: Option<String>,
    pub tag: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_owned()) }
}

impl MemoryFilter {
    #[must_use]
    pub fn from_controls(controls: &FilterControls) -> Self {
        Self {
            year: non_empty(&controls.year),
            region: non_empty(&controls.region),
            tag: non_empty(&controls.tag),
        }
    }

    /// Whether `record` satisfies every provided criterion.
    #[must_use]
    pub fn matches(&self, record: &MemoryRecord) -> bool {
        let year_ok = self.year.as_deref().map_or(true, |y| record.year.to_string() == y);
        let region_ok = self.region.as_deref().map_or(true, |r| record.region == r);
        let tag_ok = self.tag.as_deref().map_or(true, |t| record.has_tag(t));
        year_ok && region_ok && tag_ok
    }

    /// Stable sub-sequence of `records` matching this filter.
    #[must_use]
    pub fn apply(&self, records: &[MemoryRecord]) -> Vec<MemoryRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Catalog controller state provided to components through context.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    memories: Vec<MemoryRecord>,
    pub visible: Vec<MemoryRecord>,
    pub controls: FilterControls,
    pub detail: Option<MemoryRecord>,
    pub status: LoadStatus,
}

impl CatalogState {
    /// Install a freshly loaded collection and show it unfiltered. Any
    /// selection made while the fetch was pending is cleared with it.
    pub fn set_collection(&mut self, records: Vec<MemoryRecord>) {
        self.controls = FilterControls::default();
        self.visible.clone_from(&records);
        self.memories = records;
        self.status = LoadStatus::Ready;
    }

    /// Record a failed load. The catalog stays empty.
    pub fn fail_load(&mut self, message: String) {
        self.memories.clear();
        self.visible.clear();
        self.status = LoadStatus::Failed(message);
    }

    /// The authoritative collection in load order.
    #[must_use]
    pub fn memories(&self) -> &[MemoryRecord] {
        &self.memories
    }

    /// Update one select's value and re-run filtering.
    pub fn set_control(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::Year => self.controls.year = value,
            FilterField::Region => self.controls.region = value,
            FilterField::Tag => self.controls.tag = value,
        }
        self.apply_filters();
    }

    /// Recompute `visible` from the current control values.
    pub fn apply_filters(&mut self) {
        let filter = MemoryFilter::from_controls(&self.controls);
        self.visible = filter.apply(&self.memories);
    }

    /// Clear all controls and show the full collection again.
    pub fn reset_filters(&mut self) {
        self.controls = FilterControls::default();
        self.visible.clone_from(&self.memories);
    }

    /// Whether the "nothing found" indicator should be visible.
    #[must_use]
    pub fn shows_empty_state(&self) -> bool {
        self.status != LoadStatus::Pending && self.visible.is_empty()
    }

    /// Text of the empty-state indicator, or `None` while it is hidden.
    #[must_use]
    pub fn empty_state_message(&self) -> Option<&'static str> {
        if !self.shows_empty_state() {
            return None;
        }
        match self.status {
            LoadStatus::Failed(_) => Some(LOAD_FAILED),
            LoadStatus::Pending | LoadStatus::Ready => Some(NO_RESULTS),
        }
    }

    pub fn open_detail(&mut self, record: MemoryRecord) {
        self.detail = Some(record);
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }
}
