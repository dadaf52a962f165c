use serde::{Deserialize, Serialize};

/// A single admission row: one patient's scheduled consultation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admission {
    pub id: u32,
    pub patient: String,
    pub age: u32,
    pub doctor: String,
    pub time: String,
}

/// Columns of the admissions table that can be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Patient,
    Age,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort column and direction for the admissions table.
///
/// Starts with no key (insertion order). Once a column has been chosen
/// there is no path back to the unsorted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: None,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortConfig {
    /// Header activation rule: requesting the column that is already active
    /// and ascending flips it to descending; any other request selects the
    /// requested column ascending.
    pub fn request(&mut self, key: SortKey) {
        if self.key == Some(key) && self.direction == SortDirection::Ascending {
            self.direction = SortDirection::Descending;
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Ascending;
        }
    }

    /// Indicator glyph for a column header, if that column is the active key.
    pub fn indicator(&self, key: SortKey) -> Option<&'static str> {
        if self.key == Some(key) {
            Some(match self.direction {
                SortDirection::Ascending => "▲",
                SortDirection::Descending => "▼",
            })
        } else {
            None
        }
    }
}

/// Fields of the add-registration form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Patient,
    Age,
    Doctor,
    Time,
}

impl DraftField {
    pub fn next(self) -> Self {
        match self {
            Self::Patient => Self::Age,
            Self::Age => Self::Doctor,
            Self::Doctor => Self::Time,
            Self::Time => Self::Patient,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Patient => Self::Time,
            Self::Age => Self::Patient,
            Self::Doctor => Self::Age,
            Self::Time => Self::Doctor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Patient => "Patient Name",
            Self::Age => "Age",
            Self::Doctor => "Doctor Name",
            Self::Time => "Consultation Time",
        }
    }

    /// Per-field input filter. The age field is a numeric input and only
    /// takes digits; every other field takes any printable character.
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::Age => c.is_ascii_digit(),
            _ => !c.is_control(),
        }
    }
}

/// In-progress values for a new admission while the add form is open.
/// Every field may be empty until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdmissionDraft {
    pub patient: String,
    pub age: String,
    pub doctor: String,
    pub time: String,
}

impl AdmissionDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Patient => &self.patient,
            DraftField::Age => &self.age,
            DraftField::Doctor => &self.doctor,
            DraftField::Time => &self.time,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Patient => &mut self.patient,
            DraftField::Age => &mut self.age,
            DraftField::Doctor => &mut self.doctor,
            DraftField::Time => &mut self.time,
        }
    }

    /// True when every field is populated and the draft can be submitted.
    pub fn is_complete(&self) -> bool {
        !self.patient.is_empty()
            && !self.age.is_empty()
            && !self.doctor.is_empty()
            && !self.time.is_empty()
    }

    pub fn clear(&mut self) {
        self.patient.clear();
        self.age.clear();
        self.doctor.clear();
        self.time.clear();
    }
}
