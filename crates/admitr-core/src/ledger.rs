use crate::exceptions::AdmissionError;
use crate::models::{Admission, AdmissionDraft, SortConfig, SortDirection, SortKey};

/// Insertion-ordered admission list together with its id counter and sort
/// configuration. This is the single owner of the table's data; the display
/// order is derived on demand and never stored.
#[derive(Debug, Clone)]
pub struct AdmissionLedger {
    admissions: Vec<Admission>,
    next_id: u32,
    sort: SortConfig,
}

impl Default for AdmissionLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl AdmissionLedger {
    pub fn new() -> Self {
        Self {
            admissions: Vec::new(),
            next_id: 1,
            sort: SortConfig::default(),
        }
    }

    /// Ledger pre-populated with today's demo admissions.
    pub fn seeded() -> Self {
        let mut ledger = Self::new();
        for (patient, age, doctor, time) in [
            ("John Doe", 45, "Dr. Smith", "09:00 AM"),
            ("Jane Smith", 32, "Dr. Johnson", "10:30 AM"),
            ("Sam Wilson", 28, "Dr. Brown", "11:15 AM"),
            ("Emily Davis", 54, "Dr. Wilson", "01:45 PM"),
        ] {
            // static rows, always valid
            let _ = ledger.admit(&AdmissionDraft {
                patient: patient.to_string(),
                age: age.to_string(),
                doctor: doctor.to_string(),
                time: time.to_string(),
            });
        }
        ledger
    }

    /// Build a ledger from externally supplied records (seed file). Ids on
    /// the incoming records are ignored; each record is re-admitted in order
    /// so the counter invariant holds and ids come out as 1..=n.
    pub fn from_records(records: Vec<Admission>) -> Result<Self, AdmissionError> {
        let mut ledger = Self::new();
        for record in records {
            ledger.admit(&AdmissionDraft {
                patient: record.patient,
                age: record.age.to_string(),
                doctor: record.doctor,
                time: record.time,
            })?;
        }
        Ok(ledger)
    }

    /// Validate a draft and append it as the next admission, returning the
    /// assigned id.
    ///
    /// The new record always lands at the end of the insertion order; an
    /// active sort never re-files it, since display order is derived per
    /// render.
    pub fn admit(&mut self, draft: &AdmissionDraft) -> Result<u32, AdmissionError> {
        let patient = required(&draft.patient, "patient")?;
        let age_raw = required(&draft.age, "age")?;
        let doctor = required(&draft.doctor, "doctor")?;
        let time = required(&draft.time, "time")?;

        let age: u32 = age_raw
            .parse()
            .map_err(|_| AdmissionError::InvalidAge(age_raw.to_string()))?;

        let id = self.next_id;
        self.next_id += 1;
        self.admissions.push(Admission {
            id,
            patient: patient.to_string(),
            age,
            doctor: doctor.to_string(),
            time: time.to_string(),
        });
        log::debug!("admitted {patient} as admission #{id}");
        Ok(id)
    }

    /// A sortable column header was activated.
    pub fn request_sort(&mut self, key: SortKey) {
        self.sort.request(key);
        log::debug!("sort config now {:?}", self.sort);
    }

    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    /// Admissions in insertion order.
    pub fn admissions(&self) -> &[Admission] {
        &self.admissions
    }

    pub fn len(&self) -> usize {
        self.admissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.admissions.is_empty()
    }

    /// Display order under the current sort configuration, derived fresh on
    /// every call. With no active key this is exactly the insertion order.
    /// The sort is stable, so equal keys keep their relative insertion
    /// order in either direction.
    pub fn sorted_view(&self) -> Vec<Admission> {
        let mut view = self.admissions.clone();
        if let Some(key) = self.sort.key {
            view.sort_by(|a, b| {
                let ord = match key {
                    SortKey::Patient => a.patient.cmp(&b.patient),
                    SortKey::Age => a.age.cmp(&b.age),
                };
                match self.sort.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }
        view
    }
}

fn required<'a>(value: &'a str, name: &'static str) -> Result<&'a str, AdmissionError> {
    if value.is_empty() {
        Err(AdmissionError::MissingField(name))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(patient: &str, age: &str, doctor: &str, time: &str) -> AdmissionDraft {
        AdmissionDraft {
            patient: patient.to_string(),
            age: age.to_string(),
            doctor: doctor.to_string(),
            time: time.to_string(),
        }
    }

    fn patients(view: &[Admission]) -> Vec<&str> {
        view.iter().map(|a| a.patient.as_str()).collect()
    }

    #[test]
    fn test_seeded_ledger() {
        let ledger = AdmissionLedger::seeded();
        assert_eq!(ledger.len(), 4);
        let ids: Vec<u32> = ledger.admissions().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(ledger.admissions()[0].patient, "John Doe");
        assert_eq!(ledger.admissions()[3].time, "01:45 PM");
        assert_eq!(ledger.sort(), SortConfig::default());
    }

    #[test]
    fn test_unsorted_view_is_insertion_order() {
        let ledger = AdmissionLedger::seeded();
        assert_eq!(
            patients(&ledger.sorted_view()),
            vec!["John Doe", "Jane Smith", "Sam Wilson", "Emily Davis"]
        );
    }

    #[test]
    fn test_sort_by_patient_ascending_and_descending() {
        let mut ledger = AdmissionLedger::seeded();

        ledger.request_sort(SortKey::Patient);
        assert_eq!(
            patients(&ledger.sorted_view()),
            vec!["Emily Davis", "Jane Smith", "John Doe", "Sam Wilson"]
        );

        ledger.request_sort(SortKey::Patient);
        assert_eq!(
            patients(&ledger.sorted_view()),
            vec!["Sam Wilson", "John Doe", "Jane Smith", "Emily Davis"]
        );
    }

    #[test]
    fn test_sort_by_age_is_numeric() {
        let mut ledger = AdmissionLedger::new();
        ledger.admit(&draft("A", "100", "Dr. X", "09:00")).unwrap();
        ledger.admit(&draft("B", "9", "Dr. X", "09:30")).unwrap();
        ledger.admit(&draft("C", "45", "Dr. X", "10:00")).unwrap();

        ledger.request_sort(SortKey::Age);
        let ages: Vec<u32> = ledger.sorted_view().iter().map(|a| a.age).collect();
        // lexicographic comparison on the raw input would give 100 < 45 < 9
        assert_eq!(ages, vec![9, 45, 100]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let mut ledger = AdmissionLedger::new();
        ledger.admit(&draft("First", "30", "Dr. X", "09:00")).unwrap();
        ledger.admit(&draft("Second", "30", "Dr. Y", "10:00")).unwrap();
        ledger.admit(&draft("Third", "20", "Dr. Z", "11:00")).unwrap();

        ledger.request_sort(SortKey::Age);
        assert_eq!(
            patients(&ledger.sorted_view()),
            vec!["Third", "First", "Second"]
        );

        ledger.request_sort(SortKey::Age);
        assert_eq!(
            patients(&ledger.sorted_view()),
            vec!["First", "Second", "Third"]
        );
    }

    #[test]
    fn test_admit_appends_with_next_id_regardless_of_sort() {
        let mut ledger = AdmissionLedger::seeded();
        ledger.request_sort(SortKey::Patient);

        let id = ledger
            .admit(&draft("X", "10", "Y", "09:00"))
            .expect("valid draft");
        assert_eq!(id, 5);

        // insertion order unchanged except for the appended element
        assert_eq!(
            patients(ledger.admissions()),
            vec!["John Doe", "Jane Smith", "Sam Wilson", "Emily Davis", "X"]
        );
        // while the derived view files it by the active sort
        ledger.request_sort(SortKey::Age);
        assert_eq!(ledger.sorted_view()[0].patient, "X");
    }

    #[test]
    fn test_id_counter_is_monotonic() {
        let mut ledger = AdmissionLedger::new();
        for n in 1..=3 {
            let id = ledger
                .admit(&draft("P", "1", "D", "09:00"))
                .expect("valid draft");
            assert_eq!(id, n);
        }
    }

    #[test]
    fn test_admit_rejects_missing_fields() {
        let mut ledger = AdmissionLedger::new();
        assert_eq!(
            ledger.admit(&draft("", "10", "Y", "09:00")),
            Err(AdmissionError::MissingField("patient"))
        );
        assert_eq!(
            ledger.admit(&draft("X", "10", "Y", "")),
            Err(AdmissionError::MissingField("time"))
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_admit_rejects_non_numeric_age() {
        let mut ledger = AdmissionLedger::new();
        assert_eq!(
            ledger.admit(&draft("X", "ten", "Y", "09:00")),
            Err(AdmissionError::InvalidAge("ten".to_string()))
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_from_records_reassigns_ids_in_order() {
        let records = vec![
            Admission {
                id: 99,
                patient: "A".to_string(),
                age: 40,
                doctor: "Dr. A".to_string(),
                time: "08:00 AM".to_string(),
            },
            Admission {
                id: 7,
                patient: "B".to_string(),
                age: 50,
                doctor: "Dr. B".to_string(),
                time: "08:30 AM".to_string(),
            },
        ];

        let ledger = AdmissionLedger::from_records(records).expect("valid records");
        let ids: Vec<u32> = ledger.admissions().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(patients(ledger.admissions()), vec!["A", "B"]);
    }

    #[test]
    fn test_from_records_rejects_invalid_record() {
        let records = vec![Admission {
            id: 1,
            patient: String::new(),
            age: 40,
            doctor: "Dr. A".to_string(),
            time: "08:00 AM".to_string(),
        }];
        assert_eq!(
            AdmissionLedger::from_records(records).err(),
            Some(AdmissionError::MissingField("patient"))
        );
    }
}
