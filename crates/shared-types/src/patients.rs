//! Doctor-side patient records: the patient list and per-patient notes.

use crate::error::AppError;
use crate::forms::{finish, optional, parse_date, require};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Patient {
    pub id: u32,
    pub name: &'static str,
    pub age: u32,
    pub department: &'static str,
    pub last_visit: &'static str,
    pub condition: &'static str,
    pub phone: &'static str,
}

pub const PATIENTS: &[Patient] = &[
    Patient {
        id: 1,
        name: "John Smith",
        age: 35,
        department: "Cardiology",
        last_visit: "2024-01-10",
        condition: "Hypertension",
        phone: "+1 (555) 123-4567",
    },
    Patient {
        id: 2,
        name: "Emma Brown",
        age: 28,
        department: "Pediatrics",
        last_visit: "2024-01-08",
        condition: "Routine Check-up",
        phone: "+1 (555) 234-5678",
    },
    Patient {
        id: 3,
        name: "Robert Davis",
        age: 52,
        department: "General Medicine",
        last_visit: "2024-01-12",
        condition: "Diabetes Management",
        phone: "+1 (555) 345-6789",
    },
];

pub fn find_patient(id: u32) -> Option<&'static Patient> {
    PATIENTS.iter().find(|p| p.id == id)
}

/// Patients whose name contains `query` case-insensitively, or whose phone
/// number contains it verbatim.
pub fn search_patients(query: &str) -> Vec<&'static Patient> {
    let q = query.trim();
    let lower = q.to_lowercase();
    PATIENTS
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&lower) || p.phone.contains(q))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientNote {
    pub id: u32,
    pub patient_id: u32,
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
    pub diagnosis: Option<String>,
    pub prescription: Option<String>,
    pub follow_up: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub diagnosis: String,
    pub prescription: String,
    /// Optional `YYYY-MM-DD`.
    pub follow_up: String,
}

/// Notes for one patient, newest first.
pub fn notes_for(notes: &[PatientNote], patient_id: u32) -> Vec<&PatientNote> {
    notes.iter().filter(|n| n.patient_id == patient_id).collect()
}

/// Validate `draft` and record it against `patient_id`, dated `today`.
pub fn add_note(
    notes: &mut Vec<PatientNote>,
    patient_id: u32,
    draft: &NoteDraft,
    today: NaiveDate,
) -> Result<u32, AppError> {
    let Some(patient) = find_patient(patient_id) else {
        return Err(AppError::not_found(format!("No patient with id {patient_id}")));
    };
    let mut fields = HashMap::new();
    require(&mut fields, "title", &draft.title, "Title is required");
    require(&mut fields, "content", &draft.content, "Notes are required");
    let follow_up = if draft.follow_up.trim().is_empty() {
        None
    } else {
        parse_date(&mut fields, "follow_up", &draft.follow_up, "")
    };
    finish(fields)?;

    let id = notes.iter().map(|n| n.id).max().unwrap_or(0) + 1;
    notes.insert(
        0,
        PatientNote {
            id,
            patient_id,
            date: today,
            title: draft.title.trim().to_string(),
            content: draft.content.trim().to_string(),
            diagnosis: optional(&draft.diagnosis),
            prescription: optional(&draft.prescription),
            follow_up,
        },
    );
    tracing::info!(note = id, patient = patient.name, "patient note added");
    Ok(id)
}

pub fn demo_notes() -> Vec<PatientNote> {
    let on = |m, d| NaiveDate::from_ymd_opt(2024, m, d);
    vec![
        PatientNote {
            id: 1,
            patient_id: 1,
            date: on(1, 10).unwrap_or_default(),
            title: "Consultation - Hypertension".into(),
            content: "Patient presented with elevated BP readings over past week".into(),
            diagnosis: Some("Essential Hypertension".into()),
            prescription: Some("Amlodipine 5mg once daily".into()),
            follow_up: on(1, 24),
        },
        PatientNote {
            id: 2,
            patient_id: 1,
            date: on(1, 3).unwrap_or_default(),
            title: "Follow-up Check".into(),
            content: "BP stable with current medication regimen".into(),
            diagnosis: Some("Hypertension Management".into()),
            prescription: Some("Continue current medication".into()),
            follow_up: on(2, 7),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    fn draft() -> NoteDraft {
        NoteDraft {
            title: "Sugar review".into(),
            content: "Fasting glucose trending down".into(),
            follow_up: "2024-02-20".into(),
            ..NoteDraft::default()
        }
    }

    #[test]
    fn search_by_name_or_phone() {
        assert_eq!(search_patients("emma")[0].id, 2);
        assert_eq!(search_patients("345-6789")[0].name, "Robert Davis");
        assert_eq!(search_patients("").len(), PATIENTS.len());
        assert!(search_patients("zzz").is_empty());
    }

    #[test]
    fn notes_are_kept_per_patient() {
        let mut notes = demo_notes();
        assert_eq!(notes_for(&notes, 1).len(), 2);
        assert!(notes_for(&notes, 3).is_empty());

        let id = add_note(&mut notes, 3, &draft(), today()).unwrap();
        let robert = notes_for(&notes, 3);
        assert_eq!(robert.len(), 1);
        assert_eq!(robert[0].id, id);
        assert_eq!(robert[0].date, today());
        assert_eq!(robert[0].diagnosis, None);
        assert_eq!(robert[0].follow_up.map(|d| d.to_string()).as_deref(), Some("2024-02-20"));
        assert_eq!(notes_for(&notes, 1).len(), 2);
    }

    #[test]
    fn newest_note_first() {
        let mut notes = demo_notes();
        add_note(&mut notes, 1, &draft(), today()).unwrap();
        assert_eq!(notes_for(&notes, 1)[0].title, "Sugar review");
    }

    #[test]
    fn title_and_content_required() {
        let mut notes = Vec::new();
        let err = add_note(&mut notes, 1, &NoteDraft::default(), today()).unwrap_err();
        assert_eq!(err.field("title"), Some("Title is required"));
        assert_eq!(err.field("content"), Some("Notes are required"));
        assert!(notes.is_empty());
    }

    #[test]
    fn malformed_follow_up_is_flagged() {
        let mut notes = Vec::new();
        let bad = NoteDraft {
            follow_up: "next week".into(),
            ..draft()
        };
        let err = add_note(&mut notes, 1, &bad, today()).unwrap_err();
        assert!(err.field("follow_up").is_some());
    }

    #[test]
    fn unknown_patient_is_not_found() {
        let mut notes = Vec::new();
        let err = add_note(&mut notes, 99, &draft(), today()).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::NotFound);
    }
}
