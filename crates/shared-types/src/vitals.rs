//! Patient vital sign log shown on the health records page.

use crate::error::AppError;
use crate::forms::{finish, optional, parse_date, require};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalRecord {
    pub id: u32,
    pub date: NaiveDate,
    /// Systolic/diastolic, e.g. `120/80`.
    pub blood_pressure: String,
    pub sugar_level: String,
    pub weight_kg: Option<f64>,
    pub heart_rate: Option<u32>,
    pub temperature: String,
    pub notes: Option<String>,
}

/// Leading number of a reading such as `120/80` or `95 mg/dL`.
fn leading_number(reading: &str) -> Option<f64> {
    let digits: String = reading
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}

impl VitalRecord {
    pub fn systolic(&self) -> Option<f64> {
        leading_number(&self.blood_pressure)
    }

    pub fn sugar(&self) -> Option<f64> {
        leading_number(&self.sugar_level)
    }
}

/// Add-record dialog input. Numbers arrive as typed text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalsForm {
    pub date: String,
    pub blood_pressure: String,
    pub sugar_level: String,
    pub weight: String,
    pub heart_rate: String,
    pub temperature: String,
    pub notes: String,
}

impl VitalsForm {
    /// Blank form dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }
}

/// Validate `form` and put the new record at the top of the log.
pub fn add_vitals(records: &mut Vec<VitalRecord>, form: &VitalsForm) -> Result<u32, AppError> {
    let mut fields = HashMap::new();
    let date = parse_date(&mut fields, "date", &form.date, "Date is required");
    require(&mut fields, "blood_pressure", &form.blood_pressure, "Blood pressure is required");
    require(&mut fields, "sugar_level", &form.sugar_level, "Sugar level is required");

    let weight_kg = match optional(&form.weight) {
        Some(text) => match text.parse::<f64>() {
            Ok(w) if w > 0.0 => Some(w),
            _ => {
                fields.insert("weight".to_string(), "Weight must be a positive number".to_string());
                None
            }
        },
        None => None,
    };
    let heart_rate = match optional(&form.heart_rate) {
        Some(text) => match text.parse::<u32>() {
            Ok(bpm) if bpm > 0 => Some(bpm),
            _ => {
                fields.insert(
                    "heart_rate".to_string(),
                    "Heart rate must be a whole number".to_string(),
                );
                None
            }
        },
        None => None,
    };
    finish(fields)?;
    let Some(date) = date else {
        return Err(AppError::validation("Validation failed", HashMap::new()));
    };

    let id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
    records.insert(
        0,
        VitalRecord {
            id,
            date,
            blood_pressure: form.blood_pressure.trim().to_string(),
            sugar_level: form.sugar_level.trim().to_string(),
            weight_kg,
            heart_rate,
            temperature: form.temperature.trim().to_string(),
            notes: optional(&form.notes),
        },
    );
    tracing::info!(record = id, "vitals recorded");
    Ok(id)
}

/// Change between two readings, relative to the earlier one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub rising: bool,
    /// Whether the change is in the healthy direction.
    pub improving: bool,
    pub percent: f64,
}

/// `None` when either reading is missing, the previous one is zero, or
/// nothing changed.
pub fn trend(current: Option<f64>, previous: Option<f64>, higher_is_better: bool) -> Option<Trend> {
    let (current, previous) = (current?, previous?);
    if previous == 0.0 || current == previous {
        return None;
    }
    let rising = current > previous;
    Some(Trend {
        rising,
        improving: rising == higher_is_better,
        percent: ((current - previous) / previous * 100.0).abs(),
    })
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: u32,
    date: NaiveDate,
    blood_pressure: &str,
    sugar_level: &str,
    weight_kg: f64,
    heart_rate: u32,
    temperature: &str,
    notes: Option<&str>,
) -> VitalRecord {
    VitalRecord {
        id,
        date,
        blood_pressure: blood_pressure.to_string(),
        sugar_level: sugar_level.to_string(),
        weight_kg: Some(weight_kg),
        heart_rate: Some(heart_rate),
        temperature: temperature.to_string(),
        notes: notes.map(str::to_string),
    }
}

/// Newest first.
pub fn demo_vitals() -> Vec<VitalRecord> {
    let on = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap_or_default();
    vec![
        record(1, on(12), "120/80", "95 mg/dL", 75.0, 72, "98.6°F", Some("Regular checkup")),
        record(2, on(8), "118/78", "92 mg/dL", 75.2, 70, "98.4°F", Some("Post-exercise measurement")),
        record(3, on(5), "122/82", "98 mg/dL", 75.5, 74, "98.8°F", None),
    ]
}
