//! Appointments and pharmacy orders shown on the role appointment pages.
//!
//! Each role sees one kind of booking with its own status workflow. The
//! lists live in page state only and reset on reload.

use crate::error::AppError;
use crate::forms::{finish, optional, parse_date};
use crate::role::Role;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Upcoming,
    Pending,
    Confirmed,
    Shipped,
    Completed,
    Delivered,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "upcoming",
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Shipped => "shipped",
            BookingStatus::Completed => "completed",
            BookingStatus::Delivered => "delivered",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which workflow a booking follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingKind {
    PatientAppointment,
    DoctorAppointment,
    PharmacyOrder,
}

impl BookingKind {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Patient => BookingKind::PatientAppointment,
            Role::Doctor => BookingKind::DoctorAppointment,
            Role::Pharma => BookingKind::PharmacyOrder,
        }
    }

    /// Status filters offered on the list page, after "all".
    pub fn filters(&self) -> &'static [BookingStatus] {
        match self {
            BookingKind::PatientAppointment => &[BookingStatus::Upcoming, BookingStatus::Completed],
            BookingKind::DoctorAppointment => &[
                BookingStatus::Pending,
                BookingStatus::Confirmed,
                BookingStatus::Completed,
            ],
            BookingKind::PharmacyOrder => &[
                BookingStatus::Pending,
                BookingStatus::Shipped,
                BookingStatus::Delivered,
            ],
        }
    }

    /// Whether `from → to` is a legal step for this kind.
    pub fn allows(&self, from: BookingStatus, to: BookingStatus) -> bool {
        use BookingStatus::*;
        match self {
            BookingKind::PatientAppointment => matches!((from, to), (Upcoming, Cancelled)),
            BookingKind::DoctorAppointment => matches!(
                (from, to),
                (Pending, Confirmed)
                    | (Confirmed, Completed)
                    | (Pending, Cancelled)
                    | (Confirmed, Cancelled)
            ),
            BookingKind::PharmacyOrder => matches!(
                (from, to),
                (Pending, Shipped) | (Shipped, Delivered) | (Pending, Cancelled)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: u32,
    pub kind: BookingKind,
    /// Doctor name for patients; patient name for doctors and pharmacies.
    pub counterpart: String,
    /// Department, visit reason or medicine, depending on kind.
    pub detail: String,
    pub date: NaiveDate,
    pub time: String,
    pub status: BookingStatus,
    pub tracking_number: Option<String>,
    pub notes: Option<String>,
}

impl Booking {
    /// Display reference, e.g. `ORD-003` for orders and `APT-003` otherwise.
    pub fn reference(&self) -> String {
        match self.kind {
            BookingKind::PharmacyOrder => format!("ORD-{:03}", self.id),
            _ => format!("APT-{:03}", self.id),
        }
    }

    /// Date as shown in lists, e.g. `Jan 15, 2024`.
    pub fn date_label(&self) -> String {
        self.date.format("%b %d, %Y").to_string()
    }

    pub fn transition(&mut self, to: BookingStatus) -> Result<(), AppError> {
        if !self.kind.allows(self.status, to) {
            return Err(AppError::invalid_transition(format!(
                "{} cannot move from {} to {}",
                self.reference(),
                self.status,
                to
            )));
        }
        tracing::debug!(booking = %self.reference(), from = %self.status, %to, "booking status changed");
        self.status = to;
        Ok(())
    }

    pub fn ship(&mut self, tracking_number: impl Into<String>) -> Result<(), AppError> {
        self.transition(BookingStatus::Shipped)?;
        self.tracking_number = Some(tracking_number.into());
        Ok(())
    }

    /// Finish a consultation, keeping the doctor's notes when given.
    pub fn complete(&mut self, notes: &str) -> Result<(), AppError> {
        self.transition(BookingStatus::Completed)?;
        if !notes.trim().is_empty() {
            self.notes = Some(notes.trim().to_string());
        }
        Ok(())
    }

    /// Move an upcoming patient appointment to another slot.
    pub fn reschedule(&mut self, request: &SlotRequest) -> Result<(), AppError> {
        if self.kind != BookingKind::PatientAppointment || self.status != BookingStatus::Upcoming {
            return Err(AppError::invalid_transition(format!(
                "{} is {} and cannot be rescheduled",
                self.reference(),
                self.status
            )));
        }
        let (date, time) = request.validate()?;
        tracing::debug!(booking = %self.reference(), %date, time, "appointment rescheduled");
        self.date = date;
        self.time = time.to_string();
        Ok(())
    }

    /// Case-insensitive match on counterpart, detail or reference.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty()
            || self.counterpart.to_lowercase().contains(&q)
            || self.detail.to_lowercase().contains(&q)
            || self.reference().to_lowercase().contains(&q)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Doctor {
    pub id: u32,
    pub name: &'static str,
    pub specialization: &'static str,
    pub experience_years: u32,
}

/// Doctors a patient can book with.
pub const DOCTORS: &[Doctor] = &[
    Doctor {
        id: 1,
        name: "Dr. Sarah Johnson",
        specialization: "Cardiology",
        experience_years: 12,
    },
    Doctor {
        id: 2,
        name: "Dr. Michael Chen",
        specialization: "General Medicine",
        experience_years: 8,
    },
    Doctor {
        id: 3,
        name: "Dr. Emma Wilson",
        specialization: "Pediatrics",
        experience_years: 10,
    },
];

pub fn find_doctor(id: u32) -> Option<&'static Doctor> {
    DOCTORS.iter().find(|d| d.id == id)
}

/// Bookable appointment times.
pub const TIME_SLOTS: &[&str] = &[
    "09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "02:00 PM", "02:30 PM",
    "03:00 PM", "03:30 PM", "04:00 PM",
];

/// Date and time picked in the booking and reschedule dialogs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotRequest {
    /// `YYYY-MM-DD` from a date input.
    pub date: String,
    pub time: String,
}

impl SlotRequest {
    fn check(&self, fields: &mut HashMap<String, String>) -> Option<(NaiveDate, &'static str)> {
        let date = parse_date(fields, "date", &self.date, "Please choose a date");
        let time = TIME_SLOTS.iter().copied().find(|t| *t == self.time);
        if time.is_none() {
            fields.insert("time".to_string(), "Please choose a time slot".to_string());
        }
        date.zip(time)
    }

    pub fn validate(&self) -> Result<(NaiveDate, &'static str), AppError> {
        let mut fields = HashMap::new();
        let slot = self.check(&mut fields);
        finish(fields)?;
        slot.ok_or_else(|| AppError::validation("Validation failed", HashMap::new()))
    }
}

/// New appointment requested by a patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub doctor_id: Option<u32>,
    pub slot: SlotRequest,
    pub reason: String,
}

fn next_id(bookings: &[Booking]) -> u32 {
    bookings.iter().map(|b| b.id).max().unwrap_or(0) + 1
}

/// Validate `request` and append an upcoming consultation. Returns the new id.
pub fn book_appointment(
    bookings: &mut Vec<Booking>,
    request: &AppointmentRequest,
) -> Result<u32, AppError> {
    let mut fields = HashMap::new();
    let doctor = request.doctor_id.and_then(find_doctor);
    if doctor.is_none() {
        fields.insert("doctor".to_string(), "Please choose a doctor".to_string());
    }
    let slot = request.slot.check(&mut fields);
    finish(fields)?;
    let (Some(doctor), Some((date, time))) = (doctor, slot) else {
        return Err(AppError::validation("Validation failed", HashMap::new()));
    };

    let id = next_id(bookings);
    let mut created = booking(
        id,
        BookingKind::PatientAppointment,
        doctor.name,
        &format!("{} · Consultation", doctor.specialization),
        date,
        time,
        BookingStatus::Upcoming,
    );
    created.notes = optional(&request.reason);
    tracing::info!(booking = %created.reference(), doctor = doctor.name, "appointment booked");
    bookings.push(created);
    Ok(id)
}

/// Tracking number assigned when an order ships.
pub fn tracking_number_for(id: u32) -> String {
    format!("TRK{:09}", u64::from(id) * 7919 + 100_003)
}

/// Bookings matching an optional status filter and a search query.
pub fn filter_bookings<'a>(
    bookings: &'a [Booking],
    status: Option<BookingStatus>,
    query: &str,
) -> Vec<&'a Booking> {
    bookings
        .iter()
        .filter(|b| status.map_or(true, |s| b.status == s))
        .filter(|b| b.matches_query(query))
        .collect()
}

pub fn count_with_status(bookings: &[Booking], status: BookingStatus) -> usize {
    bookings.iter().filter(|b| b.status == status).count()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn booking(
    id: u32,
    kind: BookingKind,
    counterpart: &str,
    detail: &str,
    on: NaiveDate,
    time: &str,
    status: BookingStatus,
) -> Booking {
    Booking {
        id,
        kind,
        counterpart: counterpart.to_string(),
        detail: detail.to_string(),
        date: on,
        time: time.to_string(),
        status,
        tracking_number: None,
        notes: None,
    }
}

/// Demo bookings for a role's appointment page.
pub fn demo_bookings(role: Role) -> Vec<Booking> {
    use BookingStatus::*;
    let kind = BookingKind::for_role(role);
    match role {
        Role::Patient => vec![
            booking(1, kind, "Dr. Sarah Johnson", "Cardiology · Follow-up", date(2024, 1, 15), "2:00 PM", Upcoming),
            booking(2, kind, "Dr. Michael Chen", "General Medicine · Consultation", date(2024, 1, 18), "10:30 AM", Upcoming),
            booking(3, kind, "Dr. Emma Wilson", "Pediatrics · Check-up", date(2024, 1, 10), "3:15 PM", Completed),
        ],
        Role::Doctor => vec![
            booking(1, kind, "John Smith", "High blood pressure, frequent headaches", date(2024, 1, 15), "09:00 AM", Pending),
            booking(2, kind, "Emma Brown", "Routine checkup", date(2024, 1, 15), "10:30 AM", Confirmed),
            booking(3, kind, "Robert Davis", "Diabetes management review", date(2024, 1, 15), "02:00 PM", Pending),
        ],
        Role::Pharma => {
            let mut shipped = booking(2, kind, "Priya Sharma", "Metformin 500mg × 60", date(2024, 1, 14), "11:20 AM", Shipped);
            shipped.tracking_number = Some(tracking_number_for(2));
            vec![
                booking(1, kind, "John Smith", "Aspirin 100mg × 30", date(2024, 1, 15), "09:45 AM", Pending),
                shipped,
                booking(3, kind, "David Lee", "Amoxicillin 250mg × 21", date(2024, 1, 12), "04:10 PM", Delivered),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;
    use pretty_assertions::assert_eq;

    fn first(role: Role, status: BookingStatus) -> Booking {
        demo_bookings(role)
            .into_iter()
            .find(|b| b.status == status)
            .unwrap()
    }

    #[test]
    fn order_ships_then_delivers() {
        let mut order = first(Role::Pharma, BookingStatus::Pending);
        order.ship(tracking_number_for(order.id)).unwrap();
        assert_eq!(order.status, BookingStatus::Shipped);
        assert_eq!(order.tracking_number.as_deref(), Some("TRK000107922"));
        order.transition(BookingStatus::Delivered).unwrap();
        assert_eq!(order.status, BookingStatus::Delivered);
    }

    #[test]
    fn delivered_order_cannot_be_cancelled() {
        let mut order = first(Role::Pharma, BookingStatus::Delivered);
        let err = order.transition(BookingStatus::Cancelled).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidTransition);
        assert_eq!(order.status, BookingStatus::Delivered);
    }

    #[test]
    fn shipping_requires_pending() {
        let mut order = first(Role::Pharma, BookingStatus::Shipped);
        let before = order.tracking_number.clone();
        assert!(order.ship("TRK-NEW").is_err());
        assert_eq!(order.tracking_number, before);
    }

    #[test]
    fn doctor_confirms_then_completes_with_notes() {
        let mut apt = first(Role::Doctor, BookingStatus::Pending);
        assert!(apt.complete("too early").is_err());
        apt.transition(BookingStatus::Confirmed).unwrap();
        apt.complete("  Reduce salt intake  ").unwrap();
        assert_eq!(apt.status, BookingStatus::Completed);
        assert_eq!(apt.notes.as_deref(), Some("Reduce salt intake"));
    }

    #[test]
    fn patient_can_only_cancel_upcoming() {
        let mut upcoming = first(Role::Patient, BookingStatus::Upcoming);
        upcoming.transition(BookingStatus::Cancelled).unwrap();
        let mut done = first(Role::Patient, BookingStatus::Completed);
        assert!(done.transition(BookingStatus::Cancelled).is_err());
    }

    #[test]
    fn filter_by_status_and_query() {
        let bookings = demo_bookings(Role::Doctor);
        let pending = filter_bookings(&bookings, Some(BookingStatus::Pending), "");
        assert_eq!(pending.len(), 2);
        let diabetes = filter_bookings(&bookings, None, "DIABETES");
        assert_eq!(diabetes.len(), 1);
        assert_eq!(diabetes[0].counterpart, "Robert Davis");
        assert!(filter_bookings(&bookings, Some(BookingStatus::Shipped), "").is_empty());
    }

    #[test]
    fn query_matches_reference() {
        let orders = demo_bookings(Role::Pharma);
        let hits = filter_bookings(&orders, None, "ord-003");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 3);
    }

    #[test]
    fn date_label_format() {
        let apt = first(Role::Patient, BookingStatus::Completed);
        assert_eq!(apt.date_label(), "Jan 10, 2024");
    }

    #[test]
    fn counts() {
        let orders = demo_bookings(Role::Pharma);
        assert_eq!(count_with_status(&orders, BookingStatus::Pending), 1);
        assert_eq!(count_with_status(&orders, BookingStatus::Cancelled), 0);
    }

    fn slot(date: &str, time: &str) -> SlotRequest {
        SlotRequest {
            date: date.to_string(),
            time: time.to_string(),
        }
    }

    #[test]
    fn book_appointment_appends_upcoming_consultation() {
        let mut bookings = demo_bookings(Role::Patient);
        let request = AppointmentRequest {
            doctor_id: Some(1),
            slot: slot("2024-02-01", "10:00 AM"),
            reason: "  Chest pain  ".to_string(),
        };
        let id = book_appointment(&mut bookings, &request).unwrap();

        assert_eq!(id, 4);
        let created = bookings.last().unwrap();
        assert_eq!(created.counterpart, "Dr. Sarah Johnson");
        assert_eq!(created.detail, "Cardiology · Consultation");
        assert_eq!(created.status, BookingStatus::Upcoming);
        assert_eq!(created.date_label(), "Feb 01, 2024");
        assert_eq!(created.notes.as_deref(), Some("Chest pain"));
    }

    #[test]
    fn booking_requires_doctor_date_and_slot() {
        let mut bookings = Vec::new();
        let err = book_appointment(&mut bookings, &AppointmentRequest::default()).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field("doctor"), Some("Please choose a doctor"));
        assert_eq!(err.field("date"), Some("Please choose a date"));
        assert_eq!(err.field("time"), Some("Please choose a time slot"));
        assert!(bookings.is_empty());
    }

    #[test]
    fn booking_rejects_unknown_slot_and_bad_date() {
        let mut bookings = Vec::new();
        let request = AppointmentRequest {
            doctor_id: Some(2),
            slot: slot("01/02/2024", "01:00 PM"),
            reason: String::new(),
        };
        let err = book_appointment(&mut bookings, &request).unwrap_err();
        assert_eq!(err.field("date"), Some("Enter a date as YYYY-MM-DD"));
        assert!(err.field("time").is_some());
        assert!(err.field("doctor").is_none());
    }

    #[test]
    fn first_booking_gets_id_one() {
        let mut bookings = Vec::new();
        let request = AppointmentRequest {
            doctor_id: Some(3),
            slot: slot("2024-02-01", "09:00 AM"),
            reason: String::new(),
        };
        assert_eq!(book_appointment(&mut bookings, &request).unwrap(), 1);
        assert_eq!(bookings[0].notes, None);
    }

    #[test]
    fn reschedule_moves_upcoming_appointment() {
        let mut apt = first(Role::Patient, BookingStatus::Upcoming);
        apt.reschedule(&slot("2024-01-22", "03:30 PM")).unwrap();
        assert_eq!(apt.date_label(), "Jan 22, 2024");
        assert_eq!(apt.time, "03:30 PM");
    }

    #[test]
    fn reschedule_rejects_finished_or_foreign_bookings() {
        let mut done = first(Role::Patient, BookingStatus::Completed);
        let err = done.reschedule(&slot("2024-01-22", "03:30 PM")).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidTransition);

        let mut order = first(Role::Pharma, BookingStatus::Pending);
        assert!(order.reschedule(&slot("2024-01-22", "03:30 PM")).is_err());
    }

    #[test]
    fn invalid_reschedule_keeps_slot() {
        let mut apt = first(Role::Patient, BookingStatus::Upcoming);
        let before = (apt.date, apt.time.clone());
        assert!(apt.reschedule(&slot("", "03:30 PM")).is_err());
        assert_eq!((apt.date, apt.time.clone()), before);
    }

    #[test]
    fn filter_tabs_per_kind() {
        assert_eq!(
            BookingKind::for_role(Role::Patient).filters(),
            &[BookingStatus::Upcoming, BookingStatus::Completed]
        );
        assert_eq!(BookingKind::for_role(Role::Pharma).filters().len(), 3);
    }
}
