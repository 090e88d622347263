use devayu_types::bookings::{
    book_appointment, demo_bookings, filter_bookings, tracking_number_for, AppointmentRequest,
    Booking, BookingKind, BookingStatus, SlotRequest, DOCTORS, TIME_SLOTS,
};
use devayu_types::Role;
use devayu_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, DialogContent,
    DialogDescription, DialogRoot, DialogTitle, Input, Label, PageHeader, PageSubtitle,
    PageTitle,
};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use std::collections::HashMap;

/// Status change offered on a booking row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BookingAction {
    Confirm,
    Complete,
    Ship,
    Deliver,
    Cancel,
}

const ALL_ACTIONS: &[BookingAction] = &[
    BookingAction::Confirm,
    BookingAction::Complete,
    BookingAction::Ship,
    BookingAction::Deliver,
    BookingAction::Cancel,
];

impl BookingAction {
    fn target(self) -> BookingStatus {
        match self {
            BookingAction::Confirm => BookingStatus::Confirmed,
            BookingAction::Complete => BookingStatus::Completed,
            BookingAction::Ship => BookingStatus::Shipped,
            BookingAction::Deliver => BookingStatus::Delivered,
            BookingAction::Cancel => BookingStatus::Cancelled,
        }
    }

    fn label(self) -> &'static str {
        match self {
            BookingAction::Confirm => "Confirm",
            BookingAction::Complete => "Complete",
            BookingAction::Ship => "Mark Shipped",
            BookingAction::Deliver => "Mark Delivered",
            BookingAction::Cancel => "Cancel",
        }
    }

    fn variant(self) -> ButtonVariant {
        match self {
            BookingAction::Cancel => ButtonVariant::Outline,
            _ => ButtonVariant::Primary,
        }
    }
}

/// Actions the booking's workflow allows from its current status.
fn available_actions(booking: &Booking) -> Vec<BookingAction> {
    ALL_ACTIONS
        .iter()
        .copied()
        .filter(|a| booking.kind.allows(booking.status, a.target()))
        .collect()
}

fn badge_variant(status: BookingStatus) -> BadgeVariant {
    match status {
        BookingStatus::Upcoming | BookingStatus::Confirmed => BadgeVariant::Primary,
        BookingStatus::Pending => BadgeVariant::Warning,
        BookingStatus::Shipped => BadgeVariant::Secondary,
        BookingStatus::Completed | BookingStatus::Delivered => BadgeVariant::Success,
        BookingStatus::Cancelled => BadgeVariant::Destructive,
    }
}

pub fn status_badge(status: BookingStatus) -> Element {
    rsx! {
        Badge { variant: badge_variant(status), "{status}" }
    }
}

fn apply_action(
    mut bookings: Signal<Vec<Booking>>,
    mut error_msg: Signal<Option<String>>,
    id: u32,
    action: BookingAction,
    notes: &str,
) {
    let mut list = bookings.write();
    let Some(booking) = list.iter_mut().find(|b| b.id == id) else {
        return;
    };
    let result = match action {
        BookingAction::Ship => booking.ship(tracking_number_for(id)),
        BookingAction::Complete => booking.complete(notes),
        other => booking.transition(other.target()),
    };
    match result {
        Ok(()) => error_msg.set(None),
        Err(e) => {
            tracing::warn!(error = %e, "booking update rejected");
            error_msg.set(Some(e.message));
        }
    }
}

#[component]
fn TimeSlotPicker(selected: String, on_pick: EventHandler<&'static str>) -> Element {
    rsx! {
        div { class: "slot-grid",
            for slot in TIME_SLOTS.iter().copied() {
                button {
                    key: "{slot}",
                    r#type: "button",
                    class: "slot-option",
                    "data-active": if selected == slot { "true" } else { "false" },
                    onclick: move |_| on_pick.call(slot),
                    "{slot}"
                }
            }
        }
    }
}

#[component]
pub fn AppointmentsPatient() -> Element {
    rsx! { RoleAppointments { role: Role::Patient } }
}

#[component]
pub fn AppointmentsDoctor() -> Element {
    rsx! { RoleAppointments { role: Role::Doctor } }
}

#[component]
pub fn AppointmentsPharma() -> Element {
    rsx! { RoleAppointments { role: Role::Pharma } }
}

/// Filterable booking list with the role's status workflow. Changes live in
/// page state and reset when the page is left.
#[component]
fn RoleAppointments(role: Role) -> Element {
    let kind = BookingKind::for_role(role);
    let mut bookings = use_signal(move || demo_bookings(role));
    let mut filter = use_signal(|| Option::<BookingStatus>::None);
    let mut query = use_signal(String::new);
    let error_msg = use_signal(|| Option::<String>::None);
    let mut completing = use_signal(|| Option::<u32>::None);
    let mut notes = use_signal(String::new);

    let mut show_booking = use_signal(|| false);
    let mut request = use_signal(AppointmentRequest::default);
    let mut request_errors = use_signal(HashMap::<String, String>::new);
    let mut rescheduling = use_signal(|| Option::<u32>::None);
    let mut slot = use_signal(SlotRequest::default);
    let mut slot_errors = use_signal(HashMap::<String, String>::new);
    let mut notice = use_signal(|| Option::<String>::None);

    let confirm_booking = move |_: MouseEvent| {
        let result = book_appointment(&mut bookings.write(), &request());
        match result {
            Ok(_) => {
                notice.set(Some("Appointment booked".to_string()));
                request.set(AppointmentRequest::default());
                request_errors.set(HashMap::new());
                show_booking.set(false);
            }
            Err(e) => request_errors.set(e.field_errors),
        }
    };

    let confirm_reschedule = move |_: MouseEvent| {
        let Some(id) = rescheduling() else {
            return;
        };
        let picked = slot();
        let result = match bookings.write().iter_mut().find(|b| b.id == id) {
            Some(booking) => booking.reschedule(&picked),
            None => return,
        };
        match result {
            Ok(()) => {
                notice.set(Some("Appointment rescheduled".to_string()));
                slot_errors.set(HashMap::new());
                rescheduling.set(None);
            }
            Err(e) if e.field_errors.is_empty() => {
                tracing::warn!(error = %e, "reschedule rejected");
                notice.set(Some(e.message));
                rescheduling.set(None);
            }
            Err(e) => slot_errors.set(e.field_errors),
        }
    };

    let (title, subtitle, search_hint) = match kind {
        BookingKind::PatientAppointment => (
            "My Appointments",
            "Upcoming and past visits",
            "Search doctors or departments",
        ),
        BookingKind::DoctorAppointment => (
            "Appointments",
            "Patient requests and confirmed visits",
            "Search patients or reasons",
        ),
        BookingKind::PharmacyOrder => (
            "Orders",
            "Prescription orders from patients",
            "Search orders, patients or medicines",
        ),
    };

    let list = bookings.read();
    let visible = filter_bookings(&list, filter(), &query());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "page",
            PageHeader {
                div {
                    PageTitle { "{title}" }
                    PageSubtitle { "{subtitle}" }
                }
            }

            if kind == BookingKind::PatientAppointment {
                Button {
                    full_width: true,
                    onclick: move |_| {
                        request_errors.set(HashMap::new());
                        show_booking.set(true);
                    },
                    Icon { icon: LdPlus, width: 18, height: 18 }
                    "Book New Appointment"
                }
            }

            if let Some(msg) = notice() {
                div { class: "page-notice", "{msg}" }
            }

            Input {
                placeholder: search_hint.to_string(),
                value: query(),
                on_input: move |e: FormEvent| query.set(e.value()),
            }

            div { class: "filter-tabs",
                button {
                    class: "filter-tab",
                    "data-active": if filter().is_none() { "true" } else { "false" },
                    onclick: move |_| filter.set(None),
                    "All"
                }
                for status in kind.filters().iter().copied() {
                    button {
                        key: "{status}",
                        class: "filter-tab",
                        "data-active": if filter() == Some(status) { "true" } else { "false" },
                        onclick: move |_| filter.set(Some(status)),
                        "{status}"
                    }
                }
            }

            if let Some(err) = error_msg() {
                div { class: "page-error", "{err}" }
            }

            if visible.is_empty() {
                p { class: "empty-state", "Nothing to show." }
            }

            for booking in visible {
                Card { key: "{booking.id}", class: "booking-card",
                    CardContent {
                        div { class: "item-row",
                            div {
                                div { class: "item-title", "{booking.counterpart}" }
                                div { class: "item-meta", "{booking.reference()} · {booking.detail}" }
                                div { class: "item-meta", "{booking.date_label()} · {booking.time}" }
                                if let Some(tracking) = booking.tracking_number.clone() {
                                    div { class: "item-meta", "Tracking: {tracking}" }
                                }
                                if let Some(text) = booking.notes.clone() {
                                    div { class: "item-notes", "Notes: {text}" }
                                }
                            }
                            {status_badge(booking.status)}
                        }

                        if completing() == Some(booking.id) {
                            div { class: "notes-form",
                                Input {
                                    placeholder: "Consultation notes (optional)",
                                    value: notes(),
                                    on_input: move |e: FormEvent| notes.set(e.value()),
                                }
                                div { class: "item-actions",
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: move |_| completing.set(None),
                                        "Back"
                                    }
                                    Button {
                                        onclick: {
                                            let id = booking.id;
                                            move |_| {
                                                apply_action(bookings, error_msg, id, BookingAction::Complete, &notes());
                                                completing.set(None);
                                                notes.set(String::new());
                                            }
                                        },
                                        "Save & Complete"
                                    }
                                }
                            }
                        } else {
                            div { class: "item-actions",
                                if booking.kind == BookingKind::PatientAppointment && booking.status == BookingStatus::Upcoming {
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: {
                                            let id = booking.id;
                                            move |_| {
                                                slot.set(SlotRequest::default());
                                                slot_errors.set(HashMap::new());
                                                rescheduling.set(Some(id));
                                            }
                                        },
                                        "Reschedule"
                                    }
                                }
                                for action in available_actions(booking) {
                                    Button {
                                        key: "{action.label()}",
                                        variant: action.variant(),
                                        onclick: {
                                            let id = booking.id;
                                            move |_| {
                                                if action == BookingAction::Complete {
                                                    completing.set(Some(id));
                                                } else {
                                                    apply_action(bookings, error_msg, id, action, "");
                                                }
                                            }
                                        },
                                        "{action.label()}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            DialogRoot {
                open: show_booking(),
                on_open_change: move |open: bool| show_booking.set(open),
                DialogContent {
                    DialogTitle { "Book Appointment" }
                    DialogDescription { "Choose a doctor, a date and a time." }
                    div { class: "form-field",
                        Label { html_for: "doctor", "Doctor" }
                        div { class: "doctor-options",
                            for doctor in DOCTORS {
                                button {
                                    key: "{doctor.id}",
                                    r#type: "button",
                                    class: "doctor-option",
                                    "data-active": if request.read().doctor_id == Some(doctor.id) { "true" } else { "false" },
                                    onclick: move |_| request.write().doctor_id = Some(doctor.id),
                                    div { class: "item-title", "{doctor.name}" }
                                    div { class: "item-meta", "{doctor.specialization} · {doctor.experience_years} yrs" }
                                }
                            }
                        }
                        if let Some(err) = request_errors.read().get("doctor").cloned() {
                            span { class: "input-error", "{err}" }
                        }
                    }
                    div { class: "form-field",
                        Label { html_for: "booking_date", "Date" }
                        Input {
                            input_type: "date",
                            id: "booking_date",
                            value: request.read().slot.date.clone(),
                            on_input: move |e: FormEvent| request.write().slot.date = e.value(),
                            error: request_errors.read().get("date").cloned(),
                        }
                    }
                    div { class: "form-field",
                        Label { html_for: "booking_time", "Time" }
                        TimeSlotPicker {
                            selected: request.read().slot.time.clone(),
                            on_pick: move |t: &'static str| request.write().slot.time = t.to_string(),
                        }
                        if let Some(err) = request_errors.read().get("time").cloned() {
                            span { class: "input-error", "{err}" }
                        }
                    }
                    div { class: "form-field",
                        Label { html_for: "booking_reason", "Reason (optional)" }
                        Input {
                            id: "booking_reason",
                            value: request.read().reason.clone(),
                            on_input: move |e: FormEvent| request.write().reason = e.value(),
                        }
                    }
                    div { class: "item-actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| show_booking.set(false),
                            "Cancel"
                        }
                        Button { onclick: confirm_booking, "Confirm Booking" }
                    }
                }
            }

            DialogRoot {
                open: rescheduling().is_some(),
                on_open_change: move |open: bool| {
                    if !open {
                        rescheduling.set(None);
                    }
                },
                DialogContent {
                    DialogTitle { "Reschedule Appointment" }
                    DialogDescription { "Pick a new date and time." }
                    div { class: "form-field",
                        Label { html_for: "reschedule_date", "Date" }
                        Input {
                            input_type: "date",
                            id: "reschedule_date",
                            value: slot.read().date.clone(),
                            on_input: move |e: FormEvent| slot.write().date = e.value(),
                            error: slot_errors.read().get("date").cloned(),
                        }
                    }
                    div { class: "form-field",
                        Label { html_for: "reschedule_time", "Time" }
                        TimeSlotPicker {
                            selected: slot.read().time.clone(),
                            on_pick: move |t: &'static str| slot.write().time = t.to_string(),
                        }
                        if let Some(err) = slot_errors.read().get("time").cloned() {
                            span { class: "input-error", "{err}" }
                        }
                    }
                    div { class: "item-actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| rescheduling.set(None),
                            "Cancel"
                        }
                        Button { onclick: confirm_reschedule, "Reschedule" }
                    }
                }
            }
        }
    }
}
