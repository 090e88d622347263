use chrono::NaiveDate;
use devayu_types::bookings::{
    book_appointment, count_with_status, demo_bookings, AppointmentRequest, BookingStatus,
    SlotRequest,
};
use devayu_types::inventory::{demo_inventory, StockStatus};
use devayu_types::patients::{add_note, demo_notes, notes_for, search_patients, NoteDraft};
use devayu_types::pharmacy::{search_medicines, Cart, ShippingInfo};
use devayu_types::vitals::{add_vitals, demo_vitals, trend, VitalsForm};
use devayu_types::{AppErrorKind, Role};
use pretty_assertions::assert_eq;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn patient_books_reschedules_then_cancels() {
    let mut bookings = demo_bookings(Role::Patient);
    let upcoming_before = count_with_status(&bookings, BookingStatus::Upcoming);

    let id = book_appointment(
        &mut bookings,
        &AppointmentRequest {
            doctor_id: Some(3),
            slot: SlotRequest {
                date: "2024-03-04".into(),
                time: "11:00 AM".into(),
            },
            reason: "Child vaccination".into(),
        },
    )
    .unwrap();
    assert_eq!(
        count_with_status(&bookings, BookingStatus::Upcoming),
        upcoming_before + 1
    );

    let booked = bookings.iter_mut().find(|b| b.id == id).unwrap();
    assert_eq!(booked.counterpart, "Dr. Emma Wilson");
    booked
        .reschedule(&SlotRequest {
            date: "2024-03-06".into(),
            time: "02:00 PM".into(),
        })
        .unwrap();
    assert_eq!(booked.date, day(2024, 3, 6));
    assert_eq!(booked.time, "02:00 PM");

    booked.transition(BookingStatus::Cancelled).unwrap();
    let err = booked
        .reschedule(&SlotRequest {
            date: "2024-03-08".into(),
            time: "09:00 AM".into(),
        })
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InvalidTransition);
    assert_eq!(booked.date, day(2024, 3, 6));
}

#[test]
fn cart_from_search_to_order() {
    let mut cart = Cart::default();
    for medicine in search_medicines("a") {
        cart.add(medicine).unwrap();
    }
    let lines = cart.len();
    assert!(lines > 1);

    let first = cart.items()[0].medicine_id;
    cart.set_quantity(first, 3);
    let last = cart.items()[lines - 1].medicine_id;
    cart.remove(last);
    assert_eq!(cart.len(), lines - 1);

    let blank = cart.checkout(&ShippingInfo::default()).unwrap_err();
    assert_eq!(blank.field_errors.len(), 4);
    assert_eq!(cart.len(), lines - 1);

    let expected_total = cart.total_cents();
    let receipt = cart
        .checkout(&ShippingInfo {
            address: "4 Lake View".into(),
            city: "Kochi".into(),
            pincode: "682001".into(),
            phone: "0484 200 000".into(),
        })
        .unwrap();
    assert_eq!(receipt.total_cents, expected_total);
    assert_eq!(receipt.items, lines - 1);
    assert!(cart.is_empty());
    assert_eq!(cart.total_cents(), 0);
}

#[test]
fn restocking_clears_the_low_stock_alert() {
    let mut inventory = demo_inventory();
    let low: Vec<u32> = inventory.filter("", true).iter().map(|i| i.id).collect();
    assert_eq!(low.len(), inventory.low_stock_count());

    for id in low {
        let reorder = inventory.get(id).unwrap().reorder_level;
        assert_eq!(inventory.set_quantity(id, reorder).unwrap(), StockStatus::Good);
    }
    assert_eq!(inventory.low_stock_count(), 0);
    assert!(inventory.filter("", true).is_empty());
}

#[test]
fn doctor_notes_stay_with_the_selected_patient() {
    let mut notes = demo_notes();
    let emma = search_patients("emma")[0];
    assert!(notes_for(&notes, emma.id).is_empty());

    add_note(
        &mut notes,
        emma.id,
        &NoteDraft {
            title: "Annual check-up".into(),
            content: "All growth markers normal".into(),
            ..NoteDraft::default()
        },
        day(2024, 1, 15),
    )
    .unwrap();

    assert_eq!(notes_for(&notes, emma.id).len(), 1);
    for other in search_patients("").iter().filter(|p| p.id != emma.id) {
        assert!(notes_for(&notes, other.id)
            .iter()
            .all(|n| n.title != "Annual check-up"));
    }
}

#[test]
fn new_vitals_reading_sets_the_trend() {
    let mut log = demo_vitals();
    let previous = log[0].systolic();

    add_vitals(
        &mut log,
        &VitalsForm {
            blood_pressure: "150/95".into(),
            sugar_level: "110 mg/dL".into(),
            ..VitalsForm::new(day(2024, 1, 22))
        },
    )
    .unwrap();

    let change = trend(log[0].systolic(), previous, false).unwrap();
    assert!(change.rising);
    assert!(!change.improving);
}
