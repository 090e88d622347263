use devayu_types::bookings::{
    count_with_status, demo_bookings, filter_bookings, tracking_number_for, Booking, BookingKind,
    BookingStatus,
};
use devayu_types::{AppErrorKind, Role};
use pretty_assertions::assert_eq;

#[test]
fn pharmacy_order_moves_between_filter_tabs() {
    let mut orders = demo_bookings(Role::Pharma);
    let tabs = BookingKind::for_role(Role::Pharma).filters();
    let counts = |orders: &[Booking]| -> Vec<usize> {
        tabs.iter().map(|s| count_with_status(orders, *s)).collect()
    };
    assert_eq!(counts(&orders), vec![1, 1, 1]);

    let pending = orders
        .iter_mut()
        .find(|o| o.status == BookingStatus::Pending)
        .unwrap();
    let id = pending.id;
    pending.ship(tracking_number_for(id)).unwrap();
    assert_eq!(counts(&orders), vec![0, 2, 1]);

    let shipped = filter_bookings(&orders, Some(BookingStatus::Shipped), "");
    assert!(shipped.iter().all(|o| o.tracking_number.is_some()));

    for order in orders.iter_mut().filter(|o| o.status == BookingStatus::Shipped) {
        order.transition(BookingStatus::Delivered).unwrap();
    }
    assert_eq!(counts(&orders), vec![0, 0, 3]);
}

#[test]
fn doctor_cannot_skip_confirmation() {
    let mut appointments = demo_bookings(Role::Doctor);
    let pending = appointments
        .iter_mut()
        .find(|a| a.status == BookingStatus::Pending)
        .unwrap();

    let err = pending.complete("notes").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InvalidTransition);
    assert_eq!(pending.notes, None);
}

#[test]
fn patient_search_and_cancel() {
    let mut appointments = demo_bookings(Role::Patient);
    let hits: Vec<u32> = filter_bookings(&appointments, None, "cardiology")
        .iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(hits, vec![1]);

    let apt = appointments.iter_mut().find(|a| a.id == 1).unwrap();
    apt.transition(BookingStatus::Cancelled).unwrap();
    assert!(filter_bookings(&appointments, Some(BookingStatus::Upcoming), "cardiology").is_empty());
}
