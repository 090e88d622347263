use devayu_types::{Role, SessionKey};
use pretty_assertions::assert_eq;

use crate::common::two_tabs;

#[test]
fn second_tab_sees_writes_on_next_read() {
    let (tab_a, tab_b) = two_tabs();
    let before = tab_b.snapshot();

    tab_a.login("dana@clinic.org").unwrap();
    tab_a.select_role(Role::Pharma).unwrap();

    // A snapshot is a copy and does not follow later writes.
    assert!(!before.is_logged_in);
    assert_eq!(before.role, Role::Patient);

    let after = tab_b.snapshot();
    assert!(after.is_logged_in);
    assert_eq!(after.role, Role::Pharma);
}

#[test]
fn logout_in_one_tab_signs_out_the_other() {
    let (tab_a, tab_b) = two_tabs();
    tab_a.login("dana@clinic.org").unwrap();
    assert!(tab_b.is_logged_in());

    tab_b.logout().unwrap();

    assert!(!tab_a.is_logged_in());
    assert_eq!(tab_a.get(SessionKey::UserName), "User");
}
