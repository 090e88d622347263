use devayu_types::{
    access_redirect, compute_items, dashboard_path, hide_chrome, resolve, Page, Role,
    SessionBackend, SessionKey, SplashState,
};
use pretty_assertions::assert_eq;

use crate::common::{labels, paths, store_with_backend};

// ─── Sign in, pick a role, land on the dashboard ───────────────────────────

#[test]
fn login_then_doctor_role_shows_doctor_navigation() {
    let (session, _backend) = store_with_backend();

    session.login("dana@clinic.org").unwrap();
    assert!(session.is_logged_in());
    assert_eq!(session.role(), Role::Patient);
    assert_eq!(session.user_name(), "dana");

    session.select_role(Role::Doctor).unwrap();
    assert_eq!(session.get(SessionKey::UserRole), "doctor");

    let landing = dashboard_path(session.role());
    assert_eq!(landing, "/dashboard-doctor");
    assert_eq!(resolve(&landing).page, Page::Dashboard(Role::Doctor));
    assert!(!hide_chrome(&landing));
    assert_eq!(access_redirect(&landing, &session, true), None);

    let items = compute_items(session.stored_role(), &landing);
    assert_eq!(
        labels(&items),
        vec!["Home", "Appointments", "Records", "Consultations", "Profile"]
    );
    assert_eq!(
        paths(&items),
        vec![
            "/dashboard-doctor",
            "/appointments-doctor",
            "/records-doctor",
            "/consultations",
            "/profile",
        ]
    );
    let active: Vec<_> = items.iter().filter(|i| i.active).map(|i| i.label).collect();
    assert_eq!(active, vec!["Home"]);
}

#[test]
fn register_signs_in_as_patient_with_email() {
    let (session, _backend) = store_with_backend();
    session.register("Asha Kumar", "asha@example.org").unwrap();

    let snapshot = session.snapshot();
    assert!(snapshot.is_logged_in);
    assert_eq!(snapshot.user_name, "Asha Kumar");
    assert_eq!(snapshot.user_email.as_deref(), Some("asha@example.org"));
    assert_eq!(snapshot.role, Role::Patient);

    let items = compute_items(session.stored_role(), "/pharmacy");
    assert_eq!(
        labels(&items),
        vec!["Home", "Appointments", "Records", "Pharmacy", "Profile"]
    );
    assert!(items[3].active);
}

#[test]
fn splash_sends_returning_pharmacist_to_their_dashboard() {
    let (session, _backend) = store_with_backend();
    session.login("owner@pharma.example").unwrap();
    session.select_role(Role::Pharma).unwrap();

    let state = SplashState::after_delay(&session);
    assert_eq!(state, SplashState::RedirectToDashboard(Role::Pharma));
    assert_eq!(state.target_path().as_deref(), Some("/dashboard-pharma"));
}

// ─── Leaving ───────────────────────────────────────────────────────────────

#[test]
fn back_to_login_from_role_selection_keeps_name() {
    let (session, _backend) = store_with_backend();
    session.register("Asha Kumar", "asha@example.org").unwrap();

    session.abandon_login().unwrap();

    assert!(!session.is_logged_in());
    assert_eq!(session.raw(SessionKey::UserRole), None);
    assert_eq!(session.user_name(), "Asha Kumar");
    assert_eq!(access_redirect("/profile", &session, true), Some("/login"));
}

#[test]
fn logout_removes_session_keys_only() {
    let (session, backend) = store_with_backend();
    backend.write("theme", "dark").unwrap();
    session.register("Asha Kumar", "asha@example.org").unwrap();
    session.select_role(Role::Doctor).unwrap();

    session.logout().unwrap();

    for key in devayu_types::ALL_KEYS {
        assert_eq!(session.raw(*key), None, "{key}");
    }
    assert_eq!(backend.read("theme").as_deref(), Some("dark"));
    assert_eq!(
        SplashState::after_delay(&session).target_path().as_deref(),
        Some("/login")
    );
}

#[test]
fn delete_account_clears_everything() {
    let (session, backend) = store_with_backend();
    backend.write("theme", "dark").unwrap();
    session.register("Asha Kumar", "asha@example.org").unwrap();

    session.delete_account().unwrap();

    assert!(backend.is_empty());
    assert_eq!(session.get(SessionKey::UserRole), "patient");
    assert_eq!(session.user_name(), "User");
    assert_eq!(session.user_email(), "user@example.com");
}

// ─── Bad role values ───────────────────────────────────────────────────────

#[test]
fn unknown_role_write_is_rejected_and_previous_role_kept() {
    let (session, _backend) = store_with_backend();
    session.login("dana@clinic.org").unwrap();
    session.select_role(Role::Doctor).unwrap();

    assert!(session.set(SessionKey::UserRole, "admin").is_err());
    assert_eq!(session.role(), Role::Doctor);
}

#[test]
fn stale_stored_role_falls_back_to_patient_base_items() {
    let (session, backend) = store_with_backend();
    session.login("dana@clinic.org").unwrap();
    backend.write("userRole", "nurse").unwrap();

    assert_eq!(session.stored_role(), None);
    assert_eq!(session.role(), Role::Patient);
    let items = compute_items(session.stored_role(), "/records-patient");
    assert_eq!(labels(&items), vec!["Home", "Appointments", "Records"]);
    assert_eq!(items[0].path, "/dashboard-patient");
    assert!(items[2].active);
}
