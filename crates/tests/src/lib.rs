#[cfg(test)]
mod common;

#[cfg(test)]
mod session_flow_tests;

#[cfg(test)]
mod shared_storage_tests;

#[cfg(test)]
mod route_guard_tests;

#[cfg(test)]
mod booking_workflow_tests;

#[cfg(test)]
mod care_workflow_tests;
