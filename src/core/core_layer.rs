// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "docs/doc_service.rs"]
pub mod docs;

#[path = "examples/example_service.rs"]
pub mod examples;

#[path = "pastes/paste_service.rs"]
pub mod pastes;

#[path = "staff/staff_list_service.rs"]
pub mod staff;

#[path = "threads/thread_close_service.rs"]
pub mod threads;
