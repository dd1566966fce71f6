// Discord commands module.
// Each feature gets its own command file.

pub mod docs;

pub mod examples;

pub mod staff;

pub mod threads;
