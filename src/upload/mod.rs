//! Deferred invocation of the external upload script.
//!
//! An outfit submission schedules one job per request. The job waits for the
//! configured delay, runs the script with the user id as its only argument and
//! logs what the script produced. Nothing is reported back to the client.

pub mod invoker;
pub mod outcome;
pub mod scheduler;

#[cfg(test)]
pub(crate) mod testing;
