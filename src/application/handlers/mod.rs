//! Request handlers.
//!
//! One controller per page or API area. Each reads or writes through the
//! repository port, logs through its injected `Logger`, and returns an
//! `ActionResult`.

mod home;
mod ideas;
mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use home::HomeController;
pub use ideas::IdeasController;
pub use session::{SessionController, SESSION_NOT_FOUND};
