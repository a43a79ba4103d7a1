//! Job endpoints.
//!
//! - `POST /api/jobs` — create (admin)
//! - `GET /api/jobs/{id}` — fetch one
//! - `GET /api/jobs?status=` — list
//! - `POST /api/jobs/{id}/start` — queue for immediate run (admin)
//! - `POST /api/jobs/{id}/cancel` — cancel (admin)
//!
//! Start and cancel are both rejected with 400 while the job is Running.

mod cancel;
mod create;
mod get;
mod list;
mod start;

pub use cancel::cancel_job;
pub use create::create_job;
pub use get::get_job;
pub use list::list_jobs;
pub use start::start_job;
