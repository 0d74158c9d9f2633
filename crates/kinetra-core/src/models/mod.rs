pub mod appointment;
pub mod evaluation;
pub mod patient;
pub mod user;

pub use appointment::{Appointment, AppointmentStatus};
pub use evaluation::Evaluation;
pub use patient::{Patient, Sex};
pub use user::{Role, UserAccount};
