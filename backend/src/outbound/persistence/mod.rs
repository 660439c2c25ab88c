//! Student record stores.
//!
//! Two adapters implement [`crate::domain::ports::StudentRepository`]:
//!
//! - [`InMemoryStudentRepository`] keeps the list in process memory.
//! - [`MirroredStudentRepository`] keeps the same list and mirrors it to a
//!   JSON file so it survives restarts.
//!
//! Only one is active at a time; the server picks the mirror when a mirror
//! path is configured.

mod atomic_io;
mod memory_student_repository;
mod mirrored_student_repository;
mod student_list;

pub use memory_student_repository::InMemoryStudentRepository;
pub use mirrored_student_repository::MirroredStudentRepository;
