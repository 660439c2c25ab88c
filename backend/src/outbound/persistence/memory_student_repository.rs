//! Process-local `StudentRepository` adapter.
//!
//! Records live in a `Vec` behind a `tokio::sync::RwLock`; nothing survives a
//! restart.

use async_trait::async_trait;
use pagination::Page;
use tokio::sync::RwLock;

use crate::domain::ports::{StudentQuery, StudentRepository, StudentRepositoryError, select_page};
use crate::domain::{NewStudent, Student, StudentId, StudentPatch};

use super::student_list;

/// In-memory student store.
///
/// # Examples
/// ```
/// use student_portal::domain::ports::StudentRepository;
/// use student_portal::outbound::persistence::InMemoryStudentRepository;
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let repo = InMemoryStudentRepository::default();
/// assert!(repo.list().await?.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    students: RwLock<Vec<Student>>,
}

impl InMemoryStudentRepository {
    /// Start from an existing list, keeping its order.
    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students: RwLock::new(students),
        }
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn list(&self) -> Result<Vec<Student>, StudentRepositoryError> {
        Ok(self.students.read().await.clone())
    }

    async fn paginate(&self, query: &StudentQuery) -> Result<Page<Student>, StudentRepositoryError> {
        let snapshot = self.students.read().await.clone();
        Ok(select_page(snapshot, query))
    }

    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, StudentRepositoryError> {
        Ok(student_list::find(&self.students.read().await, id))
    }

    async fn create(&self, student: NewStudent) -> Result<Student, StudentRepositoryError> {
        Ok(student_list::create(&mut *self.students.write().await, student))
    }

    async fn update(
        &self,
        id: &StudentId,
        patch: StudentPatch,
    ) -> Result<Option<Student>, StudentRepositoryError> {
        Ok(student_list::update(&mut self.students.write().await, id, patch))
    }

    async fn delete(&self, id: &StudentId) -> Result<bool, StudentRepositoryError> {
        Ok(student_list::delete(&mut *self.students.write().await, id))
    }
}
