//! `StudentRepository` adapter that mirrors the list to a JSON file.
//!
//! Every operation re-reads the file before touching the list, and every
//! mutation writes the whole list back through [`super::atomic_io`]. The
//! read, mutate and write steps run under one `tokio::sync::Mutex`, so
//! concurrent requests in this process cannot lose each other's updates.
//! Separate processes sharing a file still race; the last writer wins.
//!
//! File reads and writes run on tokio's blocking pool.

use std::sync::Arc;

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use pagination::Page;
use tokio::sync::Mutex;
use tokio::task;
use tracing::{info, warn};

use crate::domain::ports::{StudentQuery, StudentRepository, StudentRepositoryError, select_page};
use crate::domain::{NewStudent, Student, StudentId, StudentPatch};

use super::atomic_io::write_atomic;
use super::student_list;

/// Student store persisted to a single JSON file.
#[derive(Debug)]
pub struct MirroredStudentRepository {
    file: Arc<MirrorFile>,
    students: Mutex<Vec<Student>>,
}

/// The mirror file and the directory handle it lives in.
#[derive(Debug)]
struct MirrorFile {
    dir: Dir,
    file_name: String,
    path: Utf8PathBuf,
}

/// Outcome of reading the mirror file.
enum Snapshot {
    Loaded(Vec<Student>),
    Missing,
    Unusable,
}

impl MirrorFile {
    fn load(&self) -> Snapshot {
        let contents = match self.dir.read_to_string(&self.file_name) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Snapshot::Missing,
            Err(err) => {
                warn!(path = %self.path, error = %err, "student mirror unreadable; keeping cached list");
                return Snapshot::Unusable;
            }
        };
        match serde_json::from_str::<Vec<Student>>(&contents) {
            Ok(loaded) => Snapshot::Loaded(loaded),
            Err(err) => {
                warn!(path = %self.path, error = %err, "student mirror malformed; keeping cached list");
                Snapshot::Unusable
            }
        }
    }

    fn store(&self, students: &[Student]) -> Result<(), StudentRepositoryError> {
        let contents = serde_json::to_string_pretty(students)
            .map_err(|err| StudentRepositoryError::serialization(err.to_string()))?;
        write_atomic(&self.dir, &self.file_name, &contents)
    }
}

impl MirroredStudentRepository {
    /// Open the mirror at `path`, creating an empty one when the file does
    /// not exist yet.
    ///
    /// # Errors
    /// Returns [`StudentRepositoryError::Mirror`] when the parent directory
    /// cannot be opened or the initial empty mirror cannot be written.
    pub fn open(path: &Utf8Path) -> Result<Self, StudentRepositoryError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| {
                StudentRepositoryError::mirror(format!("{path} does not name a file"))
            })?
            .to_owned();
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
            StudentRepositoryError::mirror(format!("opening {parent}: {err}"))
        })?;

        let file = MirrorFile {
            dir,
            file_name,
            path: path.to_owned(),
        };
        if !file.dir.exists(&file.file_name) {
            write_atomic(&file.dir, &file.file_name, "[]")?;
            info!(path = %file.path, "created empty student mirror");
        }
        Ok(Self {
            file: Arc::new(file),
            students: Mutex::new(Vec::new()),
        })
    }

    /// Location of the mirror file.
    pub fn path(&self) -> &Utf8Path {
        &self.file.path
    }

    async fn refresh(&self, students: &mut Vec<Student>) -> Result<(), StudentRepositoryError> {
        let file = Arc::clone(&self.file);
        let snapshot = task::spawn_blocking(move || file.load())
            .await
            .map_err(|err| StudentRepositoryError::mirror(format!("reading mirror: {err}")))?;
        match snapshot {
            Snapshot::Loaded(loaded) => *students = loaded,
            Snapshot::Missing => students.clear(),
            Snapshot::Unusable => {}
        }
        Ok(())
    }

    async fn persist(&self, students: &[Student]) -> Result<(), StudentRepositoryError> {
        let file = Arc::clone(&self.file);
        let snapshot = students.to_vec();
        task::spawn_blocking(move || file.store(&snapshot))
            .await
            .map_err(|err| StudentRepositoryError::mirror(format!("writing mirror: {err}")))?
    }
}

#[async_trait]
impl StudentRepository for MirroredStudentRepository {
    async fn list(&self) -> Result<Vec<Student>, StudentRepositoryError> {
        let mut students = self.students.lock().await;
        self.refresh(&mut students).await?;
        Ok(students.clone())
    }

    async fn paginate(&self, query: &StudentQuery) -> Result<Page<Student>, StudentRepositoryError> {
        let mut students = self.students.lock().await;
        self.refresh(&mut students).await?;
        Ok(select_page(students.clone(), query))
    }

    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, StudentRepositoryError> {
        let mut students = self.students.lock().await;
        self.refresh(&mut students).await?;
        Ok(student_list::find(&students, id))
    }

    async fn create(&self, student: NewStudent) -> Result<Student, StudentRepositoryError> {
        let mut students = self.students.lock().await;
        self.refresh(&mut students).await?;
        let created = student_list::create(&mut students, student);
        self.persist(&students).await?;
        Ok(created)
    }

    async fn update(
        &self,
        id: &StudentId,
        patch: StudentPatch,
    ) -> Result<Option<Student>, StudentRepositoryError> {
        let mut students = self.students.lock().await;
        self.refresh(&mut students).await?;
        let updated = student_list::update(&mut students, id, patch);
        if updated.is_some() {
            self.persist(&students).await?;
        }
        Ok(updated)
    }

    async fn delete(&self, id: &StudentId) -> Result<bool, StudentRepositoryError> {
        let mut students = self.students.lock().await;
        self.refresh(&mut students).await?;
        let removed = student_list::delete(&mut students, id);
        if removed {
            self.persist(&students).await?;
        }
        Ok(removed)
    }
}
