//! List operations shared by the in-memory and mirrored student adapters.

use crate::domain::{NewStudent, Student, StudentId, StudentPatch};

pub(super) fn create(students: &mut Vec<Student>, new: NewStudent) -> Student {
    let student = Student::from_new(StudentId::generate(), new);
    students.push(student.clone());
    student
}

pub(super) fn find(students: &[Student], id: &StudentId) -> Option<Student> {
    students.iter().find(|student| student.id() == id).cloned()
}

pub(super) fn update(
    students: &mut [Student],
    id: &StudentId,
    patch: StudentPatch,
) -> Option<Student> {
    let student = students.iter_mut().find(|student| student.id() == id)?;
    student.apply(patch);
    Some(student.clone())
}

pub(super) fn delete(students: &mut Vec<Student>, id: &StudentId) -> bool {
    match students.iter().position(|student| student.id() == id) {
        Some(index) => {
            students.remove(index);
            true
        }
        None => false,
    }
}
