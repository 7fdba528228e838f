//! Classroom model.
//!
//! Rooms are modeled for capacity data only; the engine never assigns
//! a physical room to a placed slot.

use serde::{Deserialize, Serialize};

/// Classroom type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassroomType {
    /// Lecture room.
    Theory,
    /// Generic lab room.
    Lab,
    /// Computer lab.
    ComputerLab,
}

/// A classroom with capacity and type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    /// Room name (e.g. `T-03`, `Lab-2`).
    pub name: String,
    /// Seat capacity.
    pub capacity: u32,
    /// Room type.
    pub kind: ClassroomType,
}

impl Classroom {
    /// Creates a classroom.
    pub fn new(name: impl Into<String>, capacity: u32, kind: ClassroomType) -> Self {
        Self {
            name: name.into(),
            capacity,
            kind,
        }
    }

    /// Whether the room can host a session of the given size.
    ///
    /// Lab sessions need a lab-typed room and cap at 40 students
    /// regardless of the room's nominal capacity.
    pub fn can_accommodate(&self, student_count: u32, is_lab: bool) -> bool {
        if is_lab {
            if self.kind == ClassroomType::Theory {
                return false;
            }
            if student_count > 40 {
                return false;
            }
        }
        student_count <= self.capacity
    }
}

/// The institutional default room pool: ten 60-seat lecture rooms and
/// five 40-seat computer labs.
pub fn default_classrooms() -> Vec<Classroom> {
    let mut rooms = Vec::with_capacity(15);
    for i in 1..=10 {
        rooms.push(Classroom::new(format!("T-{i:02}"), 60, ClassroomType::Theory));
    }
    for i in 1..=5 {
        rooms.push(Classroom::new(format!("Lab-{i}"), 40, ClassroomType::ComputerLab));
    }
    rooms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accommodation_rules() {
        let theory = Classroom::new("T-01", 60, ClassroomType::Theory);
        let lab = Classroom::new("Lab-1", 40, ClassroomType::ComputerLab);

        assert!(theory.can_accommodate(55, false));
        assert!(!theory.can_accommodate(70, false));
        assert!(!theory.can_accommodate(30, true)); // labs need lab rooms

        assert!(lab.can_accommodate(35, true));
        assert!(!lab.can_accommodate(45, true)); // lab hard cap
    }

    #[test]
    fn test_default_pool() {
        let rooms = default_classrooms();
        assert_eq!(rooms.len(), 15);
        assert_eq!(rooms[0].name, "T-01");
        assert_eq!(rooms[14].name, "Lab-5");
        assert!(rooms.iter().filter(|r| r.kind == ClassroomType::ComputerLab).count() == 5);
    }
}
