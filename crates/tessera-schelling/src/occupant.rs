//! Cell contents of the segregation grid.

/// One of the two agent populations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Group {
    /// Label 0.
    A = 0,
    /// Label 1.
    B = 1,
}

impl Group {
    /// Integer label (`0` or `1`).
    pub fn label(self) -> i8 {
        self as i8
    }
}

/// What a grid cell holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Occupant {
    /// No agent.
    #[default]
    Empty,
    /// An agent of the given group.
    Agent(Group),
}

impl Occupant {
    /// Integer label as a rasterizer expects it: `-1` empty, `0` group A,
    /// `1` group B.
    pub fn label(self) -> i8 {
        match self {
            Occupant::Empty => -1,
            Occupant::Agent(group) => group.label(),
        }
    }

    /// Inverse of [`label`](Self::label). Returns `None` for any other value.
    pub fn from_label(label: i8) -> Option<Self> {
        match label {
            -1 => Some(Occupant::Empty),
            0 => Some(Occupant::Agent(Group::A)),
            1 => Some(Occupant::Agent(Group::B)),
            _ => None,
        }
    }

    /// The agent's group, if the cell is occupied.
    pub fn group(self) -> Option<Group> {
        match self {
            Occupant::Empty => None,
            Occupant::Agent(group) => Some(group),
        }
    }

    /// True if the cell holds no agent.
    pub fn is_empty(self) -> bool {
        self == Occupant::Empty
    }
}
