use crate::error::RemoteError;
use std::fmt;

/// Slot of the macro remote a receiver is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReceiverId {
    Light = 0,
    Fan,
    Oven,
    None,
}

impl ReceiverId {
    pub const ALL: [ReceiverId; 4] = [
        ReceiverId::Light,
        ReceiverId::Fan,
        ReceiverId::Oven,
        ReceiverId::None,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for ReceiverId {
    type Error = RemoteError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(RemoteError::InvalidIndex {
                index,
                capacity: Self::COUNT,
            })
    }
}

impl fmt::Display for ReceiverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReceiverId::Light => "light",
            ReceiverId::Fan => "fan",
            ReceiverId::Oven => "oven",
            ReceiverId::None => "none",
        };
        f.write_str(name)
    }
}
