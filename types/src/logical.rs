use core::fmt;

/// R's three-valued boolean.
///
/// The discriminants are the bytes Rserve puts on the wire, so a codec can
/// move between the two with [`Logical::to_byte`] and [`Logical::from_byte`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Logical {
    #[default]
    False = 0,
    True = 1,
    Na = 2,
}
static_assertions::assert_eq_size!(Logical, u8);

impl Logical {
    /// Decode a wire byte. Any byte other than 0 and 1 is NA.
    pub const fn from_byte(byte: u8) -> Self {
        match byte {
            0 => Logical::False,
            1 => Logical::True,
            _ => Logical::Na,
        }
    }

    pub const fn to_byte(self) -> u8 {
        self as u8
    }

    /// `None` when NA.
    pub const fn to_bool(self) -> Option<bool> {
        match self {
            Logical::False => Some(false),
            Logical::True => Some(true),
            Logical::Na => None,
        }
    }
}

impl From<bool> for Logical {
    fn from(value: bool) -> Self {
        if value { Logical::True } else { Logical::False }
    }
}

impl From<Option<bool>> for Logical {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Logical::Na, Logical::from)
    }
}

impl fmt::Display for Logical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Logical::False => "FALSE",
            Logical::True => "TRUE",
            Logical::Na => "NA",
        })
    }
}
