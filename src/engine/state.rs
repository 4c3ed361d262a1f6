use std::fmt;

/// Coarse assembly state. The single source of truth for which commands
/// are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssemblyState {
    /// Everything in its assembled pose.
    Assembled,
    /// A disassembly sequence (or its delay) is running.
    Disassembling,
    /// Housing and lid split; fuel units still grouped.
    Disassembled,
    /// Fuel units spread into the wide layout.
    GroupSeparated,
    /// An assembly sequence is running.
    Assembling,
}

impl AssemblyState {
    /// Whether pointer picks may select parts.
    #[must_use]
    pub fn allows_picking(self) -> bool {
        matches!(self, Self::Disassembled | Self::GroupSeparated)
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::Disassembling | Self::Assembling)
    }
}

impl fmt::Display for AssemblyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Assembled => "assembled",
            Self::Disassembling => "disassembling",
            Self::Disassembled => "disassembled",
            Self::GroupSeparated => "group separated",
            Self::Assembling => "assembling",
        };
        f.write_str(name)
    }
}

/// User-facing status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Parts are being loaded.
    Loading,
    /// Idle, assembled.
    Assembled,
    /// Disassembly started.
    Disassembling,
    /// Housing and lid have split.
    Disassembled,
    /// Fuel units have spread out.
    FuelUnitsSeparated,
    /// Assembly started.
    Assembling,
    /// Terminal failure.
    Error(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str("Loading..."),
            Self::Assembled => f.write_str("Assembled"),
            Self::Disassembling => f.write_str("Disassembling..."),
            Self::Disassembled => f.write_str("Disassembled"),
            Self::FuelUnitsSeparated => f.write_str("Fuel units separated"),
            Self::Assembling => f.write_str("Assembling..."),
            Self::Error(msg) => write!(f, "Error: {msg}"),
        }
    }
}
