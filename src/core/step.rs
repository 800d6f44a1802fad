use std::fmt::{Display, Formatter};

/// One step of the hire flow, supplied whole by the surrounding application.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProgressStep {
    pub id: u32,
    pub name: &'static str,
    pub icon: StepIcon,
    pub completed: bool,
    pub current: bool,
}

impl ProgressStep {
    pub const fn status(&self) -> StepStatus {
        if self.completed {
            StepStatus::Completed
        } else if self.current {
            StepStatus::Current
        } else {
            StepStatus::Pending
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StepIcon {
    Location,
    WasteType,
    SkipSize,
    Permits,
    Schedule,
}

impl StepIcon {
    pub const fn glyph(self) -> char {
        match self {
            Self::Location => '⌖',
            Self::WasteType => '♻',
            Self::SkipSize => '⛟',
            Self::Permits => '⛨',
            Self::Schedule => '▦',
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StepStatus {
    Completed,
    Current,
    Pending,
}

impl StepStatus {
    pub const fn marker(self) -> char {
        match self {
            Self::Completed => '✔',
            Self::Current => '●',
            Self::Pending => '○',
        }
    }
}

impl Display for StepStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "Completed"),
            Self::Current => write!(f, "Current Step"),
            Self::Pending => write!(f, "Pending"),
        }
    }
}

/// The hire flow as seen from the skip size step.
pub fn skip_size_flow() -> Vec<ProgressStep> {
    vec![
        ProgressStep {
            id: 1,
            name: "Location",
            icon: StepIcon::Location,
            completed: true,
            current: false,
        },
        ProgressStep {
            id: 2,
            name: "Waste Type",
            icon: StepIcon::WasteType,
            completed: true,
            current: false,
        },
        ProgressStep {
            id: 3,
            name: "Skip Size",
            icon: StepIcon::SkipSize,
            completed: false,
            current: true,
        },
        ProgressStep {
            id: 4,
            name: "Permits",
            icon: StepIcon::Permits,
            completed: false,
            current: false,
        },
        ProgressStep {
            id: 5,
            name: "Schedule",
            icon: StepIcon::Schedule,
            completed: false,
            current: false,
        },
    ]
}
