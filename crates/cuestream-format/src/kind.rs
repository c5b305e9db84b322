//! Action type tags and class hierarchy.

use std::fmt;

/// Class of an encoded action, identified by its 16-bit type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Object,
    Action,
    MediaAction,
    Anim,
    Sound,
    MultiAction,
    SerialAction,
    ParallelAction,
    Event,
    SelectAction,
    Still,
    ObjectAction,
}

impl ActionKind {
    /// Look up a kind from its on-disk tag.
    pub fn from_tag(tag: u16) -> Option<Self> {
        let kind = match tag {
            0 => Self::Object,
            1 => Self::Action,
            2 => Self::MediaAction,
            3 => Self::Anim,
            4 => Self::Sound,
            5 => Self::MultiAction,
            6 => Self::SerialAction,
            7 => Self::ParallelAction,
            8 => Self::Event,
            9 => Self::SelectAction,
            10 => Self::Still,
            11 => Self::ObjectAction,
            _ => return None,
        };
        Some(kind)
    }

    /// On-disk tag for this kind.
    pub fn tag(self) -> u16 {
        match self {
            Self::Object => 0,
            Self::Action => 1,
            Self::MediaAction => 2,
            Self::Anim => 3,
            Self::Sound => 4,
            Self::MultiAction => 5,
            Self::SerialAction => 6,
            Self::ParallelAction => 7,
            Self::Event => 8,
            Self::SelectAction => 9,
            Self::Still => 10,
            Self::ObjectAction => 11,
        }
    }

    /// Immediate base class, `None` for the root.
    pub fn parent(self) -> Option<Self> {
        match self {
            Self::Object => None,
            Self::Action => Some(Self::Object),
            Self::MediaAction | Self::MultiAction => Some(Self::Action),
            Self::Anim | Self::Sound | Self::Event | Self::Still | Self::ObjectAction => {
                Some(Self::MediaAction)
            }
            Self::SerialAction | Self::ParallelAction | Self::SelectAction => {
                Some(Self::MultiAction)
            }
        }
    }

    /// Whether this kind is `other` or derives from it.
    pub fn is_a(self, other: Self) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == other {
                return true;
            }
            current = kind.parent();
        }
        false
    }

    /// Whether records of this kind carry the media action fields.
    pub fn is_media(self) -> bool {
        self.is_a(Self::MediaAction)
    }

    /// Whether this kind groups child actions (not decoded by this crate).
    pub fn is_container(self) -> bool {
        self.is_a(Self::MultiAction)
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Object => "Object",
            Self::Action => "Action",
            Self::MediaAction => "MediaAction",
            Self::Anim => "AnimAction",
            Self::Sound => "SoundAction",
            Self::MultiAction => "MultiAction",
            Self::SerialAction => "SerialAction",
            Self::ParallelAction => "ParallelAction",
            Self::Event => "EventAction",
            Self::SelectAction => "SelectAction",
            Self::Still => "StillAction",
            Self::ObjectAction => "ObjectAction",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}
