//! Icon names used by section items
//!
//! Documents store icons by name. Names outside the supported set resolve
//! to `Icon::Placeholder` instead of failing the render.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! icons {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// A supported icon
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum Icon {
            $($variant,)+
            /// Fallback for unknown names
            #[default]
            Placeholder,
        }

        impl Icon {
            /// Every icon offered by the editors (placeholder excluded)
            pub const SUPPORTED: &'static [Icon] = &[$(Icon::$variant,)+];

            /// Total lookup by name; unknown names give the placeholder
            pub fn from_name(name: &str) -> Icon {
                match name.trim() {
                    $($name => Icon::$variant,)+
                    _ => Icon::Placeholder,
                }
            }

            /// Stored name of the icon
            pub fn name(&self) -> &'static str {
                match self {
                    $(Icon::$variant => $name,)+
                    Icon::Placeholder => "Placeholder",
                }
            }
        }
    };
}

icons! {
    Medal => "Medal",
    Building => "Building",
    Users => "Users",
    GraduationCap => "GraduationCap",
    Award => "Award",
    Briefcase => "Briefcase",
    Clock => "Clock",
    CalendarDays => "CalendarDays",
    Heart => "Heart",
    Shield => "Shield",
    Star => "Star",
    Zap => "Zap",
    Headphones => "Headphones",
    BookOpen => "BookOpen",
    Globe => "Globe",
    UserCheck => "UserCheck",
    Facebook => "Facebook",
    Instagram => "Instagram",
    Twitter => "Twitter",
    Linkedin => "Linkedin",
    Youtube => "Youtube",
    Mail => "Mail",
    Phone => "Phone",
    MapPin => "MapPin",
}

impl Icon {
    /// True for anything but the placeholder
    pub fn is_known(&self) -> bool {
        *self != Icon::Placeholder
    }
}

impl From<String> for Icon {
    fn from(name: String) -> Self {
        Icon::from_name(&name)
    }
}

impl From<&str> for Icon {
    fn from(name: &str) -> Self {
        Icon::from_name(name)
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        icon.name().to_string()
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
