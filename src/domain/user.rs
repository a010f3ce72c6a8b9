#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Attendee,
    Speaker,
    Organizer,
}

impl Role {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "attendee" => Some(Self::Attendee),
            "speaker" => Some(Self::Speaker),
            "organizer" => Some(Self::Organizer),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Attendee => "attendee",
            Self::Speaker => "speaker",
            Self::Organizer => "organizer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub role: Role,
    pub display_name: String,
}

impl UserProfile {
    pub fn new(role: Role, display_name: impl Into<String>) -> Self {
        Self {
            role,
            display_name: display_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles_case_insensitively() {
        assert_eq!(Role::parse("attendee"), Some(Role::Attendee));
        assert_eq!(Role::parse("Speaker"), Some(Role::Speaker));
        assert_eq!(Role::parse(" ORGANIZER "), Some(Role::Organizer));
    }

    #[test]
    fn rejects_unknown_role() {
        assert_eq!(Role::parse("admin"), None);
    }

    #[test]
    fn label_round_trips_through_parse() {
        for role in [Role::Attendee, Role::Speaker, Role::Organizer] {
            assert_eq!(Role::parse(role.label()), Some(role));
        }
    }
}
