//! Mock user roster and avatar tiers for the focus map.

/// Avatar tier unlocked by accumulated focus time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AvatarTier {
    Classic,
    Cone,
    Mushroom,
}

impl AvatarTier {
    /// Focus hours needed to unlock this tier.
    pub fn required_hours(self) -> u32 {
        match self {
            AvatarTier::Classic => 0,
            AvatarTier::Cone => 5,
            AvatarTier::Mushroom => 10,
        }
    }

    /// Highest tier unlocked for the given accumulated focus minutes.
    pub fn for_focus_minutes(minutes: u32) -> Self {
        let hours = minutes / 60;
        if hours >= AvatarTier::Mushroom.required_hours() {
            AvatarTier::Mushroom
        } else if hours >= AvatarTier::Cone.required_hours() {
            AvatarTier::Cone
        } else {
            AvatarTier::Classic
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AvatarTier::Classic => "Classic Avatar",
            AvatarTier::Cone => "Cone Avatar",
            AvatarTier::Mushroom => "Mushroom Avatar",
        }
    }

    pub fn color(self) -> egui::Color32 {
        match self {
            AvatarTier::Classic => egui::Color32::from_rgb(120, 170, 255),
            AvatarTier::Cone => egui::Color32::from_rgb(255, 170, 80),
            AvatarTier::Mushroom => egui::Color32::from_rgb(230, 90, 90),
        }
    }
}

#[derive(Clone, Debug)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub focus_sessions: u32,
    pub focus_minutes: u32,
}

impl User {
    pub fn avatar(&self) -> AvatarTier {
        AvatarTier::for_focus_minutes(self.focus_minutes)
    }
}

/// Fixture roster shown while the backend profile feed is out of scope.
pub fn mock_roster() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "User 1".to_string(),
            focus_sessions: 5,
            focus_minutes: 150,
        },
        User {
            id: 2,
            name: "User 2".to_string(),
            focus_sessions: 11,
            focus_minutes: 380,
        },
        User {
            id: 3,
            name: "User 3".to_string(),
            focus_sessions: 22,
            focus_minutes: 710,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_unlock_at_their_hour_thresholds() {
        assert_eq!(AvatarTier::for_focus_minutes(0), AvatarTier::Classic);
        assert_eq!(AvatarTier::for_focus_minutes(299), AvatarTier::Classic);
        assert_eq!(AvatarTier::for_focus_minutes(300), AvatarTier::Cone);
        assert_eq!(AvatarTier::for_focus_minutes(599), AvatarTier::Cone);
        assert_eq!(AvatarTier::for_focus_minutes(600), AvatarTier::Mushroom);
        assert_eq!(AvatarTier::for_focus_minutes(100_000), AvatarTier::Mushroom);
    }

    #[test]
    fn roster_avatars_span_all_tiers() {
        let roster = mock_roster();
        let tiers: Vec<AvatarTier> = roster.iter().map(|u| u.avatar()).collect();

        assert_eq!(
            tiers,
            vec![AvatarTier::Classic, AvatarTier::Cone, AvatarTier::Mushroom]
        );
    }
}
