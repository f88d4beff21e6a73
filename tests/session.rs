#[cfg(test)]
mod tests {
    use poolside::libs::formatter::{format_km, format_percentage, format_ratio};
    use poolside::libs::attendance::Ratio;
    use poolside::libs::session::{CoachRole, Focus, Squad};
    use poolside::libs::snapshot::Snapshot;

    #[test]
    fn test_focus_parsing() {
        assert_eq!("Aerobic capacity".parse::<Focus>().unwrap(), Focus::AerobicCapacity);
        assert_eq!("race_pace".parse::<Focus>().unwrap(), Focus::RacePace);
        assert_eq!("VO2-MAX".parse::<Focus>().unwrap(), Focus::Vo2Max);
        assert!("cardio".parse::<Focus>().is_err());
        for focus in Focus::ALL {
            assert_eq!(focus.label().parse::<Focus>().unwrap(), focus);
        }
    }

    #[test]
    fn test_coach_role_parsing() {
        assert_eq!(" Lead ".parse::<CoachRole>().unwrap(), CoachRole::Lead);
        assert!("assistant".parse::<CoachRole>().is_err());
    }

    #[test]
    fn test_squad_color_is_stable() {
        let stored = Squad { id: 3, name: "Seniors".to_string(), color: Some("#111111".to_string()) };
        let fallback = Squad { id: 3, name: "Seniors".to_string(), color: None };

        assert_eq!(stored.display_color(), "#111111");
        assert_eq!(fallback.display_color(), fallback.display_color());
        assert!(fallback.display_color().starts_with('#'));
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_percentage(67), "67%");
        assert_eq!(format_km(12.5), "12.50 km");
        assert_eq!(format_ratio(&Ratio { attended: 3, total: 4, percentage: 75 }), "3/4 (75%)");
    }

    #[test]
    fn test_snapshot_sections_are_optional() {
        let snapshot = Snapshot::from_json(r#"{ "locations": [{ "id": 4, "name": "Teaching Pool" }] }"#).unwrap();
        assert!(snapshot.sessions.is_empty());
        assert_eq!(snapshot.location(4).map(|l| l.name.as_str()), Some("Teaching Pool"));

        let json = snapshot.to_json().unwrap();
        assert_eq!(Snapshot::from_json(&json).unwrap(), snapshot);
        assert!(Snapshot::from_json("[]").is_err());
    }

    #[test]
    fn test_unknown_status_fails_to_parse() {
        let json = r#"{ "attendance": [{ "id": 1, "session_id": 1, "swimmer_id": 1, "status": "sick" }] }"#;
        assert!(Snapshot::from_json(json).is_err());
    }
}
