#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use poolside::libs::layout::{layout_day, layout_locations, layout_week, LayoutError, LayoutOptions, LayoutStrategy};
    use poolside::libs::session::{Focus, Session};

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn session(id: i64, location_id: i64, start: &str, end: &str) -> Session {
        Session {
            id,
            date: monday(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            squad_id: 1,
            location_id,
            focus: Focus::AerobicCapacity,
            content: None,
            distance: None,
            coaches: vec![],
        }
    }

    fn greedy() -> LayoutOptions {
        LayoutOptions { strategy: LayoutStrategy::Greedy, ..LayoutOptions::default() }
    }

    #[test]
    fn test_equal_starts_share_width() {
        let sessions = vec![session(1, 1, "09:00", "10:00"), session(2, 1, "09:00", "10:30")];
        let layout = layout_day(&sessions, 1, monday(), &LayoutOptions::default()).unwrap();

        let a = layout.get(1).unwrap();
        let b = layout.get(2).unwrap();
        assert_eq!((a.left, a.width), (0.0, 50.0));
        assert_eq!((b.left, b.width), (50.0, 50.0));
        assert_eq!(a.top, b.top);
        assert_eq!(a.top, 180.0);
        assert_eq!(b.height - a.height, 30.0);
    }

    #[test]
    fn test_three_way_group_tiles_full_width() {
        let sessions = vec![
            session(1, 1, "17:00", "18:00"),
            session(2, 1, "17:00", "18:00"),
            session(3, 1, "17:00", "19:00"),
        ];
        let layout = layout_day(&sessions, 1, monday(), &LayoutOptions::default()).unwrap();

        let mut ranges: Vec<(f64, f64)> = layout.rects.values().map(|r| (r.left, r.right())).collect();
        ranges.sort_by(|a, b| a.0.total_cmp(&b.0));
        let total: f64 = layout.rects.values().map(|r| r.width).sum();
        assert!((total - 100.0).abs() < 1e-9);
        for pair in ranges.windows(2) {
            assert!(pair[0].1 <= pair[1].0 + 1e-9);
        }
    }

    #[test]
    fn test_same_start_keeps_staggered_sessions_full_width() {
        let sessions = vec![session(1, 1, "09:00", "10:00"), session(2, 1, "09:30", "10:30")];
        let layout = layout_day(&sessions, 1, monday(), &LayoutOptions::default()).unwrap();

        assert_eq!(layout.get(1).unwrap().width, 100.0);
        assert_eq!(layout.get(2).unwrap().width, 100.0);
        assert!(layout.get(1).unwrap().top < layout.get(2).unwrap().top);
    }

    #[test]
    fn test_greedy_separates_overlaps() {
        let sessions = vec![
            session(1, 1, "09:00", "10:00"),
            session(2, 1, "09:30", "10:30"),
            session(3, 1, "10:00", "11:00"),
            session(4, 1, "12:00", "13:00"),
        ];
        let layout = layout_day(&sessions, 1, monday(), &greedy()).unwrap();

        let (a, b, c, d) = (layout.get(1).unwrap(), layout.get(2).unwrap(), layout.get(3).unwrap(), layout.get(4).unwrap());
        assert_eq!(a.width, 50.0);
        assert_ne!(a.left, b.left);
        assert_ne!(b.left, c.left);
        // 3 starts when 1 ends, so it reuses the first column
        assert_eq!(a.left, c.left);
        assert_eq!(d.width, 100.0);
    }

    #[test]
    fn test_greedy_matches_same_start_for_plain_groups() {
        let sessions = vec![session(1, 1, "09:00", "10:00"), session(2, 1, "09:00", "10:30")];
        let same = layout_day(&sessions, 1, monday(), &LayoutOptions::default()).unwrap();
        let greedy = layout_day(&sessions, 1, monday(), &greedy()).unwrap();
        assert_eq!(same.rects, greedy.rects);
    }

    #[test]
    fn test_geometry_scales_with_hour_height() {
        let sessions = vec![session(1, 1, "07:15", "08:45")];
        let options = LayoutOptions { hour_height_px: 80.0, ..LayoutOptions::default() };
        let rect = *layout_day(&sessions, 1, monday(), &options).unwrap().get(1).unwrap();

        assert_eq!(rect.top, 100.0);
        assert_eq!(rect.height, 120.0);
        assert_eq!(rect.bottom(), 220.0);
    }

    #[test]
    fn test_tops_follow_start_order() {
        let sessions = vec![
            session(1, 1, "15:00", "16:00"),
            session(2, 1, "06:00", "07:00"),
            session(3, 1, "11:30", "12:00"),
        ];
        let layout = layout_day(&sessions, 1, monday(), &LayoutOptions::default()).unwrap();
        let order: Vec<i64> = layout.ordered().iter().map(|(id, _)| *id).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert_eq!(layout.get(2).unwrap().top, 0.0);
    }

    #[test]
    fn test_filters_by_location_and_date() {
        let mut other_day = session(3, 1, "09:00", "10:00");
        other_day.date = monday().succ_opt().unwrap();
        let sessions = vec![session(1, 1, "09:00", "10:00"), session(2, 2, "09:00", "10:00"), other_day];

        let layout = layout_day(&sessions, 1, monday(), &LayoutOptions::default()).unwrap();
        assert_eq!(layout.len(), 1);
        assert_eq!(layout.get(1).unwrap().width, 100.0);

        let per_location = layout_locations(&sessions, monday(), &LayoutOptions::default()).unwrap();
        assert_eq!(per_location.keys().copied().collect::<Vec<_>>(), vec![1, 2]);

        let week = layout_week(&sessions, 1, monday(), &LayoutOptions::default()).unwrap();
        assert_eq!(week.len(), 7);
        assert_eq!(week.iter().map(|day| day.len()).sum::<usize>(), 2);
    }

    #[test]
    fn test_empty_day() {
        let layout = layout_day(&[], 1, monday(), &LayoutOptions::default()).unwrap();
        assert!(layout.is_empty());
    }

    #[test]
    fn test_session_ending_at_midnight_is_laid_out() {
        let sessions = vec![session(1, 1, "22:30", "24:00"), session(2, 1, "22:30", "23:30")];
        let layout = layout_day(&sessions, 1, monday(), &LayoutOptions::default()).unwrap();

        let late = *layout.get(1).unwrap();
        assert_eq!(late.top, 990.0);
        assert_eq!(late.height, 90.0);
        assert_eq!(late.width, 50.0);
    }

    #[test]
    fn test_malformed_time_names_session() {
        let sessions = vec![session(1, 1, "09:00", "10:00"), session(9, 1, "9am", "10:00")];
        let err = layout_day(&sessions, 1, monday(), &LayoutOptions::default()).unwrap_err();
        let LayoutError::Time { session_id, .. } = err;
        assert_eq!(session_id, 9);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let sessions = vec![
            session(1, 1, "09:00", "10:00"),
            session(2, 1, "09:00", "10:30"),
            session(3, 1, "09:45", "11:00"),
        ];
        for options in [LayoutOptions::default(), greedy()] {
            let first = layout_day(&sessions, 1, monday(), &options).unwrap();
            let second = layout_day(&sessions, 1, monday(), &options).unwrap();
            assert_eq!(first, second);
        }
    }
}
