#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, Weekday};
    use poolside::libs::attendance::{attendance_stats, percentage, squad_attendance, AnalyticsOptions};
    use poolside::libs::session::{Attendance, Focus, Session, Swimmer};
    use poolside::libs::status::{AttendanceStatus, Punctuality};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Wednesday 2026-10-21, mid-morning.
    fn now() -> NaiveDateTime {
        date(2026, 10, 21).and_hms_opt(10, 0, 0).unwrap()
    }

    fn session(id: i64, day: NaiveDate) -> Session {
        Session {
            id,
            date: day,
            start_time: "06:00".to_string(),
            end_time: "07:30".to_string(),
            squad_id: 1,
            location_id: 1,
            focus: Focus::Technique,
            content: None,
            distance: None,
            coaches: vec![],
        }
    }

    fn record(id: i64, session_id: i64, swimmer_id: i64, status: &str, notes: &str) -> Attendance {
        Attendance {
            id,
            session_id,
            swimmer_id,
            status: status.parse().unwrap(),
            notes: notes.to_string(),
        }
    }

    fn swimmer(id: i64, first_name: &str, squad_id: i64) -> Swimmer {
        Swimmer {
            id,
            first_name: first_name.to_string(),
            last_name: "Reed".to_string(),
            squad_id,
            date_of_birth: date(2011, 4, 2),
        }
    }

    #[test]
    fn test_status_normalization() {
        assert_eq!("Present".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::Present);
        assert_eq!("very late".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::VeryLate);
        assert_eq!("First-Half-Only".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::FirstHalfOnly);
        assert!("sick".parse::<AttendanceStatus>().is_err());
        assert!(!AttendanceStatus::SecondHalfOnly.counts_as_attended());
        assert!(AttendanceStatus::VeryLate.counts_as_attended());
    }

    #[test]
    fn test_punctuality_classification() {
        assert_eq!(Punctuality::classify(AttendanceStatus::Present, "Very late, bus"), Some(Punctuality::VeryLate));
        assert_eq!(Punctuality::classify(AttendanceStatus::Present, "LATE"), Some(Punctuality::Late));
        assert_eq!(Punctuality::classify(AttendanceStatus::Present, "good set"), Some(Punctuality::OnTime));
        assert_eq!(Punctuality::classify(AttendanceStatus::Late, ""), Some(Punctuality::Late));
        assert_eq!(Punctuality::classify(AttendanceStatus::Absent, "late"), None);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(2, 3, 0), 67);
        assert_eq!(percentage(1, 8, 0), 13);
        assert_eq!(percentage(0, 0, 0), 0);
        assert_eq!(percentage(0, 0, 100), 100);
    }

    #[test]
    fn test_notes_decide_punctuality_for_present() {
        let sessions = vec![
            session(1, date(2026, 10, 19)),
            session(2, date(2026, 10, 20)),
            session(3, date(2026, 10, 21)),
        ];
        let attendance = vec![
            record(1, 1, 5, "present", ""),
            record(2, 2, 5, "present", "late arrival"),
            record(3, 3, 5, "Present", ""),
        ];
        let stats = attendance_stats(5, &sessions, &attendance, now(), &AnalyticsOptions::default());

        assert_eq!(stats.attended, 3);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.overall_percentage, 100);
        assert_eq!(stats.punctuality.on_time, 2);
        assert_eq!(stats.punctuality.late, 1);
        assert_eq!(stats.punctuality.on_time_percentage, 67);
        assert_eq!(stats.punctuality.late_percentage, 33);
    }

    #[test]
    fn test_windows_and_breakdowns() {
        let sessions = vec![
            session(1, date(2026, 10, 19)), // this week, Monday
            session(2, date(2026, 10, 12)), // this month, Monday
            session(3, date(2026, 9, 30)),  // last month, Wednesday
            session(4, date(2026, 10, 21)), // this week, Wednesday
        ];
        let attendance = vec![
            record(1, 1, 5, "present", ""),
            record(2, 2, 5, "absent", ""),
            record(3, 3, 5, "very_late", ""),
            record(4, 4, 5, "first_half_only", ""),
            record(5, 1, 6, "present", ""),
        ];
        let stats = attendance_stats(5, &sessions, &attendance, now(), &AnalyticsOptions::default());

        assert_eq!((stats.attended, stats.total), (2, 4));
        assert_eq!(stats.overall_percentage, 50);
        assert_eq!((stats.this_week.attended, stats.this_week.total), (1, 2));
        assert_eq!((stats.this_month.attended, stats.this_month.total), (1, 3));
        assert_eq!(stats.this_month.percentage, 33);

        assert_eq!(stats.by_weekday.len(), 7);
        assert_eq!(stats.by_weekday[0].weekday, Weekday::Mon);
        assert_eq!((stats.by_weekday[0].ratio.attended, stats.by_weekday[0].ratio.total), (1, 2));
        assert_eq!((stats.by_weekday[2].ratio.attended, stats.by_weekday[2].ratio.total), (1, 2));
        assert_eq!(stats.by_weekday[6].ratio.total, 0);

        assert_eq!(stats.trend.len(), 6);
        assert_eq!(stats.trend[5].label, "Oct 2026");
        assert_eq!(stats.trend[4].label, "Sep 2026");
        assert_eq!((stats.trend[4].ratio.attended, stats.trend[4].ratio.total), (1, 1));
        assert_eq!(stats.trend[0].month_start, date(2026, 5, 1));

        assert_eq!(stats.punctuality.very_late, 1);
        assert_eq!(stats.punctuality.on_time + stats.punctuality.late + stats.punctuality.very_late, stats.attended);

        let absent = stats.status_counts.iter().find(|c| c.status == AttendanceStatus::Absent).unwrap();
        assert_eq!(absent.count, 1);
    }

    #[test]
    fn test_no_records() {
        let stats = attendance_stats(42, &[], &[], now(), &AnalyticsOptions { trend_months: 3 });

        assert_eq!((stats.attended, stats.total, stats.overall_percentage), (0, 0, 0));
        assert_eq!(stats.punctuality.on_time_percentage, 100);
        assert_eq!(stats.punctuality.late_percentage, 0);
        assert_eq!(stats.trend.len(), 3);
    }

    #[test]
    fn test_missing_session_counts_only_overall() {
        let sessions = vec![session(1, date(2026, 10, 20))];
        let attendance = vec![record(1, 1, 5, "present", ""), record(2, 99, 5, "present", "")];
        let stats = attendance_stats(5, &sessions, &attendance, now(), &AnalyticsOptions::default());

        assert_eq!(stats.total, 2);
        assert_eq!(stats.this_week.total, 1);
        assert_eq!(stats.by_weekday.iter().map(|d| d.ratio.total).sum::<usize>(), 1);
    }

    #[test]
    fn test_squad_roll_up_orders_best_first() {
        let sessions = vec![session(1, date(2026, 10, 19)), session(2, date(2026, 10, 20))];
        let swimmers = vec![swimmer(1, "Ana", 1), swimmer(2, "Ben", 1), swimmer(3, "Cy", 2)];
        let attendance = vec![
            record(1, 1, 1, "present", ""),
            record(2, 2, 1, "absent", ""),
            record(3, 1, 2, "late", ""),
            record(4, 2, 2, "present", ""),
            record(5, 1, 3, "present", ""),
        ];
        let summaries = squad_attendance(1, &swimmers, &sessions, &attendance, now(), &AnalyticsOptions::default());

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "Ben Reed");
        assert_eq!(summaries[0].overall_percentage, 100);
        assert_eq!(summaries[0].on_time_percentage, 50);
        assert_eq!(summaries[1].overall_percentage, 50);
    }

    #[test]
    fn test_stats_are_idempotent() {
        let sessions = vec![session(1, date(2026, 10, 19))];
        let attendance = vec![record(1, 1, 5, "late", "")];
        let options = AnalyticsOptions::default();
        assert_eq!(
            attendance_stats(5, &sessions, &attendance, now(), &options),
            attendance_stats(5, &sessions, &attendance, now(), &options)
        );
    }
}
