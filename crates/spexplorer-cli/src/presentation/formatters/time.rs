use chrono::{DateTime, Utc};

/// Relative age of a fetch ("agora", "há 3 min").
pub fn format_relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(at);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();

    if seconds < 60 {
        "agora".to_string()
    } else if minutes < 60 {
        format!("há {} min", minutes)
    } else if hours < 24 {
        format!("há {} h", hours)
    } else {
        format!("há {} dias", duration.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc::now();
        assert_eq!(format_relative_time(now, now), "agora");
        assert_eq!(format_relative_time(now - Duration::minutes(5), now), "há 5 min");
        assert_eq!(format_relative_time(now - Duration::hours(3), now), "há 3 h");
        assert_eq!(format_relative_time(now - Duration::days(2), now), "há 2 dias");
    }
}
