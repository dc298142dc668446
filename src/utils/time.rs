/// 12-hour rendering of a 24-hour `HH:MM` time-of-day string, split into the
/// clock part and the AM/PM suffix the way the detail view displays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTime {
    pub time: String,
    pub period: String,
}

impl FormattedTime {
    fn not_available() -> Self {
        Self { time: "N/A".to_string(), period: String::new() }
    }
}

pub fn format_time(time: Option<&str>) -> FormattedTime {
    let Some(raw) = time.filter(|t| !t.is_empty()) else {
        return FormattedTime::not_available();
    };

    let mut parts = raw.split(':');
    let hours = parts.next().and_then(|h| h.parse::<u32>().ok());
    let minutes = parts.next().unwrap_or("00");

    let Some(hours) = hours.filter(|h| *h < 24) else {
        return FormattedTime::not_available();
    };

    let period = if hours >= 12 { "PM" } else { "AM" };
    let twelve_hour = match hours % 12 {
        0 => 12,
        h => h,
    };

    FormattedTime {
        time: format!("{:02}:{}", twelve_hour, minutes),
        period: period.to_string(),
    }
}
