//! Date labels drawn along arcs near the rim

use chrono::{Datelike, NaiveDate};

use crate::{Color, FaceGeometry, RectF};

/// Distance between the face bounds and the label arcs
pub const LABEL_INSET: f32 = 5.0;
pub const LABEL_TEXT_SIZE: f32 = 18.0;

/// Day of week, lower left of the rim
const WEEKDAY_ARC: (f32, f32) = (105.0, -30.0);
const WEEKDAY_OFFSET: f32 = -8.0;
/// Month and day, upper left of the rim
const DATE_ARC: (f32, f32) = (-110.0, 35.0);
const DATE_OFFSET: f32 = 16.0;

/// Text laid along an arc of an oval
#[derive(Debug, Clone, PartialEq)]
pub struct ArcLabel {
    pub text: String,
    pub oval: RectF,
    /// Degrees, clockwise from 3 o'clock
    pub start_angle: f32,
    /// Negative sweeps run counter-clockwise
    pub sweep: f32,
    /// Offset from the arc, positive toward the center
    pub vertical_offset: f32,
    pub text_size: f32,
    pub color: Color,
}

/// Day number with a suffix chosen from its last digit ("1 st", "22 nd", "11 st")
pub fn ordinal_day(day: u32) -> String {
    let suffix = match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{} {}", day, suffix)
}

/// Full weekday name
pub fn weekday_text(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// `"<Month> , <ordinal day>"`
pub fn date_text(date: NaiveDate) -> String {
    format!("{} , {}", date.format("%B"), ordinal_day(date.day()))
}

/// Weekday and date labels for a face
pub fn date_labels(geometry: &FaceGeometry, date: NaiveDate, color: Color) -> Vec<ArcLabel> {
    let oval = geometry.inset_oval(LABEL_INSET);
    let label = |text: String, (start_angle, sweep): (f32, f32), vertical_offset: f32| ArcLabel {
        text,
        oval,
        start_angle,
        sweep,
        vertical_offset,
        text_size: LABEL_TEXT_SIZE,
        color,
    };

    vec![
        label(weekday_text(date), WEEKDAY_ARC, WEEKDAY_OFFSET),
        label(date_text(date), DATE_ARC, DATE_OFFSET),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rect;

    #[test]
    fn test_ordinal_suffix_by_last_digit() {
        assert_eq!(ordinal_day(1), "1 st");
        assert_eq!(ordinal_day(2), "2 nd");
        assert_eq!(ordinal_day(3), "3 rd");
        assert_eq!(ordinal_day(4), "4 th");
        assert_eq!(ordinal_day(11), "11 st");
        assert_eq!(ordinal_day(22), "22 nd");
        assert_eq!(ordinal_day(30), "30 th");
    }

    #[test]
    fn test_date_text() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 23).unwrap();
        assert_eq!(weekday_text(date), "Saturday");
        assert_eq!(date_text(date), "March , 23 rd");
    }

    #[test]
    fn test_label_arcs() {
        let geometry = FaceGeometry::new(Rect::square(280));
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let labels = date_labels(&geometry, date, Color::WHITE);

        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].text, "Monday");
        assert_eq!((labels[0].start_angle, labels[0].sweep), (105.0, -30.0));
        assert_eq!(labels[0].vertical_offset, -8.0);
        assert_eq!(labels[1].text, "January , 1 st");
        assert_eq!((labels[1].start_angle, labels[1].sweep), (-110.0, 35.0));
        assert_eq!(labels[1].oval, geometry.inset_oval(LABEL_INSET));
        assert!(labels.iter().all(|l| l.color == Color::WHITE));
    }
}
