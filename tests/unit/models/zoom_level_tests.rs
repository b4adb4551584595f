// Unit tests for zoom levels and the grid divisions they select

use test_case::test_case;
use week_view_layout::{HourGridDivision, TimelineType, WeekViewLayout, ZoomLevel};

#[test_case(ZoomLevel::Min, 75.0, HourGridDivision::Minutes30 ; "min zoom")]
#[test_case(ZoomLevel::Default, 150.0, HourGridDivision::Minutes15 ; "default zoom")]
#[test_case(ZoomLevel::Max, 300.0, HourGridDivision::Minutes5 ; "max zoom")]
fn test_zoom_level_dimensions(zoom: ZoomLevel, hour_height: f32, division: HourGridDivision) {
    assert_eq!(zoom.hour_height(), hour_height, "{:?} hour height", zoom);
    assert_eq!(zoom.division(), division);
    assert_eq!(zoom.placeholder_minutes(), division.minutes());
}

#[test_case(ZoomLevel::Min, 2 ; "half hours")]
#[test_case(ZoomLevel::Default, 4 ; "quarter hours")]
#[test_case(ZoomLevel::Max, 12 ; "five minutes")]
fn test_layout_follows_zoom(zoom: ZoomLevel, divisions: u32) {
    let mut layout = WeekViewLayout::default();
    layout.set_zoom_level(zoom);

    assert_eq!(layout.hour_grid_division().divisions_per_hour(), divisions);
    assert_eq!(layout.division_height() * divisions as f32, zoom.hour_height());
}

#[test_case(0, ZoomLevel::Min)]
#[test_case(1, ZoomLevel::Default)]
#[test_case(2, ZoomLevel::Max)]
#[test_case(-1, ZoomLevel::Default ; "negative code")]
fn test_zoom_from_code(code: i32, expected: ZoomLevel) {
    assert_eq!(ZoomLevel::from_code(code), expected);
}

#[test]
fn test_zoom_steps_walk_all_levels() {
    let mut zoom = ZoomLevel::Min;
    let mut seen = vec![zoom];
    while zoom.zoomed_in() != zoom {
        zoom = zoom.zoomed_in();
        seen.push(zoom);
    }
    assert_eq!(seen, vec![ZoomLevel::Min, ZoomLevel::Default, ZoomLevel::Max]);
    assert_eq!(zoom.zoomed_out().zoomed_out(), ZoomLevel::Min);
}

#[test_case(TimelineType::Short, 12 ; "short")]
#[test_case(TimelineType::Full, 24 ; "full")]
#[test_case(TimelineType::Range { start_hour: 6, end_hour: 20 }, 14 ; "custom range")]
fn test_content_height_scales_with_zoom(timeline: TimelineType, hours: u32) {
    let mut layout = WeekViewLayout::default();
    layout.set_timeline(timeline);

    let chrome = 44.0 + 20.0;
    layout.set_zoom_level(ZoomLevel::Min);
    assert_eq!(layout.content_size().height, chrome + 75.0 * hours as f32);
    layout.set_zoom_level(ZoomLevel::Max);
    assert_eq!(layout.content_size().height, chrome + 300.0 * hours as f32);
}
