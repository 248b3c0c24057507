use chrono::Month;

/// Long English name of the month `num` months after January, rolling over
/// across years in both directions (12 is January, -1 is December).
pub fn month_name(num: i32) -> &'static str {
    u8::try_from(num.rem_euclid(12) + 1)
        .ok()
        .and_then(|number| Month::try_from(number).ok())
        .map_or("January", |month| month.name())
}
