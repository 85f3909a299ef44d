use super::*;

#[test]
fn missing_delay_is_zero() {
    assert_eq!(parse_delay_ms(None), 0);
    assert_eq!(parse_delay_ms(Some("")), 0);
}

#[test]
fn numeric_delay_is_read() {
    assert_eq!(parse_delay_ms(Some("150")), 150);
    assert_eq!(parse_delay_ms(Some(" 75 ")), 75);
    assert_eq!(parse_delay_ms(Some("12.6")), 13);
}

#[test]
fn invalid_delay_is_zero() {
    assert_eq!(parse_delay_ms(Some("soon")), 0);
    assert_eq!(parse_delay_ms(Some("-200")), 0);
    assert_eq!(parse_delay_ms(Some("NaN")), 0);
}

#[test]
fn transition_delay_is_in_milliseconds() {
    assert_eq!(transition_delay(0), "0ms");
    assert_eq!(transition_delay(300), "300ms");
}
