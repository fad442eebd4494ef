use super::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn parse_reads_server_response_form() {
    assert_eq!(parse("Mon, 15 Mar 2021 00:00:00 GMT"), Some(ymd(2021, 3, 15)));
}

#[test]
fn parse_reads_request_and_iso_forms() {
    assert_eq!(parse("05/03/2024"), Some(ymd(2024, 3, 5)));
    assert_eq!(parse(" 2024-03-05 "), Some(ymd(2024, 3, 5)));
}

#[test]
fn parse_rejects_garbage() {
    assert_eq!(parse(""), None);
    assert_eq!(parse("31/02/2024"), None);
    assert_eq!(parse("ontem"), None);
}

#[test]
fn to_wire_uses_day_first() {
    assert_eq!(to_wire(ymd(2021, 3, 15)), "15/03/2021");
}
