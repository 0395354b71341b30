//! # Human-entered coordinate strings
//!
//! Users type target positions in many shapes. [`reformat_coordinates`] normalizes them to
//! `HH:MM:SS DD:MM:SS` (sexagesimal hours and degrees, two digits per field, optional two
//! decimals), and [`parse_ra_dec`] turns that canonical form into an
//! [`EquatorialCoordinate`] in degrees.
//!
//! | Accepted input | Example |
//! |----------------|---------|
//! | colon separated | `10:45:03.6 -59:41:04` |
//! | space separated | `10 45 03.6 -59 41 04` |
//! | space separated, missing Dec seconds | `10 45 03.6 -59 41` |
//! | slash separated | `10:45:03.6/-59:41:04` |
//! | compact | `104503 -594104` |
//! | decimal hours and degrees | `10.751 -59.685` |
//! | decimal degrees (`d` prefix) | `d 161.265 -59.685` |
//!
//! Every function returns `None` for malformed input: a string either yields a complete
//! coordinate or nothing.
//!
//! ## See also
//! ------------
//! * [`parse_target_list`] – Split a comma separated target list and its markers.

use crate::angles::hours_to_deg;
use crate::constants::{Degree, DEG_TO_HOURS};
use crate::ref_system::EquatorialCoordinate;

/// Collapse every run of whitespace to a single space and trim both ends.
pub fn trim_spaces(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a leading minus sign from a field. A leading plus sign is dropped.
fn split_sign(field: &str) -> (&'static str, &str) {
    match field.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", field.strip_prefix('+').unwrap_or(field)),
    }
}

/// Value of a sexagesimal field list `D[:M[:S]]`, always positive.
///
/// Missing or unparseable trailing fields are ignored, so `12:30:xx` reads as `12:30`.
fn sexagesimal_value(fields: &[&str]) -> Option<f64> {
    let whole: f64 = fields.first()?.parse().ok()?;
    let minutes = fields.get(1).and_then(|m| m.parse::<f64>().ok());
    let seconds = fields.get(2).and_then(|s| s.parse::<f64>().ok());

    let value = match (minutes, seconds) {
        (Some(m), Some(s)) => whole.abs() + (m * 60.0 + s) / 3600.0,
        (Some(m), None) => whole.abs() + m / 60.0,
        _ => whole.abs(),
    };
    value.is_finite().then_some(value)
}

/// Parse one `[-]D[:M[:S]]` field into a signed value.
fn parse_sexagesimal(field: &str) -> Option<f64> {
    let negative = field.starts_with('-');
    let fields: Vec<&str> = field.split(':').collect();
    let value = sexagesimal_value(&fields)?;
    Some(if negative { -value } else { value })
}

/// Parse `HH:MM:SS DD:MM:SS` into degrees.
///
/// Seconds, then minutes, may be missing on either side. The right ascension is read in hours
/// and converted to degrees.
///
/// Arguments
/// ---------
/// * `target`: the canonical coordinate string.
///
/// Return
/// ------
/// * The coordinate, or `None` if there are not exactly two fields, a field does not parse, or
///   the declination is outside `[-90, 90]`.
pub fn parse_ra_dec(target: &str) -> Option<EquatorialCoordinate> {
    let parts: Vec<&str> = target.split_whitespace().collect();
    let [ra, dec] = parts.as_slice() else {
        return None;
    };
    let ra = hours_to_deg(parse_sexagesimal(ra)?);
    let dec: Degree = parse_sexagesimal(dec)?;
    EquatorialCoordinate::try_new(ra, dec).ok()
}

/// Split a compact `[-]HHMMSS` field into `[-]HH:MM:SS`.
pub fn split_coord(coord: &str) -> Option<String> {
    let (sign, digits) = split_sign(coord);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!(
        "{sign}{}:{}:{}",
        &digits[0..2],
        &digits[2..4],
        &digits[4..6]
    ))
}

/// Convert a decimal field to sexagesimal `[-]HH:MM:SS.ss`.
///
/// Arguments
/// ---------
/// * `value`: the decimal value as typed.
/// * `degrees`: `true` when `value` is a right ascension in degrees that must first be
///   converted to hours.
///
/// Return
/// ------
/// * The sexagesimal field. A value without a decimal point is returned unchanged. `None` if
///   the value does not parse.
pub fn decimal_to_mmss(value: &str, degrees: bool) -> Option<String> {
    let value = if degrees {
        let v: f64 = value.trim().parse().ok()?;
        (v * DEG_TO_HOURS).to_string()
    } else {
        value.trim().to_string()
    };

    let Some((whole, fraction)) = value.split_once('.') else {
        return Some(value);
    };
    let fraction: f64 = format!("0.{fraction}").parse().ok()?;
    let (sign, whole) = split_sign(whole);
    if !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut whole: u64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };

    // hundredths of a second, so that 59.995 s carries into the minutes
    let centiseconds = (fraction * 360_000.0).round();
    let mut minutes = (centiseconds / 6000.0).floor();
    let seconds = (centiseconds - minutes * 6000.0) / 100.0;
    if minutes >= 60.0 {
        minutes -= 60.0;
        whole += 1;
    }
    Some(format!("{sign}{whole:02}:{minutes:02}:{seconds:.2}"))
}

/// Pad a field to two integer digits and, when it has decimals, exactly two of them.
fn fix_field_length(field: &str) -> String {
    let (sign, field) = split_sign(field);
    match field.split_once('.') {
        Some((whole, decimals)) => {
            let decimals: String = decimals.chars().chain("00".chars()).take(2).collect();
            format!("{sign}{whole:0>2}.{decimals}")
        }
        None => format!("{sign}{field:0>2}"),
    }
}

/// Normalize one side of a coordinate to `[-]DD:MM:SS[.ss]`.
fn fix_side(side: &str) -> Option<String> {
    let fields: Vec<String> = side.split(':').map(fix_field_length).collect();
    match fields.as_slice() {
        [d, m, s] => Some(format!("{d}:{m}:{s}")),
        [d, m] => match m.split_once('.') {
            // Decimal minutes carry the seconds
            Some((whole, _)) => {
                let minutes: f64 = m.parse().ok()?;
                let seconds = (minutes - minutes.floor()) * 60.0;
                Some(format!("{d}:{whole}:{}", fix_field_length(&format!("{seconds:.2}"))))
            }
            None => Some(format!("{d}:{m}:00")),
        },
        [d] => Some(format!("{d}:00:00")),
        _ => None,
    }
}

/// Normalize a human-entered coordinate to `HH:MM:SS DD:MM:SS`.
///
/// See the module documentation for the accepted shapes. A `d` prefix marks the right
/// ascension as degrees; it is converted to hours.
///
/// Arguments
/// ---------
/// * `input`: the coordinate as typed.
///
/// Return
/// ------
/// * The canonical string, or `None` if the input does not describe a complete coordinate that
///   [`parse_ra_dec`] accepts.
pub fn reformat_coordinates(input: &str) -> Option<String> {
    let mut coord = trim_spaces(input);
    let degrees = coord.starts_with('d');
    if degrees {
        coord = trim_spaces(&coord[1..]);
    }
    if let Some((ra, dec)) = coord.split_once('/') {
        coord = trim_spaces(&format!("{ra} {dec}"));
    }

    let numbers: Vec<&str> = coord.split(' ').collect();
    let (ra, dec) = match numbers.as_slice() {
        [ra, dec] if !ra.contains(':') => {
            if !ra.contains('.') && !dec.contains('.') {
                (split_coord(ra)?, split_coord(dec)?)
            } else {
                (decimal_to_mmss(ra, degrees)?, decimal_to_mmss(dec, false)?)
            }
        }
        [ra, dec] => (ra.to_string(), dec.to_string()),
        [h, m, s, d, dm, ds] => (format!("{h}:{m}:{s}"), format!("{d}:{dm}:{ds}")),
        [h, m, s, d, dm] => (format!("{h}:{m}:{s}"), format!("{d}:{dm}:0")),
        _ => return None,
    };

    let canonical = format!("{} {}", fix_side(&ra)?, fix_side(&dec)?);
    parse_ra_dec(&canonical).map(|_| canonical)
}

/// Targets and markers of a comma separated list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TargetList {
    pub targets: Vec<String>,
    /// Entries given as `marker <name>`, with the prefix removed
    pub markers: Vec<String>,
}

/// Split `"M31, M33, marker M110"` into targets and markers. Empty entries are skipped.
pub fn parse_target_list(input: &str) -> TargetList {
    let mut list = TargetList::default();
    for item in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match item.strip_prefix("marker") {
            Some(marker) => list.markers.push(marker.trim().to_string()),
            None => list.targets.push(item.to_string()),
        }
    }
    list
}

#[cfg(test)]
mod coordinates_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_trim_spaces() {
        assert_eq!(trim_spaces("  10\t45  03 \n"), "10 45 03");
    }

    #[test]
    fn test_parse_ra_dec() {
        let c = parse_ra_dec("10:45:03.6 -59:41:04").unwrap();
        assert_abs_diff_eq!(c.ra, (10.0 + 45.0 / 60.0 + 3.6 / 3600.0) * 15.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.dec, -(59.0 + 41.0 / 60.0 + 4.0 / 3600.0), epsilon = 1e-12);

        let c = parse_ra_dec("-00:30:00 -00:30:00").unwrap();
        assert_abs_diff_eq!(c.ra, -7.5, epsilon = 1e-12);
        assert_abs_diff_eq!(c.dec, -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_ra_dec_missing_fields() {
        let c = parse_ra_dec("12:30 45").unwrap();
        assert_abs_diff_eq!(c.ra, 187.5, epsilon = 1e-12);
        assert_abs_diff_eq!(c.dec, 45.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_ra_dec_rejects_malformed() {
        assert_eq!(parse_ra_dec("10:45:03"), None);
        assert_eq!(parse_ra_dec("ab:cd -10"), None);
        assert_eq!(parse_ra_dec("10:00:00 95:00:00"), None);
        assert_eq!(parse_ra_dec("1 2 3"), None);
    }

    #[test]
    fn test_split_coord() {
        assert_eq!(split_coord("104503").as_deref(), Some("10:45:03"));
        assert_eq!(split_coord("-594104").as_deref(), Some("-59:41:04"));
        assert_eq!(split_coord("1045"), None);
        assert_eq!(split_coord("10a503"), None);
    }

    #[test]
    fn test_decimal_to_mmss() {
        assert_eq!(decimal_to_mmss("10.5", false).as_deref(), Some("10:30:0.00"));
        assert_eq!(decimal_to_mmss("-5.25", false).as_deref(), Some("-05:15:0.00"));
        assert_eq!(decimal_to_mmss("10", false).as_deref(), Some("10"));
        assert_eq!(decimal_to_mmss("180.0", true).as_deref(), Some("12"));
        assert_eq!(decimal_to_mmss("x.5", false), None);
        assert_eq!(decimal_to_mmss("10.99999", false).as_deref(), Some("10:59:59.96"));
        assert_eq!(decimal_to_mmss("359.99999", true).as_deref(), Some("24:00:0.00"));
        assert_eq!(decimal_to_mmss("-5.9999999", false).as_deref(), Some("-06:00:0.00"));
    }

    #[test]
    fn test_reformat_shapes() {
        let canonical = "10:45:03.60 -59:41:04";
        assert_eq!(reformat_coordinates("10:45:03.6 -59:41:04").as_deref(), Some(canonical));
        assert_eq!(reformat_coordinates("10 45 03.6 -59 41 04").as_deref(), Some(canonical));
        assert_eq!(reformat_coordinates("10:45:03.6 / -59:41:04").as_deref(), Some(canonical));
        assert_eq!(reformat_coordinates("104503 -594104").as_deref(), Some("10:45:03 -59:41:04"));
        assert_eq!(
            reformat_coordinates("10 45 03.6 -59 41").as_deref(),
            Some("10:45:03.60 -59:41:00")
        );
        assert_eq!(
            reformat_coordinates("10.5 -59.25").as_deref(),
            Some("10:30:00.00 -59:15:00.00")
        );
        assert_eq!(reformat_coordinates("5:7 8:9").as_deref(), Some("05:07:00 08:09:00"));
        assert_eq!(reformat_coordinates("5:7.5 8").as_deref(), Some("05:07:30.00 08:00:00"));
    }

    #[test]
    fn test_reformat_degrees() {
        let canonical = reformat_coordinates("d 161.25 -59.5").unwrap();
        let c = parse_ra_dec(&canonical).unwrap();
        assert_abs_diff_eq!(c.ra, 161.25, epsilon = 1e-3);
        assert_abs_diff_eq!(c.dec, -59.5, epsilon = 1e-6);

        let carried = reformat_coordinates("d 359.99999 -5.9999999").unwrap();
        assert_eq!(carried, "24:00:00.00 -06:00:00.00");
        assert_eq!(reformat_coordinates(&carried).as_deref(), Some(carried.as_str()));
    }

    #[test]
    fn test_reformat_rejects_malformed() {
        assert_eq!(reformat_coordinates(""), None);
        assert_eq!(reformat_coordinates("M31"), None);
        assert_eq!(reformat_coordinates("1 2 3 4"), None);
        assert_eq!(reformat_coordinates("10:00:00 99:00:00"), None);
    }

    #[test]
    fn test_target_list_markers() {
        let list = parse_target_list(" M31, M33 ,, marker M110 ");
        assert_eq!(list.targets, vec!["M31", "M33"]);
        assert_eq!(list.markers, vec!["M110"]);
    }
}
