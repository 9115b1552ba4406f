use js_sys::{Array, Date, Function, Intl, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::domain::errors::{AppError, AppResult};

/// Header clock label, e.g. `02:03:18 PM EST`.
///
/// Uses `Intl.DateTimeFormat` with 2-digit fields, a 12-hour clock and the
/// short time-zone name. Falls back to [`format_clock_fallback`] when `Intl`
/// rejects the options.
pub fn format_clock(date: &Date, locale: &str) -> String {
    match format_clock_intl(date, locale) {
        Ok(label) => label,
        Err(_) => format_clock_fallback(date.get_hours(), date.get_minutes(), date.get_seconds()),
    }
}

/// Current wall-clock time formatted for the header.
pub fn current_clock_label(locale: &str) -> String {
    format_clock(&Date::new_0(), locale)
}

fn format_clock_intl(date: &Date, locale: &str) -> AppResult<String> {
    let options = Object::new();
    for (key, value) in [
        ("hour", JsValue::from_str("2-digit")),
        ("minute", JsValue::from_str("2-digit")),
        ("second", JsValue::from_str("2-digit")),
        ("hour12", JsValue::TRUE),
        ("timeZoneName", JsValue::from_str("short")),
    ] {
        Reflect::set(&options, &JsValue::from_str(key), &value)
            .map_err(|e| AppError::Browser(format!("Intl option {key}: {e:?}")))?;
    }

    let formatter = date_time_format(locale, &options)?;
    let format: Function = formatter.format();
    format
        .call1(&JsValue::UNDEFINED, date.as_ref())
        .map_err(|e| AppError::Browser(format!("Intl format: {e:?}")))?
        .as_string()
        .ok_or_else(|| AppError::Browser("Intl format returned a non-string".to_string()))
        .map(|s| s.replace('\u{202f}', " "))
}

/// `new Intl.DateTimeFormat([locale], options)`, with a `RangeError` for a
/// malformed locale surfaced as an error instead of a trap.
fn date_time_format(locale: &str, options: &Object) -> AppResult<Intl::DateTimeFormat> {
    let intl = Reflect::get(&js_sys::global(), &JsValue::from_str("Intl"))
        .map_err(|e| AppError::Browser(format!("Intl lookup: {e:?}")))?;
    let ctor: Function = Reflect::get(&intl, &JsValue::from_str("DateTimeFormat"))
        .map_err(|e| AppError::Browser(format!("Intl.DateTimeFormat lookup: {e:?}")))?
        .dyn_into()
        .map_err(|_| AppError::Browser("Intl.DateTimeFormat is not a constructor".to_string()))?;

    let args = Array::of2(&Array::of1(&JsValue::from_str(locale)), options);
    Reflect::construct(&ctor, &args)
        .map(|value| value.unchecked_into::<Intl::DateTimeFormat>())
        .map_err(|e| AppError::Browser(format!("Intl.DateTimeFormat({locale}): {e:?}")))
}

/// `hh:mm:ss AM|PM` from 24-hour components.
pub fn format_clock_fallback(hours: u32, minutes: u32, seconds: u32) -> String {
    let suffix = if hours < 12 { "AM" } else { "PM" };
    let hour12 = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{:02}:{:02}:{:02} {}", hour12, minutes, seconds, suffix)
}

#[cfg(test)]
mod tests {
    use super::format_clock_fallback;

    #[test]
    fn fallback_uses_twelve_hour_clock() {
        assert_eq!(format_clock_fallback(0, 5, 9), "12:05:09 AM");
        assert_eq!(format_clock_fallback(12, 0, 0), "12:00:00 PM");
        assert_eq!(format_clock_fallback(14, 3, 18), "02:03:18 PM");
        assert_eq!(format_clock_fallback(23, 59, 59), "11:59:59 PM");
    }
}
