use js_sys::Date;
use termfolio_core::Clock;

/// Reads the browser's `Date` on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        Date::now()
    }

    fn local_date_string(&self) -> String {
        Date::new_0().to_string().into()
    }
}

/// `HH:MM` in local time, for the status bar.
pub fn status_time() -> String {
    let now = Date::new_0();
    format!("{:02}:{:02}", now.get_hours(), now.get_minutes())
}
