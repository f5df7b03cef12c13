//! Test fixtures: a real PRE Distribuce response for receiver command `492`.

use chrono::NaiveTime;

use crate::core::{period::Period, tariff::TariffKind};

// language=html
pub const SAMPLE_HTML: &str = concat!(
    r#"<div class="hdo-bar">"#,
    r#"<div class="blue-text pull-left">pátek 13.02.</div>"#,
    r#"<div class="overflow-bar"></div>"#,
    r#"<span style="left: 0.00%;" class="hdovt"></span>"#,
    r#"<span style="left: 0.00%;" class="span-overflow" title="00:00 - 01:00"></span>"#,
    r#"<span style="left: 4.17%;" class="hdont"></span>"#,
    r#"<span style="left: 4.17%;" class="span-overflow" title="01:00 - 06:00"></span>"#,
    r#"<span style="left: 25.00%;" class="hdovt"></span>"#,
    r#"<span style="left: 25.00%;" class="span-overflow" title="06:00 - 13:00"></span>"#,
    r#"<span style="left: 54.17%;" class="hdont"></span>"#,
    r#"<span style="left: 54.17%;" class="span-overflow" title="13:00 - 16:00"></span>"#,
    r#"<span style="left: 66.67%;" class="hdovt"></span>"#,
    r#"<span style="left: 66.67%;" class="span-overflow" title="16:00 - 00:00"></span>"#,
    "</div>",
);

pub fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Periods encoded in [`SAMPLE_HTML`].
pub fn sample_periods() -> Vec<Period> {
    vec![
        Period::new(TariffKind::High, at(0, 0), at(1, 0)),
        Period::new(TariffKind::Low, at(1, 0), at(6, 0)),
        Period::new(TariffKind::High, at(6, 0), at(13, 0)),
        Period::new(TariffKind::Low, at(13, 0), at(16, 0)),
        Period::new(TariffKind::High, at(16, 0), at(0, 0)),
    ]
}
