use runwear_weather::ForecastRecord;

use crate::page::Page;

/// One-line summary shown in the forecast region.
pub fn format_forecast(record: &ForecastRecord) -> String {
    format!(
        "{}º{}, {}, {} wind, {}% chance of rain",
        record.temperature,
        record.temperature_unit,
        record.short_forecast,
        record.wind_speed,
        record.probability_of_precipitation
    )
}

/// Show the forecast and clear any earlier status message.
pub fn render(page: &dyn Page, record: &ForecastRecord) {
    page.set_forecast_text(&format_forecast(record));
    page.set_status_text("");
}
