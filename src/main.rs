use humanspan::{format_duration, format_duration_with, Duration, FormatOptions, Unit};

fn main() {
    env_logger::builder()
        .filter_module("humanspan", log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let full = Duration::new()
        .years(2)
        .months(9)
        .weeks(1)
        .days(7)
        .hours(5)
        .minutes(9)
        .seconds(30);

    log::info!("full: {:?}", format_duration(&full));

    log::info!(
        "partial: {:?}",
        format_duration(&Duration::new().months(9).days(2))
    );

    let opts = FormatOptions::new().format([Unit::Months, Unit::Weeks]);
    log::info!("months & weeks: {:?}", format_duration_with(&full, &opts));

    let with_zero = Duration::new().years(0).months(9);
    log::info!("zero omitted: {:?}", format_duration(&with_zero));

    let opts = FormatOptions::new().zero(true);
    log::info!("zero kept: {:?}", format_duration_with(&with_zero, &opts));

    let opts = FormatOptions::new().delimiter(", ");
    log::info!(
        "delimited: {:?}",
        format_duration_with(&Duration::new().years(2).months(9).weeks(3), &opts)
    );

    let uptime = Duration::from(std::time::Duration::from_secs(200_000));
    log::info!("uptime: {:?}", format_duration(&uptime));
}
