// Gridcal demo shell
// Dumps the current month grid (with the holiday overlay) to stdout. The
// real rendering host embeds the library instead.

use anyhow::Result;
use chrono::Datelike;

use gridcal::config::CalendarConfig;
use gridcal::controller::CalendarController;
use gridcal::services::holiday::HolidayFetcher;
use gridcal::theme::ThemeContext;
use gridcal::utils::date;

fn main() -> Result<()> {
    env_logger::init();

    let config = CalendarConfig::load()?;
    log::info!("holiday countries: {:?}", config.holiday_countries);

    let fetcher = HolidayFetcher::new()?;
    let mut controller = CalendarController::new(
        ThemeContext::from_system(),
        Box::new(fetcher),
        config.holiday_countries,
    );
    controller.sync_holidays();

    println!("{}", controller.view_title());
    println!();

    let now = date::now_local();
    for row in controller.visible_cells().chunks(7) {
        for cell in row {
            let marker = if cell.is_today(now) { '*' } else { ' ' };
            print!("{}{:>3} ", marker, cell.date.day());
        }
        println!();
        for cell in row {
            for event in controller.events_for(cell.date) {
                let tag = if event.is_holiday { "holiday" } else { "event" };
                println!("    {} [{}] {}", cell.date.date(), tag, event.title);
            }
        }
    }

    Ok(())
}
