use colored::*;

use crate::{mprint, terminal::{colors, format, print, spinner::Spinner}};
use geupsik_common::error::LookupError;
use geupsik_common::models::{DailyMenu, MealDate};
use geupsik_core::lookup::LookupService;

pub struct TodayOptions {
    pub json: bool,
    pub spinner: bool,
}

pub async fn today(
    service: &LookupService,
    school: &str,
    date: MealDate,
    opts: &TodayOptions,
) -> anyhow::Result<()> {
    let spinner = Spinner::start(format!("{school} 급식 정보를 불러오는 중..."), opts.spinner && !opts.json);
    let result: Result<DailyMenu, LookupError> = service.daily_menu(school, date).await;
    drop(spinner);

    match result {
        Ok(menu) if opts.json => {
            mprint!(&serde_json::to_string_pretty(&menu)?);
        }
        Ok(menu) => print_menu(&menu),
        Err(err) if err.is_notice() => no_meal_notice(date),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn print_menu(menu: &DailyMenu) {
    print::header(menu.school.canonical_name());
    print::success(format!(
        "{} - {} 급식",
        menu.school.canonical_name(),
        menu.date.korean_label()
    ));

    for (idx, meal) in menu.meals.iter().enumerate() {
        mprint!();
        print::tree_head(idx, &format::meal_title(meal));
        print::as_tree(&format::dish_lines(meal));
    }

    let served: ColoredString = format!("{} meal services", menu.meals.len()).bold().green();
    let day: ColoredString = menu.date.korean_label().bold().yellow();
    print::fat_separator();
    print::centerln(&format!("{served} on {day}"));
}

fn no_meal_notice(date: MealDate) {
    let notice: String = if date == MealDate::today() {
        "오늘은 급식 정보가 없습니다.".to_string()
    } else {
        format!("{}에는 급식 정보가 없습니다.", date.korean_label())
    };
    print::warning(notice.color(colors::ACCENT));
}
