use crate::models::{ScheduleSpec, StreakMode, StreakResult};
use chrono::{Datelike, Duration, Local, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};
use std::iter;

pub fn compute_streaks(spec: &ScheduleSpec, completed_dates: &BTreeSet<String>) -> StreakResult {
    compute_streaks_at(Local::now().date_naive(), spec, completed_dates)
}

/// Derives current streak, best streak, and total completed days from the
/// full date history. `today` is injected so the computation stays pure.
///
/// Every backward walk is bounded below by the earliest completed date, so
/// the function terminates on any input.
pub fn compute_streaks_at(
    today: NaiveDate,
    spec: &ScheduleSpec,
    completed_dates: &BTreeSet<String>,
) -> StreakResult {
    let total_days = completed_dates.len() as u32;
    let days: BTreeSet<NaiveDate> = completed_dates
        .iter()
        .filter_map(|iso| NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok())
        .collect();

    let Some(&earliest) = days.first() else {
        return StreakResult {
            current_streak: 0,
            best_streak: 0,
            total_days,
        };
    };

    let (current_streak, best_streak) = match spec.mode {
        StreakMode::EveryDay => (
            daily_current(&days, today, earliest),
            best_run_max_gap(&days, 1),
        ),
        StreakMode::TimesPerWeek => {
            let goal = u32::from(spec.weekly_goal.unwrap_or(1).clamp(1, 7));
            (
                weekly_current(&days, today, earliest, goal),
                weekly_best(&days, goal),
            )
        }
        StreakMode::Monthly => (
            monthly_current(&days, today, earliest),
            monthly_best(&days),
        ),
        StreakMode::EveryWeekday | StreakMode::WeekendsOnly | StreakMode::CustomDays => {
            let eligible = eligible_weekdays(spec);
            (
                scheduled_current(&days, today, earliest, eligible),
                scheduled_best(&days, eligible),
            )
        }
        StreakMode::EveryOtherDay => (
            cadence_current(&days, today),
            best_run_max_gap(&days, 2),
        ),
    };

    StreakResult {
        current_streak,
        best_streak,
        total_days,
    }
}

/// Calendar days walking backward from `from`, ending at `floor`.
fn days_back(from: NaiveDate, floor: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    iter::successors(Some(from), |day| day.pred_opt()).take_while(move |day| *day >= floor)
}

fn daily_current(days: &BTreeSet<NaiveDate>, today: NaiveDate, earliest: NaiveDate) -> u32 {
    days_back(today, earliest)
        .take_while(|day| days.contains(day))
        .count() as u32
}

/// Longest run over the sorted history where consecutive marks are at most
/// `max_gap` days apart. Gap 1 is the plain consecutive-day rule; gap 2
/// tolerates one skipped day between marks.
fn best_run_max_gap(days: &BTreeSet<NaiveDate>, max_gap: i64) -> u32 {
    let mut best = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for &day in days {
        run = match prev {
            Some(p) if (day - p).num_days() <= max_gap => run + 1,
            _ => 1,
        };
        best = best.max(run);
        prev = Some(day);
    }
    best
}

/// Week buckets always start on Sunday.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

fn marks_in_week(days: &BTreeSet<NaiveDate>, start: NaiveDate) -> u32 {
    days.range(start..=start + Duration::days(6)).count() as u32
}

fn weekly_current(
    days: &BTreeSet<NaiveDate>,
    today: NaiveDate,
    earliest: NaiveDate,
    goal: u32,
) -> u32 {
    let floor = week_start(earliest);
    iter::successors(Some(week_start(today)), |start| {
        Some(*start - Duration::days(7))
    })
    .take_while(|start| *start >= floor)
    .take_while(|start| marks_in_week(days, *start) >= goal)
    .count() as u32
}

fn weekly_best(days: &BTreeSet<NaiveDate>, goal: u32) -> u32 {
    let mut counts: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for &day in days {
        *counts.entry(week_start(day)).or_default() += 1;
    }

    let mut best = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for (&start, &count) in &counts {
        if count >= goal {
            run = match prev {
                Some(p) if (start - p).num_days() == 7 => run + 1,
                _ => 1,
            };
            best = best.max(run);
        } else {
            run = 0;
        }
        prev = Some(start);
    }
    best
}

fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

fn monthly_current(days: &BTreeSet<NaiveDate>, today: NaiveDate, earliest: NaiveDate) -> u32 {
    let marked: BTreeSet<i32> = days.iter().map(|day| month_index(*day)).collect();
    let floor = month_index(earliest);
    iter::successors(Some(month_index(today)), |month| Some(month - 1))
        .take_while(|month| *month >= floor)
        .take_while(|month| marked.contains(month))
        .count() as u32
}

fn monthly_best(days: &BTreeSet<NaiveDate>) -> u32 {
    let marked: BTreeSet<i32> = days.iter().map(|day| month_index(*day)).collect();
    let mut best = 0u32;
    let mut run = 0u32;
    let mut prev: Option<i32> = None;
    for &month in &marked {
        run = match prev {
            Some(p) if month - p == 1 => run + 1,
            _ => 1,
        };
        best = best.max(run);
        prev = Some(month);
    }
    best
}

/// Eligible weekdays as a mask indexed 0=Sunday..6=Saturday.
fn eligible_weekdays(spec: &ScheduleSpec) -> [bool; 7] {
    match spec.mode {
        StreakMode::EveryWeekday => [false, true, true, true, true, true, false],
        StreakMode::WeekendsOnly => [true, false, false, false, false, false, true],
        StreakMode::CustomDays => {
            let mut mask = [false; 7];
            for &day in spec.custom_days.iter().flatten() {
                if let Some(slot) = mask.get_mut(usize::from(day)) {
                    *slot = true;
                }
            }
            mask
        }
        _ => [true; 7],
    }
}

fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

fn scheduled_current(
    days: &BTreeSet<NaiveDate>,
    today: NaiveDate,
    earliest: NaiveDate,
    eligible: [bool; 7],
) -> u32 {
    if !eligible.contains(&true) {
        return 0;
    }
    days_back(today, earliest)
        .filter(|day| eligible[weekday_index(*day)])
        .take_while(|day| days.contains(day))
        .count() as u32
}

/// First eligible calendar day after `date`, if the mask allows any.
fn next_eligible(date: NaiveDate, eligible: [bool; 7]) -> Option<NaiveDate> {
    (1..=7)
        .map(|offset| date + Duration::days(offset))
        .find(|day| eligible[weekday_index(*day)])
}

/// A run survives ineligible days: each member must be the next eligible
/// occurrence after the previous one, not the next calendar day.
fn scheduled_best(days: &BTreeSet<NaiveDate>, eligible: [bool; 7]) -> u32 {
    let mut best = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for &day in days.iter().filter(|day| eligible[weekday_index(**day)]) {
        run = match prev {
            Some(p) if next_eligible(p, eligible) == Some(day) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        prev = Some(day);
    }
    best
}

/// Every-other-day cadence: alive only while the newest mark is today or
/// yesterday, then pairs of marks at most two days apart keep chaining.
fn cadence_current(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut backward = days.iter().copied().rev().filter(|day| *day <= today);
    let Some(latest) = backward.next() else {
        return 0;
    };
    if (today - latest).num_days() > 1 {
        return 0;
    }

    let mut run = 1u32;
    let mut last = latest;
    for day in backward {
        if (last - day).num_days() <= 2 {
            run += 1;
            last = day;
        } else {
            break;
        }
    }
    run
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dates(isos: &[&str]) -> BTreeSet<String> {
        isos.iter().map(|iso| iso.to_string()).collect()
    }

    fn spec(mode: StreakMode) -> ScheduleSpec {
        ScheduleSpec::new(mode)
    }

    fn weekly_spec(goal: u8) -> ScheduleSpec {
        ScheduleSpec {
            weekly_goal: Some(goal),
            ..ScheduleSpec::new(StreakMode::TimesPerWeek)
        }
    }

    fn custom_spec(days_of_week: &[u8]) -> ScheduleSpec {
        ScheduleSpec {
            custom_days: Some(days_of_week.iter().copied().collect()),
            ..ScheduleSpec::new(StreakMode::CustomDays)
        }
    }

    const ALL_MODES: [StreakMode; 7] = [
        StreakMode::EveryDay,
        StreakMode::TimesPerWeek,
        StreakMode::Monthly,
        StreakMode::EveryWeekday,
        StreakMode::WeekendsOnly,
        StreakMode::CustomDays,
        StreakMode::EveryOtherDay,
    ];

    #[test]
    fn empty_history_is_all_zeros_in_every_mode() {
        for mode in ALL_MODES {
            let result = compute_streaks_at(day(2024, 1, 10), &spec(mode), &dates(&[]));
            assert_eq!(result.current_streak, 0, "{mode:?}");
            assert_eq!(result.best_streak, 0, "{mode:?}");
            assert_eq!(result.total_days, 0, "{mode:?}");
        }
    }

    #[test]
    fn total_days_matches_set_size_in_every_mode() {
        let completed = dates(&["2024-01-01", "2024-01-03", "2024-02-10"]);
        for mode in ALL_MODES {
            let result = compute_streaks_at(day(2024, 2, 10), &spec(mode), &completed);
            assert_eq!(result.total_days, 3, "{mode:?}");
        }
    }

    #[test]
    fn every_day_counts_back_from_today() {
        let completed = dates(&["2024-01-08", "2024-01-09", "2024-01-10"]);
        let result = compute_streaks_at(day(2024, 1, 10), &spec(StreakMode::EveryDay), &completed);
        assert_eq!(result.current_streak, 3);
        assert_eq!(result.best_streak, 3);
    }

    #[test]
    fn every_day_unmarked_today_yields_zero_current() {
        let completed = dates(&["2024-01-08", "2024-01-09"]);
        let result = compute_streaks_at(day(2024, 1, 10), &spec(StreakMode::EveryDay), &completed);
        assert_eq!(result.current_streak, 0);
        assert_eq!(result.best_streak, 2);
    }

    #[test]
    fn every_day_best_stops_at_gap() {
        let completed = dates(&["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-05"]);
        let result = compute_streaks_at(day(2024, 1, 20), &spec(StreakMode::EveryDay), &completed);
        assert_eq!(result.best_streak, 3);
    }

    #[test]
    fn every_day_marks_after_today_do_not_extend_current() {
        let completed = dates(&["2024-01-01", "2024-01-02", "2024-01-03"]);
        let result = compute_streaks_at(day(2024, 1, 2), &spec(StreakMode::EveryDay), &completed);
        assert_eq!(result.current_streak, 2);
    }

    #[test]
    fn times_per_week_qualifies_at_goal() {
        // Week of Sun 2023-12-31 .. Sat 2024-01-06, three marks.
        let completed = dates(&["2024-01-01", "2024-01-03", "2024-01-05"]);
        let result = compute_streaks_at(day(2024, 1, 6), &weekly_spec(3), &completed);
        assert_eq!(result.current_streak, 1);
        assert_eq!(result.best_streak, 1);
    }

    #[test]
    fn times_per_week_below_goal_does_not_qualify() {
        let completed = dates(&["2024-01-01", "2024-01-03"]);
        let result = compute_streaks_at(day(2024, 1, 6), &weekly_spec(3), &completed);
        assert_eq!(result.current_streak, 0);
        assert_eq!(result.best_streak, 0);
    }

    #[test]
    fn times_per_week_chains_consecutive_weeks() {
        let completed = dates(&[
            "2024-01-01", "2024-01-03", "2024-01-05", // week of 2023-12-31
            "2024-01-07", "2024-01-09", "2024-01-11", // week of 2024-01-07
        ]);
        let result = compute_streaks_at(day(2024, 1, 12), &weekly_spec(3), &completed);
        assert_eq!(result.current_streak, 2);
        assert_eq!(result.best_streak, 2);
    }

    #[test]
    fn times_per_week_best_resets_on_missed_week() {
        let completed = dates(&[
            "2024-01-01", // week of 2023-12-31 qualifies at goal 1
            "2024-01-15", // week of 2024-01-14 qualifies, but 01-07 week is empty
        ]);
        let result = compute_streaks_at(day(2024, 1, 20), &weekly_spec(1), &completed);
        assert_eq!(result.best_streak, 1);
    }

    #[test]
    fn times_per_week_goal_defaults_to_one_and_clamps() {
        let completed = dates(&["2024-01-01"]);
        let unset = compute_streaks_at(
            day(2024, 1, 6),
            &spec(StreakMode::TimesPerWeek),
            &completed,
        );
        assert_eq!(unset.current_streak, 1);

        let zero = compute_streaks_at(day(2024, 1, 6), &weekly_spec(0), &completed);
        assert_eq!(zero.current_streak, 1);
    }

    #[test]
    fn monthly_chains_months_with_any_mark() {
        let completed = dates(&["2024-01-15", "2024-02-03", "2024-03-20"]);
        let result = compute_streaks_at(day(2024, 3, 25), &spec(StreakMode::Monthly), &completed);
        assert_eq!(result.current_streak, 3);
        assert_eq!(result.best_streak, 3);
    }

    #[test]
    fn monthly_breaks_on_empty_month() {
        let completed = dates(&["2024-01-15", "2024-03-20"]);
        let result = compute_streaks_at(day(2024, 3, 25), &spec(StreakMode::Monthly), &completed);
        assert_eq!(result.current_streak, 1);
        assert_eq!(result.best_streak, 1);
    }

    #[test]
    fn monthly_empty_current_month_yields_zero() {
        let completed = dates(&["2024-01-15", "2024-02-03"]);
        let result = compute_streaks_at(day(2024, 3, 25), &spec(StreakMode::Monthly), &completed);
        assert_eq!(result.current_streak, 0);
        assert_eq!(result.best_streak, 2);
    }

    #[test]
    fn weekends_only_pair_counts_and_weekdays_do_not_break() {
        // 2024-01-06 Sat, 2024-01-07 Sun; today Mon 2024-01-08.
        let completed = dates(&["2024-01-06", "2024-01-07"]);
        let result =
            compute_streaks_at(day(2024, 1, 8), &spec(StreakMode::WeekendsOnly), &completed);
        assert_eq!(result.current_streak, 2);
        assert_eq!(result.best_streak, 2);
    }

    #[test]
    fn weekends_only_run_spans_the_week_between() {
        // Sun 2024-01-07 to Sat 2024-01-13 is the next eligible occurrence.
        let completed = dates(&["2024-01-06", "2024-01-07", "2024-01-13"]);
        let result =
            compute_streaks_at(day(2024, 1, 13), &spec(StreakMode::WeekendsOnly), &completed);
        assert_eq!(result.current_streak, 3);
        assert_eq!(result.best_streak, 3);
    }

    #[test]
    fn weekends_only_missed_saturday_breaks() {
        let completed = dates(&["2024-01-07", "2024-01-14"]);
        // Sat 2024-01-13 was eligible and unmarked.
        let result =
            compute_streaks_at(day(2024, 1, 14), &spec(StreakMode::WeekendsOnly), &completed);
        assert_eq!(result.current_streak, 1);
        assert_eq!(result.best_streak, 1);
    }

    #[test]
    fn every_weekday_skips_the_weekend() {
        // Fri 2024-01-05 and Mon 2024-01-08 marked.
        let completed = dates(&["2024-01-05", "2024-01-08"]);
        let result =
            compute_streaks_at(day(2024, 1, 8), &spec(StreakMode::EveryWeekday), &completed);
        assert_eq!(result.current_streak, 2);
        assert_eq!(result.best_streak, 2);
    }

    #[test]
    fn every_weekday_unmarked_eligible_day_breaks() {
        // Thu 2024-01-04 marked, Fri 2024-01-05 eligible but unmarked.
        let completed = dates(&["2024-01-04", "2024-01-08"]);
        let result =
            compute_streaks_at(day(2024, 1, 8), &spec(StreakMode::EveryWeekday), &completed);
        assert_eq!(result.current_streak, 1);
        assert_eq!(result.best_streak, 1);
    }

    #[test]
    fn custom_days_follow_the_chosen_weekdays() {
        // Tuesdays (2) and Thursdays (4); Tue 2024-01-02, Thu 2024-01-04.
        let completed = dates(&["2024-01-02", "2024-01-04"]);
        let result = compute_streaks_at(day(2024, 1, 4), &custom_spec(&[2, 4]), &completed);
        assert_eq!(result.current_streak, 2);
        assert_eq!(result.best_streak, 2);
    }

    #[test]
    fn custom_days_empty_set_has_no_eligible_days() {
        let completed = dates(&["2024-01-02", "2024-01-04"]);
        let result = compute_streaks_at(day(2024, 1, 4), &custom_spec(&[]), &completed);
        assert_eq!(result.current_streak, 0);
        assert_eq!(result.best_streak, 0);
        assert_eq!(result.total_days, 2);
    }

    #[test]
    fn every_other_day_tolerates_one_skipped_day() {
        let completed = dates(&["2024-01-01", "2024-01-03"]);
        let result =
            compute_streaks_at(day(2024, 1, 3), &spec(StreakMode::EveryOtherDay), &completed);
        assert_eq!(result.current_streak, 2);
        assert_eq!(result.best_streak, 2);
    }

    #[test]
    fn every_other_day_gap_of_three_splits_runs() {
        let completed = dates(&["2024-01-01", "2024-01-04"]);
        let result =
            compute_streaks_at(day(2024, 1, 4), &spec(StreakMode::EveryOtherDay), &completed);
        assert_eq!(result.best_streak, 1);
    }

    #[test]
    fn every_other_day_stays_alive_through_today() {
        // Today 2024-01-04 unmarked, newest mark yesterday.
        let completed = dates(&["2024-01-01", "2024-01-03"]);
        let result =
            compute_streaks_at(day(2024, 1, 4), &spec(StreakMode::EveryOtherDay), &completed);
        assert_eq!(result.current_streak, 2);
    }

    #[test]
    fn every_other_day_dies_after_two_open_days() {
        let completed = dates(&["2024-01-01", "2024-01-03"]);
        let result =
            compute_streaks_at(day(2024, 1, 5), &spec(StreakMode::EveryOtherDay), &completed);
        assert_eq!(result.current_streak, 0);
        assert_eq!(result.best_streak, 2);
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        let completed = dates(&["2024-01-01", "2024-01-02", "2024-01-05"]);
        let schedule = weekly_spec(2);
        let first = compute_streaks_at(day(2024, 1, 6), &schedule, &completed);
        let second = compute_streaks_at(day(2024, 1, 6), &schedule, &completed);
        assert_eq!(first, second);
    }

    #[test]
    fn adding_a_mark_never_shrinks_best_or_total() {
        let today = day(2024, 1, 10);
        let before = dates(&["2024-01-01", "2024-01-02", "2024-01-04"]);
        let mut after = before.clone();
        after.insert("2024-01-03".to_string());

        for mode in ALL_MODES {
            let old = compute_streaks_at(today, &spec(mode), &before);
            let new = compute_streaks_at(today, &spec(mode), &after);
            assert!(new.best_streak >= old.best_streak, "{mode:?}");
            assert!(new.total_days > old.total_days, "{mode:?}");
        }
    }
}
