//! The four canned weekly templates. These are static domain content, built
//! once at process start and never mutated; the generator selects one by goal
//! and applies the level adjustment on top.

use std::collections::BTreeMap;

use lazy_static::lazy_static;

use crate::models::plan::Weekday;

/// One exercise line of a weekly template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateExercise {
    pub name: &'static str,
    pub sets: i32,
    pub reps: &'static str,
    pub rest: &'static str,
}

pub type Template = BTreeMap<Weekday, Vec<TemplateExercise>>;

const fn entry(name: &'static str, sets: i32, reps: &'static str, rest: &'static str) -> TemplateExercise {
    TemplateExercise { name, sets, reps, rest }
}

lazy_static! {
    pub static ref WEIGHT_LOSS: Template = BTreeMap::from([
        (Weekday::Monday, vec![
            entry("Бег на дорожке", 1, "20-30 мин", "—"),
            entry("Приседания", 3, "15-20", "45 сек"),
            entry("Выпады", 3, "12-15 на ногу", "45 сек"),
        ]),
        (Weekday::Wednesday, vec![
            entry("Эллиптический тренажер", 1, "25-35 мин", "—"),
            entry("Жим гантелей лежа", 3, "12-15", "45 сек"),
            entry("Тяга верхнего блока", 3, "12-15", "45 сек"),
        ]),
        (Weekday::Friday, vec![
            entry("Велотренажер", 1, "20-30 мин", "—"),
            entry("Планка", 3, "30-60 сек", "30 сек"),
            entry("Скручивания", 3, "15-20", "30 сек"),
        ]),
    ]);

    pub static ref MUSCLE_GAIN: Template = BTreeMap::from([
        (Weekday::Monday, vec![
            entry("Жим штанги лежа", 4, "8-12", "90 сек"),
            entry("Разводка гантелей", 3, "10-15", "60 сек"),
            entry("Отжимания на брусьях", 3, "8-12", "75 сек"),
        ]),
        (Weekday::Tuesday, vec![
            entry("Становая тяга", 4, "6-10", "120 сек"),
            entry("Подтягивания", 3, "макс", "90 сек"),
            entry("Тяга штанги в наклоне", 3, "8-12", "75 сек"),
        ]),
        (Weekday::Thursday, vec![
            entry("Приседания со штангой", 4, "8-12", "120 сек"),
            entry("Жим гантелей сидя", 3, "10-15", "60 сек"),
            entry("Подъем на носки", 4, "15-20", "45 сек"),
        ]),
    ]);

    pub static ref STRENGTH: Template = BTreeMap::from([
        (Weekday::Monday, vec![
            entry("Приседания со штангой", 5, "3-5", "180 сек"),
            entry("Жим ногами", 3, "6-8", "120 сек"),
        ]),
        (Weekday::Wednesday, vec![
            entry("Жим штанги лежа", 5, "3-5", "180 сек"),
            entry("Армейский жим", 3, "5-8", "120 сек"),
        ]),
        (Weekday::Friday, vec![
            entry("Становая тяга", 5, "3-5", "180 сек"),
            entry("Тяга штанги в наклоне", 3, "5-8", "120 сек"),
        ]),
    ]);

    pub static ref HEALTH: Template = BTreeMap::from([
        (Weekday::Monday, vec![
            entry("Ходьба/Бег", 1, "20-30 мин", "—"),
            entry("Приседания с собственным весом", 3, "12-15", "60 сек"),
        ]),
        (Weekday::Wednesday, vec![
            entry("Плавание/Велосипед", 1, "25-35 мин", "—"),
            entry("Отжимания от пола", 3, "8-12", "60 сек"),
        ]),
        (Weekday::Friday, vec![
            entry("Йога/Растяжка", 1, "20-30 мин", "—"),
            entry("Планка", 3, "30-45 сек", "45 сек"),
        ]),
    ]);
}
