//! Weather condition codes rendered in Russian.

/// Provider condition code -> Russian description.
const CONDITIONS: &[(&str, &str)] = &[
    ("clear", "Ясно"),
    ("partly-cloudy", "Малооблачно"),
    ("cloudy", "Облачно с прояснениями"),
    ("overcast", "Пасмурно"),
    ("drizzle", "Морось"),
    ("light-rain", "Небольшой дождь"),
    ("rain", "Дождь"),
    ("moderate-rain", "Умеренно сильный дождь"),
    ("heavy-rain", "Сильный дождь"),
    ("continuous-heavy-rain", "Длительный сильный дождь"),
    ("showers", "Ливень"),
    ("wet-snow", "Дождь со снегом"),
    ("light-snow", "Небольшой снег"),
    ("snow", "Снег"),
    ("snow-showers", "Снегопад"),
    ("hail", "Град"),
    ("thunderstorm", "Гроза"),
    ("thunderstorm-with-rain", "Дождь с грозой"),
    ("thunderstorm-with-hail", "Гроза с градом"),
];

/// Russian description for a condition code; unknown codes pass through.
pub fn describe(code: &str) -> &str {
    CONDITIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, ru)| *ru)
        .unwrap_or(code)
}
