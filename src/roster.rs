/// Names selectable in the generation UI, as printed on the template.
pub const EMPLOYEES: [&str; 7] = [
    "陳育正 / Reed Chen",
    "蕭芮淇 / Charlotte Hsiao",
    "江亞璇 / Joyce Chiang",
    "陳幼慧 / Emily Chen",
    "高筑音 / Apple Kao",
    "林耕宇 / Benjamin",
    "林見松 / Jason Lin",
];

/// The populator accepts any name; the roster is what the UI offers.
pub fn is_listed(name: &str) -> bool {
    EMPLOYEES.contains(&name)
}
