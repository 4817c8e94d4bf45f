#![allow(dead_code)]

use coursekit::coursekit_models::{
    CategoryId, CoursePayload, InstructorId, Lesson, Module, SubcategoryId,
};
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::{Fake, Faker};

pub const WATCH_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

const LESSON_TYPES: [&str; 7] = ["video", "VIDEO", "Text", "quiz", "QUIZ", "podcast", ""];

const URLS: [&str; 5] = [
    WATCH_URL,
    "https://youtu.be/dQw4w9WgXcQ",
    "https://www.youtube.com/embed/dQw4w9WgXcQ",
    "   ",
    "https://youtube.com/watch?v=abcdefghijk",
];

fn pick<'a>(items: &[&'a str]) -> &'a str {
    items[(0..items.len()).fake::<usize>()]
}

fn maybe<T>(value: T) -> Option<T> {
    Faker.fake::<bool>().then_some(value)
}

/// Watch URL whose id is derived from `n`.
pub fn watch_url(n: usize) -> String {
    format!("https://www.youtube.com/watch?v=lesson{n:06}")
}

/// A payload that passes validation once normalized.
pub fn valid_payload() -> CoursePayload {
    CoursePayload {
        title: Some("Rust para backend".to_string()),
        description: Some(Paragraph(1..3).fake()),
        instructor_id: Some(InstructorId::from(7)),
        category_id: Some(CategoryId::from(2)),
        subcategory_id: Some(SubcategoryId::from("web")),
        price: Some(29.99),
        thumbnail_url: Some("https://cdn.example.com/covers/rust.jpg".to_string()),
        modules: (1..=3)
            .map(|m| Module {
                title: Some(format!("Módulo {m}")),
                lessons: (1..=4)
                    .map(|l| Lesson {
                        title: Some(Sentence(2..5).fake()),
                        lesson_type: Some(if l == 4 { "quiz" } else { "video" }.to_string()),
                        youtube_url: (l != 4).then(|| watch_url(m * 10 + l)),
                        duration_seconds: Some((60..900).fake::<i64>()),
                        ..Default::default()
                    })
                    .collect(),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

/// A payload with random gaps and bad values in every position.
pub fn random_payload() -> CoursePayload {
    let module_count = (0..5).fake::<usize>();
    CoursePayload {
        title: maybe(Sentence(0..40).fake()),
        description: maybe(Paragraph(0..80).fake()),
        short_description: maybe(Sentence(0..60).fake()),
        instructor_id: maybe(InstructorId::from((0..100).fake::<i64>())),
        category_id: maybe(CategoryId::from(pick(&["", "cat", "42"]))),
        subcategory_id: maybe(SubcategoryId::from(3)),
        price: maybe((-100.0..2_000_000.0).fake::<f64>()),
        estimated_hours: maybe((-5..1500).fake::<i64>()),
        thumbnail_url: maybe(
            pick(&["https://a.io/x.png", "https://a.io/x.svg", "", "x.jpg"]).to_string(),
        ),
        is_premium: Faker.fake(),
        is_published: Faker.fake(),
        is_active: Faker.fake(),
        youtube_urls: (0..(0..8).fake::<usize>())
            .map(|_| pick(&URLS).to_string())
            .collect(),
        modules: (0..module_count)
            .map(|_| Module {
                title: maybe(Sentence(0..50).fake()),
                description: maybe(Paragraph(0..100).fake()),
                order_index: maybe((-2..6).fake::<i64>()),
                is_active: Faker.fake(),
                lessons: (0..(0..6).fake::<usize>())
                    .map(|_| Lesson {
                        title: maybe(Sentence(0..40).fake()),
                        lesson_type: maybe(pick(&LESSON_TYPES).to_string()),
                        youtube_url: maybe(pick(&URLS).to_string()),
                        order_index: maybe((-2..6).fake::<i64>()),
                        duration_seconds: maybe((-100..5000).fake::<i64>()),
                        is_active: Faker.fake(),
                        completed: Faker.fake(),
                        ..Default::default()
                    })
                    .collect(),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}
