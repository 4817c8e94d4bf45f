mod common;

use common::{valid_payload, watch_url};
use coursekit::coursekit_models::{CoursePayload, CourseVideo, LessonKind};
use coursekit::{assemble, normalize, prepare_submission, summarize};

#[test]
fn test_twelve_flat_videos_make_three_modules() {
    let course = CoursePayload {
        youtube_urls: (1..=12).map(watch_url).collect(),
        ..Default::default()
    };
    let modules = assemble(&course, None);

    let counts: Vec<_> = modules.iter().map(|m| m.videos.len()).collect();
    let titles: Vec<_> = modules.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(counts, vec![5, 5, 2]);
    assert_eq!(titles, vec!["Módulo 1", "Módulo 2", "Módulo 3"]);

    let urls: Vec<_> = modules
        .iter()
        .flat_map(|m| m.videos.iter().map(|v| v.youtube_url.clone()))
        .collect();
    assert_eq!(urls, (1..=12).map(watch_url).collect::<Vec<_>>());
}

#[test]
fn test_structured_course_from_json() {
    let raw = r#"{
        "id": 5,
        "title": "Fotografía",
        "modules": [
            {"id": 21, "title": "Edición", "orderIndex": 2, "lessons": [
                {"id": 3, "title": "Lightroom", "type": "video", "youtubeUrl": "https://www.youtube.com/watch?v=aaaaaaaaaaa", "durationSeconds": 600, "completed": true}
            ]},
            {"id": 20, "title": "Cámara", "orderIndex": 1, "lessons": [
                {"id": 2, "title": "Exposición", "type": "VIDEO", "youtubeUrl": "https://www.youtube.com/watch?v=bbbbbbbbbbb", "durationSeconds": 300, "orderIndex": 2},
                {"id": 1, "title": "Conceptos", "type": "text", "durationSeconds": 120, "orderIndex": 1},
                {"id": 4, "title": "Test", "type": "quiz"}
            ]}
        ]
    }"#;
    let course: CoursePayload = serde_json::from_str(raw).unwrap();
    let modules = assemble(&course, None);

    assert_eq!(modules[0].title, "Cámara");
    assert_eq!(modules[1].title, "Edición");

    let camera = &modules[0];
    let lesson_ids: Vec<_> = camera.lessons.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(lesson_ids, vec!["1", "2", "4"]);
    assert_eq!(camera.videos.len(), 1);
    assert_eq!(camera.videos[0].video_id.as_deref(), Some("bbbbbbbbbbb"));
    assert_eq!(camera.total_duration_seconds, 420);
    assert_eq!(camera.lessons[2].kind, Some(LessonKind::Quiz));

    let editing = &modules[1];
    assert_eq!(editing.completed_lessons, 1);
    assert_eq!(editing.progress_percent, 100);

    let summary = summarize(&modules);
    assert_eq!(summary.module_count, 2);
    assert_eq!(summary.lesson_count, 4);
    assert_eq!(summary.video_count, 2);
    assert_eq!(summary.total_duration_seconds, 1020);
    assert_eq!(summary.progress_percent, 25);
}

#[test]
fn test_fetched_video_list_feeds_fallback() {
    let raw = r#"[
        {"id": 8, "title": "Parte 2", "url": "https://www.youtube.com/watch?v=ccccccccccc", "orderIndex": 2, "durationSeconds": 100},
        {"id": 7, "title": "Parte 1", "youtubeUrl": "https://www.youtube.com/watch?v=ddddddddddd", "orderIndex": 1, "durationSeconds": 50},
        {"id": 9, "title": "Sin enlace", "orderIndex": 3}
    ]"#;
    let videos: Vec<CourseVideo> = serde_json::from_str(raw).unwrap();
    let modules = assemble(&CoursePayload::default(), Some(videos.as_slice()));

    assert_eq!(modules.len(), 1);
    let titles: Vec<_> = modules[0].videos.iter().map(|v| v.title.as_str()).collect();
    assert_eq!(titles, vec!["Parte 1", "Parte 2"]);
    assert_eq!(modules[0].total_duration_seconds, 150);
    assert_eq!(modules[0].duration_label, "2:30");
}

#[test]
fn test_assembly_matches_normalized_payload() {
    let payload = normalize(&valid_payload());
    let modules = assemble(&payload, None);
    assert_eq!(modules.len(), 3);
    for module in &modules {
        assert_eq!(module.lessons.len(), 4);
        assert_eq!(module.videos.len(), 3);
        let expected: i64 = module.lessons.iter().map(|l| l.duration_seconds).sum();
        assert_eq!(module.total_duration_seconds, expected);
    }
}

#[test]
fn test_assembly_does_not_touch_input() {
    let course = valid_payload();
    let before = course.clone();
    let first = assemble(&course, None);
    let second = assemble(&course, None);
    assert_eq!(course, before);
    assert_eq!(first, second);
}

#[test]
fn test_accepted_payload_with_huge_durations_assembles() {
    let mut payload = valid_payload();
    payload.modules[0].lessons[0].duration_seconds = Some(i64::MAX);
    payload.modules[0].lessons[1].duration_seconds = Some(1);
    payload.modules[1].lessons[0].duration_seconds = Some(i64::MAX - 1);

    let ready = prepare_submission(&payload).expect("durations are non-negative");
    let modules = assemble(&ready, None);

    assert_eq!(modules[0].total_duration_seconds, i64::MAX);
    assert_eq!(summarize(&modules).total_duration_seconds, i64::MAX);
}

#[test]
fn test_fetched_rows_without_urls_keep_course_urls() {
    let course = CoursePayload {
        youtube_urls: (1..=6).map(watch_url).collect(),
        ..Default::default()
    };
    let videos: Vec<CourseVideo> =
        serde_json::from_str(r#"[{"id": 1, "title": "Pendiente"}, {"id": 2, "url": "  "}]"#)
            .unwrap();

    let modules = assemble(&course, Some(videos.as_slice()));
    let counts: Vec<_> = modules.iter().map(|m| m.videos.len()).collect();
    assert_eq!(counts, vec![5, 1]);
}
