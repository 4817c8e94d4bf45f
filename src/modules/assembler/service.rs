//! Module assembler.
//!
//! Turns a fetched course into the ordered module tree the browsing screens
//! render. Courses with explicit modules are mapped as they are; courses
//! that only have a flat list of videos are split into synthetic modules of
//! [`FALLBACK_CHUNK_SIZE`] videos each.

use coursekit_core::limits::FALLBACK_CHUNK_SIZE;
use coursekit_models::{
    ContentSummary, CoursePayload, CourseVideo, Lesson, LessonKind, LessonView, Module,
    ModuleView, VideoView,
};
use tracing::{debug, instrument};

use crate::utils::duration::format_duration;
use crate::utils::urls::{extract_video_id, video_thumbnail_url};

/// Where the module tree comes from.
enum ContentSource<'a> {
    /// The course defines its own modules
    Structured(&'a [Module]),
    /// A flat, already ordered list of videos to be chunked
    Fallback(Vec<FlatVideo>),
}

/// A video from the flat list, before it is placed in a synthetic module.
struct FlatVideo {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    url: String,
    duration_seconds: Option<i64>,
    completed: bool,
}

/// Order index to sort by: the explicit one, else the 1-based position.
fn effective_order(order_index: Option<i64>, position: usize) -> i64 {
    order_index.unwrap_or(position as i64 + 1)
}

/// Indices of `items` sorted by effective order index. The sort is stable,
/// so ties keep their original positions.
fn ordered_indices<T>(items: &[T], order_index: impl Fn(&T) -> Option<i64>) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_by_key(|&i| effective_order(order_index(&items[i]), i));
    indices
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Sum of durations, saturating at `i64::MAX` instead of overflowing.
fn total_seconds(durations: impl Iterator<Item = i64>) -> i64 {
    durations.fold(0, i64::saturating_add)
}

fn progress_percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 * 100.0) / total as f64).round() as u32
}

fn video_view(
    id: String,
    title: String,
    url: &str,
    order_index: i64,
    duration_seconds: i64,
    completed: bool,
) -> VideoView {
    let video_id = extract_video_id(url);
    VideoView {
        id,
        title,
        youtube_url: url.trim().to_string(),
        thumbnail_url: video_id.as_deref().map(video_thumbnail_url),
        video_id,
        order_index,
        duration_seconds,
        duration_label: format_duration(duration_seconds),
        completed,
    }
}

pub struct AssemblerService;

impl AssemblerService {
    #[instrument(skip_all, fields(modules = course.modules.len()))]
    pub fn assemble(course: &CoursePayload, videos: Option<&[CourseVideo]>) -> Vec<ModuleView> {
        let modules = match Self::select_source(course, videos) {
            ContentSource::Structured(modules) => {
                debug!(path = "structured", "Assembling course modules");
                Self::assemble_structured(modules)
            }
            ContentSource::Fallback(flat) => {
                debug!(path = "fallback", videos = flat.len(), "Assembling course modules");
                Self::assemble_fallback(flat)
            }
        };

        debug!(
            assembled = modules.len(),
            videos = modules.iter().map(|m| m.videos.len()).sum::<usize>(),
            "Assembled course modules"
        );
        modules
    }

    fn select_source<'a>(
        course: &'a CoursePayload,
        videos: Option<&[CourseVideo]>,
    ) -> ContentSource<'a> {
        if !course.modules.is_empty() {
            return ContentSource::Structured(&course.modules);
        }

        let fetched = videos.map(Self::flatten_fetched).unwrap_or_default();
        if !fetched.is_empty() {
            return ContentSource::Fallback(fetched);
        }

        ContentSource::Fallback(
            course
                .youtube_urls
                .iter()
                .filter_map(|url| non_blank(Some(url)))
                .map(|url| FlatVideo {
                    id: None,
                    title: None,
                    description: None,
                    url,
                    duration_seconds: None,
                    completed: false,
                })
                .collect(),
        )
    }

    /// Fetched videos in order, without the ones that have no URL.
    fn flatten_fetched(videos: &[CourseVideo]) -> Vec<FlatVideo> {
        ordered_indices(videos, |v| v.order_index)
            .into_iter()
            .map(|i| &videos[i])
            .filter_map(|video| {
                let url = non_blank(video.youtube_url.as_ref())?;
                Some(FlatVideo {
                    id: video.id.as_ref().map(ToString::to_string),
                    title: non_blank(video.title.as_ref()),
                    description: non_blank(video.description.as_ref()),
                    url,
                    duration_seconds: video.duration_seconds,
                    completed: video.completed.unwrap_or(false),
                })
            })
            .collect()
    }

    fn assemble_structured(modules: &[Module]) -> Vec<ModuleView> {
        ordered_indices(modules, |m| m.order_index)
            .into_iter()
            .map(|i| Self::module_view(&modules[i], i))
            .collect()
    }

    fn module_view(module: &Module, position: usize) -> ModuleView {
        let number = position + 1;
        let mut lessons = Vec::with_capacity(module.lessons.len());
        let mut videos = Vec::new();

        for j in ordered_indices(&module.lessons, |l| l.order_index) {
            let lesson = &module.lessons[j];
            let view = Self::lesson_view(lesson, number, j);
            if lesson.kind() == Some(LessonKind::Video) {
                if let Some(url) = lesson.video_url() {
                    videos.push(video_view(
                        view.id.clone(),
                        view.title.clone(),
                        url,
                        view.order_index,
                        view.duration_seconds,
                        view.completed,
                    ));
                }
            }
            lessons.push(view);
        }

        let total_duration_seconds = total_seconds(lessons.iter().map(|l| l.duration_seconds));
        let completed_lessons = lessons.iter().filter(|l| l.completed).count();

        ModuleView {
            id: module
                .id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| format!("module-{number}")),
            title: non_blank(module.title.as_ref()).unwrap_or_else(|| format!("Módulo {number}")),
            description: non_blank(module.description.as_ref()),
            order_index: effective_order(module.order_index, position),
            synthetic: false,
            progress_percent: progress_percent(completed_lessons, lessons.len()),
            duration_label: format_duration(total_duration_seconds),
            total_duration_seconds,
            completed_lessons,
            videos,
            lessons,
        }
    }

    fn lesson_view(lesson: &Lesson, module_number: usize, position: usize) -> LessonView {
        let number = position + 1;
        LessonView {
            id: lesson
                .id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| format!("module-{module_number}-lesson-{number}")),
            title: non_blank(lesson.title.as_ref()).unwrap_or_else(|| format!("Lección {number}")),
            kind: lesson.kind(),
            description: non_blank(lesson.description.as_ref()),
            youtube_url: lesson.video_url().map(str::to_string),
            order_index: effective_order(lesson.order_index, position),
            duration_seconds: lesson.duration_seconds.unwrap_or(0).max(0),
            completed: lesson.completed.unwrap_or(false),
        }
    }

    fn assemble_fallback(flat: Vec<FlatVideo>) -> Vec<ModuleView> {
        let total = flat.len();
        let mut modules = Vec::with_capacity(total.div_ceil(FALLBACK_CHUNK_SIZE));

        for (chunk_index, chunk) in flat.chunks(FALLBACK_CHUNK_SIZE).enumerate() {
            let k = chunk_index + 1;
            let first = chunk_index * FALLBACK_CHUNK_SIZE + 1;
            let last = first + chunk.len() - 1;

            let mut videos = Vec::with_capacity(chunk.len());
            let mut lessons = Vec::with_capacity(chunk.len());
            for (offset, video) in chunk.iter().enumerate() {
                let n = first + offset;
                let id = video.id.clone().unwrap_or_else(|| format!("video-{n}"));
                let title = video.title.clone().unwrap_or_else(|| format!("Video {n}"));
                let duration_seconds = video.duration_seconds.unwrap_or(0).max(0);
                let order_index = offset as i64 + 1;

                lessons.push(LessonView {
                    id: id.clone(),
                    title: title.clone(),
                    kind: Some(LessonKind::Video),
                    description: video.description.clone(),
                    youtube_url: Some(video.url.clone()),
                    order_index,
                    duration_seconds,
                    completed: video.completed,
                });
                videos.push(video_view(
                    id,
                    title,
                    &video.url,
                    order_index,
                    duration_seconds,
                    video.completed,
                ));
            }

            let total_duration_seconds = total_seconds(videos.iter().map(|v| v.duration_seconds));
            let completed_lessons = videos.iter().filter(|v| v.completed).count();

            modules.push(ModuleView {
                id: format!("module-{k}"),
                title: format!("Módulo {k}"),
                description: Some(if first == last {
                    format!("Video {first} de {total}")
                } else {
                    format!("Videos {first} a {last} de {total}")
                }),
                order_index: k as i64,
                synthetic: true,
                progress_percent: progress_percent(completed_lessons, videos.len()),
                duration_label: format_duration(total_duration_seconds),
                total_duration_seconds,
                completed_lessons,
                videos,
                lessons,
            });
        }

        modules
    }

    pub fn summarize(modules: &[ModuleView]) -> ContentSummary {
        let lesson_count = modules.iter().map(|m| m.lessons.len()).sum();
        let completed_lessons = modules.iter().map(|m| m.completed_lessons).sum();
        ContentSummary {
            module_count: modules.len(),
            lesson_count,
            video_count: modules.iter().map(|m| m.videos.len()).sum(),
            total_duration_seconds: total_seconds(modules.iter().map(|m| m.total_duration_seconds)),
            completed_lessons,
            progress_percent: progress_percent(completed_lessons, lesson_count),
        }
    }
}

/// Builds the module tree for `course`. `videos` is the separately fetched
/// video list, used only when the course has no modules of its own.
pub fn assemble(course: &CoursePayload, videos: Option<&[CourseVideo]>) -> Vec<ModuleView> {
    AssemblerService::assemble(course, videos)
}

/// Totals across an assembled module tree.
pub fn summarize(modules: &[ModuleView]) -> ContentSummary {
    AssemblerService::summarize(modules)
}
