//! Progress aggregator.
//!
//! Computes a student's dashboard figures from their enrollments. Every
//! enrollment counts toward the totals; only enrollments whose course
//! snapshot has a title appear in the course lists.

use std::cmp::Ordering;

use coursekit_core::limits::TOP_PROGRESS_LIMIT;
use coursekit_models::{CourseProgressEntry, DashboardStats, Enrollment, EnrollmentStatus};
use tracing::{debug, instrument};

pub struct ProgressService;

impl ProgressService {
    #[instrument(skip_all, fields(enrollments = enrollments.len(), recent_count = recent_count))]
    pub fn aggregate(enrollments: &[Enrollment], recent_count: usize) -> DashboardStats {
        let total_courses = enrollments.len();
        let active_courses = enrollments
            .iter()
            .filter(|e| e.status == EnrollmentStatus::Active)
            .count();
        let completed_courses = enrollments
            .iter()
            .filter(|e| e.status == EnrollmentStatus::Completed)
            .count();

        let average_progress_percent = if total_courses == 0 {
            0
        } else {
            let sum: f64 = enrollments.iter().map(Enrollment::progress).sum();
            (sum / total_courses as f64).round() as u32
        };

        let total_estimated_hours = enrollments.iter().map(Enrollment::estimated_hours).sum();
        let completed_hours = enrollments
            .iter()
            .map(|e| e.estimated_hours() * e.progress() / 100.0)
            .sum();

        let listed: Vec<(&Enrollment, CourseProgressEntry)> = enrollments
            .iter()
            .filter_map(|e| Self::entry(e).map(|entry| (e, entry)))
            .collect();
        let unlisted = total_courses - listed.len();

        let mut top_progress_courses: Vec<CourseProgressEntry> = listed
            .iter()
            .filter(|(e, _)| e.status == EnrollmentStatus::Active && e.progress() > 0.0)
            .map(|(_, entry)| entry.clone())
            .collect();
        top_progress_courses.sort_by(|a, b| {
            b.progress_percentage
                .partial_cmp(&a.progress_percentage)
                .unwrap_or(Ordering::Equal)
        });
        top_progress_courses.truncate(TOP_PROGRESS_LIMIT);

        let mut recent_courses: Vec<CourseProgressEntry> =
            listed.iter().map(|(_, entry)| entry.clone()).collect();
        recent_courses.sort_by(|a, b| b.enrollment_date.cmp(&a.enrollment_date));
        recent_courses.truncate(recent_count);

        let mut in_progress_courses: Vec<CourseProgressEntry> = listed
            .into_iter()
            .filter(|(e, _)| e.status == EnrollmentStatus::Active)
            .map(|(_, entry)| entry)
            .collect();
        in_progress_courses.sort_by(|a, b| b.last_accessed.cmp(&a.last_accessed));

        debug!(
            total_courses,
            active_courses, completed_courses, unlisted, "Aggregated dashboard statistics"
        );

        DashboardStats {
            total_courses,
            active_courses,
            completed_courses,
            average_progress_percent,
            total_estimated_hours,
            completed_hours,
            top_progress_courses,
            recent_courses,
            in_progress_courses,
        }
    }

    /// Dashboard row for `enrollment`, or `None` when it has no course title
    /// to show.
    fn entry(enrollment: &Enrollment) -> Option<CourseProgressEntry> {
        let course = enrollment.course.as_ref()?;
        let title = course
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())?;

        Some(CourseProgressEntry {
            enrollment_id: enrollment.id.clone(),
            course_id: course.id.clone(),
            title: title.to_string(),
            instructor: course.instructor.as_ref().and_then(|i| i.display_name()),
            category: course.category.as_ref().and_then(|c| c.display_name()),
            thumbnail_url: course.thumbnail_url.clone(),
            status: enrollment.status.clone(),
            progress_percentage: enrollment.progress(),
            estimated_hours: enrollment.estimated_hours(),
            enrollment_date: enrollment.enrollment_date,
            last_accessed: enrollment.last_accessed,
            last_lesson_id: enrollment.last_lesson_id.clone(),
        })
    }
}

/// Dashboard statistics for `enrollments`, with at most `recent_count`
/// entries in the recent-courses list.
pub fn aggregate(enrollments: &[Enrollment], recent_count: usize) -> DashboardStats {
    ProgressService::aggregate(enrollments, recent_count)
}
