use learner_core::LearnerSession;
use learner_core::model::{LessonId, ModuleId};

use super::test_harness::render_shell;

fn complete_everything(session: &mut LearnerSession) {
    let ids: Vec<LessonId> = session.catalog().lessons().map(|l| l.id().clone()).collect();
    for id in &ids {
        session.mark_complete(id).unwrap();
    }
}

#[test]
fn home_view_smoke_renders_stats_and_modules() {
    let html = render_shell(|_| {});

    for expected in [
        "Total Progress: 0%",
        "4 Modules",
        "39 Exercises",
        "Python Fundamentals",
        "AI Basics",
        "Start Learning",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("Lesson Completed!"));
}

#[test]
fn lesson_view_smoke_hides_next_until_completed() {
    let html = render_shell(|session| {
        session.start_module(&ModuleId::new("fundamentals")).unwrap();
    });

    assert!(html.contains("1. Your First Python Program"), "{html}");
    assert!(html.contains("Run Code"));
    assert!(html.contains("Hit run to see output..."));
    assert!(html.contains("Module: "));
    assert!(!html.contains("Next Lesson"));
}

#[test]
fn lesson_view_smoke_shows_next_and_notice_after_completion() {
    let html = render_shell(|session| {
        session.start_module(&ModuleId::new("fundamentals")).unwrap();
        session.mark_complete(&LessonId::new("hello-world")).unwrap();
    });

    assert!(html.contains("Next Lesson"), "{html}");
    assert!(html.contains("Lesson Completed!"));
    assert!(html.contains("Total Progress: 3%"));
}

#[test]
fn certificate_view_smoke_is_locked_until_all_exercises_pass() {
    let html = render_shell(|session| session.go_certificate());

    assert!(html.contains("Certificate Locked"), "{html}");
    assert!(html.contains("0 / 39 Exercises"));
}

#[test]
fn certificate_view_smoke_offers_the_form_when_unlocked() {
    let html = render_shell(|session| {
        complete_everything(session);
        session.go_certificate();
    });

    assert!(html.contains("Get Certified"), "{html}");
    assert!(html.contains("Generate Certificate"));
    assert!(html.contains("Total Progress: 100%"));
}

#[test]
fn resources_view_smoke_lists_categories() {
    let html = render_shell(|session| session.go_resources());

    assert!(html.contains("Python Resources"), "{html}");
    assert!(html.contains("Official Python Documentation"));
    assert!(html.contains("https://docs.python.org/3/"));
}
