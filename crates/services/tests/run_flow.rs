use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use learner_core::model::{ExecutionResult, LessonId, ModuleId};
use learner_core::time::fixed_clock;
use learner_core::{Completion, View};
use services::gateway::RUNTIME_UNREACHABLE_OUTPUT;
use services::{AppServices, ExecutionGateway, apply_outcome};

/// Answers `print(2+2)` with `4` and counts every call.
#[derive(Default)]
struct CountingInterpreter {
    executions: AtomicUsize,
    explanations: AtomicUsize,
}

#[async_trait]
impl ExecutionGateway for CountingInterpreter {
    async fn execute(&self, source: &str) -> ExecutionResult {
        self.executions.fetch_add(1, Ordering::SeqCst);
        if source.trim() == "print(2+2)" {
            ExecutionResult::success("4")
        } else {
            ExecutionResult::failure("SyntaxError: invalid syntax")
        }
    }

    async fn explain(&self, _topic: &str, _source: &str) -> String {
        self.explanations.fetch_add(1, Ordering::SeqCst);
        "It adds two and two.".to_string()
    }
}

struct Unreachable;

#[async_trait]
impl ExecutionGateway for Unreachable {
    async fn execute(&self, _source: &str) -> ExecutionResult {
        ExecutionResult::failure(RUNTIME_UNREACHABLE_OUTPUT)
    }

    async fn explain(&self, _topic: &str, _source: &str) -> String {
        String::new()
    }
}

#[tokio::test(start_paused = true)]
async fn redelivered_success_completes_the_lesson_exactly_once() {
    let gateway = Arc::new(CountingInterpreter::default());
    let services = AppServices::new(gateway.clone()).unwrap();
    let mut session = services.new_session(fixed_clock());
    session.start_module(&ModuleId::new("fundamentals")).unwrap();

    let outcome = services
        .runner()
        .run(session.begin_run("print(2+2)"))
        .await;
    assert_eq!(outcome.result, ExecutionResult::success("4"));

    let mut newly = 0;
    for delivery in [outcome.clone(), outcome.clone(), outcome] {
        if apply_outcome(&mut session, delivery).unwrap() == Some(Completion::Newly) {
            newly += 1;
        }
    }

    assert_eq!(newly, 1);
    assert_eq!(session.progress().completed_count(), 1);
    assert!(session.is_completed(&LessonId::new("hello-world")));
    assert!(session.notice().is_some());
    assert_eq!(gateway.executions.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn retried_run_reports_already_completed() {
    let gateway = Arc::new(CountingInterpreter::default());
    let services = AppServices::new(gateway.clone()).unwrap();
    let runner = services.runner();
    let mut session = services.new_session(fixed_clock());
    session.start_module(&ModuleId::new("fundamentals")).unwrap();

    let first = runner.run(session.begin_run("print(2+2)")).await;
    let second = runner.run(session.begin_run("print(2+2)")).await;

    assert_eq!(
        apply_outcome(&mut session, first).unwrap(),
        Some(Completion::Newly)
    );
    assert_eq!(
        apply_outcome(&mut session, second).unwrap(),
        Some(Completion::Already)
    );
    assert_eq!(session.progress().completed_count(), 1);
    assert_eq!(gateway.executions.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn late_result_credits_the_lesson_that_was_run() {
    let services = AppServices::new(Arc::new(CountingInterpreter::default())).unwrap();
    let mut session = services.new_session(fixed_clock());
    session.start_module(&ModuleId::new("fundamentals")).unwrap();

    let ticket = session.begin_run("print(2+2)");
    session
        .select_lesson(&ModuleId::new("functions"), &LessonId::new("docstrings"))
        .unwrap();
    let outcome = services.runner().run(ticket).await;
    apply_outcome(&mut session, outcome).unwrap();

    assert!(session.is_completed(&LessonId::new("hello-world")));
    assert!(!session.is_completed(&LessonId::new("docstrings")));
    assert_eq!(session.view(), View::Lesson);
    assert_eq!(session.active_lesson().id().as_str(), "docstrings");
}

#[tokio::test(start_paused = true)]
async fn failed_runs_leave_progress_alone() {
    let services = AppServices::new(Arc::new(Unreachable)).unwrap();
    let mut session = services.new_session(fixed_clock());
    session.start_module(&ModuleId::new("fundamentals")).unwrap();

    let outcome = services.runner().run(session.begin_run("print(2+2)")).await;
    assert!(outcome.result.is_error);
    assert_eq!(outcome.result.output, RUNTIME_UNREACHABLE_OUTPUT);

    assert_eq!(apply_outcome(&mut session, outcome).unwrap(), None);
    assert_eq!(session.progress().completed_count(), 0);
    assert!(session.notice().is_none());
    assert!(!session.next_enabled());
}

#[tokio::test]
async fn explanations_go_straight_to_the_gateway() {
    let gateway = Arc::new(CountingInterpreter::default());
    let services = AppServices::new(gateway.clone()).unwrap();

    let text = services
        .runner()
        .explain(services::gateway::prompt::EXPLAIN_CODE_TOPIC, "print(2+2)")
        .await;

    assert_eq!(text, "It adds two and two.");
    assert_eq!(gateway.explanations.load(Ordering::SeqCst), 1);
    assert_eq!(gateway.executions.load(Ordering::SeqCst), 0);
}
