use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use learner_core::model::ExecutionResult;
use learner_core::time::fixed_clock;
use learner_core::{Catalog, LearnerSession, ResourceLibrary};
use services::{AppServices, Clock, CodeRunner, ExecutionGateway};

use crate::app::use_session_state;
use crate::context::{UiApp, build_app_context};
use crate::views::Shell;

struct SilentGateway;

#[async_trait]
impl ExecutionGateway for SilentGateway {
    async fn execute(&self, _source: &str) -> ExecutionResult {
        ExecutionResult::success("")
    }

    async fn explain(&self, _topic: &str, _source: &str) -> String {
        String::new()
    }
}

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        self.services.catalog()
    }

    fn resources(&self) -> Arc<ResourceLibrary> {
        self.services.resources()
    }

    fn runner(&self) -> Arc<CodeRunner> {
        self.services.runner()
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn start_in_dark_mode(&self) -> bool {
        true
    }
}

#[derive(Props, Clone)]
struct ShellHarnessProps {
    app: Arc<TestApp>,
    prepare: fn(&mut LearnerSession),
}

impl PartialEq for ShellHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ShellHarness(props: ShellHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(app));
    let prepare = props.prepare;
    use_session_state(|| {
        let mut session = ctx.new_session();
        prepare(&mut session);
        session
    });
    rsx! { Shell {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Renders the full shell over a session that `prepare` has put into the
/// state under test.
pub fn render_shell(prepare: fn(&mut LearnerSession)) -> String {
    let services = AppServices::new(Arc::new(SilentGateway)).expect("builtin data is valid");
    let app = Arc::new(TestApp { services });
    let dom = VirtualDom::new_with_props(ShellHarness, ShellHarnessProps { app, prepare });
    let mut harness = ViewHarness { dom };
    harness.rebuild();
    harness.render()
}
