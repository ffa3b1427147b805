use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::QuestionBank;
use quiz_core::time::fixed_clock;
use services::AppServices;
use storage::repository::Storage;

use crate::context::AppContext;
use crate::views::QuizCard;
use crate::views::quiz::{QuizPanel, QuizSignal};
use crate::vm::{QuizIntent, QuizVm};

#[derive(Props, Clone)]
struct QuizHarnessProps {
    services: Arc<AppServices>,
    /// Applied to a fresh session before the first render.
    intents: Vec<QuizIntent>,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let services = Arc::clone(&props.services);
    use_context_provider(|| AppContext::new(Arc::clone(&services)));
    let intents = props.intents.clone();
    let prepared = !intents.is_empty();
    let quiz: QuizSignal = use_signal(move || {
        QuizVm::start(&services).map(|mut vm| {
            for intent in intents {
                vm.apply(intent);
            }
            vm
        })
    });

    if prepared {
        rsx! { QuizPanel { quiz } }
    } else {
        rsx! { QuizCard {} }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: Arc<AppServices>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub async fn setup_quiz_harness(bank: Option<QuestionBank>) -> ViewHarness {
    let storage = Storage::in_memory();
    let mut services = AppServices::from_storage(storage, fixed_clock())
        .await
        .expect("services")
        .with_seed(Some(7));
    if let Some(bank) = bank {
        services = services.with_question_bank(bank);
    }
    setup_quiz_harness_with(services)
}

pub fn setup_quiz_harness_with(services: AppServices) -> ViewHarness {
    setup_quiz_harness_after(services, Vec::new())
}

/// Harness whose quiz has already received `intents`.
pub fn setup_quiz_harness_after(services: AppServices, intents: Vec<QuizIntent>) -> ViewHarness {
    let services = Arc::new(services);
    let dom = VirtualDom::new_with_props(
        QuizHarness,
        QuizHarnessProps {
            services: Arc::clone(&services),
            intents,
        },
    );

    ViewHarness { dom, services }
}
