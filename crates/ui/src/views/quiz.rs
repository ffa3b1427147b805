use dioxus::prelude::*;

use quiz_core::bundle::UiStrings;
use quiz_core::model::Language;
use services::{OptionView, QuizSummary, QuizView};

use crate::context::AppContext;
use crate::views::{LanguageSwitcher, ViewError};
use crate::vm::{QuizIntent, QuizScreen, QuizVm};

pub(crate) type QuizSignal = Signal<Result<QuizVm, ViewError>>;

fn dispatch(mut quiz: QuizSignal, intent: QuizIntent) {
    let mut guard = quiz.write();
    if let Ok(vm) = &mut *guard {
        vm.apply(intent);
    }
}

#[component]
pub fn QuizCard() -> Element {
    let services = use_context::<AppContext>().services();
    let quiz: QuizSignal = use_signal(move || QuizVm::start(&services));
    rsx! { QuizPanel { quiz } }
}

/// Renders whatever state `quiz` holds and feeds clicks back into it.
#[component]
pub(crate) fn QuizPanel(quiz: QuizSignal) -> Element {
    let settings = use_context::<AppContext>().services().app_settings();

    let snapshot = match &*quiz.read() {
        Ok(vm) => Ok((vm.screen(), vm.strings().clone(), vm.language())),
        Err(err) => Err(*err),
    };
    let (screen, strings, language) = match snapshot {
        Ok(snapshot) => snapshot,
        Err(err) => {
            return rsx! {
                section { class: "quiz",
                    p { class: "quiz-error", "{err.message()}" }
                }
            };
        }
    };

    let on_switch = move |next: Language| {
        dispatch(quiz, QuizIntent::SwitchLanguage(next));
        let settings = settings.clone();
        spawn(async move {
            if let Err(err) = settings.set_language(next).await {
                tracing::warn!(error = %err, "failed to persist language preference");
            }
        });
    };

    let body = match screen {
        QuizScreen::Empty => rsx! {
            p { class: "quiz-empty", "{strings.empty}" }
        },
        QuizScreen::Active(QuizView::Question {
            question,
            options,
            locked,
            is_last,
            progress_percent,
            ..
        }) => {
            let next_label = if is_last {
                strings.show_results.clone()
            } else {
                strings.next_question.clone()
            };
            rsx! {
                QuestionPanel {
                    question,
                    options,
                    locked,
                    progress_percent,
                    next_label,
                    on_select: move |text: String| dispatch(quiz, QuizIntent::Select(text)),
                    on_next: move |()| dispatch(quiz, QuizIntent::Advance),
                }
            }
        }
        QuizScreen::Active(QuizView::Completed(summary)) => rsx! {
            ResultPanel {
                summary,
                strings: strings.clone(),
                on_restart: move |()| dispatch(quiz, QuizIntent::Restart),
            }
        },
    };

    rsx! {
        section { class: "quiz",
            div { class: "quiz-card",
                h2 { class: "quiz-title", "{strings.quiz_title}" }
                {body}
            }
            LanguageSwitcher { current: language, on_switch }
        }
    }
}

#[component]
fn QuestionPanel(
    question: String,
    options: Vec<OptionView>,
    locked: bool,
    progress_percent: u8,
    next_label: String,
    on_select: EventHandler<String>,
    on_next: EventHandler<()>,
) -> Element {
    rsx! {
        progress { class: "quiz-progress", max: "100", value: "{progress_percent}" }
        p { class: "quiz-question", "{question}" }
        div { class: "quiz-answers",
            for option in options {
                AnswerButton {
                    key: "{option.text}",
                    option: option.clone(),
                    locked,
                    on_select,
                }
            }
        }
        if locked {
            div { class: "quiz-footer",
                button {
                    class: "quiz-next",
                    r#type: "button",
                    onclick: move |_| on_next.call(()),
                    "{next_label}"
                }
            }
        }
    }
}

fn answer_class(reveal: Option<bool>) -> &'static str {
    match reveal {
        None => "quiz-answer",
        Some(true) => "quiz-answer quiz-answer--correct",
        Some(false) => "quiz-answer quiz-answer--wrong",
    }
}

fn answer_mark(reveal: Option<bool>) -> &'static str {
    match reveal {
        None => "",
        Some(true) => "✓",
        Some(false) => "✗",
    }
}

#[component]
fn AnswerButton(option: OptionView, locked: bool, on_select: EventHandler<String>) -> Element {
    let text = option.text.clone();
    rsx! {
        button {
            class: answer_class(option.reveal),
            r#type: "button",
            disabled: locked,
            onclick: move |_| on_select.call(text.clone()),
            span { class: "quiz-answer-mark", {answer_mark(option.reveal)} }
            "{option.text}"
        }
    }
}

#[component]
fn ResultPanel(summary: QuizSummary, strings: UiStrings, on_restart: EventHandler<()>) -> Element {
    rsx! {
        div { class: "quiz-result",
            h3 { "{strings.quiz_end}" }
            p { class: "quiz-score",
                "{strings.score} {summary.score} {strings.out_of} {summary.total}"
            }
            button {
                class: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "{strings.start_again}"
            }
        }
    }
}
