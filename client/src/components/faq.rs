//! Frequently asked questions as native disclosure widgets.

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct FaqEntry {
    question: &'static str,
    answer: &'static str,
}

const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Как поделиться воспоминанием своей семьи?",
        answer: "Заполните форму обратной связи и выберите тему «Поделиться воспоминанием». \
                 Мы свяжемся с вами, чтобы записать историю полностью.",
    },
    FaqEntry {
        question: "Можно ли передать фотографии и документы?",
        answer: "Да. Мы принимаем сканы писем, фотографий и наградных документов. \
                 Оригиналы остаются у вас.",
    },
    FaqEntry {
        question: "Как проверяются истории?",
        answer: "Каждая история сверяется с доступными архивными источниками. \
                 Если вы заметили неточность, сообщите нам через форму.",
    },
    FaqEntry {
        question: "Можно ли использовать материалы сайта?",
        answer: "Материалы можно цитировать в образовательных и некоммерческих целях \
                 со ссылкой на проект и указанный источник.",
    },
];

/// FAQ list. Opening and closing is left to the browser's `<details>`.
#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <div class="faq-list">
            {FAQ_ENTRIES
                .iter()
                .map(|entry| {
                    view! {
                        <details class="faq-item">
                            <summary>{entry.question}</summary>
                            <p>{entry.answer}</p>
                        </details>
                    }
                })
                .collect_view()}
        </div>
    }
}
