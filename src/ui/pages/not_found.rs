//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::content::OWNER_NAME;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <Title text=format!("Page Not Found - {}", OWNER_NAME) />

        <div class="min-h-screen bg-slate-50 dark:bg-gray-900 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-slate-200 dark:bg-gray-800 rounded-full flex items-center justify-center">
                    <Icon name=icons::LINK class="w-12 h-12" />
                </div>

                <h1 class="text-6xl font-bold text-slate-900 dark:text-white mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-slate-800 dark:text-slate-200 mb-2">
                    "Page Not Found"
                </h2>

                <p class="text-slate-600 dark:text-slate-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href="/"
                        attr:class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg transition-colors"
                    >
                        "Go Home"
                    </A>
                    <a
                        href="/#contact"
                        class="px-6 py-3 border border-slate-300 dark:border-gray-700 text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-gray-800 font-medium rounded-lg transition-colors"
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-slate-500 dark:text-slate-500">
                    {format!("© {} {}", year, OWNER_NAME)}
                </p>
            </div>
        </div>
    }
}
