//! Portfolio home page
//!
//! A single scrolling page:
//! - Header with section links, theme toggle and mobile menu
//! - Hero with the animated sticker
//! - About, Projects, Skills, Career timeline, Certifications
//! - Contact links and FAQ accordion
//! - Footer and a scroll-to-top button
//!
//! Every content block fades in through `RevealOnView`.

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::content::{
    ABOUT_PARAGRAPHS, CERTIFICATIONS, CONTACT_LINKS, CV_URL, Certification, EXPERIENCES, FAQS,
    HERO_STICKER_PATH, NAV_LINKS, OWNER_EMAIL, OWNER_INITIAL, OWNER_LOCATION, OWNER_NAME,
    OWNER_PITCH, OWNER_TAGLINE, PORTRAIT_URL, PROJECTS, Project, SKILLS, stagger_delay,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::RevealOnView;
use crate::ui::sticker::StickerPlayer;
use crate::ui::theme::{ThemeContext, ThemeToggle, use_theme_context};

/// Scroll offset after which the header gets its solid background
const HEADER_SCROLL_OFFSET: f64 = 50.0;
/// Scroll offset after which the scroll-to-top button shows
const SCROLL_TOP_OFFSET: f64 = 300.0;

fn header_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-white/80 dark:bg-gray-900/80 backdrop-blur-lg shadow-md"
    } else {
        "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
    }
}

fn scroll_top_class(shown: bool) -> &'static str {
    if shown {
        "fixed bottom-6 right-6 bg-blue-600 text-white p-3 rounded-full shadow-lg hover:bg-blue-700 transition-all duration-300 opacity-100 scale-100"
    } else {
        "fixed bottom-6 right-6 bg-blue-600 text-white p-3 rounded-full shadow-lg transition-all duration-300 opacity-0 scale-50 pointer-events-none"
    }
}

/// Current vertical scroll position, tracked from window scroll events
fn use_scroll_y() -> ReadSignal<f64> {
    let (scroll_y, set_scroll_y) = signal(0.0_f64);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        let handle = window_event_listener(scroll, move |_| {
            set_scroll_y.set(window().scroll_y().unwrap_or(0.0));
        });

        on_cleanup(move || handle.remove());
    }
    #[cfg(feature = "ssr")]
    {
        let _ = set_scroll_y;
    }

    scroll_y
}

/// Portfolio page
#[component]
pub fn HomePage() -> impl IntoView {
    let theme = use_theme_context();
    let scroll_y = use_scroll_y();

    view! {
        <SeoMeta />

        <div class="bg-slate-50 dark:bg-gray-900 text-slate-800 dark:text-slate-200 font-sans transition-colors duration-300">
            <Header theme=theme scroll_y=scroll_y />

            <main>
                <HeroSection />
                <AboutSection />
                <ProjectsSection />
                <SkillsSection />
                <ExperienceSection />
                <CertificationsSection />
                <ContactSection />
                <FaqSection />
            </main>

            <Footer />
            <ScrollToTopButton scroll_y=scroll_y />
        </div>
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=format!("{} - {}", OWNER_NAME, OWNER_TAGLINE) />
        <Meta name="description" content=OWNER_PITCH />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=OWNER_NAME />
        <Meta property="og:description" content=OWNER_PITCH />
    }
}

#[component]
fn Header(theme: ThemeContext, scroll_y: ReadSignal<f64>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class=move || header_class(scroll_y.get() > HEADER_SCROLL_OFFSET)>
            <div class="container mx-auto px-6 py-4 flex justify-between items-center">
                <a href="#home" class="text-3xl font-bold tracking-tight text-slate-900 dark:text-white">
                    {OWNER_INITIAL}
                    <span class="text-blue-600">"."</span>
                </a>

                // Desktop navigation
                <nav class="hidden md:flex items-center space-x-8">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="text-slate-600 dark:text-slate-300 hover:text-blue-600 dark:hover:text-blue-500 transition-colors font-medium"
                                >
                                    {link.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="flex items-center gap-4">
                    <ThemeToggle theme=theme />
                    <button
                        class="md:hidden p-2 rounded-full text-gray-600 dark:text-gray-300"
                        on:click=move |_| set_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || menu_open.get().to_string()
                    >
                        {move || {
                            if menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }
                            }
                        }}
                    </button>
                </div>
            </div>

            // Mobile menu
            <div
                class="md:hidden overflow-hidden transition-all duration-300 bg-white dark:bg-gray-900 shadow-xl"
                class:max-h-0=move || !menu_open.get()
                class:max-h-96=move || menu_open.get()
            >
                <nav class="flex flex-col items-center space-y-4 py-6">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="text-lg text-slate-600 dark:text-slate-300 hover:text-blue-600 dark:hover:text-blue-500 transition-colors"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {link.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}

#[component]
fn SectionTitle(title: &'static str) -> impl IntoView {
    view! {
        <RevealOnView class="text-center mb-16">
            <h2 class="text-3xl md:text-4xl font-bold text-slate-900 dark:text-white">{title}</h2>
            <div class="mt-4 h-1.5 w-24 bg-gradient-to-r from-blue-500 to-teal-500 mx-auto rounded-full"></div>
        </RevealOnView>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section id="home" class="min-h-screen flex items-center relative overflow-hidden pt-20">
            <div class="absolute inset-0 bg-gradient-to-br from-blue-500/10 via-transparent to-teal-500/10" aria-hidden="true"></div>

            <div class="container mx-auto px-6 relative z-10">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 lg:gap-16 items-center">
                    <RevealOnView class="text-center md:text-left">
                        <h1 class="text-5xl md:text-7xl font-extrabold tracking-tight mb-4 bg-clip-text text-transparent bg-gradient-to-r from-slate-900 to-slate-600 dark:from-white dark:to-slate-300">
                            {format!("Hi, I'm {}", OWNER_NAME)}
                        </h1>
                        <p class="text-xl md:text-2xl font-medium text-slate-600 dark:text-slate-300 mb-8">
                            {OWNER_TAGLINE}
                        </p>
                        <p class="text-lg md:text-xl text-slate-500 dark:text-slate-400 mb-10 max-w-2xl">
                            {OWNER_PITCH}
                        </p>
                        <div class="flex flex-col sm:flex-row justify-center md:justify-start items-center gap-4">
                            <a
                                href="#projects"
                                class="w-full sm:w-auto px-8 py-3 bg-blue-600 text-white font-semibold rounded-lg shadow-lg hover:bg-blue-700 hover:scale-105 transition-all"
                            >
                                "Explore My Work"
                            </a>
                            <a
                                href=CV_URL
                                class="w-full sm:w-auto px-8 py-3 bg-white dark:bg-gray-800 text-slate-700 dark:text-slate-200 font-semibold rounded-lg shadow-lg hover:bg-slate-100 dark:hover:bg-gray-700 hover:scale-105 transition-all flex items-center justify-center gap-2"
                            >
                                <Icon name=icons::DOWNLOAD />
                                "Download CV"
                            </a>
                        </div>
                    </RevealOnView>

                    <RevealOnView class="w-full h-full" delay_ms=200>
                        <StickerPlayer path=HERO_STICKER_PATH.to_string() class="w-full h-full" />
                    </RevealOnView>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-20 lg:py-24">
            <div class="container mx-auto px-6">
                <SectionTitle title="About Me" />
                <div class="flex flex-col lg:flex-row items-center gap-12 lg:gap-20">
                    <RevealOnView class="lg:w-1/3" threshold=0.5>
                        <div class="relative">
                            <div class="absolute -inset-1.5 bg-gradient-to-r from-blue-600 to-teal-500 rounded-full blur opacity-50"></div>
                            <img
                                src=PORTRAIT_URL
                                alt=OWNER_NAME
                                class="relative rounded-full shadow-2xl mx-auto border-4 border-slate-200 dark:border-gray-800 w-64 h-64 md:w-80 md:h-80 object-cover"
                            />
                        </div>
                    </RevealOnView>
                    <RevealOnView class="lg:w-2/3 text-lg text-slate-600 dark:text-slate-300 space-y-6" delay_ms=200>
                        {ABOUT_PARAGRAPHS.iter().map(|paragraph| view! { <p>{*paragraph}</p> }).collect_view()}
                    </RevealOnView>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 lg:py-24 bg-white dark:bg-gray-800/30">
            <div class="container mx-auto px-6">
                <SectionTitle title="Featured Projects" />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <RevealOnView delay_ms=stagger_delay(index)>
                                    <ProjectCard project=*project />
                                </RevealOnView>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="bg-slate-50 dark:bg-gray-800 rounded-2xl shadow-lg overflow-hidden group flex flex-col h-full">
            <div class="overflow-hidden aspect-video">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                />
            </div>
            <div class="p-6 flex flex-col flex-grow">
                <h3 class="text-xl font-bold text-slate-900 dark:text-white mb-2">{project.title}</h3>
                <p class="text-slate-600 dark:text-slate-400 flex-grow">{project.description}</p>
                <div class="mt-4 flex flex-wrap gap-2">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="text-xs font-semibold bg-blue-100 text-blue-800 dark:bg-blue-900/50 dark:text-blue-300 px-2.5 py-1 rounded-full">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="mt-6 flex items-center gap-4 text-sm font-semibold">
                    <a href=project.live_url class="flex items-center gap-1 text-blue-600 dark:text-blue-400 hover:underline">
                        <Icon name=icons::EXTERNAL_LINK class="w-4 h-4" />
                        "Live"
                    </a>
                    <a href=project.repo_url class="flex items-center gap-1 text-slate-600 dark:text-slate-300 hover:underline">
                        <Icon name=icons::GITHUB class="w-4 h-4" />
                        "Code"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 lg:py-24">
            <div class="container mx-auto px-6">
                <SectionTitle title="Tech Stack & Skills" />
                <RevealOnView threshold=0.2>
                    <div class="grid grid-cols-3 sm:grid-cols-4 md:grid-cols-5 lg:grid-cols-8 gap-8 text-center">
                        {SKILLS
                            .iter()
                            .map(|skill| {
                                view! {
                                    <div class="flex flex-col items-center gap-3 p-4 rounded-lg hover:scale-110 hover:-translate-y-1 transition-transform duration-200">
                                        <Icon name=skill.icon class=format!("w-10 h-10 {}", skill.tint) />
                                        <span class="font-semibold text-sm">{skill.name}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </RevealOnView>
            </div>
        </section>
    }
}

#[component]
fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 lg:py-24 bg-white dark:bg-gray-800/30">
            <div class="container mx-auto px-6">
                <SectionTitle title="Career Timeline" />
                <div class="relative max-w-3xl mx-auto">
                    <div class="absolute left-3 md:left-1/2 -ml-px w-0.5 h-full bg-slate-300 dark:bg-gray-700" aria-hidden="true"></div>
                    {EXPERIENCES
                        .iter()
                        .enumerate()
                        .map(|(index, experience)| {
                            // Alternate sides on wide screens
                            let side = if index % 2 == 0 {
                                "ml-12 md:ml-0 md:w-1/2 md:pr-8 md:text-right"
                            } else {
                                "ml-12 md:ml-0 md:w-1/2 md:pl-8 md:ml-auto"
                            };
                            view! {
                                <RevealOnView class="relative mb-12" threshold=0.5 delay_ms=stagger_delay(index)>
                                    <div class="absolute left-3 md:left-1/2 -ml-4 w-8 h-8 bg-blue-600 rounded-full border-4 border-slate-50 dark:border-gray-900 flex items-center justify-center">
                                        <Icon name=icons::BRIEFCASE class="w-4 h-4" />
                                    </div>
                                    <div class=side>
                                        <div class="p-6 bg-white dark:bg-gray-800 rounded-lg shadow-lg">
                                            <p class="text-sm font-semibold text-blue-600 dark:text-blue-500">{experience.date}</p>
                                            <h3 class="text-xl font-bold mt-1 text-slate-900 dark:text-white">{experience.role}</h3>
                                            <p class="text-slate-500 dark:text-slate-400">{experience.company}</p>
                                            <p class="text-sm mt-2 text-slate-600 dark:text-slate-300">{experience.description}</p>
                                        </div>
                                    </div>
                                </RevealOnView>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CertificationsSection() -> impl IntoView {
    view! {
        <section id="certifications" class="py-20 lg:py-24">
            <div class="container mx-auto px-6">
                <SectionTitle title="Certifications" />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-5xl mx-auto">
                    {CERTIFICATIONS
                        .iter()
                        .enumerate()
                        .map(|(index, certification)| {
                            view! {
                                <RevealOnView delay_ms=stagger_delay(index)>
                                    <CertificationCard certification=*certification />
                                </RevealOnView>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CertificationCard(certification: Certification) -> impl IntoView {
    view! {
        <div class=format!(
            "h-full p-6 rounded-2xl shadow-lg border border-slate-200 dark:border-gray-700 bg-gradient-to-br {} hover:-translate-y-1 transition-transform duration-300",
            certification.gradient,
        )>
            <div class="flex items-start gap-4">
                <img
                    src=certification.image
                    alt=certification.title
                    class="w-20 h-20 object-contain flex-shrink-0"
                />
                <div class="flex-grow">
                    <div class="flex items-center gap-2 text-sm text-slate-500 dark:text-slate-400">
                        <Icon name=icons::AWARD class="w-4 h-4" />
                        <span>{certification.issuer}</span>
                    </div>
                    <h3 class="text-lg font-bold text-slate-900 dark:text-white mt-1">{certification.title}</h3>
                    <p class="text-sm text-slate-500 dark:text-slate-400">{certification.date}</p>
                </div>
            </div>
            <div class="mt-4 flex flex-wrap gap-2">
                {certification
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <span class="flex items-center gap-1 text-xs font-medium bg-white/70 dark:bg-gray-900/50 px-2.5 py-1 rounded-full">
                                <Icon name=icons::CHECK_CIRCLE class="w-3 h-3" />
                                {*skill}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <a
                href=certification.verification_url
                target="_blank"
                rel="noopener noreferrer"
                class="mt-6 inline-flex items-center gap-1 text-sm font-semibold text-blue-600 dark:text-blue-400 hover:underline"
            >
                "Verify credential"
                <Icon name=icons::EXTERNAL_LINK class="w-4 h-4" />
            </a>
        </div>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 lg:py-24 bg-white dark:bg-gray-800/30">
            <div class="container mx-auto px-6">
                <SectionTitle title="Get In Touch" />
                <RevealOnView class="max-w-xl mx-auto text-center">
                    <p class="mb-12 text-slate-600 dark:text-slate-400">
                        "Want to talk about a project or just say hello? Reach out through any of these."
                    </p>
                </RevealOnView>
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-6 max-w-4xl mx-auto">
                    {CONTACT_LINKS
                        .iter()
                        .enumerate()
                        .map(|(index, contact)| {
                            view! {
                                <RevealOnView delay_ms=stagger_delay(index)>
                                    <a
                                        href=contact.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="block bg-slate-50 dark:bg-gray-800/50 p-6 rounded-2xl shadow-lg hover:shadow-xl hover:-translate-y-2 transition-all duration-300 border border-slate-200 dark:border-gray-700"
                                    >
                                        <div class="flex flex-col items-center text-center">
                                            <div class="p-4 bg-gradient-to-br from-blue-100 to-teal-200 dark:from-blue-800 dark:to-teal-900 rounded-full mb-4">
                                                <Icon name=contact.icon class="w-7 h-7" />
                                            </div>
                                            <h3 class="font-bold text-lg text-slate-900 dark:text-white">{contact.title}</h3>
                                            <p class="text-sm text-blue-500 dark:text-blue-400">{contact.handle}</p>
                                        </div>
                                    </a>
                                </RevealOnView>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="py-20 lg:py-24">
            <div class="container mx-auto px-6 max-w-4xl">
                <SectionTitle title="Frequently Asked Questions" />
                <RevealOnView class="bg-white dark:bg-gray-800 p-4 sm:p-8 rounded-2xl shadow-xl">
                    {FAQS
                        .iter()
                        .map(|faq| view! { <FaqItem question=faq.question answer=faq.answer /> })
                        .collect_view()}
                </RevealOnView>
            </div>
        </section>
    }
}

/// FAQ accordion item component
#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <div class="border-b border-slate-200 dark:border-gray-700 last:border-b-0">
            <button
                class="w-full flex justify-between items-center py-5 text-left text-slate-900 dark:text-white gap-4"
                on:click=move |_| set_is_open.update(|v| *v = !*v)
                aria-expanded=move || is_open.get().to_string()
            >
                <span class="font-semibold text-lg">{question}</span>
                <div
                    class="flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", move || is_open.get())
                >
                    <Icon name=icons::CHEVRON_DOWN />
                </div>
            </button>
            <div
                class="overflow-hidden transition-all duration-500"
                class:max-h-0=move || !is_open.get()
                class:max-h-96=move || is_open.get()
            >
                <p class="pb-5 text-slate-600 dark:text-slate-400 pr-8">{answer}</p>
            </div>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="bg-slate-100 dark:bg-gray-800 py-10">
            <div class="container mx-auto px-6 text-center text-slate-600 dark:text-slate-400">
                <div class="flex justify-center space-x-6 mb-6">
                    {CONTACT_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.url
                                    aria-label=link.title
                                    class="hover:text-blue-600 dark:hover:text-blue-500 hover:scale-110 transition-all"
                                >
                                    <Icon name=link.icon class="w-6 h-6" />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="flex items-center justify-center gap-4 text-sm mb-2">
                    <span class="flex items-center gap-1">
                        <Icon name=icons::MAIL class="w-4 h-4" />
                        {OWNER_EMAIL}
                    </span>
                    <span class="flex items-center gap-1">
                        <Icon name=icons::MAP_PIN class="w-4 h-4" />
                        {OWNER_LOCATION}
                    </span>
                </p>
                <p>{format!("© {} {}. All Rights Reserved.", year, OWNER_NAME)}</p>
            </div>
        </footer>
    }
}

#[component]
fn ScrollToTopButton(scroll_y: ReadSignal<f64>) -> impl IntoView {
    let scroll_to_top = move |_| {
        #[cfg(not(feature = "ssr"))]
        {
            use leptos::web_sys::{ScrollBehavior, ScrollToOptions};

            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window().scroll_to_with_scroll_to_options(&options);
        }
    };

    view! {
        <button
            class=move || scroll_top_class(scroll_y.get() > SCROLL_TOP_OFFSET)
            on:click=scroll_to_top
            aria-label="Scroll to top"
        >
            <Icon name=icons::ARROW_UP class="w-6 h-6" />
        </button>
    }
}
