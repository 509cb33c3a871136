use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file name without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and tint
    #[prop(into, default = String::from("w-5 h-5"))]
    class: String,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icon names available under `public/icons`
#[allow(dead_code)]
pub mod icons {
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const ARROW_UP: &str = "arrow-up";
    pub const DOWNLOAD: &str = "download";
    pub const EXTERNAL_LINK: &str = "external-link";
    pub const GITHUB: &str = "github";
    pub const LINKEDIN: &str = "linkedin";
    pub const MAIL: &str = "mail";
    pub const MAP_PIN: &str = "map-pin";
    pub const BRIEFCASE: &str = "briefcase";
    pub const CODE: &str = "code";
    pub const CPU: &str = "cpu";
    pub const CLOUD: &str = "cloud";
    pub const DATABASE: &str = "database";
    pub const GIT_BRANCH: &str = "git-branch";
    pub const LINK: &str = "link";
    pub const AWARD: &str = "award";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const SEND: &str = "send";
}
