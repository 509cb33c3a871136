//! Reveal-on-scroll wrapper
//!
//! Renders its children hidden and fades them in the first time the region
//! scrolls into view. Backed by `IntersectionObserver`; browsers without it
//! get the content visible straight away.

use leptos::html;
use leptos::prelude::*;

use crate::core::reveal::{DEFAULT_THRESHOLD, RevealOptions, reveal_classes};

#[component]
pub fn RevealOnView(
    children: Children,
    /// Extra classes for the wrapper
    #[prop(optional, into)]
    class: String,
    /// Transition start offset in milliseconds
    #[prop(default = 0)]
    delay_ms: u32,
    /// Visible fraction required to reveal
    #[prop(default = DEFAULT_THRESHOLD)]
    threshold: f64,
) -> impl IntoView {
    let options = RevealOptions::new(threshold, delay_ms);
    let visible = RwSignal::new(false);
    let region = NodeRef::<html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    observe::watch_region(region, visible, options);

    view! {
        <div
            node_ref=region
            class=move || reveal_classes(visible.get(), &class)
            style=options.transition_style()
        >
            {children()}
        </div>
    }
}

#[cfg(not(feature = "ssr"))]
mod observe {
    use leptos::html;
    use leptos::prelude::*;
    use leptos::wasm_bindgen::JsCast;
    use leptos::wasm_bindgen::JsValue;
    use leptos::wasm_bindgen::closure::Closure;
    use leptos::web_sys::{
        self, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    use crate::core::reveal::{RevealOptions, RevealSlot, Visibility, VisibilityObserver};

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// `IntersectionObserver` watching a single element
    struct DomObserver {
        observer: IntersectionObserver,
        target: Element,
        // Dropped together with the observer, after `disconnect`
        _callback: ObserverCallback,
    }

    impl VisibilityObserver for DomObserver {
        fn unobserve(&mut self) {
            self.observer.unobserve(&self.target);
        }

        fn disconnect(&mut self) {
            self.observer.disconnect();
        }
    }

    fn intersection_observer_supported() -> bool {
        web_sys::window()
            .map(|window| {
                js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                    .unwrap_or(false)
            })
            .unwrap_or(false)
    }

    pub fn watch_region(
        region: NodeRef<html::Div>,
        visible: RwSignal<bool>,
        options: RevealOptions,
    ) {
        let slot = RevealSlot::<DomObserver>::new();
        let stored = StoredValue::new_local(slot.clone());

        Effect::new(move |_| {
            let Some(element) = region.get() else {
                return;
            };
            if slot.is_attached() {
                return;
            }
            attach(Element::from(element), options, visible, &slot);
        });

        on_cleanup(move || {
            stored.try_with_value(|slot| slot.release());
        });
    }

    fn attach(
        element: Element,
        options: RevealOptions,
        visible: RwSignal<bool>,
        slot: &RevealSlot<DomObserver>,
    ) {
        if !intersection_observer_supported() {
            if slot.attach(None) {
                visible.set(true);
            }
            return;
        }

        let callback_slot = slot.clone();
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let report =
                        Visibility::new(entry.is_intersecting(), entry.intersection_ratio());
                    if callback_slot.report(report) {
                        visible.set(true);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&element);
                slot.attach(Some(DomObserver {
                    observer,
                    target: element,
                    _callback: callback,
                }));
            }
            Err(e) => {
                tracing::warn!("IntersectionObserver unavailable, revealing immediately: {:?}", e);
                if slot.attach(None) {
                    visible.set(true);
                }
            }
        }
    }
}
