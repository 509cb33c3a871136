//! Animated sticker player
//!
//! Fetches a `.tgs` file, gunzips and parses it, and plays it with
//! lottie-web inside the component's own container. Loads restart when the
//! path changes and everything is torn down on unmount. Failures are logged
//! and leave the container empty.

use leptos::html;
use leptos::prelude::*;

use crate::core::sticker::LoopMode;
#[cfg(not(feature = "ssr"))]
use crate::core::sticker::Playback;

#[component]
pub fn StickerPlayer(
    /// Public path or full URL of the `.tgs` file
    #[prop(into)]
    path: Signal<String>,
    #[prop(default = LoopMode::Forever)]
    loop_mode: LoopMode,
    #[prop(default = true)]
    autoplay: bool,
    /// Extra classes for the container
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    lottie::drive(container, path, Playback { loop_mode, autoplay });

    #[cfg(feature = "ssr")]
    let _ = (path, loop_mode, autoplay);

    view! {
        <div
            node_ref=container
            class=class
            style="width: 100%; height: 100%; min-height: 250px;"
            aria-hidden="true"
        ></div>
    }
}

#[cfg(not(feature = "ssr"))]
mod lottie {
    use gloo_net::http::Request;
    use leptos::html;
    use leptos::prelude::*;
    use leptos::web_sys::Element;
    use serde::Serialize;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::prelude::wasm_bindgen;

    use crate::core::sticker::{
        AnimationData, AnimationPlayer, AssetSource, Playback, PlayerBackend, StickerError,
        StickerMount, StickerRequest,
    };

    #[wasm_bindgen]
    extern "C" {
        /// Animation instance returned by `lottie.loadAnimation`
        type LottieAnimation;

        #[wasm_bindgen(method)]
        fn destroy(this: &LottieAnimation);

        #[wasm_bindgen(catch, js_namespace = lottie, js_name = loadAnimation)]
        fn load_animation(params: &JsValue) -> Result<LottieAnimation, JsValue>;
    }

    /// Fetches assets over HTTP from the page's origin
    struct HttpSource;

    impl AssetSource for HttpSource {
        async fn fetch(&self, path: &str) -> Result<Vec<u8>, StickerError> {
            let response = Request::get(path)
                .send()
                .await
                .map_err(|e| StickerError::Fetch(e.to_string()))?;

            if !response.ok() {
                return Err(StickerError::Fetch(format!(
                    "{} {} for {}",
                    response.status(),
                    response.status_text(),
                    path
                )));
            }

            response
                .binary()
                .await
                .map_err(|e| StickerError::Fetch(e.to_string()))
        }
    }

    struct LottiePlayer(LottieAnimation);

    impl AnimationPlayer for LottiePlayer {
        fn destroy(self) {
            self.0.destroy();
        }
    }

    /// Starts lottie-web players inside one container element
    struct LottieBackend {
        container: Element,
    }

    impl LottieBackend {
        fn params(
            &self,
            animation: &AnimationData,
            playback: Playback,
        ) -> Result<JsValue, StickerError> {
            // Plain JS objects rather than Maps, as lottie expects
            let serializer = serde_wasm_bindgen::Serializer::json_compatible();
            let to_js = |e: serde_wasm_bindgen::Error| StickerError::Player(e.to_string());

            let params = js_sys::Object::new();
            let set = |key: &str, value: &JsValue| {
                js_sys::Reflect::set(&params, &JsValue::from_str(key), value)
                    .map(|_| ())
                    .map_err(|e| StickerError::Player(format!("{:?}", e)))
            };

            set("container", self.container.as_ref())?;
            set("renderer", &JsValue::from_str("svg"))?;
            set("loop", &playback.loop_mode.serialize(&serializer).map_err(to_js)?)?;
            set("autoplay", &JsValue::from_bool(playback.autoplay))?;
            set("animationData", &animation.serialize(&serializer).map_err(to_js)?)?;

            Ok(params.into())
        }
    }

    impl PlayerBackend for LottieBackend {
        type Player = LottiePlayer;

        fn instantiate(
            &self,
            animation: AnimationData,
            playback: Playback,
        ) -> Result<LottiePlayer, StickerError> {
            let params = self.params(&animation, playback)?;
            load_animation(&params)
                .map(LottiePlayer)
                .map_err(|e| StickerError::Player(format!("lottie.loadAnimation failed: {:?}", e)))
        }
    }

    pub fn drive(container: NodeRef<html::Div>, path: Signal<String>, playback: Playback) {
        let mount = StoredValue::new_local(StickerMount::<LottieBackend>::new());

        Effect::new(move |_| {
            let path = path.get();
            let Some(element) = container.get() else {
                return;
            };

            // Cancels the previous attempt and destroys its player before anything else
            let request = StickerRequest::new(path).with_playback(playback);
            let Some((loader, ticket)) = mount.try_update_value(|mount| {
                mount.restart(
                    || LottieBackend {
                        container: Element::from(element),
                    },
                    request,
                )
            }) else {
                return;
            };

            leptos::task::spawn_local(async move {
                loader.run(ticket, &HttpSource).await;
            });
        });

        on_cleanup(move || {
            mount.try_update_value(|mount| mount.unmount());
        });
    }
}
